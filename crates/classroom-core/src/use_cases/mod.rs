pub mod collaborators;
pub mod repositories;
pub mod roster;
