mod collaborators;
mod common;

pub use collaborators::*;
pub use common::*;
