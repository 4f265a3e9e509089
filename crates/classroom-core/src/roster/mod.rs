//! Roster CSV files.
//!
//! An exported roster has a header row and a `name` column somewhere in it.
//! Generated rosters are headerless, with one name per line.

mod errors;
mod reader;
mod writer;

pub use errors::RosterError;
pub use reader::{read_existing_names, read_existing_names_from_path};
pub use writer::{write_roster, write_roster_to_path};

/// Header of the column holding user names.
pub const NAME_COLUMN: &str = "name";
