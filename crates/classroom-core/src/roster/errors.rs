use std::path::PathBuf;

use thiserror::Error;

/// Roster file error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Roster file is empty")]
    EmptyRoster,

    #[error("Roster file has no '{}' column", super::NAME_COLUMN)]
    MissingNameColumn,

    #[error("Could not access roster file '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed roster file: {source}")]
    CsvError { source: csv::Error },
}

impl From<csv::Error> for RosterError {
    fn from(e: csv::Error) -> Self {
        Self::CsvError { source: e }
    }
}
