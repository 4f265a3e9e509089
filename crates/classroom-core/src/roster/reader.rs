use std::{collections::HashSet, fs::File, io::Read, path::Path};

use super::{RosterError, NAME_COLUMN};

/// Collect every value of the `name` column.
///
/// The first row is the header; the column is looked up by its trimmed,
/// case-insensitive title. Blank cells and rows too short to hold the column
/// are ignored.
pub fn read_existing_names<R: Read>(reader: R) -> Result<HashSet<String>, RosterError> {
    let mut records = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_records();

    let header = records.next().ok_or(RosterError::EmptyRoster)??;
    let column = header
        .iter()
        .position(|title| title.trim().to_lowercase() == NAME_COLUMN)
        .ok_or(RosterError::MissingNameColumn)?;

    let mut names = HashSet::new();
    for record in records {
        match record?.get(column) {
            Some(name) if !name.trim().is_empty() => {
                names.insert(name.to_owned());
            }
            _ => {}
        }
    }

    Ok(names)
}

/// Open `path` and collect its names.
pub fn read_existing_names_from_path(path: &Path) -> Result<HashSet<String>, RosterError> {
    let file = File::open(path).map_err(|e| RosterError::IoError {
        path: path.to_owned(),
        source: e,
    })?;

    read_existing_names(file)
}
