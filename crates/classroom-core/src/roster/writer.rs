use std::{fs::File, io::Write, path::Path};

use super::RosterError;

/// Write one name per row, without header.
pub fn write_roster<W, I, S>(writer: W, names: I) -> Result<(), RosterError>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    for name in names {
        writer.write_record([name.as_ref()])?;
    }

    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Create or truncate `path` and write the roster into it.
pub fn write_roster_to_path<I, S>(path: &Path, names: I) -> Result<(), RosterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let file = File::create(path).map_err(|e| RosterError::IoError {
        path: path.to_owned(),
        source: e,
    })?;

    write_roster(file, names)
}
