//! Prepends content to the changelog file without ever exposing a partially
//! written file at the target path.
use log::*;
use std::{
    fs::{self, File},
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::error::{CompositeError, Result};

/// Writes `content` followed by the existing contents of `path` (if any) to
/// a temporary file beside it, then renames the temporary file over `path`.
///
/// The temporary file is deleted if anything fails before the rename.
pub fn prepend(path: &Path, content: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = tempfile::Builder::new()
        .prefix(".changelog")
        .tempfile_in(dir)
        .map_err(|e| CompositeError::file_io(dir, e))?;

    // keep the mode of the file being replaced
    if let Ok(metadata) = fs::metadata(path)
        && metadata.is_file()
    {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| CompositeError::file_io(path, e))?;
    }

    let mut writer = BufWriter::new(temp);
    write_prepended(&mut writer, path, content)
        .map_err(|e| CompositeError::file_io(path, e))?;

    let temp = writer
        .into_inner()
        .map_err(|e| CompositeError::file_io(path, e.into_error()))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| CompositeError::file_io(path, e))?;

    temp.persist(path)
        .map_err(|e| CompositeError::file_io(path, e.error))?;

    info!("wrote composite changelog to {}", path.display());

    Ok(())
}

fn write_prepended(
    writer: &mut impl Write,
    path: &Path,
    content: &[u8],
) -> io::Result<()> {
    writer.write_all(content)?;

    match File::open(path) {
        Ok(existing) => {
            // raw bytes: an existing changelog need not be valid UTF-8
            for line in BufReader::new(existing).split(b'\n') {
                writer.write_all(&line?)?;
                writer.write_all(b"\n")?;
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("{} does not exist yet: creating it", path.display());
        }
        Err(err) => return Err(err),
    }

    writer.flush()
}
