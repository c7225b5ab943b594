use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, SceneGuardError};

/// Writes a report file atomically.
///
/// The destination directory is created if missing (no error if it exists). Content
/// goes to a temporary file next to the destination which is then renamed over it,
/// so a failed write never leaves a partial report. The temporary file is removed
/// on every error path.
///
/// # Errors
/// Returns `SceneGuardError::ReportWrite` if any step fails.
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    let report_error = |source: std::io::Error| SceneGuardError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(directory).map_err(report_error)?;

    let mut temp_file = NamedTempFile::new_in(directory).map_err(report_error)?;
    temp_file
        .write_all(content.as_bytes())
        .map_err(report_error)?;
    temp_file.as_file().sync_all().map_err(report_error)?;
    temp_file
        .persist(path)
        .map_err(|err| report_error(err.error))?;

    Ok(())
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
