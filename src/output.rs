//! Where formatted documents go.

use crate::batch::FileReport;
use crate::error::PipelineError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Print every formatted document to standard output.
    Stdout,
    /// Replace each changed file on disk.
    InPlace,
}

impl Destination {
    /// Emits one report. Returns whether anything was written.
    pub fn emit(&self, report: &FileReport) -> Result<bool, PipelineError> {
        match self {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(report.formatted.as_bytes())
                    .and_then(|_| stdout.flush())
                    .map_err(|e| PipelineError::io(&report.path, e))?;
                Ok(true)
            }
            Destination::InPlace => {
                if !report.is_changed() {
                    log::debug!("{} is already formatted", report.path.display());
                    return Ok(false);
                }
                write_atomic(&report.path, &report.formatted)
                    .map_err(|e| PipelineError::io(&report.path, e))?;
                log::info!("Rewrote {}", report.path.display());
                Ok(true)
            }
        }
    }
}

/// Replaces `path` with `contents` via a temp file in the same directory, so
/// readers never observe a half-written file. The original permissions are kept.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(contents.as_bytes())?;
    temp.as_file().sync_all()?;

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
