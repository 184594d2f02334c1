//! Formats many files independently.
//!
//! With the `parallel` feature (on by default) files are spread over rayon's
//! global work-stealing pool. Results always come back in input order, and a
//! failing file only produces an error entry for itself.

use crate::error::PipelineError;
use axmlfmt_core::Formatter;
use std::fs;
use std::path::{Path, PathBuf};

/// The outcome of formatting one file. Nothing has been written yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub original: String,
    pub formatted: String,
}

impl FileReport {
    /// Whether formatting changed the file's contents.
    pub fn is_changed(&self) -> bool {
        self.original != self.formatted
    }
}

/// Reads and formats a single file.
pub fn format_file(path: &Path, formatter: &Formatter) -> Result<FileReport, PipelineError> {
    let original = fs::read_to_string(path).map_err(|e| PipelineError::io(path, e))?;
    let formatted = formatter
        .format_str(&original)
        .map_err(|e| PipelineError::format(path, e))?;

    log::debug!(
        "Formatted {} ({} -> {} bytes)",
        path.display(),
        original.len(),
        formatted.len()
    );

    Ok(FileReport {
        path: path.to_path_buf(),
        original,
        formatted,
    })
}

/// Formats every file in `paths`, returning one result per path in the same order.
pub fn format_files<P>(paths: &[P], formatter: &Formatter) -> Vec<Result<FileReport, PipelineError>>
where
    P: AsRef<Path> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        log::debug!(
            "Formatting {} files on {} threads",
            paths.len(),
            rayon::current_num_threads()
        );
        paths
            .par_iter()
            .map(|path| format_file(path.as_ref(), formatter))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        paths
            .iter()
            .map(|path| format_file(path.as_ref(), formatter))
            .collect()
    }
}
