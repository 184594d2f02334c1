// src/error.rs
use axmlfmt_core::FormatError;
use std::path::PathBuf;
use thiserror::Error;

/// An error tied to one input file of a formatting run.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    #[error("{}: I/O error: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn format(path: impl Into<PathBuf>, source: FormatError) -> Self {
        PipelineError::Format {
            path: path.into(),
            source,
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PipelineError::Io {
            path: path.into(),
            source,
        }
    }

    /// The file this error belongs to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            PipelineError::Format { path, .. } | PipelineError::Io { path, .. } => path,
        }
    }
}
