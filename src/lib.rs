//! # axmlfmt
//!
//! Formats Android XML layouts and resources into one canonical layout.
//!
//! - **batch**: formats many files, in parallel when the `parallel` feature is on
//! - **output**: writes results to standard output or back to the files
//! - **error**: per-file pipeline errors
//!
//! The formatting itself lives in `axmlfmt-core` and is re-exported here.

pub mod batch;
pub mod error;
pub mod output;

pub use axmlfmt_core::{
    Attribute, Element, ErrorCategory, FormatError, Formatter, Name, Renderer, Token, XmlTokens,
    annotate, sort_attributes,
};
pub use batch::{FileReport, format_file, format_files};
pub use error::PipelineError;
pub use output::Destination;
