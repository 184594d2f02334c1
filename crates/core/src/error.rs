//! Defines the error type shared by every stage of the formatting pipeline.
use std::str::Utf8Error;
use thiserror::Error;

/// Broad classes of failure, used by callers to decide how to report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The token source could not produce a well-formed document.
    Malformed,
    /// The document parsed, but violates a rule of the resource format.
    SemanticViolation,
    /// The output destination rejected a write.
    Sink,
}

/// The main error enum for reading, annotating and rendering a document.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("XML parsing error at byte {position}: {source}")]
    Xml {
        source: quick_xml::Error,
        position: usize,
    },

    #[error("XML attribute parsing error: {0}")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    #[error("Malformed XML at byte {position}: {message}")]
    Malformed { message: String, position: usize },

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("Found end tag </{0}> with no open element")]
    UnexpectedEndTag(String),

    #[error("Mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag { expected: String, found: String },

    #[error("Element <{0}> is never closed")]
    UnclosedElement(String),

    #[error("Character data outside of the root element: {0:?}")]
    TopLevelCharData(String),

    #[error("Failed to write formatted output: {0}")]
    Sink(#[from] std::io::Error),
}

impl FormatError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormatError::TopLevelCharData(_) => ErrorCategory::SemanticViolation,
            FormatError::Sink(_) => ErrorCategory::Sink,
            FormatError::Xml { .. }
            | FormatError::XmlAttr(_)
            | FormatError::Malformed { .. }
            | FormatError::Utf8(_)
            | FormatError::UnexpectedEndTag(_)
            | FormatError::MismatchedEndTag { .. }
            | FormatError::UnclosedElement(_) => ErrorCategory::Malformed,
        }
    }
}
