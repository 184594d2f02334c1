//! # axmlfmt-core
//!
//! Canonical formatting of Android XML resources.
//!
//! The pipeline has two passes over a document:
//! - **reader**: adapts `quick-xml` into a stream of [`Token`]s
//! - **annotate**: flattens tokens into depth-annotated [`Element`]s
//! - **render**: writes elements back out with sorted attributes
//!
//! The crate does no filesystem access; callers supply any `BufRead` input
//! and `Write` output.

pub mod annotate;
pub mod error;
pub mod escape;
pub mod namespace;
pub mod reader;
pub mod render;
pub mod sort;
pub mod token;

pub use annotate::{Element, annotate};
pub use error::{ErrorCategory, FormatError};
pub use reader::XmlTokens;
pub use render::{DEFAULT_INDENT, Renderer};
pub use sort::sort_attributes;
pub use token::{Attribute, Name, Token};

use std::io::{BufRead, Write};

/// Reads a document, annotates it and renders it in canonical form.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    renderer: Renderer,
}

impl Formatter {
    /// Creates a formatter that indents one level with `indent`.
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            renderer: Renderer::new(indent),
        }
    }

    /// Formats `input` into `output`.
    ///
    /// The whole document is annotated before anything is rendered, so a
    /// document that fails to parse leaves `output` untouched.
    pub fn format<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<(), FormatError> {
        let elements = annotate(XmlTokens::new(input))?;
        self.renderer.render(&elements, output)?;
        output.flush()?;
        Ok(())
    }

    pub fn format_str(&self, input: &str) -> Result<String, FormatError> {
        let elements = annotate(XmlTokens::new(input.as_bytes()))?;
        self.renderer.render_to_string(&elements)
    }
}
