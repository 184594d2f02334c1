//! Writes annotated elements back out as canonical text.
use crate::annotate::Element;
use crate::error::FormatError;
use crate::escape::{escape_attribute, escape_text};
use crate::namespace::XLIFF;
use crate::sort::sort_attributes;
use crate::token::{Attribute, Name, Token};
use std::io::Write;

pub const DEFAULT_INDENT: &str = "    ";

/// Tracks whether the output position is inside an element that holds
/// character data. Whitespace is significant there, so nothing is indented,
/// wrapped or separated by blank lines.
#[derive(Default)]
struct Flow {
    open: Vec<bool>,
}

impl Flow {
    fn inline(&self) -> bool {
        self.open.last().copied().unwrap_or(false)
    }

    fn enter(&mut self, element: &Element) {
        let inline = self.inline() || element.contains_char_data;
        self.open.push(inline);
    }

    fn leave(&mut self) {
        self.open.pop();
    }
}

/// `<xliff:g>` marks a placeholder inside a translatable string and always
/// keeps its attributes on one line.
fn is_text_run(name: &Name) -> bool {
    name.namespace.as_deref() == Some(XLIFF) && name.local == "g"
}

/// A blank line goes after a tag when the next element opens a new block or
/// starts with a comment.
fn separates(current: &Token, next: Option<&Element>) -> bool {
    current.is_tag()
        && matches!(
            next.map(|e| &e.token),
            Some(Token::StartTag { .. } | Token::Comment(_))
        )
}

fn write_attribute<W: Write>(out: &mut W, attr: &Attribute) -> Result<(), FormatError> {
    write!(
        out,
        "{}=\"{}\"",
        attr.display_name(),
        escape_attribute(&attr.value)
    )?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct Renderer {
    indent: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl Renderer {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
        }
    }

    /// Renders `elements` into `out`, stopping at the first failed write.
    pub fn render<W: Write>(&self, elements: &[Element], out: &mut W) -> Result<(), FormatError> {
        let mut flow = Flow::default();

        for (i, element) in elements.iter().enumerate() {
            match &element.token {
                Token::StartTag { name, attributes } => {
                    self.start_tag(out, element, name, attributes, flow.inline())?;
                    if element.is_paired() {
                        flow.enter(element);
                    }
                }
                Token::EndTag { name } => {
                    flow.leave();
                    self.end_tag(out, element, name, flow.inline())?;
                }
                Token::Text(value) => out.write_all(escape_text(value).as_bytes())?,
                Token::Comment(body) => {
                    self.comment(out, element.depth, body, flow.inline())?;
                }
                Token::ProcessingInstruction {
                    target,
                    instructions,
                } => {
                    processing_instruction(out, target, instructions, flow.inline())?;
                }
            }

            if !flow.inline() && separates(&element.token, elements.get(i + 1)) {
                writeln!(out)?;
            }
        }

        Ok(())
    }

    pub fn render_to_string(&self, elements: &[Element]) -> Result<String, FormatError> {
        let mut buf = Vec::new();
        self.render(elements, &mut buf)?;
        String::from_utf8(buf).map_err(|e| FormatError::Utf8(e.utf8_error()))
    }

    fn write_indent<W: Write>(&self, out: &mut W, depth: usize) -> Result<(), FormatError> {
        for _ in 0..depth {
            out.write_all(self.indent.as_bytes())?;
        }
        Ok(())
    }

    fn start_tag<W: Write>(
        &self,
        out: &mut W,
        element: &Element,
        name: &Name,
        attributes: &[Attribute],
        inline: bool,
    ) -> Result<(), FormatError> {
        if !inline {
            self.write_indent(out, element.depth)?;
        }
        write!(out, "<{}", name)?;

        // Elements without attrs look like `<requestFocus />` or `<resources>`
        // and elements with one attr look like `<string name="app_name">`.
        let attributes = sort_attributes(attributes);
        let single_line = inline
            || attributes.len() <= 1
            || element.contains_char_data
            || is_text_run(name);

        for attr in &attributes {
            if single_line {
                out.write_all(b" ")?;
            } else {
                writeln!(out)?;
                self.write_indent(out, element.depth + 1)?;
            }
            write_attribute(out, attr)?;
        }

        // The last attribute is on the same line as the ">".
        let close = if inline {
            if element.is_paired() { ">" } else { " />" }
        } else if element.contains_char_data {
            ">"
        } else if element.is_self_closing {
            " />\n"
        } else {
            ">\n"
        };
        out.write_all(close.as_bytes())?;
        Ok(())
    }

    fn end_tag<W: Write>(
        &self,
        out: &mut W,
        element: &Element,
        name: &Name,
        inline: bool,
    ) -> Result<(), FormatError> {
        if inline {
            write!(out, "</{}>", name)?;
        } else if element.contains_char_data {
            // Flush against the text it closes.
            writeln!(out, "</{}>", name)?;
        } else {
            self.write_indent(out, element.depth)?;
            writeln!(out, "</{}>", name)?;
        }
        Ok(())
    }

    fn comment<W: Write>(
        &self,
        out: &mut W,
        depth: usize,
        body: &str,
        inline: bool,
    ) -> Result<(), FormatError> {
        if inline {
            write!(out, "<!--{}-->", body)?;
        } else {
            self.write_indent(out, depth)?;
            writeln!(out, "<!--{}-->", body)?;
        }
        Ok(())
    }
}

fn processing_instruction<W: Write>(
    out: &mut W,
    target: &str,
    instructions: &str,
    inline: bool,
) -> Result<(), FormatError> {
    if instructions.is_empty() {
        write!(out, "<?{}?>", target)?;
    } else {
        write!(out, "<?{} {}?>", target, instructions)?;
    }
    if !inline {
        writeln!(out)?;
    }
    Ok(())
}
