//! A token source backed by `quick_xml::NsReader`.
//!
//! The reader resolves namespaces, entity references and CDATA sections, so
//! the annotator only ever sees the five [`Token`] kinds.
use crate::error::FormatError;
use crate::namespace::XMLNS;
use crate::token::{Attribute, Name, Token};
use quick_xml::NsReader;
use quick_xml::encoding::Decoder;
use quick_xml::escape::{resolve_xml_entity, unescape};
use quick_xml::events::attributes::Attribute as RawAttribute;
use quick_xml::events::{BytesDecl, BytesRef, BytesStart, Event};
use quick_xml::name::{QName, ResolveResult};
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::BufRead;
use std::mem;
use std::str;

/// Streams [`Token`]s out of an XML document.
///
/// Adjacent text, CDATA and entity references are merged into a single
/// [`Token::Text`], and `<tag/>` is delivered as a start tag followed by an
/// end tag.
pub struct XmlTokens<R> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    text: String,
    queued: VecDeque<Token>,
    finished: bool,
}

impl<R: BufRead> XmlTokens<R> {
    pub fn new(source: R) -> Self {
        let mut reader = NsReader::from_reader(source);
        reader.config_mut().trim_text(false);
        Self {
            reader,
            buf: Vec::new(),
            text: String::new(),
            queued: VecDeque::new(),
            finished: false,
        }
    }

    fn read_token(&mut self) -> Result<Option<Token>, FormatError> {
        loop {
            if let Some(token) = self.queued.pop_front() {
                return Ok(Some(token));
            }
            if self.finished {
                return Ok(None);
            }

            self.buf.clear();
            let position = self.reader.buffer_position() as usize;
            let (resolve, event) = self
                .reader
                .read_resolved_event_into(&mut self.buf)
                .map_err(|source| FormatError::Xml { source, position })?;
            let namespace = resolve_namespace(resolve);

            match event {
                Event::Text(e) => {
                    let text = e.decode().map_err(|err| malformed(err, position))?;
                    self.text.push_str(&text);
                }
                Event::CData(e) => {
                    self.text.push_str(str::from_utf8(e.as_ref())?);
                }
                Event::GeneralRef(e) => {
                    push_reference(&mut self.text, &e, position)?;
                }
                Event::Start(e) => {
                    let name = qualified_name(e.name(), namespace)?;
                    let attributes = attributes(&self.reader, &e, position)?;
                    flush_text(&mut self.text, &mut self.queued);
                    self.queued.push_back(Token::StartTag { name, attributes });
                }
                Event::Empty(e) => {
                    let name = qualified_name(e.name(), namespace)?;
                    let attributes = attributes(&self.reader, &e, position)?;
                    flush_text(&mut self.text, &mut self.queued);
                    self.queued.push_back(Token::StartTag {
                        name: name.clone(),
                        attributes,
                    });
                    self.queued.push_back(Token::EndTag { name });
                }
                Event::End(e) => {
                    let name = qualified_name(e.name(), namespace)?;
                    flush_text(&mut self.text, &mut self.queued);
                    self.queued.push_back(Token::EndTag { name });
                }
                Event::Comment(e) => {
                    let body = str::from_utf8(e.as_ref())?.to_string();
                    flush_text(&mut self.text, &mut self.queued);
                    self.queued.push_back(Token::Comment(body));
                }
                Event::PI(e) => {
                    let content = str::from_utf8(e.as_ref())?;
                    let (target, instructions) = content
                        .split_once(char::is_whitespace)
                        .unwrap_or((content, ""));
                    flush_text(&mut self.text, &mut self.queued);
                    self.queued.push_back(Token::ProcessingInstruction {
                        target: target.to_string(),
                        instructions: instructions.trim().to_string(),
                    });
                }
                Event::Decl(e) => {
                    let token = declaration(&e, position)?;
                    flush_text(&mut self.text, &mut self.queued);
                    self.queued.push_back(token);
                }
                Event::DocType(_) => {
                    log::warn!("Skipping DOCTYPE declaration at byte {}", position);
                }
                Event::Eof => {
                    flush_text(&mut self.text, &mut self.queued);
                    self.finished = true;
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for XmlTokens<R> {
    type Item = Result<Token, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.read_token();
        if next.is_err() {
            self.finished = true;
            self.queued.clear();
        }
        next.transpose()
    }
}

fn flush_text(text: &mut String, queued: &mut VecDeque<Token>) {
    if !text.is_empty() {
        queued.push_back(Token::Text(mem::take(text)));
    }
}

fn malformed(err: impl Display, position: usize) -> FormatError {
    FormatError::Malformed {
        message: err.to_string(),
        position,
    }
}

fn resolve_namespace(resolve: ResolveResult<'_>) -> Option<String> {
    match resolve {
        ResolveResult::Bound(ns) => Some(String::from_utf8_lossy(ns.as_ref()).into_owned()),
        // Unknown prefixes are kept verbatim on the name; they carry no namespace.
        ResolveResult::Unbound | ResolveResult::Unknown(_) => None,
    }
}

fn qualified_name(name: QName<'_>, namespace: Option<String>) -> Result<Name, FormatError> {
    let prefix = match name.prefix() {
        Some(prefix) => Some(str::from_utf8(prefix.as_ref())?.to_string()),
        None => None,
    };
    let local = str::from_utf8(name.local_name().as_ref())?.to_string();
    Ok(Name {
        namespace,
        prefix,
        local,
    })
}

fn attributes<R>(
    reader: &NsReader<R>,
    start: &BytesStart<'_>,
    position: usize,
) -> Result<Vec<Attribute>, FormatError> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = attr.key;
        let value = attribute_value(&attr, reader.decoder(), position)?;

        let name = if key.as_ref() == b"xmlns" {
            Name::local("xmlns")
        } else if key.prefix().is_some_and(|p| p.as_ref() == b"xmlns") {
            let local = key.local_name();
            let declared = str::from_utf8(local.as_ref())?;
            Name::qualified(XMLNS, "xmlns", declared)
        } else {
            let (resolve, _) = reader.resolver().resolve_attribute(key);
            qualified_name(key, resolve_namespace(resolve))?
        };
        attributes.push(Attribute::new(name, value));
    }
    Ok(attributes)
}

/// Re-emits the XML declaration as an `xml` processing instruction with its
/// pseudo-attributes in double quotes.
fn declaration(decl: &BytesDecl<'_>, position: usize) -> Result<Token, FormatError> {
    let version = decl.version().map_err(|err| malformed(err, position))?;
    let mut instructions = format!("version=\"{}\"", str::from_utf8(&version)?);

    if let Some(encoding) = decl.encoding() {
        let encoding = encoding.map_err(|err| malformed(err, position))?;
        instructions.push_str(&format!(" encoding=\"{}\"", str::from_utf8(&encoding)?));
    }
    if let Some(standalone) = decl.standalone() {
        let standalone = standalone.map_err(|err| malformed(err, position))?;
        instructions.push_str(&format!(" standalone=\"{}\"", str::from_utf8(&standalone)?));
    }

    Ok(Token::ProcessingInstruction {
        target: "xml".to_string(),
        instructions,
    })
}

/// Appends the text a general entity reference stands for. Character
/// references go through quick-xml, which rejects signs, `&#0;` and `&#X..;`.
fn push_reference(text: &mut String, reference: &BytesRef<'_>, position: usize) -> Result<(), FormatError> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|err| malformed(err, position))?
    {
        text.push(ch);
        return Ok(());
    }

    let name = reference.decode().map_err(|err| malformed(err, position))?;
    match resolve_xml_entity(&name) {
        Some(resolved) => {
            text.push_str(resolved);
            Ok(())
        }
        None => Err(FormatError::Malformed {
            message: format!("unknown entity reference &{};", name),
            position,
        }),
    }
}

/// Decodes an attribute value with attribute-value normalization: literal
/// tabs and line breaks become spaces before references are expanded, so
/// only whitespace written as a character reference survives as such.
fn attribute_value(attr: &RawAttribute<'_>, decoder: Decoder, position: usize) -> Result<String, FormatError> {
    let raw = decoder
        .decode(&attr.value)
        .map_err(|err| malformed(err, position))?;
    let normalized = raw.replace("\r\n", " ").replace(['\t', '\r', '\n'], " ");
    let value = unescape(&normalized).map_err(|err| malformed(err, position))?;
    Ok(value.into_owned())
}
