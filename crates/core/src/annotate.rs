//! Flattens a token stream into depth-annotated [`Element`]s.
//!
//! Elements are stored in an arena in tag-encounter order. Open start tags are
//! tracked by index, and their flags are updated in place until the matching
//! end tag arrives, so by the time the pass finishes every start tag knows
//! whether it has children and whether it encloses character data.
use crate::error::FormatError;
use crate::token::{Name, Token};

/// One annotated unit of the flattened document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub token: Token,
    /// Number of open ancestor start tags.
    pub depth: usize,
    /// Only meaningful for start tags and their end tags.
    pub is_self_closing: bool,
    /// Non-whitespace text was seen inside this element's span.
    pub contains_char_data: bool,
}

impl Element {
    fn new(token: Token, depth: usize) -> Self {
        Self {
            token,
            depth,
            is_self_closing: false,
            contains_char_data: false,
        }
    }

    /// Whether a start tag is followed by its own end tag in the element list.
    ///
    /// Childless start tags without character data are collapsed to `<tag />`
    /// and have no end tag element.
    pub fn is_paired(&self) -> bool {
        !(self.is_self_closing && !self.contains_char_data)
    }
}

#[derive(Default)]
struct Annotator {
    elements: Vec<Element>,
    open: Vec<usize>,
}

impl Annotator {
    fn depth(&self) -> usize {
        self.open.len()
    }

    fn push(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    fn start_tag(&mut self, token: Token) {
        let inherited = match self.open.last() {
            Some(&parent) => {
                let parent = &mut self.elements[parent];
                parent.is_self_closing = false;
                parent.contains_char_data
            }
            None => false,
        };

        let mut element = Element::new(token, self.depth());
        element.is_self_closing = true;
        element.contains_char_data = inherited;
        let index = self.push(element);
        self.open.push(index);
    }

    fn end_tag(&mut self, name: Name) -> Result<(), FormatError> {
        let index = self
            .open
            .pop()
            .ok_or_else(|| FormatError::UnexpectedEndTag(name.to_string()))?;

        let start = &self.elements[index];
        if let Token::StartTag { name: open_name, .. } = &start.token
            && *open_name != name
        {
            return Err(FormatError::MismatchedEndTag {
                expected: open_name.to_string(),
                found: name.to_string(),
            });
        }

        if start.is_paired() {
            let mut element = Element::new(Token::EndTag { name }, start.depth);
            element.contains_char_data = start.contains_char_data;
            self.push(element);
        }
        Ok(())
    }

    fn text(&mut self, value: String) -> Result<(), FormatError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let &parent = self
            .open
            .last()
            .ok_or_else(|| FormatError::TopLevelCharData(trimmed.to_string()))?;
        let parent = &mut self.elements[parent];
        parent.contains_char_data = true;
        parent.is_self_closing = false;

        let depth = self.depth();
        self.push(Element::new(Token::Text(value), depth));
        Ok(())
    }

    fn comment(&mut self, token: Token) {
        // A comment is content: the enclosing element keeps its end tag.
        if let Some(&parent) = self.open.last() {
            self.elements[parent].is_self_closing = false;
        }
        let depth = self.depth();
        self.push(Element::new(token, depth));
    }

    fn finish(self) -> Result<Vec<Element>, FormatError> {
        if let Some(&index) = self.open.last()
            && let Token::StartTag { name, .. } = &self.elements[index].token
        {
            return Err(FormatError::UnclosedElement(name.to_string()));
        }
        Ok(self.elements)
    }
}

/// Consumes a token stream and returns the annotated element list.
///
/// The first error from the token source aborts the pass.
pub fn annotate<I>(tokens: I) -> Result<Vec<Element>, FormatError>
where
    I: IntoIterator<Item = Result<Token, FormatError>>,
{
    let mut annotator = Annotator::default();

    for token in tokens {
        match token? {
            token @ Token::StartTag { .. } => annotator.start_tag(token),
            Token::EndTag { name } => annotator.end_tag(name)?,
            Token::Text(value) => annotator.text(value)?,
            token @ Token::Comment(_) => annotator.comment(token),
            token @ Token::ProcessingInstruction { .. } => {
                let depth = annotator.depth();
                annotator.push(Element::new(token, depth));
            }
        }
    }

    let elements = annotator.finish()?;
    log::debug!("Annotated {} elements", elements.len());
    Ok(elements)
}
