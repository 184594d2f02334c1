//! The token model shared by the token source, the annotator and the renderer.

use crate::namespace;
use std::borrow::Cow;
use std::fmt;

/// A namespace-resolved XML name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    /// The resolved namespace URI, if the name is bound to one.
    pub namespace: Option<String>,
    /// The prefix as written in the source document.
    pub prefix: Option<String>,
    pub local: String,
}

impl Name {
    /// A name with no prefix and no namespace, like `style` or `LinearLayout`.
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            prefix: None,
            local: local.into(),
        }
    }

    /// A prefixed name bound to `namespace`.
    pub fn qualified(
        namespace: impl Into<String>,
        prefix: impl Into<String>,
        local: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            prefix: Some(prefix.into()),
            local: local.into(),
        }
    }

    /// The name as it appears in formatted output. Known namespaces use their
    /// canonical short prefix, anything else keeps the prefix it was written with.
    pub fn display(&self) -> Cow<'_, str> {
        match &self.prefix {
            None => Cow::Borrowed(&self.local),
            Some(written) => {
                let prefix = self
                    .namespace
                    .as_deref()
                    .and_then(namespace::short_prefix)
                    .unwrap_or(written);
                Cow::Owned(format!("{}:{}", prefix, self.local))
            }
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: Name,
    /// The unescaped attribute value.
    pub value: String,
}

impl Attribute {
    pub fn new(name: Name, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    /// Whether this attribute is an `xmlns:prefix="uri"` declaration.
    pub fn is_namespace_declaration(&self) -> bool {
        self.name.namespace.as_deref() == Some(namespace::XMLNS)
    }

    /// The prefix a namespace declaration is displayed with: the short name of
    /// the namespace it binds when that namespace is known, otherwise the
    /// declared prefix.
    pub fn declared_prefix(&self) -> &str {
        namespace::short_prefix(&self.value).unwrap_or(&self.name.local)
    }

    /// The attribute name as it appears in formatted output.
    pub fn display_name(&self) -> Cow<'_, str> {
        if self.is_namespace_declaration() {
            Cow::Owned(format!("xmlns:{}", self.declared_prefix()))
        } else {
            self.name.display()
        }
    }
}

/// One lexical unit of a document, as delivered by a token source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: Name,
        attributes: Vec<Attribute>,
    },
    EndTag {
        name: Name,
    },
    /// Character data with entities and CDATA sections already resolved.
    Text(String),
    Comment(String),
    ProcessingInstruction {
        target: String,
        instructions: String,
    },
}

impl Token {
    pub fn is_tag(&self) -> bool {
        matches!(self, Token::StartTag { .. } | Token::EndTag { .. })
    }
}
