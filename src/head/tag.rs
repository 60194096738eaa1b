//! Head tags and their HTML serialization.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::utils::html::escape_attr;

// ============================================================================
// Markup
// ============================================================================

/// Attribute content that is already HTML-safe.
///
/// Text goes in through [`push_text`](Self::push_text) and is escaped; only
/// fixed fragments like the title separator go in raw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Escaped copy of `text`.
    pub fn text(text: &str) -> Self {
        Self(escape_attr(text).into_owned())
    }

    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape_attr(text));
    }

    /// Append `markup` verbatim. Callers pass trusted constants only.
    pub fn push_raw(&mut self, markup: &str) {
        self.0.push_str(markup);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tag
// ============================================================================

/// Attribute naming a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `property="..."`, used by Open Graph.
    Property(&'static str),
    /// `name="..."`
    Name(&'static str),
}

impl MetaKey {
    pub fn value(self) -> &'static str {
        match self {
            Self::Property(v) | Self::Name(v) => v,
        }
    }
}

/// One element of the head fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Meta {
        key: MetaKey,
        content: Markup,
    },
    Link {
        rel: &'static str,
        href: String,
        mime: Option<&'static str>,
        title: Option<String>,
    },
    Script {
        src: String,
        defer: bool,
    },
    /// Inline script; the body is generated, never user text.
    InlineScript(String),
}

impl Tag {
    pub fn property(property: &'static str, content: Markup) -> Self {
        Self::Meta {
            key: MetaKey::Property(property),
            content,
        }
    }

    pub fn name(name: &'static str, content: Markup) -> Self {
        Self::Meta {
            key: MetaKey::Name(name),
            content,
        }
    }

    pub fn stylesheet(href: String) -> Self {
        Self::Link {
            rel: "stylesheet",
            href,
            mime: None,
            title: None,
        }
    }

    /// Content of a `<meta>` tag with the given key value.
    pub fn meta_content(&self, key: &str) -> Option<&str> {
        match self {
            Self::Meta { key: k, content } if k.value() == key => Some(content.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meta { key, content } => {
                let attr = match key {
                    MetaKey::Property(_) => "property",
                    MetaKey::Name(_) => "name",
                };
                write!(f, r#"<meta {attr}="{}" content="{content}">"#, key.value())
            }
            Self::Link {
                rel,
                href,
                mime,
                title,
            } => {
                write!(f, r#"<link rel="{rel}""#)?;
                if let Some(mime) = mime {
                    write!(f, r#" type="{mime}""#)?;
                }
                if let Some(title) = title {
                    write!(f, r#" title="{}""#, escape_attr(title))?;
                }
                write!(f, r#" href="{}">"#, escape_attr(href))
            }
            Self::Script { src, defer } => {
                write!(f, r#"<script src="{}""#, escape_attr(src))?;
                if *defer {
                    f.write_str(" defer")?;
                }
                f.write_str("></script>")
            }
            Self::InlineScript(body) => write!(f, "<script>{body}</script>"),
        }
    }
}

// ============================================================================
// HeadTags
// ============================================================================

/// Ordered output of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadTags(Vec<Tag>);

impl HeadTags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: Tag) {
        self.0.push(tag);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Content of the first `<meta>` with the given property or name.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.0.iter().find_map(|tag| tag.meta_content(key))
    }

    /// Each tag as a literal HTML string.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(Tag::to_string).collect()
    }
}

impl Extend<Tag> for HeadTags {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a HeadTags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One tag per line.
impl fmt::Display for HeadTags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            writeln!(f, "{tag}")?;
        }
        Ok(())
    }
}

/// Serialized as an array of HTML strings.
impl Serialize for HeadTags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(Tag::to_string))
    }
}
