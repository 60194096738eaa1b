//! What a single render pass is about.

use crate::content::{Content, Page, Section};

/// The item being rendered. Binding a page and a section at once is not
/// representable.
#[derive(Debug, Clone, Copy, Default)]
pub enum Subject<'a> {
    Page(&'a Page),
    Section(&'a Section),
    /// Site-level render (home page without front matter, 404, ...).
    #[default]
    None,
}

impl<'a> From<&'a Content> for Subject<'a> {
    fn from(content: &'a Content) -> Self {
        match content {
            Content::Page(page) => Self::Page(page),
            Content::Section(section) => Self::Section(section),
        }
    }
}

/// Inputs of one render pass besides the site config.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    pub subject: Subject<'a>,
    /// Public URL of the rendered document, becomes `og:url`.
    pub current_url: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    /// Render with neither a page nor a section bound.
    pub fn site() -> Self {
        Self::default()
    }

    pub fn page(page: &'a Page) -> Self {
        Self {
            subject: Subject::Page(page),
            current_url: None,
        }
    }

    pub fn section(section: &'a Section) -> Self {
        Self {
            subject: Subject::Section(section),
            current_url: None,
        }
    }

    pub fn with_url(mut self, url: &'a str) -> Self {
        self.current_url = Some(url);
        self
    }
}

impl<'a> From<&'a Content> for RenderContext<'a> {
    fn from(content: &'a Content) -> Self {
        Self {
            subject: Subject::from(content),
            current_url: None,
        }
    }
}
