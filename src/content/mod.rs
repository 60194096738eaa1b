//! Content files: Markdown with `+++` TOML front matter.
//!
//! A file named `_index.md` is a [`Section`], any other `.md` file a
//! [`Page`]. Only the front matter (plus a summary derived from the body) is
//! read; the body is never rendered as a whole.

mod frontmatter;
mod meta;
mod permalink;
mod summary;

pub use meta::{Page, Section};
pub use permalink::permalink;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use frontmatter::Split;
use meta::FrontMatter;

/// File name marking a section.
pub const SECTION_FILE: &str = "_index.md";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] toml::de::Error),

    #[error("front matter in `{0}` is missing its closing `+++`")]
    Unterminated(PathBuf),
}

/// Whether a content file renders a single item or a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Page,
    Section,
}

impl ContentKind {
    pub fn of(path: &Path) -> Self {
        if path.file_name().is_some_and(|n| n == SECTION_FILE) {
            Self::Section
        } else {
            Self::Page
        }
    }
}

/// A parsed content file, ready to become a render subject.
#[derive(Debug, Clone)]
pub enum Content {
    Page(Page),
    Section(Section),
}

/// A content file with its location.
#[derive(Debug, Clone)]
pub struct ContentFile {
    pub path: PathBuf,
    pub content: Content,
    /// Custom permalink path from front matter.
    pub permalink: Option<String>,
}

impl ContentFile {
    /// Read and parse a content file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        Self::parse(path, &source)
    }

    /// Parse `source` as the content of `path`.
    pub fn parse(path: &Path, source: &str) -> Result<Self, ContentError> {
        let (front, body) = match frontmatter::split(source) {
            Split::Found(front, body) => {
                let front: FrontMatter = toml::from_str(front)
                    .map_err(|err| ContentError::FrontMatter(path.to_path_buf(), err))?;
                (front, body)
            }
            Split::Absent => (FrontMatter::default(), source),
            Split::Unterminated => return Err(ContentError::Unterminated(path.to_path_buf())),
        };

        let permalink = front.permalink.clone();
        let content = match ContentKind::of(path) {
            ContentKind::Section => Content::Section(front.into_section()),
            ContentKind::Page => Content::Page(front.into_page(summary::derive(body))),
        };

        Ok(Self {
            path: path.to_path_buf(),
            content,
            permalink,
        })
    }

    pub fn kind(&self) -> ContentKind {
        match self.content {
            Content::Page(_) => ContentKind::Page,
            Content::Section(_) => ContentKind::Section,
        }
    }

    /// Public URL of this file, `None` if it lies outside `content_dir`
    /// and has no custom permalink.
    pub fn permalink(&self, base_url: &str, content_dir: &Path) -> Option<String> {
        permalink(base_url, content_dir, &self.path, self.permalink.as_deref())
    }
}
