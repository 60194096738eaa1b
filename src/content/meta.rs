//! Front matter and the page/section views the head composer reads.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Taxonomy name -> ordered terms, e.g. `tags = ["rust", "web"]`.
pub type Taxonomies = FxHashMap<String, Vec<String>>;

/// Deserialize a term list, treating a bare string as a single term.
fn deserialize_taxonomies<'de, D>(deserializer: D) -> Result<Taxonomies, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Terms {
        One(String),
        Many(Vec<String>),
    }

    let raw: FxHashMap<String, Terms> = FxHashMap::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(name, terms)| match terms {
            Terms::One(term) => (name, vec![term]),
            Terms::Many(terms) => (name, terms),
        })
        .collect())
}

/// TOML front matter of a content file.
///
/// # Standard Fields
///
/// | Field         | Type          | Description                          |
/// |---------------|---------------|--------------------------------------|
/// | `title`       | `String`      | Title, may contain markup            |
/// | `description` | `String`      | Plain description                    |
/// | `summary`     | `String`      | Summary, may contain markup          |
/// | `author`      | `String`      | Author, may contain markup           |
/// | `permalink`   | `String`      | Custom URL path (overrides default)  |
/// | `taxonomies`  | table         | `tags`, `categories`, ...            |
///
/// Any other key lands in `extra` and is ignored by the composer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub permalink: Option<String>,
    #[serde(deserialize_with = "deserialize_taxonomies")]
    pub taxonomies: Taxonomies,
    #[serde(flatten)]
    pub extra: FxHashMap<String, toml::Value>,
}

/// A single content item.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Page {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub taxonomies: Taxonomies,
}

impl Page {
    /// Terms of one taxonomy, empty when the page has none.
    pub fn terms(&self, taxonomy: &str) -> &[String] {
        self.taxonomies
            .get(taxonomy)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// A listing page (`_index.md`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct Section {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

impl FrontMatter {
    pub fn into_page(self, derived_summary: Option<String>) -> Page {
        Page {
            title: self.title,
            summary: self.summary.or(derived_summary),
            description: self.description,
            author: self.author,
            taxonomies: self.taxonomies,
        }
    }

    pub fn into_section(self) -> Section {
        Section {
            title: self.title,
            description: self.description,
            author: self.author,
        }
    }
}
