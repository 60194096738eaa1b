//! `[render]` section: how long texts are cut before they land in a tag.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::html::TruncateMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Cut on characters (`chars`) or back off to a word boundary (`words`).
    pub truncate: TruncateMode,
    /// Appended to text that was cut.
    pub ellipsis: String,
    /// Character budget for a page summary used as description.
    pub summary_limit: usize,
    /// Character budget for a page author.
    pub author_limit: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            truncate: TruncateMode::Chars,
            ellipsis: "…".into(),
            summary_limit: 200,
            author_limit: 100,
        }
    }
}

impl RenderConfig {
    pub const SUMMARY_LIMIT: FieldPath = FieldPath::new("render.summary_limit");
    pub const AUTHOR_LIMIT: FieldPath = FieldPath::new("render.author_limit");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.summary_limit == 0 {
            diag.error(Self::SUMMARY_LIMIT, "must be greater than 0");
        }
        if self.author_limit == 0 {
            diag.error(Self::AUTHOR_LIMIT, "must be greater than 0");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.render.truncate, TruncateMode::Chars);
        assert_eq!(config.render.ellipsis, "…");
        assert_eq!(config.render.summary_limit, 200);
        assert_eq!(config.render.author_limit, 100);
    }

    #[test]
    fn test_word_policy() {
        let config = test_parse_config("[render]\ntruncate = \"words\"\nellipsis = \"...\"");
        assert_eq!(config.render.truncate, TruncateMode::Words);
        assert_eq!(config.render.ellipsis, "...");
    }

    #[test]
    fn test_zero_limit_is_error() {
        let config = test_parse_config("[render]\nsummary_limit = 0");
        let mut diag = ConfigDiagnostics::new();
        config.render.validate(&mut diag);
        assert!(diag.has_errors());
    }
}
