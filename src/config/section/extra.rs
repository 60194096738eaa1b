//! `[extra]` section: theme options read by the head composer.
//!
//! Known keys are typed; anything else a theme stores here is kept in
//! `other` untouched, so user-defined extras never trip the unknown-field check.

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme color used when `theme_color` is not set.
pub const DEFAULT_THEME_COLOR: &str = "orange";

static RE_COLOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraConfig {
    /// Site-wide author, fallback for pages and sections without one.
    pub author: Option<String>,
    /// Name of the color stylesheet under `color/`.
    pub theme_color: Option<String>,
    /// Favicon path, relative to the static dir.
    pub favicon: Option<String>,
    /// Additional stylesheet path.
    pub custom_css: Option<String>,
    /// Open Graph preview image path.
    pub og_preview_img: Option<String>,
    /// Emit KaTeX assets and auto-render config.
    pub enable_katex: bool,
    /// Base URL KaTeX assets are served from; local `katex/` when unset.
    pub katex_base: Option<String>,

    /// Everything else under `[extra]`.
    #[serde(flatten)]
    pub other: FxHashMap<String, toml::Value>,
}

impl ExtraConfig {
    pub const THEME_COLOR: FieldPath = FieldPath::new("extra.theme_color");
    pub const FAVICON: FieldPath = FieldPath::new("extra.favicon");
    pub const CUSTOM_CSS: FieldPath = FieldPath::new("extra.custom_css");
    pub const OG_PREVIEW_IMG: FieldPath = FieldPath::new("extra.og_preview_img");
    pub const KATEX_BASE: FieldPath = FieldPath::new("extra.katex_base");

    /// Effective theme color.
    pub fn theme_color(&self) -> &str {
        self.theme_color.as_deref().unwrap_or(DEFAULT_THEME_COLOR)
    }

    /// Asset paths set in `[extra]`, paired with their field.
    pub fn asset_paths(&self) -> impl Iterator<Item = (FieldPath, &str)> {
        [
            (Self::FAVICON, self.favicon.as_deref()),
            (Self::CUSTOM_CSS, self.custom_css.as_deref()),
            (Self::OG_PREVIEW_IMG, self.og_preview_img.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, path)| path.map(|p| (field, p)))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(color) = &self.theme_color
            && !RE_COLOR_NAME.is_match(color)
        {
            diag.error_with_hint(
                Self::THEME_COLOR,
                format!("'{color}' is not a plain color name"),
                "use the stylesheet name without path or extension, e.g. \"blue\"",
            );
        }

        for (field, path) in self.asset_paths() {
            if path.trim().is_empty() {
                diag.error(field, "must not be empty; remove the key instead");
            }
        }

        if let Some(base) = &self.katex_base
            && !self.enable_katex
        {
            diag.warn(
                Self::KATEX_BASE,
                format!("'{base}' is ignored while enable_katex is false"),
            );
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
        let extra = &config.extra;
        assert!(extra.author.is_none());
        assert!(extra.favicon.is_none());
        assert!(!extra.enable_katex);
        assert_eq!(extra.theme_color(), "orange");
    }

    #[test]
    fn test_known_keys() {
        let config = test_parse_config(
            r#"[extra]
author = "Alice"
theme_color = "blue"
favicon = "img/favicon.png"
custom_css = "custom.css"
og_preview_img = "img/preview.png"
enable_katex = true
"#,
        );
        let extra = &config.extra;
        assert_eq!(extra.author.as_deref(), Some("Alice"));
        assert_eq!(extra.theme_color(), "blue");
        assert_eq!(extra.favicon.as_deref(), Some("img/favicon.png"));
        assert!(extra.enable_katex);
        assert_eq!(extra.asset_paths().count(), 3);
    }

    #[test]
    fn test_other_keys_are_kept() {
        let config = test_parse_config("[extra]\nanalytics_id = \"UA-1\"\nmenu = [\"a\", \"b\"]");
        assert_eq!(
            config.extra.other.get("analytics_id").and_then(|v| v.as_str()),
            Some("UA-1")
        );
        assert!(config.extra.other.contains_key("menu"));
    }

    #[test]
    fn test_theme_color_with_path_is_error() {
        let config = test_parse_config("[extra]\ntheme_color = \"../evil\"");
        let mut diag = ConfigDiagnostics::new();
        config.extra.validate(&mut diag);
        assert!(diag.has_errors());
        assert_eq!(diag.errors()[0].field, ExtraConfig::THEME_COLOR);
    }

    #[test]
    fn test_empty_asset_path_is_error() {
        let config = test_parse_config("[extra]\nfavicon = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.extra.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, ExtraConfig::FAVICON);
    }

    #[test]
    fn test_katex_base_without_katex_warns() {
        let config = test_parse_config("[extra]\nkatex_base = \"https://cdn.example/katex\"");
        let mut diag = ConfigDiagnostics::new();
        config.extra.validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
    }
}
