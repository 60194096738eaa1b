//! Site configuration loaded from `config.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [extra], [build], [render]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config file lookup, base_url checks
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Example
//!
//! ```toml
//! title = "My Blog"
//! description = "A personal blog"
//! base_url = "https://example.com"
//! generate_feeds = true
//!
//! [extra]
//! author = "Alice"
//! theme_color = "blue"
//! favicon = "img/favicon.png"
//! enable_katex = true
//!
//! [render]
//! truncate = "words"
//! ```

pub mod section;
pub mod types;
mod util;

pub use section::{BuildConfig, ExtraConfig, RenderConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};
pub use util::find_config_file;

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing config.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site title, first half of every `og:title`.
    pub title: String,

    /// Site description, the last fallback for titles and descriptions.
    pub description: String,

    /// Prefix for resolved asset URLs and permalinks.
    pub base_url: String,

    /// Emit a feed `<link>` in every head.
    pub generate_feeds: bool,

    /// Feed file the `<link>` points to.
    pub feed_filename: String,

    pub extra: ExtraConfig,

    pub build: BuildConfig,

    pub render: RenderConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            root: PathBuf::new(),
            title: String::new(),
            description: String::new(),
            base_url: "/".into(),
            generate_feeds: false,
            feed_filename: "atom.xml".into(),
            extra: ExtraConfig::default(),
            build: BuildConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl SiteConfig {
    pub const TITLE: FieldPath = FieldPath::new("title");
    pub const DESCRIPTION: FieldPath = FieldPath::new("description");
    pub const BASE_URL: FieldPath = FieldPath::new("base_url");
    pub const FEED_FILENAME: FieldPath = FieldPath::new("feed_filename");

    /// Load configuration for a CLI invocation.
    ///
    /// Searches upward from cwd for the config file; the project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let config_path = find_config_file(&cwd, &cli.config)
            .ok_or_else(|| ConfigError::NotFound(cli.config.clone()))?;

        let mut config = Self::from_path(&config_path)?;
        config.finalize(config_path);
        config.validate()?;
        Ok(config)
    }

    /// Set paths derived from the config file location.
    fn finalize(&mut self, config_path: PathBuf) {
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        self.build.normalize(&root);
        self.root = root;
        self.config_path = config_path;
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Collect every problem with the configuration into diagnostics.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        // Empty site fields only leave tags empty
        if self.title.trim().is_empty() {
            diag.warn(Self::TITLE, "empty; og:title will start with the separator");
        }
        if self.description.trim().is_empty() {
            diag.warn(Self::DESCRIPTION, "empty; description fallbacks will be blank");
        }

        if let Err(reason) = util::check_base_url(&self.base_url) {
            diag.error_with_hint(
                Self::BASE_URL,
                reason,
                "use \"/\" or a full URL like https://example.com",
            );
        }

        if self.generate_feeds && self.feed_filename.trim().is_empty() {
            diag.error(
                Self::FEED_FILENAME,
                "generate_feeds is enabled but feed_filename is empty",
            );
        }

        self.extra.validate(&mut diag);
        self.render.validate(&mut diag);
        diag
    }

    /// Validate configuration, printing warnings and failing on errors.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required site fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
