//! `[build]` section: where content, static assets and composed output live.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::FieldPath;

/// Directory layout, relative to the site root until `normalize` runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Markdown content directory.
    pub content: PathBuf,
    /// Static asset directory, used for cache-busting fingerprints.
    #[serde(rename = "static")]
    pub static_dir: PathBuf,
    /// Where `batch` writes composed head fragments.
    pub output: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            static_dir: "static".into(),
            output: "public".into(),
        }
    }
}

impl BuildConfig {
    pub const CONTENT: FieldPath = FieldPath::new("build.content");
    pub const STATIC: FieldPath = FieldPath::new("build.static");

    /// Resolve all directories against `root`.
    pub fn normalize(&mut self, root: &Path) {
        for dir in [&mut self.content, &mut self.static_dir, &mut self.output] {
            if dir.is_relative() {
                *dir = root.join(&*dir);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.content, PathBuf::from("content"));
        assert_eq!(config.build.static_dir, PathBuf::from("static"));
        assert_eq!(config.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_static_key_is_renamed() {
        let config = test_parse_config("[build]\nstatic = \"assets\"");
        assert_eq!(config.build.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_normalize_keeps_absolute() {
        let mut config = test_parse_config("[build]\noutput = \"/tmp/out\"");
        config.build.normalize(Path::new("/site"));
        assert_eq!(config.build.content, PathBuf::from("/site/content"));
        assert_eq!(config.build.output, PathBuf::from("/tmp/out"));
    }
}
