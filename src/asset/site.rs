//! Resolver backed by the site's `base_url` and static directory.

use std::path::{Path, PathBuf};

use super::version::VersionCache;
use super::{AssetOptions, AssetResolver, is_external, join_url};
use crate::config::SiteConfig;

/// Resolves asset paths the way the site is deployed:
/// `base_url` + path, with an optional `?h=<fingerprint>` of the file under
/// the static directory.
#[derive(Debug)]
pub struct SiteAssetResolver {
    base_url: String,
    static_dir: PathBuf,
    versions: VersionCache,
}

impl SiteAssetResolver {
    pub fn new(base_url: impl Into<String>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            static_dir: static_dir.into(),
            versions: VersionCache::new(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.base_url.as_str(), config.build.static_dir.as_path())
    }

    /// Location of a logical asset path on disk.
    pub fn source_path(&self, path: &str) -> PathBuf {
        self.static_dir.join(Path::new(path.trim_start_matches('/')))
    }
}

impl AssetResolver for SiteAssetResolver {
    fn resolve(&self, path: &str, options: AssetOptions) -> String {
        if is_external(path) {
            return path.to_string();
        }

        let mut url = join_url(&self.base_url, path);
        if options.trailing_slash && !url.ends_with('/') {
            url.push('/');
        }
        if options.cachebust
            && let Some(version) = self.versions.get(&self.source_path(path))
        {
            url.push_str("?h=");
            url.push_str(&version);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_plain() {
        let resolver = SiteAssetResolver::new("https://example.com/", "static");
        assert_eq!(
            resolver.resolve("img/a.png", AssetOptions::PLAIN),
            "https://example.com/img/a.png"
        );
    }

    #[test]
    fn test_resolve_root_base() {
        let resolver = SiteAssetResolver::new("/", "static");
        assert_eq!(resolver.resolve("/style.css", AssetOptions::PLAIN), "/style.css");
    }

    #[test]
    fn test_resolve_trailing_slash() {
        let resolver = SiteAssetResolver::new("https://example.com", "static");
        let options = AssetOptions {
            trailing_slash: true,
            ..AssetOptions::PLAIN
        };
        assert_eq!(resolver.resolve("blog", options), "https://example.com/blog/");
        assert_eq!(resolver.resolve("blog/", options), "https://example.com/blog/");
    }

    #[test]
    fn test_resolve_external_passthrough() {
        let resolver = SiteAssetResolver::new("https://example.com", "static");
        let url = "https://cdn.example.com/x.css";
        assert_eq!(resolver.resolve(url, AssetOptions::CACHEBUST), url);
    }

    #[test]
    fn test_resolve_cachebust() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("style.css"), "body {}").unwrap();

        let resolver = SiteAssetResolver::new("/", dir.path());
        let url = resolver.resolve("style.css", AssetOptions::CACHEBUST);
        assert!(url.starts_with("/style.css?h="));
        assert_eq!(url.len(), "/style.css?h=".len() + 8);
    }

    #[test]
    fn test_resolve_cachebust_missing_file() {
        let dir = TempDir::new().unwrap();
        let resolver = SiteAssetResolver::new("/", dir.path());
        assert_eq!(resolver.resolve("nope.css", AssetOptions::CACHEBUST), "/nope.css");
    }

    #[test]
    fn test_source_path() {
        let resolver = SiteAssetResolver::new("/", "/site/static");
        assert_eq!(
            resolver.source_path("/color/blue.css"),
            PathBuf::from("/site/static/color/blue.css")
        );
    }
}
