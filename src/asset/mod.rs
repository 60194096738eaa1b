//! Asset URL resolution.
//!
//! The head composer never builds asset URLs itself; it asks an
//! [`AssetResolver`] for them. [`SiteAssetResolver`] is the resolver used by
//! the CLI: it prefixes `base_url` and fingerprints static files for cache
//! busting.

mod site;
pub mod version;

pub use site::SiteAssetResolver;

/// Options for a single asset lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetOptions {
    /// Append a content fingerprint query (`?h=...`).
    pub cachebust: bool,
    /// Make sure the URL ends with `/`.
    pub trailing_slash: bool,
}

impl AssetOptions {
    /// Plain lookup: no fingerprint, no trailing slash.
    pub const PLAIN: Self = Self {
        cachebust: false,
        trailing_slash: false,
    };

    /// Lookup with a content fingerprint.
    pub const CACHEBUST: Self = Self {
        cachebust: true,
        trailing_slash: false,
    };
}

/// Maps a logical asset path to its public URL.
pub trait AssetResolver {
    fn resolve(&self, path: &str, options: AssetOptions) -> String;
}

/// Whether `path` already is a full URL that must not be prefixed.
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
