//! MIME types for the `type` attribute of emitted `<link>` tags.

use std::path::Path;

/// MIME type constants.
pub mod types {
    pub const RSS: &str = "application/rss+xml";
    pub const ATOM: &str = "application/atom+xml";

    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
}

/// Lowercased extension of `path`, if any.
fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

/// Get MIME type for favicon/icon files.
///
/// Defaults to `image/x-icon` for unknown types, which is appropriate for favicons.
pub fn for_icon(path: &Path) -> &'static str {
    match extension(path).as_deref() {
        Some("png") => types::PNG,
        Some("svg") => types::SVG,
        Some("avif") => types::AVIF,
        Some("webp") => types::WEBP,
        Some("gif") => types::GIF,
        Some("jpg" | "jpeg") => types::JPEG,
        _ => types::ICO,
    }
}

/// Get MIME type for a feed file.
///
/// `rss.xml` and `*.rss` are RSS; everything else is treated as Atom.
pub fn for_feed(path: &Path) -> &'static str {
    let is_rss = extension(path).as_deref() == Some("rss")
        || path
            .file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|s| s.eq_ignore_ascii_case("rss"));
    if is_rss { types::RSS } else { types::ATOM }
}
