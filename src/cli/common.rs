//! Common utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use jwalk::WalkDir;

use crate::asset::AssetResolver;
use crate::config::SiteConfig;
use crate::content::ContentFile;
use crate::debug;
use crate::head::{self, HeadTags, RenderContext};

const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Markdown files under `dir`, sorted for stable output.
pub fn collect_content_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
        .collect();
    files.sort();
    files
}

/// Compose the head of a loaded content file.
///
/// `og:url` is `url` when given, otherwise the file's permalink. It is left
/// out when neither exists.
pub fn compose_file(
    file: &ContentFile,
    content_dir: &Path,
    config: &SiteConfig,
    assets: &dyn AssetResolver,
    url: Option<&str>,
) -> HeadTags {
    let permalink = file.permalink(&config.base_url, content_dir);
    if url.is_none() && permalink.is_none() {
        debug!("render"; "{} is outside {}, no og:url", file.path.display(), content_dir.display());
    }

    let mut ctx = RenderContext::from(&file.content);
    ctx.current_url = url.or(permalink.as_deref());
    head::compose(&ctx, config, assets)
}

/// Absolute form of a user-supplied path, relative to cwd.
pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
