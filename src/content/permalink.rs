//! Permalinks derived from a content file's location.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::asset::join_url;

/// Permalink of a content file under `content_dir`.
///
/// `blog/post.md` → `{base}/blog/post/`, `blog/_index.md` → `{base}/blog/`,
/// `_index.md` → `{base}/`. A `custom` path from front matter wins.
///
/// `None` when there is no custom path and `file` is not inside
/// `content_dir`.
pub fn permalink(
    base_url: &str,
    content_dir: &Path,
    file: &Path,
    custom: Option<&str>,
) -> Option<String> {
    let path = match custom {
        Some(custom) => custom.trim_matches('/').to_string(),
        None => url_path(content_dir, file)?,
    };

    let mut url = join_url(base_url, &path);
    if !url.ends_with('/') {
        url.push('/');
    }
    Some(url)
}

/// Slash-joined URL path of `file` relative to `content_dir`, without extension.
fn url_path(content_dir: &Path, file: &Path) -> Option<String> {
    let file = resolve(file);
    let rel = file.strip_prefix(resolve(content_dir)).ok()?;

    let mut parts: Vec<String> = rel
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if let Some(stem) = rel.file_stem().and_then(|s| s.to_str())
        && !matches!(stem, "_index" | "index")
    {
        parts.push(stem.to_string());
    }

    Some(parts.join("/"))
}

/// Canonical form of `path`, or its lexical normalization if it doesn't exist.
fn resolve(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| normalize(path))
}

/// Drop `.` and apply `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
