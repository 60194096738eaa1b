//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Check that `base_url` is usable as a URL prefix.
///
/// Accepts a root-relative prefix (`/`, `/blog`) or an absolute http(s) URL
/// with a host. Returns the reason on failure.
pub fn check_base_url(base_url: &str) -> Result<(), String> {
    if base_url.starts_with('/') && !base_url.starts_with("//") {
        return Ok(());
    }

    let parsed = url::Url::parse(base_url).map_err(|e| format!("invalid URL: {e}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(format!(
            "scheme '{}' not supported, must be http or https",
            parsed.scheme()
        ));
    }
    if parsed.host_str().is_none() {
        return Err("URL must have a valid host".into());
    }
    Ok(())
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is if it exists.
///
/// ```text
/// /home/user/blog/content/posts/  ← start
/// /home/user/blog/config.toml     ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================
