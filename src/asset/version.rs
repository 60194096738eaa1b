//! Content fingerprints for cache busting.
//!
//! When a static file changes, its fingerprint changes, and so does every
//! `?h=` URL pointing at it.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::debug;
use crate::utils::hash;

/// Compute the fingerprint of a file's content (8 hex chars).
pub fn compute_version(path: &Path) -> std::io::Result<String> {
    hash::fingerprint_reader(File::open(path)?)
}

/// Memoized fingerprints, safe to share across render threads.
///
/// Missing or unreadable files are remembered as `None` so they are only
/// reported once.
#[derive(Debug, Default)]
pub struct VersionCache {
    versions: Mutex<FxHashMap<PathBuf, Option<String>>>,
}

impl VersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fingerprint of `path`, computed on first request.
    pub fn get(&self, path: &Path) -> Option<String> {
        if let Some(cached) = self.versions.lock().get(path) {
            return cached.clone();
        }

        // Hash outside the lock; a racing thread computes the same value
        let version = match compute_version(path) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!("asset"; "no fingerprint for {}: {}", path.display(), e);
                None
            }
        };
        self.versions
            .lock()
            .insert(path.to_path_buf(), version.clone());
        version
    }

    /// Forget all fingerprints.
    pub fn clear(&self) {
        self.versions.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_compute_version() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("test.css");
        fs::write(&file, "body { color: red; }").unwrap();

        let v1 = compute_version(&file).unwrap();
        assert_eq!(v1.len(), 8);
        assert_eq!(v1, compute_version(&file).unwrap());

        fs::write(&file, "body { color: blue; }").unwrap();
        assert_ne!(v1, compute_version(&file).unwrap());
    }

    #[test]
    fn test_cache_memoizes_until_cleared() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("app.js");
        fs::write(&file, "console.log(1)").unwrap();

        let cache = VersionCache::new();
        let first = cache.get(&file).unwrap();

        // Content change is not seen while memoized
        fs::write(&file, "console.log(2)").unwrap();
        assert_eq!(cache.get(&file).unwrap(), first);

        cache.clear();
        assert_ne!(cache.get(&file).unwrap(), first);
    }

    #[test]
    fn test_missing_file_has_no_version() {
        let dir = TempDir::new().unwrap();
        let cache = VersionCache::new();
        assert!(cache.get(&dir.path().join("missing.css")).is_none());
    }
}
