//! `check` command: validate configuration and the assets it references.
//!
//! Configuration errors already fail while loading; this command adds a
//! look at the static directory so a missing stylesheet or favicon shows up
//! before a head links to it.

use anyhow::Result;
use std::path::PathBuf;

use crate::asset::{SiteAssetResolver, is_external};
use crate::config::{BuildConfig, ExtraConfig, FieldPath, SiteConfig};
use crate::head::{STYLESHEET, color_stylesheet, katex_assets};
use crate::log;
use crate::utils::plural_count;

/// An asset the head links to but the static dir doesn't have.
#[derive(Debug)]
pub struct MissingAsset {
    pub field: FieldPath,
    pub path: PathBuf,
}

/// Execute check command
pub fn run_check(config: &SiteConfig) -> Result<()> {
    if !config.build.content.is_dir() {
        log!(
            "warning"; "{}: directory {} does not exist",
            BuildConfig::CONTENT,
            config.root_relative(&config.build.content).display()
        );
    }

    let missing = missing_assets(config);
    for asset in &missing {
        log!(
            "warning"; "{}: {} not found",
            asset.field,
            config.root_relative(&asset.path).display()
        );
    }

    if missing.is_empty() {
        log!("check"; "config ok");
    } else {
        log!("check"; "config ok, {} missing", plural_count(missing.len(), "asset"));
    }
    Ok(())
}

/// Local assets referenced by the head that are absent on disk.
pub fn missing_assets(config: &SiteConfig) -> Vec<MissingAsset> {
    let resolver = SiteAssetResolver::from_config(config);
    let extra = &config.extra;

    let mut referenced: Vec<(FieldPath, String)> = vec![
        (BuildConfig::STATIC, STYLESHEET.to_string()),
        (ExtraConfig::THEME_COLOR, color_stylesheet(extra.theme_color())),
    ];
    referenced.extend(extra.asset_paths().map(|(field, path)| (field, path.to_string())));
    if extra.enable_katex && extra.katex_base.is_none() {
        referenced.extend(katex_assets().map(|path| (ExtraConfig::KATEX_BASE, path)));
    }

    referenced
        .into_iter()
        .filter(|(_, path)| !is_external(path))
        .map(|(field, path)| MissingAsset {
            field,
            path: resolver.source_path(&path),
        })
        .filter(|asset| !asset.path.is_file())
        .collect()
}
