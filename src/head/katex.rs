//! KaTeX stylesheet, scripts and auto-render setup.

use serde_json::json;
use std::sync::LazyLock;

use super::resolve::present;
use super::tag::Tag;
use crate::asset::{AssetOptions, AssetResolver, join_url};
use crate::config::SiteConfig;

const STYLESHEET: &str = "katex.min.css";
const SCRIPT: &str = "katex.min.js";
const AUTO_RENDER: &str = "contrib/auto-render.min.js";

/// Directory under the static dir holding a local KaTeX copy.
const LOCAL_DIR: &str = "katex";

/// `$$` must come before `$` or display math is parsed as two inline spans.
static AUTO_RENDER_SETUP: LazyLock<String> = LazyLock::new(|| {
    let options = json!({
        "delimiters": [
            { "left": "$$", "right": "$$", "display": true },
            { "left": "\\[", "right": "\\]", "display": true },
            { "left": "$", "right": "$", "display": false },
            { "left": "\\(", "right": "\\)", "display": false },
        ]
    });
    format!(
        "document.addEventListener(\"DOMContentLoaded\", function () {{ renderMathInElement(document.body, {options}); }});"
    )
});

fn local_path(file: &str) -> String {
    format!("{LOCAL_DIR}/{file}")
}

/// Paths of a local KaTeX copy, relative to the static dir.
pub fn local_assets() -> impl Iterator<Item = String> {
    [STYLESHEET, SCRIPT, AUTO_RENDER].into_iter().map(local_path)
}

fn url(file: &str, config: &SiteConfig, assets: &dyn AssetResolver) -> String {
    match present(&config.extra.katex_base) {
        Some(base) => join_url(base, file),
        None => assets.resolve(&local_path(file), AssetOptions::CACHEBUST),
    }
}

/// KaTeX tags, empty unless `extra.enable_katex` is set.
pub fn tags(config: &SiteConfig, assets: &dyn AssetResolver) -> Vec<Tag> {
    if !config.extra.enable_katex {
        return Vec::new();
    }

    vec![
        Tag::stylesheet(url(STYLESHEET, config, assets)),
        Tag::Script {
            src: url(SCRIPT, config, assets),
            defer: true,
        },
        Tag::Script {
            src: url(AUTO_RENDER, config, assets),
            defer: true,
        },
        Tag::InlineScript(AUTO_RENDER_SETUP.clone()),
    ]
}
