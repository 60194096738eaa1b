//! `<link>` tags: stylesheets, favicon and feed.

use std::path::Path;

use super::tag::Tag;
use crate::asset::{AssetOptions, AssetResolver};
use crate::config::SiteConfig;
use crate::utils::mime;

/// Base stylesheet, always linked.
pub const STYLESHEET: &str = "style.css";

/// Stylesheet for a theme color.
///
/// The default color maps to `color/orange.css` like any other name.
pub fn color_stylesheet(theme_color: &str) -> String {
    format!("color/{theme_color}.css")
}

/// `style.css`, the theme color stylesheet, then `custom_css` if set.
pub fn stylesheets(config: &SiteConfig, assets: &dyn AssetResolver) -> Vec<Tag> {
    let mut paths = vec![
        STYLESHEET.to_string(),
        color_stylesheet(config.extra.theme_color()),
    ];
    if let Some(custom) = &config.extra.custom_css {
        paths.push(custom.clone());
    }

    paths
        .iter()
        .map(|path| Tag::stylesheet(assets.resolve(path, AssetOptions::CACHEBUST)))
        .collect()
}

pub fn favicon(config: &SiteConfig, assets: &dyn AssetResolver) -> Option<Tag> {
    let icon = config.extra.favicon.as_deref()?;
    Some(Tag::Link {
        rel: "icon",
        href: assets.resolve(icon, AssetOptions::PLAIN),
        mime: Some(mime::for_icon(Path::new(icon))),
        title: None,
    })
}

/// Feed discovery link, titled with the site title.
pub fn feed(config: &SiteConfig, assets: &dyn AssetResolver) -> Option<Tag> {
    if !config.generate_feeds {
        return None;
    }

    let filename = &config.feed_filename;
    Some(Tag::Link {
        rel: "alternate",
        href: assets.resolve(filename, AssetOptions::PLAIN),
        mime: Some(mime::for_feed(Path::new(filename))),
        title: Some(config.title.clone()),
    })
}
