//! Head tag composer.
//!
//! Turns a [`RenderContext`] and the [`SiteConfig`] into the ordered list of
//! `<meta>`, `<link>` and `<script>` tags for a document's `<head>`.
//!
//! # Output Order
//!
//! | # | Tag              | Emitted                               |
//! |---|------------------|---------------------------------------|
//! | 1 | `og:title`       | always                                |
//! | 2 | `og:description` | always                                |
//! | 3 | `author`         | always, possibly empty                |
//! | 4 | `og:url`         | `current_url` is set                  |
//! | 5 | `og:image`       | `extra.og_preview_img` is set         |
//! | 6 | `keywords`       | page with categories or tags          |
//! | 7 | stylesheets      | always                                |
//! | 8 | favicon          | `extra.favicon` is set                |
//! | 9 | feed link        | `generate_feeds`                      |
//! | 10| KaTeX            | `extra.enable_katex`                  |
//!
//! Composition is pure: the same inputs always yield the same tags, and no
//! combination of inputs is an error.

mod context;
mod katex;
mod links;
mod resolve;
mod tag;

pub use context::RenderContext;
pub use katex::local_assets as katex_assets;
pub use links::{STYLESHEET, color_stylesheet};
pub use tag::{HeadTags, Markup, Tag};

use crate::asset::{AssetOptions, AssetResolver};
use crate::config::SiteConfig;

/// Compose the head tags for one render pass.
pub fn compose(
    ctx: &RenderContext<'_>,
    config: &SiteConfig,
    assets: &dyn AssetResolver,
) -> HeadTags {
    let mut tags = HeadTags::new();

    tags.push(Tag::property("og:title", resolve::title(ctx, config)));
    tags.push(Tag::property("og:description", resolve::description(ctx, config)));
    tags.push(Tag::name("author", resolve::author(ctx, config)));

    if let Some(url) = ctx.current_url {
        tags.push(Tag::property("og:url", Markup::text(url)));
    }
    if let Some(image) = &config.extra.og_preview_img {
        let url = assets.resolve(image, AssetOptions::PLAIN);
        tags.push(Tag::property("og:image", Markup::text(&url)));
    }
    if let Some(keywords) = resolve::keywords(ctx) {
        tags.push(Tag::name("keywords", keywords));
    }

    tags.extend(links::stylesheets(config, assets));
    tags.extend(links::favicon(config, assets));
    tags.extend(links::feed(config, assets));
    tags.extend(katex::tags(config, assets));

    tags
}
