//! `render` command: print the head of a single content file.

use std::io::{Write, stdout};

use anyhow::{Context, Result};

use super::args::RenderArgs;
use super::common::{absolute, compose_file};
use crate::asset::SiteAssetResolver;
use crate::config::SiteConfig;
use crate::content::ContentFile;
use crate::debug;
use crate::head::HeadTags;

/// Execute render command
pub fn run_render(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let path = absolute(&args.file);
    let file = ContentFile::load(&path)
        .with_context(|| format!("failed to load {}", args.file.display()))?;
    debug!("render"; "{} as {:?}", config.root_relative(&path).display(), file.kind());

    let resolver = SiteAssetResolver::from_config(config);
    let tags = compose_file(
        &file,
        &config.build.content,
        config,
        &resolver,
        args.url.as_deref(),
    );

    let output = format_tags(&tags, args.json, args.pretty)?;
    let mut out = stdout().lock();
    out.write_all(output.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// One tag per line, or a JSON array of tag strings.
pub fn format_tags(tags: &HeadTags, json: bool, pretty: bool) -> Result<String> {
    if !json {
        return Ok(tags.to_string());
    }
    let mut output = if pretty {
        serde_json::to_string_pretty(tags)?
    } else {
        serde_json::to_string(tags)?
    };
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::head::{Markup, Tag};

    fn tags() -> HeadTags {
        let mut tags = HeadTags::new();
        tags.push(Tag::property("og:title", Markup::text("Blog")));
        tags.push(Tag::stylesheet("/style.css".into()));
        tags
    }

    #[test]
    fn test_format_lines() {
        let output = format_tags(&tags(), false, false).unwrap();
        assert_eq!(
            output,
            "<meta property=\"og:title\" content=\"Blog\">\n<link rel=\"stylesheet\" href=\"/style.css\">\n"
        );
    }

    #[test]
    fn test_format_json() {
        let output = format_tags(&tags(), true, false).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, tags().to_strings());

        let pretty = format_tags(&tags(), true, true).unwrap();
        assert!(pretty.lines().count() > 2);
    }
}
