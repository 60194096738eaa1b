//! Fallback chains for the text-valued tags.
//!
//! Optional fields that are blank count as absent, so a chain falls through
//! to the next candidate instead of emitting an empty value.

use super::context::{RenderContext, Subject};
use super::tag::Markup;
use crate::config::{RenderConfig, SiteConfig};
use crate::utils::html::{strip_tags, truncate};

/// Joins the site title and the page part of `og:title`. Emitted verbatim.
pub const TITLE_SEPARATOR: &str = " -&nbsp;";

pub const CATEGORIES: &str = "categories";
pub const TAGS: &str = "tags";

/// Non-blank value of an optional field.
pub(super) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Plain text of an optional markup field, absent if nothing is left.
fn stripped(value: &Option<String>) -> Option<String> {
    present(value).map(strip_tags).filter(|s| !s.is_empty())
}

fn cut(text: &str, limit: usize, render: &RenderConfig) -> String {
    truncate(text, limit, render.truncate, &render.ellipsis).into_owned()
}

/// `<site title> -&nbsp;<page or section title>`, with the site
/// description standing in when there is no title.
pub fn title(ctx: &RenderContext<'_>, config: &SiteConfig) -> Markup {
    let own = match ctx.subject {
        Subject::Page(page) => stripped(&page.title),
        Subject::Section(section) => stripped(&section.title),
        Subject::None => None,
    };

    let mut title = Markup::text(&config.title);
    title.push_raw(TITLE_SEPARATOR);
    title.push_text(own.as_deref().unwrap_or(&config.description));
    title
}

/// Page summary (plain, cut to `summary_limit`), then the item's own
/// description, then the site description.
pub fn description(ctx: &RenderContext<'_>, config: &SiteConfig) -> Markup {
    let own = match ctx.subject {
        Subject::Page(page) => stripped(&page.summary)
            .map(|summary| cut(&summary, config.render.summary_limit, &config.render))
            .or_else(|| present(&page.description).map(str::to_owned)),
        Subject::Section(section) => present(&section.description).map(str::to_owned),
        Subject::None => None,
    };

    Markup::text(own.as_deref().unwrap_or(&config.description))
}

/// Item author (page authors plain and cut to `author_limit`), then the
/// site author. Empty when neither is set.
pub fn author(ctx: &RenderContext<'_>, config: &SiteConfig) -> Markup {
    let own = match ctx.subject {
        Subject::Page(page) => stripped(&page.author)
            .map(|author| cut(&author, config.render.author_limit, &config.render)),
        Subject::Section(section) => present(&section.author).map(str::to_owned),
        Subject::None => None,
    };

    let site = present(&config.extra.author).unwrap_or_default();
    Markup::text(own.as_deref().unwrap_or(site))
}

/// Every category followed by `,`, then the tags joined by `,`.
///
/// `None` unless a page with at least one category or tag is bound.
pub fn keywords(ctx: &RenderContext<'_>) -> Option<Markup> {
    let Subject::Page(page) = ctx.subject else {
        return None;
    };

    let categories = page.terms(CATEGORIES);
    let tags = page.terms(TAGS);
    if categories.is_empty() && tags.is_empty() {
        return None;
    }

    let mut keywords = Markup::new();
    for category in categories {
        keywords.push_text(category);
        keywords.push_raw(",");
    }
    keywords.push_text(&tags.join(","));
    Some(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::{Page, Section};

    fn site() -> SiteConfig {
        let mut config = test_parse_config("[extra]\nauthor = \"Site Author\"");
        config.title = "Blog".into();
        config.description = "A blog".into();
        config
    }

    fn page_with_terms(categories: &[&str], tags: &[&str]) -> Page {
        let mut page = Page::default();
        let to_vec = |terms: &[&str]| terms.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        if !categories.is_empty() {
            page.taxonomies.insert(CATEGORIES.into(), to_vec(categories));
        }
        if !tags.is_empty() {
            page.taxonomies.insert(TAGS.into(), to_vec(tags));
        }
        page
    }

    #[test]
    fn test_title_without_subject() {
        let config = site();
        assert_eq!(
            title(&RenderContext::site(), &config).as_str(),
            "Blog -&nbsp;A blog"
        );
    }

    #[test]
    fn test_title_strips_page_markup() {
        let config = site();
        let page = Page {
            title: Some("Hello <em>world</em> &amp; more".into()),
            ..Default::default()
        };
        assert_eq!(
            title(&RenderContext::page(&page), &config).as_str(),
            "Blog -&nbsp;Hello world &amp; more"
        );
    }

    #[test]
    fn test_title_strips_section_markup() {
        let config = site();
        let section = Section {
            title: Some("<em>Archive</em> &amp; more".into()),
            ..Default::default()
        };
        assert_eq!(
            title(&RenderContext::section(&section), &config).as_str(),
            "Blog -&nbsp;Archive &amp; more"
        );
    }

    #[test]
    fn test_title_blank_falls_back() {
        let config = site();
        let section = Section {
            title: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(
            title(&RenderContext::section(&section), &config).as_str(),
            "Blog -&nbsp;A blog"
        );

        // Markup only, nothing left after stripping
        let page = Page {
            title: Some("<br>".into()),
            ..Default::default()
        };
        assert_eq!(
            title(&RenderContext::page(&page), &config).as_str(),
            "Blog -&nbsp;A blog"
        );
    }

    #[test]
    fn test_description_page_chain() {
        let config = site();
        let mut page = Page {
            summary: Some("<p>Summary</p>".into()),
            description: Some("Desc".into()),
            ..Default::default()
        };
        assert_eq!(
            description(&RenderContext::page(&page), &config).as_str(),
            "Summary"
        );

        page.summary = None;
        assert_eq!(
            description(&RenderContext::page(&page), &config).as_str(),
            "Desc"
        );

        page.description = None;
        assert_eq!(
            description(&RenderContext::page(&page), &config).as_str(),
            "A blog"
        );
    }

    #[test]
    fn test_description_summary_is_cut() {
        let config = site();
        let page = Page {
            summary: Some("x".repeat(250)),
            ..Default::default()
        };
        let desc = description(&RenderContext::page(&page), &config);
        assert_eq!(desc.as_str(), format!("{}…", "x".repeat(200)));
        assert_eq!(desc.as_str().chars().count(), 201);
    }

    #[test]
    fn test_description_section_ignores_summary_rules() {
        let config = site();
        let section = Section {
            description: Some("d".repeat(300)),
            ..Default::default()
        };
        let desc = description(&RenderContext::section(&section), &config);
        assert_eq!(desc.as_str().len(), 300);

        let section = Section::default();
        assert_eq!(
            description(&RenderContext::section(&section), &config).as_str(),
            "A blog"
        );
    }

    #[test]
    fn test_author_chain() {
        let config = site();
        assert_eq!(
            author(&RenderContext::site(), &config).as_str(),
            "Site Author"
        );

        let page = Page {
            author: Some("<a href=\"/me\">Me</a>".into()),
            ..Default::default()
        };
        assert_eq!(author(&RenderContext::page(&page), &config).as_str(), "Me");

        let long = Page {
            author: Some("a".repeat(150)),
            ..Default::default()
        };
        let cut = author(&RenderContext::page(&long), &config);
        assert_eq!(cut.as_str().chars().count(), 101);

        let section = Section {
            author: Some("Editors".into()),
            ..Default::default()
        };
        assert_eq!(
            author(&RenderContext::section(&section), &config).as_str(),
            "Editors"
        );
    }

    #[test]
    fn test_author_empty_when_unset() {
        let config = test_parse_config("");
        assert!(author(&RenderContext::site(), &config).is_empty());
    }

    #[test]
    fn test_keywords() {
        let page = page_with_terms(&["a", "b"], &["x", "y"]);
        assert_eq!(
            keywords(&RenderContext::page(&page)).unwrap().as_str(),
            "a,b,x,y"
        );

        let page = page_with_terms(&["a", "b"], &[]);
        assert_eq!(keywords(&RenderContext::page(&page)).unwrap().as_str(), "a,b,");

        let page = page_with_terms(&[], &["x"]);
        assert_eq!(keywords(&RenderContext::page(&page)).unwrap().as_str(), "x");
    }

    #[test]
    fn test_keywords_absent() {
        let page = page_with_terms(&[], &[]);
        assert!(keywords(&RenderContext::page(&page)).is_none());
        assert!(keywords(&RenderContext::site()).is_none());
        assert!(keywords(&RenderContext::section(&Section::default())).is_none());
    }
}
