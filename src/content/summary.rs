//! Summary derivation from the Markdown body.

use pulldown_cmark::{Options, Parser, html};

/// Marker separating the summary from the rest of a post.
pub const MORE_MARKER: &str = "<!-- more -->";

/// Render the Markdown before `<!-- more -->` to HTML.
///
/// Returns `None` when the body has no marker or nothing before it.
pub fn derive(body: &str) -> Option<String> {
    let (before, _) = body.split_once(MORE_MARKER)?;
    if before.trim().is_empty() {
        return None;
    }

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(before, options);
    let mut out = String::with_capacity(before.len() * 3 / 2);
    html::push_html(&mut out, parser);
    Some(out.trim_end().to_string())
}
