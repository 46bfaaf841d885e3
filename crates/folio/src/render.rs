//! Markdown body rendering.

use pulldown_cmark::{html, Options, Parser};

/// Render a document body to an HTML fragment.
///
/// Tables, strikethrough, task lists and footnotes are enabled. Inline HTML
/// passes through untouched.
#[must_use]
pub fn render_markdown(body: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(body, options);
    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
