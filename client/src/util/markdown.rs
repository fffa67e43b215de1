//! Markdown rendering for author-written blog summaries.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render `markdown` to HTML, dropping any raw HTML in the source.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
