use super::*;

#[test]
fn renders_emphasis_and_links() {
    let html = render_markdown_html("A *short* note on [Vim](https://www.vim.org).");
    assert!(html.contains("<em>short</em>"));
    assert!(html.contains(r#"<a href="https://www.vim.org">Vim</a>"#));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
