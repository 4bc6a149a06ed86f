use super::*;

#[test]
fn headings_and_lists_render() {
    let html = render_markdown_html("## Week 1\n\n- Review optics\n- Practice limits");
    assert!(html.contains("<h2>Week 1</h2>"));
    assert!(html.contains("<li>Review optics</li>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("Plan\n\n<script>alert(1)</script>\n\nText <b>bold</b>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>"));
    assert!(html.contains("Plan"));
}

#[test]
fn tables_are_enabled() {
    let html = render_markdown_html("| Day | Topic |\n| --- | --- |\n| Mon | Optics |");
    assert!(html.contains("<table>"));
}
