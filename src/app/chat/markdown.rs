use pulldown_cmark::{html, Event, Options, Parser};

/// Render assistant markdown to HTML for the reply bubble.
///
/// Raw HTML in model output is dropped before rendering.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_becomes_paragraph() {
        assert_eq!(render_markdown("Hello"), "<p>Hello</p>\n");
    }

    #[test]
    fn test_emphasis_and_lists() {
        let html = render_markdown("**SQL** skills:\n\n- MySQL\n- Python");
        assert!(html.contains("<strong>SQL</strong>"));
        assert!(html.contains("<li>MySQL</li>"));
    }

    #[test]
    fn test_raw_html_is_dropped() {
        let html = render_markdown("hi <script>alert(1)</script> there");
        assert!(!html.contains("<script>"));
        assert!(html.contains("hi"));
    }

    #[test]
    fn test_text_is_escaped() {
        assert!(render_markdown("1 < 2 & 3").contains("1 &lt; 2 &amp; 3"));
    }
}
