//! Inline Markdown
//!
//! Recipe text fields may use emphasis, code spans and links. Raw HTML in the
//! catalog is shown as text, never injected.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Render `text` to HTML without the outer `<p>` wrapper
pub fn render_inline(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(escape_raw_html);
    let mut html = String::new();
    push_html(&mut html, parser);

    let trimmed = html.trim();
    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .unwrap_or(trimmed)
        .to_string()
}

fn escape_raw_html(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(render_inline("Fill the jar halfway."), "Fill the jar halfway.");
    }

    #[test]
    fn test_emphasis_rendered() {
        assert_eq!(
            render_inline("Each liquid has a different *density*."),
            "Each liquid has a different <em>density</em>."
        );
    }

    #[test]
    fn test_raw_html_escaped() {
        assert_eq!(render_inline("a <b>bold</b> claim"), "a &lt;b&gt;bold&lt;/b&gt; claim");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_inline(""), "");
    }
}
