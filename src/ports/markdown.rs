// src/ports/markdown.rs
use lazy_static::lazy_static;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use regex::Regex;

lazy_static! {
    static ref SAFE_URL_REGEX: Regex =
        Regex::new(r"(?i)^(?:https?:|mailto:|#|/|\./|\.\./|[^:/?#]+(?:[/?#]|$))")
            .expect("Failed to compile safe url regex");
}

/// Render an article body to HTML.
///
/// Raw HTML inside the markdown is shown as text, and links or images with a
/// non-web scheme (e.g. `javascript:`) are neutralized.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if SAFE_URL_REGEX.is_match(url.trim()) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_markdown_text_when_converting_then_renders_html() {
        let html = markdown_to_html("**bold** and *italic*");

        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn given_code_block_when_converting_then_keeps_language_class() {
        let html = markdown_to_html("```rust\nfn main() {}\n```");

        assert!(html.contains("<pre><code class=\"language-rust\">"));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn given_raw_html_when_converting_then_escapes_it() {
        let html = markdown_to_html("Hello <script>alert(1)</script>");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn given_javascript_link_when_converting_then_neutralizes_target() {
        let html = markdown_to_html("[click](javascript:alert(1))");

        assert!(html.contains(r##"<a href="#">click</a>"##));
    }

    #[test]
    fn given_web_and_relative_links_when_converting_then_keeps_them() {
        let html = markdown_to_html("[a](https://dev.to) [b](/tags) [c](notes.md)");

        assert!(html.contains(r#"href="https://dev.to""#));
        assert!(html.contains(r#"href="/tags""#));
        assert!(html.contains(r#"href="notes.md""#));
    }

    #[test]
    fn given_table_when_converting_then_renders_table() {
        let html = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");

        assert!(html.contains("<table>"));
    }
}
