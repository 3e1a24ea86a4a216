// src/domain/tag.rs
use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG_BG: &str = "#e5e7eb";
pub const DEFAULT_TAG_FG: &str = "#374151";

/// A named article category with its display colors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub bg_color_hex: Option<String>,
    #[serde(default)]
    pub text_color_hex: Option<String>,
}

impl Tag {
    pub fn background(&self) -> &str {
        color_or(&self.bg_color_hex, DEFAULT_TAG_BG)
    }

    pub fn foreground(&self) -> &str {
        color_or(&self.text_color_hex, DEFAULT_TAG_FG)
    }
}

// Only plain `#rgb`/`#rrggbb` values reach a style attribute.
fn color_or<'a>(color: &'a Option<String>, fallback: &'a str) -> &'a str {
    match color.as_deref() {
        Some(c) if is_hex_color(c) => c,
        _ => fallback,
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("#1a2b3c"), "#1a2b3c")]
    #[case(Some("#fff"), "#fff")]
    #[case(None, DEFAULT_TAG_BG)]
    #[case(Some("red; background:url(x)"), DEFAULT_TAG_BG)]
    fn given_tag_color_when_resolving_background_then_falls_back_on_invalid(
        #[case] color: Option<&str>,
        #[case] expected: &str,
    ) {
        let tag = Tag {
            id: 1,
            name: "go".to_string(),
            bg_color_hex: color.map(str::to_string),
            text_color_hex: None,
        };
        assert_eq!(tag.background(), expected);
        assert_eq!(tag.foreground(), DEFAULT_TAG_FG);
    }

    #[test]
    fn given_null_colors_when_deserializing_then_parses() {
        let json = r#"[{"id":1,"name":"go","bg_color_hex":null,"text_color_hex":null},{"id":2,"name":"rust"}]"#;
        let tags: Vec<Tag> = serde_json::from_str(json).expect("valid tags");
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].name, "rust");
        assert_eq!(tags[1].bg_color_hex, None);
    }
}
