// src/domain/article.rs
use serde::{Deserialize, Deserializer, Serialize};

/// An article as returned by the content API.
///
/// The list endpoint sends `tag_list` as an array and `tags` as a joined string, the
/// detail endpoint sends `tag_list` as a joined string. Both shapes end up in `tag_list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "RawArticle")]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub body_markdown: String,
    pub cover_image: Option<String>,
    pub readable_publish_date: String,
    pub url: String,
    pub tag_list: Vec<String>,
    pub user: Author,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub profile_image: String,
}

impl Article {
    /// Tags joined for compact display, e.g. `go, backend`
    pub fn joined_tags(&self) -> String {
        self.tag_list.join(", ")
    }
}

/// Either wire shape of a tag list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    Joined(String),
    Many(Vec<String>),
}

impl TagList {
    pub fn normalize(self) -> Vec<String> {
        match self {
            TagList::Joined(joined) => normalize_tag_list(&joined),
            TagList::Many(tags) => tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }
}

/// Split a comma-joined tag string into trimmed, non-empty tags.
///
/// ```
/// use articleview::domain::article::normalize_tag_list;
///
/// assert_eq!(normalize_tag_list("a, b,c"), vec!["a", "b", "c"]);
/// ```
pub fn normalize_tag_list(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
struct RawArticle {
    id: u64,
    #[serde(default, deserialize_with = "nullable_string")]
    title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    description: String,
    #[serde(default, deserialize_with = "nullable_string")]
    body_markdown: String,
    #[serde(default)]
    cover_image: Option<String>,
    #[serde(default, deserialize_with = "nullable_string")]
    readable_publish_date: String,
    #[serde(default, deserialize_with = "nullable_string")]
    url: String,
    #[serde(default)]
    tag_list: Option<TagList>,
    #[serde(default)]
    tags: Option<TagList>,
    #[serde(default)]
    user: Option<Author>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        let tag_list = raw
            .tag_list
            .or(raw.tags)
            .map(TagList::normalize)
            .unwrap_or_default();

        Article {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            body_markdown: raw.body_markdown,
            cover_image: raw.cover_image.filter(|c| !c.trim().is_empty()),
            readable_publish_date: raw.readable_publish_date,
            url: raw.url,
            tag_list,
            user: raw.user.unwrap_or_default(),
        }
    }
}
