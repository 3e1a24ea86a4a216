// src/domain/seo.rs
use serde::Serialize;

pub const ROBOTS_DIRECTIVE: &str = "index, follow";
pub const TWITTER_CARD: &str = "summary_large_image";

/// Metadata consumed by crawlers and link previews of an article page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub page_title: String,
    pub description: String,
    pub keywords: String,
    pub robots: &'static str,
    pub url: String,
    pub image: String,
}

impl SeoMeta {
    /// `name`/`property` attribute and content of every meta tag, in document order
    pub fn tags(&self) -> Vec<(&'static str, &'static str, &str)> {
        vec![
            ("name", "description", self.description.as_str()),
            ("name", "keywords", self.keywords.as_str()),
            ("name", "robots", self.robots),
            ("property", "og:type", "article"),
            ("property", "og:title", self.title.as_str()),
            ("property", "og:description", self.description.as_str()),
            ("property", "og:url", self.url.as_str()),
            ("property", "og:image", self.image.as_str()),
            ("name", "twitter:card", TWITTER_CARD),
            ("name", "twitter:title", self.title.as_str()),
            ("name", "twitter:description", self.description.as_str()),
            ("name", "twitter:image", self.image.as_str()),
        ]
    }
}

/// Public identity of the site that links to articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    pub base_url: String,
    pub name: String,
    pub keywords: String,
    pub default_image: String,
}
