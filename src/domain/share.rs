// src/domain/share.rs
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use url::Url;

/// Characters left alone by JavaScript's `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Derive a URL-friendly slug from an article title.
///
/// Lower-cases, turns every space into `-` and percent-encodes the rest. Different titles
/// may collide; the slug only feeds share links, the article id stays authoritative.
pub fn slugify(title: &str) -> String {
    let dashed = title.to_lowercase().replace(' ', "-");
    utf8_percent_encode(&dashed, URI_COMPONENT).to_string()
}

/// Public link of an article under the configured site base URL
pub fn canonical_url(site_base_url: &str, title: &str) -> String {
    format!(
        "{}/article/{}",
        site_base_url.trim_end_matches('/'),
        slugify(title)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShareProvider {
    Facebook,
    Twitter,
    LinkedIn,
    WhatsApp,
}

impl ShareProvider {
    pub const ALL: [ShareProvider; 4] = [
        ShareProvider::Facebook,
        ShareProvider::Twitter,
        ShareProvider::LinkedIn,
        ShareProvider::WhatsApp,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShareProvider::Facebook => "Facebook",
            ShareProvider::Twitter => "Twitter",
            ShareProvider::LinkedIn => "LinkedIn",
            ShareProvider::WhatsApp => "WhatsApp",
        }
    }

    fn endpoint(self) -> &'static str {
        match self {
            ShareProvider::Facebook => "https://www.facebook.com/sharer/sharer.php",
            ShareProvider::Twitter => "https://twitter.com/intent/tweet",
            ShareProvider::LinkedIn => "https://linkedin.com/shareArticle",
            ShareProvider::WhatsApp => "https://api.whatsapp.com/send",
        }
    }

    /// Share URL for `url` titled `title`; only LinkedIn takes the summary.
    pub fn share_url(self, url: &str, title: &str, summary: &str) -> String {
        let whatsapp_text;
        let params: Vec<(&str, &str)> = match self {
            ShareProvider::Facebook => vec![("u", url)],
            ShareProvider::Twitter => vec![("url", url), ("text", title)],
            ShareProvider::LinkedIn => vec![
                ("url", url),
                ("mini", "true"),
                ("title", title),
                ("summary", summary),
            ],
            ShareProvider::WhatsApp => {
                whatsapp_text = format!("{} {}", title, url);
                vec![("text", whatsapp_text.as_str())]
            }
        };

        match Url::parse_with_params(self.endpoint(), &params) {
            Ok(share) => share.to_string(),
            Err(_) => self.endpoint().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    pub provider: ShareProvider,
    pub href: String,
}

/// One share link per provider, all pointing at the same canonical URL
pub fn share_links(canonical_url: &str, title: &str, description: &str) -> Vec<ShareLink> {
    ShareProvider::ALL
        .iter()
        .map(|provider| ShareLink {
            provider: *provider,
            href: provider.share_url(canonical_url, title, description),
        })
        .collect()
}
