// src/util/testing.rs

use anyhow::Result;
use std::collections::HashMap;
use std::env;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::api::{ArticleApi, ArticleQuery, FetchOutcome};
use crate::domain::{Article, Tag};

/// In-memory stand-in for the content API
///
/// Articles registered per tag answer filtered list requests, all articles answer
/// unfiltered ones. Every list query is recorded for later inspection.
///
/// # Examples
///
/// ```
/// use articleview::util::testing::{fixtures, MockArticleApi};
///
/// let api = MockArticleApi::builder()
///     .with_tag(fixtures::tag(1, "go"))
///     .with_tag_articles("go", vec![fixtures::article(42, "Go Basics", "go,backend")])
///     .build();
/// ```
#[derive(Debug)]
pub struct MockArticleApi {
    articles: HashMap<u64, Article>,
    tag_articles: HashMap<String, Vec<Article>>,
    tags: Vec<Tag>,
    failure: Option<String>,
    delay: Option<Duration>,
    requested: Mutex<Vec<ArticleQuery>>,
}

impl MockArticleApi {
    pub fn builder() -> MockArticleApiBuilder {
        MockArticleApiBuilder::new()
    }

    /// List queries received so far, oldest first
    pub fn requested_queries(&self) -> Vec<ArticleQuery> {
        self.requested
            .lock()
            .map(|queries| queries.clone())
            .unwrap_or_default()
    }

    async fn pause(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn page_of(&self, query: &ArticleQuery) -> Vec<Article> {
        let mut source: Vec<Article> = match query.tag.as_deref().filter(|t| !t.is_empty()) {
            Some(tag) => self.tag_articles.get(tag).cloned().unwrap_or_default(),
            None => self.articles.values().cloned().collect(),
        };
        source.sort_by_key(|a| a.id);

        let per_page = query.per_page.unwrap_or(30) as usize;
        let page = query.page.unwrap_or(1).max(1) as usize;
        source
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect()
    }
}

impl ArticleApi for MockArticleApi {
    async fn list_articles(&self, query: &ArticleQuery) -> FetchOutcome<Vec<Article>> {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(query.clone());
        }
        self.pause().await;

        match &self.failure {
            Some(reason) => FetchOutcome::Failed(reason.clone()),
            None => FetchOutcome::from_items(self.page_of(query)),
        }
    }

    async fn get_article(&self, id: u64) -> FetchOutcome<Article> {
        self.pause().await;

        if let Some(reason) = &self.failure {
            return FetchOutcome::Failed(reason.clone());
        }
        self.articles
            .get(&id)
            .cloned()
            .map(FetchOutcome::Loaded)
            .unwrap_or(FetchOutcome::Empty)
    }

    async fn list_tags(&self) -> FetchOutcome<Vec<Tag>> {
        self.pause().await;

        match &self.failure {
            Some(reason) => FetchOutcome::Failed(reason.clone()),
            None => FetchOutcome::from_items(self.tags.clone()),
        }
    }
}

/// Builder for MockArticleApi
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockArticleApiBuilder {
    articles: HashMap<u64, Article>,
    tag_articles: HashMap<String, Vec<Article>>,
    tags: Vec<Tag>,
    failure: Option<String>,
    delay: Option<Duration>,
}

impl MockArticleApiBuilder {
    pub fn new() -> Self {
        Self {
            articles: HashMap::new(),
            tag_articles: HashMap::new(),
            tags: vec![],
            failure: None,
            delay: None,
        }
    }

    /// Add an article that can be retrieved by id and appears in unfiltered lists
    pub fn with_article(mut self, article: Article) -> Self {
        self.articles.insert(article.id, article);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Configure the articles returned for a tag filter; they are also retrievable by id
    pub fn with_tag_articles(mut self, tag: &str, articles: Vec<Article>) -> Self {
        for article in &articles {
            self.articles.insert(article.id, article.clone());
        }
        self.tag_articles.insert(tag.to_string(), articles);
        self
    }

    /// Make every call fail with `reason`
    pub fn failing(mut self, reason: &str) -> Self {
        self.failure = Some(reason.to_string());
        self
    }

    /// Delay every response
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn build(self) -> MockArticleApi {
        MockArticleApi {
            articles: self.articles,
            tag_articles: self.tag_articles,
            tags: self.tags,
            failure: self.failure,
            delay: self.delay,
            requested: Mutex::new(Vec::new()),
        }
    }
}

impl Default for MockArticleApiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Small constructors for domain values used across tests
pub mod fixtures {
    use crate::domain::article::normalize_tag_list;
    use crate::domain::{Article, Author, Tag};

    pub fn article(id: u64, title: &str, tags: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            description: format!("About {}", title),
            body_markdown: format!("# {}\n\nSome **content**.", title),
            cover_image: None,
            readable_publish_date: "Oct 3".to_string(),
            url: format!("https://dev.to/ann/{}", id),
            tag_list: normalize_tag_list(tags),
            user: Author {
                name: "Ann Example".to_string(),
                username: "ann".to_string(),
                profile_image: "https://img.example/ann.png".to_string(),
            },
        }
    }

    pub fn tag(id: u64, name: &str) -> Tag {
        Tag {
            id,
            name: name.to_string(),
            bg_color_hex: Some("#000000".to_string()),
            text_color_hex: Some("#ffffff".to_string()),
        }
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[ctor::ctor]
    fn init() {
        init_test_setup().expect("Failed to initialize test setup");
    }

    #[tokio::test]
    async fn given_article_added_when_getting_article_then_returns_it() {
        let api = MockArticleApi::builder()
            .with_article(fixtures::article(42, "Go Basics", "go"))
            .build();

        let result = api.get_article(42).await;

        assert_eq!(result.data().map(|a| a.title), Some("Go Basics".to_string()));
    }

    #[tokio::test]
    async fn given_no_article_when_getting_article_then_returns_empty() {
        let api = MockArticleApi::builder().build();

        assert_eq!(api.get_article(999).await, FetchOutcome::Empty);
    }

    #[tokio::test]
    async fn given_seven_articles_when_listing_second_page_of_five_then_returns_two() {
        let mut builder = MockArticleApi::builder();
        for id in 1..=7 {
            builder = builder.with_article(fixtures::article(id, "T", "x"));
        }
        let api = builder.build();
        let query = ArticleQuery {
            page: Some(2),
            per_page: Some(5),
            ..ArticleQuery::default()
        };

        let page = api.list_articles(&query).await.into_items();

        assert_eq!(page.iter().map(|a| a.id).collect::<Vec<_>>(), vec![6, 7]);
        assert_eq!(api.requested_queries(), vec![query]);
    }

    #[tokio::test]
    async fn given_failing_mock_when_listing_tags_then_returns_failed() {
        let api = MockArticleApi::builder().failing("offline").build();

        assert_eq!(
            api.list_tags().await,
            FetchOutcome::Failed("offline".to_string())
        );
    }
}
