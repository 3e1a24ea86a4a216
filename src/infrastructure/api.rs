// src/infrastructure/api.rs
use crate::application::api::{ArticleApi, ArticleQuery, FetchOutcome};
use crate::domain::{Article, Tag};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// HTTP client of the remote content API.
///
/// Fail-soft: transport errors, error statuses and undecodable bodies are logged and
/// come back as `FetchOutcome::Failed`; a 404 is `FetchOutcome::Empty`.
#[derive(Debug, Clone)]
pub struct HttpArticleApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpArticleApi {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Use a preconfigured client, e.g. one without proxy settings
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> FetchOutcome<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let resp = match self.client.get(&url).query(query).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%url, error = %e, "Content API unavailable");
                return FetchOutcome::Failed(format!("Content API unavailable: {}", e));
            }
        };

        if resp.status() == StatusCode::NOT_FOUND {
            debug!(%url, "Not found");
            return FetchOutcome::Empty;
        }

        if !resp.status().is_success() {
            warn!(%url, status = %resp.status(), "Content API returned error status");
            return FetchOutcome::Failed(format!("Content API returned {}", resp.status()));
        }

        match resp.json::<T>().await {
            Ok(data) => FetchOutcome::Loaded(data),
            Err(e) => {
                warn!(%url, error = %e, "Invalid content API response");
                FetchOutcome::Failed(format!("Invalid content API response: {}", e))
            }
        }
    }
}

impl ArticleApi for HttpArticleApi {
    #[instrument(level = "debug", skip(self))]
    async fn list_articles(&self, query: &ArticleQuery) -> FetchOutcome<Vec<Article>> {
        match self.fetch("/articles", &query.to_pairs()).await {
            FetchOutcome::Loaded(articles) => FetchOutcome::from_items(articles),
            other => other,
        }
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_article(&self, id: u64) -> FetchOutcome<Article> {
        self.fetch(&format!("/articles/{}", id), &[]).await
    }

    #[instrument(level = "debug", skip(self))]
    async fn list_tags(&self) -> FetchOutcome<Vec<Tag>> {
        match self.fetch("/tags", &[]).await {
            FetchOutcome::Loaded(tags) => FetchOutcome::from_items(tags),
            other => other,
        }
    }
}
