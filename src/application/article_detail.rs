// src/application/article_detail.rs
use crate::application::api::{ArticleApi, FetchOutcome};
use crate::application::load::{LoadState, Loadable, RequestToken};
use crate::domain::seo::ROBOTS_DIRECTIVE;
use crate::domain::share::{canonical_url, share_links, slugify, ShareLink};
use crate::domain::{Article, DomainError, SeoMeta, SiteProfile};
use serde::Serialize;
use tracing::{info, instrument};

/// An article together with everything derived for its page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleDetail {
    pub article: Article,
    pub slug: String,
    pub canonical_url: String,
    pub share_links: Vec<ShareLink>,
    pub seo: SeoMeta,
}

impl ArticleDetail {
    pub fn new(article: Article, site: &SiteProfile) -> Self {
        let slug = slugify(&article.title);
        let canonical_url = canonical_url(&site.base_url, &article.title);
        let share_links = share_links(&canonical_url, &article.title, &article.description);
        let seo = SeoMeta {
            title: article.title.clone(),
            page_title: format!("{} - {}", article.title, site.name),
            description: article.description.clone(),
            keywords: site.keywords.clone(),
            robots: ROBOTS_DIRECTIVE,
            url: canonical_url.clone(),
            image: article
                .cover_image
                .clone()
                .unwrap_or_else(|| site.default_image.clone()),
        };

        Self {
            article,
            slug,
            canonical_url,
            share_links,
            seo,
        }
    }
}

/// Single article page
#[derive(Debug)]
pub struct ArticleDetailView {
    site: SiteProfile,
    id: u64,
    detail: Loadable<ArticleDetail>,
}

impl ArticleDetailView {
    pub fn new(site: SiteProfile, id: u64) -> Self {
        Self {
            site,
            id,
            detail: Loadable::default(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &LoadState<ArticleDetail> {
        self.detail.state()
    }

    pub fn detail(&self) -> Option<&ArticleDetail> {
        self.detail.state().populated()
    }

    /// Switch to another article; a response for the previous id is ignored
    pub fn navigate(&mut self, id: u64) {
        if id != self.id {
            self.id = id;
            self.detail.reset();
        }
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.detail.begin()
    }

    pub fn commit(&mut self, token: RequestToken, outcome: FetchOutcome<Article>) -> bool {
        let site = &self.site;
        let outcome = outcome.map(|article| ArticleDetail::new(article, site));
        self.detail.commit(token, outcome)
    }

    #[instrument(level = "debug", skip(self, api), fields(id = self.id))]
    pub async fn load<A: ArticleApi>(&mut self, api: &A) {
        let token = self.begin_load();
        let outcome = api.get_article(self.id).await;
        if self.commit(token, outcome) {
            info!(found = self.detail().is_some(), "Loaded article");
        }
    }

    /// The loaded detail, or `ArticleNotFound` when there is nothing to show
    pub fn require(&self) -> Result<&ArticleDetail, DomainError> {
        self.detail().ok_or(DomainError::ArticleNotFound(self.id))
    }
}
