// src/application/article_list.rs
use crate::application::api::{ArticleApi, ArticleQuery, FetchOutcome};
use crate::application::load::{LoadState, Loadable, RequestToken};
use crate::domain::{Article, DomainError, ListFilter, PageSize, Tag};
use tracing::{debug, info, instrument};

/// What happens to the page counter when the tag filter or page size changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageResetPolicy {
    /// Jump back to page 1, so a new filter never opens on a page past its end
    #[default]
    ResetToFirstPage,
    /// Keep the current page number
    KeepPage,
}

/// Paged, optionally tag-filtered article list with its tag filter panel
#[derive(Debug)]
pub struct ArticleListView {
    filter: ListFilter,
    policy: PageResetPolicy,
    articles: Loadable<Vec<Article>>,
    tags: Vec<Tag>,
}

impl ArticleListView {
    pub fn new(filter: ListFilter, policy: PageResetPolicy) -> Self {
        Self {
            filter,
            policy,
            articles: Loadable::default(),
            tags: Vec::new(),
        }
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn state(&self) -> &LoadState<Vec<Article>> {
        self.articles.state()
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.articles.last_failure()
    }

    pub fn articles(&self) -> &[Article] {
        self.articles
            .state()
            .populated()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tags of the filter panel
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn can_go_previous(&self) -> bool {
        self.filter.page > 1
    }

    /// No upper bound: the API reports no total, an empty page marks the end
    pub fn next_page(&mut self) {
        self.filter.page = self.filter.page.saturating_add(1);
        self.articles.reset();
    }

    /// Returns false and changes nothing on page 1
    pub fn previous_page(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.filter.page -= 1;
        self.articles.reset();
        true
    }

    pub fn set_per_page(&mut self, per_page: u32) -> Result<(), DomainError> {
        let per_page = PageSize::new(per_page)?;
        if per_page != self.filter.per_page {
            self.filter.per_page = per_page;
            self.apply_reset_policy();
            self.articles.reset();
        }
        Ok(())
    }

    /// Select a tag filter; an empty name clears it
    pub fn select_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag != self.filter.tag {
            self.filter.tag = tag.to_string();
            self.apply_reset_policy();
            self.articles.reset();
        }
    }

    fn apply_reset_policy(&mut self) {
        if self.policy == PageResetPolicy::ResetToFirstPage {
            self.filter.page = 1;
        }
    }

    pub fn query(&self) -> ArticleQuery {
        ArticleQuery::from(&self.filter)
    }

    /// Route of the current state, e.g. for sharing
    pub fn route(&self) -> String {
        self.filter.to_route()
    }

    pub fn previous_route(&self) -> Option<String> {
        self.can_go_previous().then(|| {
            ListFilter {
                page: self.filter.page - 1,
                ..self.filter.clone()
            }
            .to_route()
        })
    }

    pub fn next_route(&self) -> String {
        ListFilter {
            page: self.filter.page.saturating_add(1),
            ..self.filter.clone()
        }
        .to_route()
    }

    /// Route selecting `tag`; the page is dropped as the reset policy prescribes
    pub fn tag_route(&self, tag: &str) -> String {
        ListFilter {
            page: self.page_after_change(),
            per_page: self.filter.per_page,
            tag: tag.to_string(),
        }
        .to_route()
    }

    /// Route switching to `per_page` under the same reset policy as `tag_route`
    pub fn per_page_route(&self, per_page: PageSize) -> String {
        let page = if per_page == self.filter.per_page {
            self.filter.page
        } else {
            self.page_after_change()
        };
        ListFilter {
            page,
            per_page,
            tag: self.filter.tag.clone(),
        }
        .to_route()
    }

    fn page_after_change(&self) -> u32 {
        match self.policy {
            PageResetPolicy::ResetToFirstPage => 1,
            PageResetPolicy::KeepPage => self.filter.page,
        }
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.articles.begin()
    }

    pub fn commit(&mut self, token: RequestToken, outcome: FetchOutcome<Vec<Article>>) -> bool {
        let outcome = match outcome {
            FetchOutcome::Loaded(items) => FetchOutcome::from_items(items),
            other => other,
        };
        self.articles.commit(token, outcome)
    }

    /// Fetch the current page
    #[instrument(level = "debug", skip(self, api), fields(filter = ?self.filter))]
    pub async fn load<A: ArticleApi>(&mut self, api: &A) {
        let token = self.begin_load();
        let query = self.query();
        let outcome = api.list_articles(&query).await;
        if self.commit(token, outcome) {
            info!(count = self.articles().len(), page = self.filter.page, "Loaded articles");
        }
    }

    /// Fetch the full tag set of the filter panel
    pub async fn load_tags<A: ArticleApi>(&mut self, api: &A) {
        self.tags = api.list_tags().await.into_items();
        debug!(count = self.tags.len(), "Loaded filter tags");
    }
}
