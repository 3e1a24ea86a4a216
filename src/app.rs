// src/app.rs
use crate::application::{
    ArticleApi, ArticleDetailView, ArticleListView, PageResetPolicy, TagDirectoryView,
    TagSampler,
};
use crate::domain::{ListFilter, Route, SiteProfile};
use crate::ports::HtmlPresenter;
use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, instrument};

/// A rendered screen ready to be written out
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub file_name: String,
    pub html: String,
}

/// Dispatches routes to their views and renders the result
pub struct ArticleApp<A: ArticleApi> {
    api: A,
    site: SiteProfile,
    presenter: HtmlPresenter,
    policy: PageResetPolicy,
    sampler: TagSampler,
}

impl<A: ArticleApi> ArticleApp<A> {
    pub fn new(api: A, site: SiteProfile, presenter: HtmlPresenter) -> Self {
        Self {
            api,
            site,
            presenter,
            policy: PageResetPolicy::default(),
            sampler: TagSampler::default(),
        }
    }

    pub fn with_policy(mut self, policy: PageResetPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Load the data of `route` and render it as an HTML page
    #[instrument(level = "debug", skip(self, route, rng), fields(route = %route))]
    pub async fn render<R: Rng + ?Sized>(&self, route: &Route, rng: &mut R) -> Result<RenderedPage> {
        match route {
            Route::Home => self.render_list(ListFilter::default(), rng).await,
            Route::Articles(filter) => self.render_list(filter.clone(), rng).await,
            Route::Article(id) => {
                let mut view = ArticleDetailView::new(self.site.clone(), *id);
                view.load(&self.api).await;
                Ok(RenderedPage {
                    file_name: format!("article-{}.html", id),
                    html: self.presenter.render_detail(&view),
                })
            }
            Route::Tags => {
                let mut view = TagDirectoryView::new();
                view.load(&self.api).await;
                Ok(RenderedPage {
                    file_name: "tags.html".to_string(),
                    html: self.presenter.render_tags(&view),
                })
            }
        }
    }

    async fn render_list<R: Rng + ?Sized>(&self, filter: ListFilter, rng: &mut R) -> Result<RenderedPage> {
        let mut view = ArticleListView::new(filter, self.policy);
        view.load(&self.api).await;
        view.load_tags(&self.api).await;
        let groups = self.sampler.load(&self.api, rng).await;
        debug!(groups = groups.len(), "Loaded sampled tag groups");

        Ok(RenderedPage {
            file_name: "articles.html".to_string(),
            html: self.presenter.render_list(&view, &groups),
        })
    }

    /// Load the data of `route` and serialize it as pretty JSON
    #[instrument(level = "debug", skip(self, route), fields(route = %route))]
    pub async fn to_json(&self, route: &Route) -> Result<String> {
        let json = match route {
            Route::Home => self.list_json(ListFilter::default()).await,
            Route::Articles(filter) => self.list_json(filter.clone()).await,
            Route::Article(id) => {
                let mut view = ArticleDetailView::new(self.site.clone(), *id);
                view.load(&self.api).await;
                serde_json::to_string_pretty(view.require()?)
            }
            Route::Tags => {
                let mut view = TagDirectoryView::new();
                view.load(&self.api).await;
                serde_json::to_string_pretty(view.tags())
            }
        };
        json.context("Failed to serialize to JSON")
    }

    async fn list_json(&self, filter: ListFilter) -> serde_json::Result<String> {
        let mut view = ArticleListView::new(filter, self.policy);
        view.load(&self.api).await;
        serde_json::to_string_pretty(view.articles())
    }
}
