// src/application/tag_directory.rs
use crate::application::api::{ArticleApi, FetchOutcome};
use crate::application::load::{LoadState, Loadable, RequestToken};
use crate::domain::{ListFilter, Tag};
use tracing::info;

/// All tags as filter chips
#[derive(Debug, Default)]
pub struct TagDirectoryView {
    tags: Loadable<Vec<Tag>>,
}

impl TagDirectoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<Vec<Tag>> {
        self.tags.state()
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags
            .state()
            .populated()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// List route filtered by `tag`
    pub fn tag_route(tag: &Tag) -> String {
        ListFilter::with_tag(tag.name.clone()).to_route()
    }

    /// List route without a filter
    pub fn all_route() -> String {
        ListFilter::default().to_route()
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.tags.begin()
    }

    pub fn commit(&mut self, token: RequestToken, outcome: FetchOutcome<Vec<Tag>>) -> bool {
        let outcome = match outcome {
            FetchOutcome::Loaded(tags) => FetchOutcome::from_items(tags),
            other => other,
        };
        self.tags.commit(token, outcome)
    }

    pub async fn load<A: ArticleApi>(&mut self, api: &A) {
        let token = self.begin_load();
        let outcome = api.list_tags().await;
        if self.commit(token, outcome) {
            info!(count = self.tags().len(), "Loaded tag directory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::fixtures::tag;
    use crate::util::testing::MockArticleApi;

    #[test]
    fn given_tag_when_building_route_then_filters_list_by_name() {
        assert_eq!(TagDirectoryView::tag_route(&tag(1, "go")), "/articles?tag=go");
        assert_eq!(TagDirectoryView::all_route(), "/articles");
    }

    #[tokio::test]
    async fn given_tags_when_loading_then_populated() {
        let api = MockArticleApi::builder()
            .with_tag(tag(1, "go"))
            .with_tag(tag(2, "rust"))
            .build();
        let mut view = TagDirectoryView::new();

        view.load(&api).await;

        let names: Vec<_> = view.tags().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["go", "rust"]);
    }

    #[tokio::test]
    async fn given_no_tags_when_loading_then_empty() {
        let api = MockArticleApi::builder().build();
        let mut view = TagDirectoryView::new();

        view.load(&api).await;

        assert_eq!(view.state(), &LoadState::Empty);
    }
}
