// src/application/api.rs
use crate::domain::{Article, ListFilter, Tag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one remote read.
///
/// `Empty` and `Failed` both mean "nothing to show"; `Failed` keeps the reason so callers
/// can tell an outage from a legitimately empty result if they want to.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Loaded(T),
    Empty,
    Failed(String),
}

impl<T> FetchOutcome<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchOutcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Collapse to plain presence: `Empty` and `Failed` both become `None`
    pub fn data(self) -> Option<T> {
        match self {
            FetchOutcome::Loaded(data) => Some(data),
            FetchOutcome::Empty | FetchOutcome::Failed(_) => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchOutcome<U> {
        match self {
            FetchOutcome::Loaded(data) => FetchOutcome::Loaded(f(data)),
            FetchOutcome::Empty => FetchOutcome::Empty,
            FetchOutcome::Failed(reason) => FetchOutcome::Failed(reason),
        }
    }
}

impl<T> FetchOutcome<Vec<T>> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            FetchOutcome::Empty
        } else {
            FetchOutcome::Loaded(items)
        }
    }

    /// Fail-soft view of a list result: anything but `Loaded` is an empty list
    pub fn into_items(self) -> Vec<T> {
        self.data().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleState {
    Fresh,
    Rising,
    All,
}

impl fmt::Display for ArticleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ArticleState::Fresh => "fresh",
            ArticleState::Rising => "rising",
            ArticleState::All => "all",
        };
        f.write_str(s)
    }
}

/// Query of `GET {base}/articles`; every field is optional and forwarded as-is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub tag: Option<String>,
    pub tags: Option<String>,
    pub tags_exclude: Option<String>,
    pub username: Option<String>,
    pub state: Option<ArticleState>,
    pub top: Option<u32>,
    pub collection_id: Option<u64>,
}

impl ArticleQuery {
    pub fn for_tag(tag: impl Into<String>, per_page: u32) -> Self {
        Self {
            tag: Some(tag.into()),
            per_page: Some(per_page),
            ..Self::default()
        }
    }

    /// Query parameters in wire order; `None` and empty strings are left out
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key: &'static str, value: Option<String>| {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                pairs.push((key, v));
            }
        };

        push("page", self.page.map(|v| v.to_string()));
        push("per_page", self.per_page.map(|v| v.to_string()));
        push("tag", self.tag.clone());
        push("tags", self.tags.clone());
        push("tags_exclude", self.tags_exclude.clone());
        push("username", self.username.clone());
        push("state", self.state.map(|v| v.to_string()));
        push("top", self.top.map(|v| v.to_string()));
        push("collection_id", self.collection_id.map(|v| v.to_string()));

        pairs
    }
}

impl From<&ListFilter> for ArticleQuery {
    fn from(filter: &ListFilter) -> Self {
        Self {
            page: Some(filter.page),
            per_page: Some(filter.per_page.get()),
            tag: Some(filter.tag.clone()),
            ..Self::default()
        }
    }
}

/// Read-only access to the remote content API.
///
/// Implementations never fail past this boundary: errors come back as
/// `FetchOutcome::Failed`, missing resources as `FetchOutcome::Empty`.
#[allow(async_fn_in_trait)]
pub trait ArticleApi {
    async fn list_articles(&self, query: &ArticleQuery) -> FetchOutcome<Vec<Article>>;

    async fn get_article(&self, id: u64) -> FetchOutcome<Article>;

    async fn list_tags(&self) -> FetchOutcome<Vec<Tag>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PageSize;

    #[test]
    fn given_empty_query_when_building_pairs_then_returns_nothing() {
        assert!(ArticleQuery::default().to_pairs().is_empty());
    }

    #[test]
    fn given_full_query_when_building_pairs_then_forwards_every_filter() {
        let query = ArticleQuery {
            page: Some(2),
            per_page: Some(10),
            tag: Some("go".to_string()),
            tags: Some("go,rust".to_string()),
            tags_exclude: Some("java".to_string()),
            username: Some("ann".to_string()),
            state: Some(ArticleState::Rising),
            top: Some(7),
            collection_id: Some(99),
        };

        let pairs = query.to_pairs();

        assert_eq!(
            pairs,
            vec![
                ("page", "2".to_string()),
                ("per_page", "10".to_string()),
                ("tag", "go".to_string()),
                ("tags", "go,rust".to_string()),
                ("tags_exclude", "java".to_string()),
                ("username", "ann".to_string()),
                ("state", "rising".to_string()),
                ("top", "7".to_string()),
                ("collection_id", "99".to_string()),
            ]
        );
    }

    #[test]
    fn given_unfiltered_list_filter_when_converting_then_omits_tag() {
        let filter = ListFilter {
            page: 1,
            per_page: PageSize::new(5).unwrap(),
            tag: String::new(),
        };

        let pairs = ArticleQuery::from(&filter).to_pairs();

        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("per_page", "5".to_string())]
        );
    }

    #[test]
    fn given_outcomes_when_collapsing_then_failed_and_empty_look_alike() {
        let failed: FetchOutcome<Vec<u8>> = FetchOutcome::Failed("timeout".to_string());
        let empty: FetchOutcome<Vec<u8>> = FetchOutcome::Empty;

        assert!(failed.is_failed());
        assert_eq!(failed.failure(), Some("timeout"));
        assert_eq!(failed.into_items(), Vec::<u8>::new());
        assert_eq!(empty.into_items(), Vec::<u8>::new());
        assert_eq!(FetchOutcome::from_items(vec![1u8]).into_items(), vec![1]);
    }
}
