// src/domain/listing.rs
use crate::domain::DomainError;
use serde::Serialize;
use url::form_urlencoded;

/// Page sizes offered by the list view
pub const PAGE_SIZES: [u32; 4] = [5, 10, 15, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSize(u32);

impl PageSize {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if PAGE_SIZES.contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPageSize(value))
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(PAGE_SIZES[0])
    }
}

impl TryFrom<u32> for PageSize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Pagination and tag filter of the article list.
///
/// An empty `tag` means no filter. `page` is 1-based and never drops below 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListFilter {
    pub page: u32,
    pub per_page: PageSize,
    pub tag: String,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PageSize::default(),
            tag: String::new(),
        }
    }
}

impl ListFilter {
    pub fn with_tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn has_tag(&self) -> bool {
        !self.tag.is_empty()
    }

    /// Route path of this filter, e.g. `/articles?tag=go&page=2`.
    ///
    /// Defaults are left out so the plain list is just `/articles`.
    pub fn to_route(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if self.has_tag() {
            query.append_pair("tag", &self.tag);
        }
        if self.page > 1 {
            query.append_pair("page", &self.page.to_string());
        }
        if self.per_page != PageSize::default() {
            query.append_pair("per_page", &self.per_page.get().to_string());
        }

        let query = query.finish();
        if query.is_empty() {
            "/articles".to_string()
        } else {
            format!("/articles?{}", query)
        }
    }
}
