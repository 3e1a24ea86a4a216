// src/domain/route.rs
use crate::domain::listing::{ListFilter, PageSize};
use crate::domain::DomainError;
use std::fmt;
use url::Url;

/// Screens reachable by path, the way links inside rendered pages address them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Articles(ListFilter),
    Article(u64),
    Tags,
}

impl Route {
    /// Parse `/`, `/articles?tag=…`, `/article/:id` or `/tags`.
    pub fn parse(route: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidRoute(route.to_string());

        let base = Url::parse("http://articleview.local/").map_err(|_| invalid())?;
        let url = base.join(route.trim()).map_err(|_| invalid())?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|s| s.filter(|seg| !seg.is_empty()).collect())
            .unwrap_or_default();

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["articles"] => parse_list_filter(&url, route).map(Route::Articles),
            ["article", id] => id
                .parse::<u64>()
                .ok()
                .filter(|id| *id > 0)
                .map(Route::Article)
                .ok_or_else(invalid),
            ["tags"] => Ok(Route::Tags),
            _ => Err(invalid()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Articles(filter) => filter.to_route(),
            Route::Article(id) => article_path(*id),
            Route::Tags => "/tags".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub fn article_path(id: u64) -> String {
    format!("/article/{}", id)
}

fn parse_list_filter(url: &Url, route: &str) -> Result<ListFilter, DomainError> {
    let mut filter = ListFilter::default();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "tag" => filter.tag = value.trim().to_string(),
            "page" => {
                let page: u32 = value
                    .parse()
                    .map_err(|_| DomainError::InvalidRoute(route.to_string()))?;
                filter.page = page.max(1);
            }
            "per_page" => {
                let size: u32 = value
                    .parse()
                    .map_err(|_| DomainError::InvalidRoute(route.to_string()))?;
                filter.per_page = PageSize::new(size)?;
            }
            _ => {}
        }
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::Home)]
    #[case("", Route::Home)]
    #[case("/tags", Route::Tags)]
    #[case("/article/42", Route::Article(42))]
    #[case("/articles", Route::Articles(ListFilter::default()))]
    #[case("/articles?tag=go", Route::Articles(ListFilter::with_tag("go")))]
    #[case("/articles?tag=", Route::Articles(ListFilter::default()))]
    fn given_known_route_when_parsing_then_returns_screen(#[case] input: &str, #[case] expected: Route) {
        assert_eq!(Route::parse(input), Ok(expected));
    }

    #[test]
    fn given_paged_list_route_when_parsing_then_reads_page_and_size() {
        let route = Route::parse("/articles?tag=rust&page=3&per_page=15").unwrap();

        let Route::Articles(filter) = route else {
            panic!("Expected Articles route");
        };
        assert_eq!(filter.tag, "rust");
        assert_eq!(filter.page, 3);
        assert_eq!(filter.per_page.get(), 15);
    }

    #[test]
    fn given_page_zero_when_parsing_then_floors_to_first_page() {
        let route = Route::parse("/articles?page=0").unwrap();
        assert_eq!(route, Route::Articles(ListFilter::default()));
    }

    #[rstest]
    #[case("/nope")]
    #[case("/article/abc")]
    #[case("/article/0")]
    #[case("/articles?page=x")]
    fn given_unknown_route_when_parsing_then_returns_invalid_route(#[case] input: &str) {
        assert_eq!(
            Route::parse(input),
            Err(DomainError::InvalidRoute(input.to_string()))
        );
    }

    #[test]
    fn given_unoffered_page_size_when_parsing_then_returns_invalid_page_size() {
        assert_eq!(
            Route::parse("/articles?per_page=7"),
            Err(DomainError::InvalidPageSize(7))
        );
    }

    #[test]
    fn given_route_when_formatting_then_round_trips_path() {
        let route = Route::parse("/articles?tag=go&page=2").unwrap();
        assert_eq!(route.to_string(), "/articles?tag=go&page=2");
        assert_eq!(Route::Article(42).to_string(), "/article/42");
    }
}
