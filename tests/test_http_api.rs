mod helpers;

use articleview::application::{ArticleApi, ArticleQuery, ArticleState, FetchOutcome};
use articleview::infrastructure::HttpArticleApi;
use helpers::{payloads, StubServer};
use std::time::Duration;

fn client(server: &StubServer) -> HttpArticleApi {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client builds");
    HttpArticleApi::with_client(client, &server.base_url)
}

#[tokio::test]
async fn given_articles_endpoint_when_listing_then_decodes_and_forwards_query() {
    // Arrange
    let server = StubServer::start(vec![("/articles", 200, payloads::GO_ARTICLES)]);
    let api = client(&server);
    let query = ArticleQuery {
        page: Some(2),
        per_page: Some(5),
        tag: Some("go".to_string()),
        state: Some(ArticleState::Fresh),
        ..ArticleQuery::default()
    };

    // Act
    let articles = api.list_articles(&query).await.into_items();

    // Assert
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, 42);
    assert_eq!(articles[0].tag_list, vec!["go", "backend"]);
    assert_eq!(
        server.requests(),
        vec!["/articles?page=2&per_page=5&tag=go&state=fresh".to_string()]
    );
}

#[tokio::test]
async fn given_detail_endpoint_when_getting_article_then_normalizes_joined_tags() {
    // Arrange
    let server = StubServer::start(vec![("/articles/42", 200, payloads::GO_ARTICLE_DETAIL)]);
    let api = client(&server);

    // Act
    let article = api.get_article(42).await.data().expect("article loaded");

    // Assert
    assert_eq!(article.title, "Go Basics");
    assert_eq!(article.tag_list, vec!["go", "backend"]);
    assert_eq!(article.body_markdown, "Hello **gophers**");
}

#[tokio::test]
async fn given_missing_article_when_getting_then_returns_empty() {
    // Arrange
    let server = StubServer::start(vec![]);
    let api = client(&server);

    // Act
    let outcome = api.get_article(404).await;

    // Assert
    assert_eq!(outcome, FetchOutcome::Empty);
    assert_eq!(server.requests(), vec!["/articles/404".to_string()]);
}

#[tokio::test]
async fn given_server_error_when_listing_tags_then_fails_soft() {
    // Arrange
    let server = StubServer::start(vec![("/tags", 500, r#"{"error":"boom"}"#)]);
    let api = client(&server);

    // Act
    let outcome = api.list_tags().await;

    // Assert
    assert!(outcome.is_failed());
    assert!(outcome.into_items().is_empty());
}

#[tokio::test]
async fn given_malformed_body_when_listing_tags_then_fails_soft() {
    // Arrange
    let server = StubServer::start(vec![("/tags", 200, r#"{"not":"a list"}"#)]);
    let api = client(&server);

    // Act
    let outcome = api.list_tags().await;

    // Assert
    assert!(outcome
        .failure()
        .is_some_and(|reason| reason.starts_with("Invalid content API response")));
}

#[tokio::test]
async fn given_tags_endpoint_when_listing_tags_then_decodes_nullable_colors() {
    // Arrange
    let server = StubServer::start(vec![("/tags", 200, payloads::TAGS)]);
    let api = client(&server);

    // Act
    let tags = api.list_tags().await.into_items();

    // Assert
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].background(), "#00add8");
    assert_eq!(tags[1].bg_color_hex, None);
}
