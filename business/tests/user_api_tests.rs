//! Integration tests for the `/users` page client against a mock upstream.

use roster_business::user_api::fetch_page;
use roster_business::{BusinessConfig, UserApiError};
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn users(ids: std::ops::RangeInclusive<u32>) -> Value {
    Value::Array(
        ids.map(|id| {
            json!({
                "id": id,
                "name": format!("User {id}"),
                "username": format!("user{id}"),
                "email": format!("user{id}@example.com"),
                "phone": "1-770-736-8031",
                "website": format!("user{id}.org")
            })
        })
        .collect(),
    )
}

async fn mount_page(server: &MockServer, page: u32, body: Value, total: Option<&str>) {
    let mut template = ResponseTemplate::new(200).set_body_json(body);
    if let Some(total) = total {
        template = template.insert_header("x-total-count", total);
    }
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("_page", page.to_string()))
        .and(query_param("_limit", "5"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn first_page_returns_ids_one_to_five() {
    let server = MockServer::start().await;
    mount_page(&server, 1, users(1..=5), Some("10")).await;

    let config = BusinessConfig::new(server.uri());
    let page = fetch_page(&config, 1).await.expect("page 1 should load");

    assert_eq!(page.page, 1);
    assert_eq!(page.total_count, 10);
    assert_eq!(
        page.records.iter().map(|r| r.id).collect::<Vec<_>>(),
        [1, 2, 3, 4, 5]
    );
    assert_eq!(page.records[0].website, "user1.org");
}

#[tokio::test]
async fn total_count_header_is_authoritative() {
    let server = MockServer::start().await;
    mount_page(&server, 1, users(1..=5), Some("12")).await;

    let config = BusinessConfig::new(server.uri());
    let page = fetch_page(&config, 1).await.expect("page 1 should load");
    assert_eq!(page.total_count, 12);
}

#[tokio::test]
async fn missing_header_falls_back_to_configured_total() {
    let server = MockServer::start().await;
    mount_page(&server, 2, users(6..=10), None).await;

    let config = BusinessConfig::new(server.uri());
    let page = fetch_page(&config, 2).await.expect("page 2 should load");
    assert_eq!(page.total_count, 10);
    assert_eq!(page.records.len(), 5);
}

#[tokio::test]
async fn unparsable_header_falls_back_to_configured_total() {
    let server = MockServer::start().await;
    mount_page(&server, 1, users(1..=5), Some("lots")).await;

    let config = BusinessConfig::new(server.uri());
    let page = fetch_page(&config, 1).await.expect("page 1 should load");
    assert_eq!(page.total_count, 10);
}

#[tokio::test]
async fn short_last_page_is_returned_as_is() {
    let server = MockServer::start().await;
    mount_page(&server, 3, users(11..=11), Some("11")).await;

    let config = BusinessConfig::new(server.uri());
    let page = fetch_page(&config, 3).await.expect("page 3 should load");
    assert_eq!(page.records.len(), 1);
    assert_eq!(page.records[0].id, 11);
}

#[tokio::test]
async fn oversized_page_is_truncated_to_page_size() {
    let server = MockServer::start().await;
    mount_page(&server, 1, users(1..=8), Some("10")).await;

    let config = BusinessConfig::new(server.uri());
    let page = fetch_page(&config, 1).await.expect("page 1 should load");
    assert_eq!(page.records.len(), 5);
    assert_eq!(page.records.last().map(|r| r.id), Some(5));
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = BusinessConfig::new(server.uri());
    let err = fetch_page(&config, 1).await.expect_err("503 should fail");
    assert_eq!(err, UserApiError::Status(503));
    assert_eq!(err.to_string(), "API returned status: 503");
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let config = BusinessConfig::new(server.uri());
    let err = fetch_page(&config, 1).await.expect_err("html is not json");
    assert!(matches!(err, UserApiError::Parse(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_upstream_is_a_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment.
    let config = BusinessConfig::new("http://127.0.0.1:9");
    let err = fetch_page(&config, 1).await.expect_err("connection refused");
    assert!(matches!(err, UserApiError::Http(_)), "got {err:?}");
}
