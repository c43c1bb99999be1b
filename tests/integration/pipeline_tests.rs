//! Request pipeline over real HTTP

use crate::common::TestBackend;
use crate::{assert_err, assert_ok};
use reqwest::Method;
use senadb_client::SessionState;
use senadb_client::sdk::client::REFRESH_PATH;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_renewal_retry_carries_fresh_cookie() {
    let backend = TestBackend::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .and(header("cookie", "access_token=fresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"a": 1})))
        .with_priority(1)
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(401))
        .with_priority(2)
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200).insert_header("set-cookie", "access_token=fresh; Path=/"),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let (client, navigator) = backend.client("/stats");
    let value = assert_ok!(client.pipeline().execute(Method::GET, "/stats", None).await);

    assert_eq!(value, Some(json!({"a": 1})));
    assert!(client.session().is_loading());
    assert!(navigator.redirects().is_empty());
}

#[tokio::test]
async fn test_second_401_is_final() {
    let backend = TestBackend::start().await;
    backend
        .json("GET", "/guild", 401, json!({"message": "Unauthorized"}))
        .await;
    backend.refresh(200, 1).await;

    let (client, _) = backend.client("/guild");
    let err = assert_err!(client.pipeline().execute(Method::GET, "/guild", None).await);

    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message(), "Unauthorized");
}

#[tokio::test]
async fn test_rejected_renewal_redirects_to_entry() {
    let backend = TestBackend::start().await;
    backend.empty("GET", "/guild/members", 401).await;
    backend.refresh(401, 1).await;

    let (client, navigator) = backend.client("/guild");
    let value = assert_ok!(client.pipeline().execute(Method::GET, "/guild/members", None).await);

    assert!(value.is_none());
    assert_eq!(client.session().snapshot(), SessionState::Unauthenticated);
    assert_eq!(navigator.redirects(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_rejected_renewal_on_register_page_stays() {
    let backend = TestBackend::start().await;
    backend.empty("POST", "/auth/google/register", 401).await;
    backend.refresh(403, 1).await;

    let (client, navigator) = backend.client("/register");
    let value = assert_ok!(
        client
            .pipeline()
            .execute(Method::POST, "/auth/google/register", Some(json!({"nickname": "abc"})))
            .await
    );

    assert!(value.is_none());
    assert!(navigator.redirects().is_empty());
}

#[tokio::test]
async fn test_concurrent_401s_share_one_renewal() {
    let backend = TestBackend::start().await;
    for route in ["/a", "/b", "/c"] {
        Mock::given(method("GET"))
            .and(path(route))
            .and(header("cookie", "access_token=fresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"route": route})))
            .with_priority(1)
            .mount(&backend.server)
            .await;
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(401))
            .with_priority(2)
            .mount(&backend.server)
            .await;
    }
    Mock::given(method("PATCH"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "access_token=fresh; Path=/")
                .set_delay(std::time::Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let (client, _) = backend.client("/");
    let pipeline = client.pipeline();
    let (a, b, c) = tokio::join!(
        pipeline.execute(Method::GET, "/a", None),
        pipeline.execute(Method::GET, "/b", None),
        pipeline.execute(Method::GET, "/c", None),
    );

    assert_eq!(assert_ok!(a), Some(json!({"route": "/a"})));
    assert_eq!(assert_ok!(b), Some(json!({"route": "/b"})));
    assert_eq!(assert_ok!(c), Some(json!({"route": "/c"})));
}

#[tokio::test]
async fn test_error_messages_are_normalized() {
    let backend = TestBackend::start().await;
    backend
        .json("POST", "/guild", 400, json!({"message": ["A", "B"]}))
        .await;
    backend.json("GET", "/guild", 500, json!({"error": "x"})).await;
    Mock::given(method("PATCH"))
        .and(path("/guild"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&backend.server)
        .await;

    let (client, _) = backend.client("/guild");
    let pipeline = client.pipeline();

    let err = assert_err!(pipeline.execute(Method::POST, "/guild", None).await);
    assert_eq!(err.user_message(), "A, B");
    let err = assert_err!(pipeline.execute(Method::GET, "/guild", None).await);
    assert_eq!(err.user_message(), "API request failed.");
    assert!(err.is_server_error());
    let err = assert_err!(pipeline.execute(Method::PATCH, "/guild", None).await);
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_no_content_and_empty_success() {
    let backend = TestBackend::start().await;
    backend.empty("DELETE", "/auth/logout", 204).await;
    backend.empty("POST", "/guild/management/check-tag", 201).await;

    let (client, _) = backend.client("/");
    let pipeline = client.pipeline();

    assert!(assert_ok!(pipeline.execute(Method::DELETE, "/auth/logout", None).await).is_none());
    assert!(
        assert_ok!(
            pipeline
                .execute(Method::POST, "/guild/management/check-tag", Some(json!({"tag": "KR"})))
                .await
        )
        .is_none()
    );
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let backend = TestBackend::start().await;
    Mock::given(method("PATCH"))
        .and(path("/guild/management/notice"))
        .and(header("content-type", "application/json"))
        .and(wiremock::matchers::body_json(json!({"notice": "hello"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend.server)
        .await;

    let (client, _) = backend.client("/guild");
    assert_ok!(
        client
            .pipeline()
            .execute(Method::PATCH, "/guild/management/notice", Some(json!({"notice": "hello"})))
            .await
    );
}

#[tokio::test]
async fn test_timeout_is_reported() {
    let backend = TestBackend::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)))
        .mount(&backend.server)
        .await;

    let mut config = backend.config();
    config.timeout_secs = 1;
    let client = senadb_client::SenaClient::new(
        config,
        std::sync::Arc::new(senadb_client::sdk::client::InMemoryNavigator::new("/")),
    )
    .unwrap();

    let err = assert_err!(client.pipeline().execute(Method::GET, "/slow", None).await);
    assert!(matches!(err, senadb_client::ClientError::Timeout(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unreachable_backend_keeps_session() {
    // Nothing listens on the discard port
    let config = senadb_client::config::ConfigBuilder::new()
        .api_base_url("http://127.0.0.1:9")
        .timeout_secs(2)
        .build()
        .unwrap();
    let client = senadb_client::SenaClient::new(
        config,
        std::sync::Arc::new(senadb_client::sdk::client::InMemoryNavigator::new("/guild")),
    )
    .unwrap();

    let err = assert_err!(client.pipeline().execute(Method::GET, "/guild", None).await);
    assert!(err.is_transport());
    assert!(client.session().is_loading());
}
