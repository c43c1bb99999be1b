//! Session lifecycle against the mock backend

use crate::common::TestBackend;
use crate::common::fixtures::{MASTER_ID, envelope, identity_body};
use crate::{assert_err, assert_ok};
use senadb_client::auth::{LOGIN_PATH, LOGOUT_PATH, PROFILE_PATH};
use senadb_client::{ClientError, Role, SessionState};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_bootstrap_authenticates_from_envelope() {
    let backend = TestBackend::start().await;
    backend
        .json("GET", PROFILE_PATH, 200, envelope(identity_body(MASTER_ID, Some("MASTER"))))
        .await;

    let (client, _) = backend.client("/");
    let mut changes = client.session().subscribe();
    let state = client.auth().bootstrap().await;

    assert!(state.is_authenticated());
    assert_eq!(client.session().role(), Some(Role::Master));
    assert!(changes.has_changed().unwrap());
    assert!(changes.borrow_and_update().is_authenticated());
}

#[tokio::test]
async fn test_bootstrap_without_cookie_settles_unauthenticated() {
    let backend = TestBackend::start().await;
    backend.empty("GET", PROFILE_PATH, 401).await;
    backend.refresh(401, 1).await;

    let (client, navigator) = backend.client("/");
    assert_eq!(client.auth().bootstrap().await, SessionState::Unauthenticated);
    assert_eq!(client.session().settled().await, SessionState::Unauthenticated);
    assert!(navigator.redirects().is_empty());
}

#[tokio::test]
async fn test_login_cookie_is_replayed() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN_PATH))
        .respond_with(
            ResponseTemplate::new(201)
                .insert_header("set-cookie", "access_token=abc; Path=/; HttpOnly")
                .set_body_json(envelope(identity_body("u-7", None))),
        )
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("GET"))
        .and(path(PROFILE_PATH))
        .and(header("cookie", "access_token=abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(identity_body("u-7", Some("member"))),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let (client, _) = backend.client("/");
    let identity = assert_ok!(client.auth().login("tester", "secret").await);
    assert_eq!(identity.user_id, "u-7");
    assert!(!identity.has_guild());

    let state = client.auth().bootstrap().await;
    assert_eq!(state.identity().unwrap().role, Some(Role::Member));
}

#[tokio::test]
async fn test_logout_clears_session_when_server_fails() {
    let backend = TestBackend::start().await;
    backend
        .json("GET", PROFILE_PATH, 200, identity_body(MASTER_ID, Some("master")))
        .await;
    backend
        .json("DELETE", LOGOUT_PATH, 500, json!({"message": "Logout unavailable"}))
        .await;

    let (client, _) = backend.client("/guild");
    client.auth().bootstrap().await;

    let err = assert_err!(client.auth().logout().await);
    assert_eq!(err.user_message(), "Logout unavailable");
    assert_eq!(client.session().snapshot(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_register_validates_nickname_locally() {
    let backend = TestBackend::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/google/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&backend.server)
        .await;

    let (client, _) = backend.client("/register");
    let err = assert_err!(client.auth().register("x").await);
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn test_tag_change_requires_new_sign_in() {
    let backend = TestBackend::start().await;
    backend
        .json("GET", PROFILE_PATH, 200, identity_body("u-1", None))
        .await;
    backend.empty("PATCH", "/user/tag", 200).await;

    let (client, _) = backend.client("/user/profile");
    client.auth().bootstrap().await;
    assert!(client.session().is_authenticated());

    assert_ok!(client.users().update_tag("KR1").await);
    assert_eq!(client.session().snapshot(), SessionState::Unauthenticated);
}
