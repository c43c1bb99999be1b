//! Guild management against the mock backend

use crate::assert_ok;
use crate::common::TestBackend;
use crate::common::fixtures::{MASTER_ID, envelope, identity_body, member, member_body};
use senadb_client::auth::PROFILE_PATH;
use senadb_client::core::guild::{AutoConfirm, DispatchOutcome, MEMBERS_PATH, Refusal};
use senadb_client::{ManagementAction, Role, SessionState};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path, path_regex};
use wiremock::{Mock, ResponseTemplate};

async fn signed_in_master(backend: &TestBackend) {
    backend
        .json("GET", PROFILE_PATH, 200, envelope(identity_body(MASTER_ID, Some("MASTER"))))
        .await;
}

#[tokio::test]
async fn test_delegate_master_updates_role_and_member_list() {
    let backend = TestBackend::start().await;
    signed_in_master(&backend).await;

    Mock::given(method("GET"))
        .and(path(MEMBERS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!([
            member_body(MASTER_ID, "master"),
            member_body("u-sub", "submaster"),
        ]))))
        .expect(2)
        .mount(&backend.server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/guild/management/master"))
        .and(body_json(json!({"targetId": "u-sub"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(identity_body(MASTER_ID, Some("SUBMASTER")))),
        )
        .expect(1)
        .mount(&backend.server)
        .await;

    let (client, _) = backend.client("/guild");
    client.auth().bootstrap().await;

    let members = assert_ok!(client.members().list().await);
    let target = members
        .iter()
        .find(|m| m.user_id == "u-sub")
        .cloned()
        .unwrap();
    let dispatcher = client.dispatcher(Arc::new(AutoConfirm));
    assert!(
        dispatcher
            .available_actions(&target)
            .contains(&ManagementAction::DelegateMaster)
    );

    let outcome = assert_ok!(dispatcher.dispatch(ManagementAction::DelegateMaster, &target).await);

    assert_eq!(
        outcome,
        DispatchOutcome::Completed {
            identity_refreshed: true
        }
    );
    assert_eq!(client.session().role(), Some(Role::Submaster));
    assert!(dispatcher.available_actions(&target).is_empty());
    // Cache was invalidated, so this hits the backend again
    assert_ok!(client.members().list().await);
}

#[tokio::test]
async fn test_refusals_never_reach_the_backend() {
    let backend = TestBackend::start().await;
    signed_in_master(&backend).await;
    Mock::given(path_regex("^/guild/management/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&backend.server)
        .await;

    let (client, _) = backend.client("/guild");
    let dispatcher = client.dispatcher(Arc::new(AutoConfirm));

    // Still loading
    let outcome = assert_ok!(
        dispatcher
            .dispatch(ManagementAction::Kick, &member("u-2", Role::Member))
            .await
    );
    assert_eq!(outcome, DispatchOutcome::Refused(Refusal::SessionNotReady));

    client.auth().bootstrap().await;

    let outcome = assert_ok!(
        dispatcher
            .dispatch(ManagementAction::Kick, &member(MASTER_ID, Role::Master))
            .await
    );
    assert_eq!(outcome, DispatchOutcome::Refused(Refusal::SelfTarget));

    let outcome = assert_ok!(
        dispatcher
            .dispatch(ManagementAction::DemoteManager, &member("u-2", Role::Member))
            .await
    );
    assert_eq!(outcome, DispatchOutcome::Refused(Refusal::NotPermitted));
}

#[tokio::test]
async fn test_session_expiry_during_action() {
    let backend = TestBackend::start().await;
    signed_in_master(&backend).await;
    backend.empty("PATCH", "/guild/management/kick", 401).await;
    backend.refresh(401, 1).await;

    let (client, navigator) = backend.client("/guild");
    client.auth().bootstrap().await;

    let outcome = assert_ok!(
        client
            .dispatcher(Arc::new(AutoConfirm))
            .dispatch(ManagementAction::Kick, &member("u-2", Role::Member))
            .await
    );

    assert_eq!(outcome, DispatchOutcome::SessionExpired);
    assert_eq!(client.session().snapshot(), SessionState::Unauthenticated);
    assert_eq!(navigator.redirects(), vec!["/".to_string()]);
}

#[tokio::test]
async fn test_server_refusal_surfaces_message() {
    let backend = TestBackend::start().await;
    signed_in_master(&backend).await;
    backend
        .json(
            "POST",
            "/guild/management/managers",
            409,
            json!({"message": ["Manager slots are full"]}),
        )
        .await;

    let (client, _) = backend.client("/guild");
    client.auth().bootstrap().await;

    let err = client
        .dispatcher(Arc::new(AutoConfirm))
        .dispatch(ManagementAction::AppointManager, &member("u-2", Role::Member))
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Manager slots are full");
    assert!(err.is_validation_or_conflict());
    assert!(client.session().is_authenticated());
}
