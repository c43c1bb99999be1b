//! Session endpoints: bootstrap, login, registration and logout

use super::session::{Identity, SessionState, SessionStore};
use crate::sdk::client::RequestPipeline;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::InputValidator;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

/// Identity of the current cookie holder
pub const PROFILE_PATH: &str = "/auth/profile";
/// Password login for test accounts
pub const LOGIN_PATH: &str = "/auth/test/login";
/// Completes an OAuth signup; the registration token travels in the cookie
pub const REGISTER_PATH: &str = "/auth/google/register";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// Drives the session store from the session endpoints
#[derive(Clone)]
pub struct AuthService {
    pipeline: Arc<RequestPipeline>,
}

impl AuthService {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    fn session(&self) -> &SessionStore {
        self.pipeline.session()
    }

    /// Resolve the initial `Loading` state from the profile endpoint
    ///
    /// Never fails: anything other than an identity leaves the session
    /// unauthenticated.
    pub async fn bootstrap(&self) -> SessionState {
        match self.pipeline.execute(Method::GET, PROFILE_PATH, None).await {
            Ok(Some(body)) => match Identity::from_body(body) {
                Some(identity) => self.session().authenticate(identity),
                None => {
                    warn!("Profile response carried no identity");
                    self.session().expire();
                }
            },
            Ok(None) => {
                self.session().expire();
            }
            Err(e) => {
                info!(error = %e, "No active session");
                self.session().expire();
            }
        }
        self.session().snapshot()
    }

    /// Sign in with a test account
    pub async fn login(&self, nickname: &str, password: &str) -> Result<Identity> {
        if nickname.trim().is_empty() || password.is_empty() {
            return Err(ClientError::validation(
                "Nickname and password are required.",
            ));
        }
        let body = json!({ "nickname": nickname, "password": password });
        self.sign_in(LOGIN_PATH, body).await
    }

    /// Finish first-time signup by choosing a nickname
    pub async fn register(&self, nickname: &str) -> Result<Identity> {
        InputValidator::validate_nickname(nickname)?;
        self.sign_in(REGISTER_PATH, json!({ "nickname": nickname }))
            .await
    }

    /// Sign out
    ///
    /// The local session is cleared whether or not the server call succeeds;
    /// its result is still returned.
    pub async fn logout(&self) -> Result<()> {
        let result = self.pipeline.execute(Method::DELETE, LOGOUT_PATH, None).await;
        self.session().expire();
        if let Err(e) = &result {
            warn!(error = %e, "Server-side logout failed, local session cleared");
        }
        result.map(|_| ())
    }

    async fn sign_in(&self, path: &str, body: serde_json::Value) -> Result<Identity> {
        let response = self.pipeline.execute(Method::POST, path, Some(body)).await?;
        let identity = response
            .as_ref()
            .and_then(Identity::from_envelope)
            .ok_or_else(|| {
                ClientError::unexpected_response("Sign-in response carried no identity")
            })?;
        self.session().authenticate(identity.clone());
        Ok(identity)
    }
}
