//! Request pipeline with one transparent renewal per call

use super::navigation::{Navigator, RedirectPolicy};
use super::renewal::{RenewalGate, RenewalOutcome};
use super::response::{decode_payload, parse_success_body};
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use crate::auth::session::SessionStore;
use crate::config::ClientConfig;
use crate::utils::error::{ClientError, Result, extract_message};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Credential renewal endpoint
pub const REFRESH_PATH: &str = "/auth/refresh";

/// How the first response of a call settled
enum FirstAttempt {
    Settled(Result<Option<Value>>),
    RenewalRequired,
}

/// Settle the first response; a 401 asks for renewal
fn settle_first(response: ApiResponse) -> FirstAttempt {
    if response.is_unauthorized() {
        FirstAttempt::RenewalRequired
    } else {
        FirstAttempt::Settled(settle(response))
    }
}

/// Settle a response with no renewal left; a 401 is an ordinary failure
fn settle(response: ApiResponse) -> Result<Option<Value>> {
    if response.is_no_content() {
        return Ok(None);
    }
    if response.is_success() {
        return Ok(parse_success_body(&response.body));
    }
    Err(ClientError::request(
        response.status,
        extract_message(&response.body),
    ))
}

fn decode_fetched<T: DeserializeOwned>(value: Option<Value>) -> Result<Option<T>> {
    match value {
        Some(value) if value.get("payload").is_some_and(Value::is_null) => Ok(None),
        Some(value) => decode_payload(value).map(Some),
        None => Ok(None),
    }
}

/// Wraps every backend call
pub struct RequestPipeline {
    transport: Arc<dyn Transport>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    policy: RedirectPolicy,
    renewal: RenewalGate,
}

impl RequestPipeline {
    pub fn new(
        transport: Arc<dyn Transport>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
        policy: RedirectPolicy,
    ) -> Self {
        Self {
            transport,
            session,
            navigator,
            policy,
            renewal: RenewalGate::new(),
        }
    }

    /// Pipeline over the `reqwest` transport described by `config`
    pub fn from_config(
        config: &ClientConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config)?);
        let policy = RedirectPolicy::new(&config.entry_path, &config.register_path);
        Ok(Self::new(transport, session, navigator, policy))
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Execute one logical call
    ///
    /// Returns the parsed body, or `None` for 204, empty or non-JSON success
    /// bodies and for a session that could not be renewed. A 401 triggers at
    /// most one renewal; the retry's outcome is final.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        match self.execute_checked(method, path, body).await {
            Err(ClientError::SessionExpired) => Ok(None),
            other => other,
        }
    }

    /// [`execute`](Self::execute), failing with [`ClientError::SessionExpired`]
    /// when the session could not be renewed
    ///
    /// For calls whose success must not be confused with a lost session.
    pub async fn execute_checked(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<Value>> {
        let request = ApiRequest::new(method, path, body);
        let epoch = self.renewal.epoch();

        let first = self.transport.send(&request).await?;
        match settle_first(first) {
            FirstAttempt::Settled(result) => result,
            FirstAttempt::RenewalRequired => {
                debug!(path = %request.path, "Session expired, renewing");
                match self.renew(epoch).await? {
                    RenewalOutcome::Renewed => {
                        let retry = self.transport.send(&request).await?;
                        settle(retry)
                    }
                    RenewalOutcome::Rejected => {
                        self.end_session();
                        Err(ClientError::SessionExpired)
                    }
                }
            }
        }
    }

    /// [`execute`](Self::execute), abandoned when `cancel` fires
    ///
    /// A cancelled call performs no further session writes.
    pub async fn execute_cancellable(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        cancel: &CancellationToken,
    ) -> Result<Option<Value>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            result = self.execute(method, path, body) => result,
        }
    }

    /// Execute and decode a bare or enveloped payload
    ///
    /// `{ "payload": null }` is treated like an empty body.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<T>> {
        decode_fetched(self.execute(method, path, body).await?)
    }

    /// [`fetch`](Self::fetch) over [`execute_checked`](Self::execute_checked)
    pub async fn fetch_checked<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Option<T>> {
        decode_fetched(self.execute_checked(method, path, body).await?)
    }

    async fn renew(&self, observed_epoch: u64) -> Result<RenewalOutcome> {
        self.renewal
            .run(observed_epoch, || async {
                let request = ApiRequest::new(Method::PATCH, REFRESH_PATH, None);
                let response = self.transport.send(&request).await?;
                Ok(if response.is_success() {
                    RenewalOutcome::Renewed
                } else {
                    RenewalOutcome::Rejected
                })
            })
            .await
    }

    /// Irrecoverable 401: clear the session and leave the current page
    fn end_session(&self) {
        warn!("Credential renewal rejected, session expired");
        self.session.expire();

        let current = self.navigator.current_path();
        if self.policy.should_redirect(&current) {
            self.navigator.navigate(&self.policy.entry_path);
        }
    }
}
