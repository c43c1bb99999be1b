//! Guild management action dispatch

use super::members::MemberDirectory;
use super::types::GuildMember;
use crate::auth::rbac::{ActionSet, ManagementAction, PermissionMatrix};
use crate::auth::session::{Identity, SessionStore};
use crate::sdk::client::RequestPipeline;
use crate::utils::error::{ClientError, Result};
use async_trait::async_trait;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Asks the actor to confirm an action before it is sent
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, action: ManagementAction, target: &GuildMember) -> bool;
}

/// Confirms everything; for scripted callers that confirmed upstream
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl Confirmer for AutoConfirm {
    async fn confirm(&self, _action: ManagementAction, _target: &GuildMember) -> bool {
        true
    }
}

/// Why an action was refused before reaching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The session is loading or signed out
    SessionNotReady,
    /// The target is the actor
    SelfTarget,
    /// The actor's role does not grant the action on the target's role
    NotPermitted,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Refusal::SessionNotReady => "Sign in to manage guild members.",
            Refusal::SelfTarget => "You cannot manage yourself.",
            Refusal::NotPermitted => "You do not have permission for this action.",
        };
        f.write_str(message)
    }
}

/// Result of a dispatch that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The backend accepted the action
    Completed { identity_refreshed: bool },
    /// The actor did not confirm
    Declined,
    /// Refused locally, nothing was sent
    Refused(Refusal),
    /// The session expired and could not be renewed mid-action
    SessionExpired,
}

impl DispatchOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, DispatchOutcome::Completed { .. })
    }
}

/// Sends management actions on behalf of the signed-in actor
pub struct ActionDispatcher {
    pipeline: Arc<RequestPipeline>,
    members: Arc<MemberDirectory>,
    confirmer: Arc<dyn Confirmer>,
    matrix: PermissionMatrix,
}

impl ActionDispatcher {
    pub fn new(
        pipeline: Arc<RequestPipeline>,
        members: Arc<MemberDirectory>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            pipeline,
            members,
            confirmer,
            matrix: PermissionMatrix::new(),
        }
    }

    fn session(&self) -> &SessionStore {
        self.pipeline.session()
    }

    /// Actions to render for `target`; empty for self or without a session
    pub fn available_actions(&self, target: &GuildMember) -> ActionSet {
        match self.session().identity() {
            Some(Identity {
                user_id,
                role: Some(actor),
                ..
            }) => self
                .matrix
                .actions_for(&user_id, actor, &target.user_id, target.role),
            _ => ActionSet::new(),
        }
    }

    /// Perform `action` on `target`
    ///
    /// The actor's role comes from the session. Request failures propagate
    /// untouched; local refusals and declined confirmations are outcomes.
    pub async fn dispatch(
        &self,
        action: ManagementAction,
        target: &GuildMember,
    ) -> Result<DispatchOutcome> {
        if let Err(refusal) = self.check(action, target) {
            debug!(?action, target = %target.user_id, %refusal, "Action refused locally");
            return Ok(DispatchOutcome::Refused(refusal));
        }

        if !self.confirmer.confirm(action, target).await {
            return Ok(DispatchOutcome::Declined);
        }

        let route = action.route();
        let body = json!({ "targetId": target.user_id });
        let response = match self
            .pipeline
            .execute_checked(route.method, route.path, Some(body))
            .await
        {
            Ok(response) => response,
            Err(ClientError::SessionExpired) => {
                warn!(?action, "Session expired during management action");
                return Ok(DispatchOutcome::SessionExpired);
            }
            Err(e) => return Err(e),
        };

        let refreshed = response.as_ref().and_then(Identity::from_envelope);
        let identity_refreshed = refreshed.is_some();
        if let Some(identity) = refreshed {
            self.session().authenticate(identity);
        }
        self.members.invalidate().await;

        info!(?action, target = %target.user_id, identity_refreshed, "Management action completed");
        Ok(DispatchOutcome::Completed { identity_refreshed })
    }

    fn check(
        &self,
        action: ManagementAction,
        target: &GuildMember,
    ) -> std::result::Result<(), Refusal> {
        let actor = self.session().identity().ok_or(Refusal::SessionNotReady)?;
        if actor.user_id == target.user_id {
            return Err(Refusal::SelfTarget);
        }
        let role = actor.role.ok_or(Refusal::NotPermitted)?;
        if !self.matrix.permits(role, target.role, action) {
            return Err(Refusal::NotPermitted);
        }
        Ok(())
    }
}
