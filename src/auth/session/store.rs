//! Injectable session store

use super::types::{Identity, SessionState};
use crate::auth::rbac::Role;
use tokio::sync::watch;
use tracing::{debug, info};

/// Process-owned session state, observable by views
///
/// Writes are whole-state replacements. There is no way back into
/// `Loading` once the store has left it.
#[derive(Debug)]
pub struct SessionStore {
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Create a store in the initial `Loading` state
    pub fn init() -> Self {
        let (state, _) = watch::channel(SessionState::Loading);
        debug!("Session store initialized");
        Self { state }
    }

    /// Current state
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Identity of the signed-in user, if any
    pub fn identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    /// Guild role of the signed-in user, if any
    pub fn role(&self) -> Option<Role> {
        self.state.borrow().identity().and_then(|identity| identity.role)
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Receiver that observes every transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Wait until the initial profile fetch has settled
    pub async fn settled(&self) -> SessionState {
        let mut receiver = self.subscribe();
        match receiver.wait_for(|state| !state.is_loading()).await {
            Ok(state) => state.clone(),
            // The sender lives in `self`, so this only happens during teardown
            Err(_) => self.snapshot(),
        }
    }

    /// Enter `Authenticated`, replacing any previous identity wholesale
    pub fn authenticate(&self, identity: Identity) {
        let user_id = identity.user_id.clone();
        let role = identity.role;
        let previous = self.state.send_replace(SessionState::Authenticated(identity));
        info!(
            user_id = %user_id,
            role = ?role,
            from = previous.label(),
            "Session authenticated"
        );
    }

    /// Enter `Unauthenticated`
    ///
    /// Returns `true` if the store held a session (or was still loading).
    pub fn expire(&self) -> bool {
        let previous = self.state.send_replace(SessionState::Unauthenticated);
        let changed = previous != SessionState::Unauthenticated;
        if changed {
            info!(from = previous.label(), "Session cleared");
        }
        changed
    }

    /// Drop the store, closing every subscriber, and return the final state
    pub fn teardown(self) -> SessionState {
        let last = self.snapshot();
        debug!(state = last.label(), "Session store torn down");
        last
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::init()
    }
}
