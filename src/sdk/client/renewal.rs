//! Single-flight credential renewal

use crate::utils::error::Result;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

/// Result of a renewal request that reached the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalOutcome {
    /// 2xx: the cookie jar now holds a fresh credential
    Renewed,
    /// Anything else: the refresh credential is gone too
    Rejected,
}

/// Serializes renewals so concurrent 401s share one refresh request
///
/// Each completed renewal bumps the epoch. A caller passes the epoch it saw
/// before sending its request; if a renewal finished since then, its 401
/// was answered by the older credential and the recorded outcome applies
/// instead of a new refresh.
#[derive(Debug, Default)]
pub struct RenewalGate {
    epoch: AtomicU64,
    last: Mutex<Option<RenewalOutcome>>,
}

impl RenewalGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of renewals completed so far
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Run `renew` unless a renewal already completed after `observed_epoch`
    ///
    /// Errors from `renew` (transport failures) are returned as-is and leave
    /// the epoch unchanged, so the next caller retries the refresh.
    pub async fn run<F, Fut>(&self, observed_epoch: u64, renew: F) -> Result<RenewalOutcome>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<RenewalOutcome>>,
    {
        let mut last = self.last.lock().await;

        if self.epoch() != observed_epoch {
            if let Some(outcome) = *last {
                debug!(?outcome, "Reusing renewal completed by a concurrent request");
                return Ok(outcome);
            }
        }

        let outcome = renew().await?;
        *last = Some(outcome);
        self.epoch.fetch_add(1, Ordering::AcqRel);
        Ok(outcome)
    }
}
