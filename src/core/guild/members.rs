//! Cached guild member list

use super::types::GuildMember;
use crate::sdk::client::RequestPipeline;
use crate::utils::error::Result;
use moka::future::Cache;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

pub const MEMBERS_PATH: &str = "/guild/members";

/// Member list of the caller's guild
///
/// Reads are served from a short-lived cache. Anything that changes a role
/// or membership must call [`invalidate`](Self::invalidate) so the next read
/// reflects the new assignment.
#[derive(Clone)]
pub struct MemberDirectory {
    pipeline: Arc<RequestPipeline>,
    cache: Cache<String, Arc<Vec<GuildMember>>>,
}

impl MemberDirectory {
    pub fn new(pipeline: Arc<RequestPipeline>, ttl: Duration) -> Self {
        let cache = Cache::builder().max_capacity(1).time_to_live(ttl).build();
        Self { pipeline, cache }
    }

    /// Current member list, bare array or `{ payload }` envelope
    ///
    /// An expired session yields an empty list that is not cached.
    pub async fn list(&self) -> Result<Arc<Vec<GuildMember>>> {
        if let Some(members) = self.cache.get(MEMBERS_PATH).await {
            debug!(count = members.len(), "Member list cache hit");
            return Ok(members);
        }

        let fetched: Option<Vec<GuildMember>> =
            self.pipeline.fetch(Method::GET, MEMBERS_PATH, None).await?;
        match fetched {
            Some(members) => {
                let members = Arc::new(members);
                self.cache
                    .insert(MEMBERS_PATH.to_string(), members.clone())
                    .await;
                debug!(count = members.len(), "Member list fetched");
                Ok(members)
            }
            None => Ok(Arc::new(Vec::new())),
        }
    }

    /// Look a member up by id
    pub async fn find(&self, user_id: &str) -> Result<Option<GuildMember>> {
        let members = self.list().await?;
        Ok(members.iter().find(|m| m.user_id == user_id).cloned())
    }

    /// Drop the cached list
    pub async fn invalidate(&self) {
        self.cache.invalidate(MEMBERS_PATH).await;
        debug!("Member list cache invalidated");
    }
}
