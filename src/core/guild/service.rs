//! Guild lifecycle and guild-level settings

use super::members::MemberDirectory;
use super::types::GuildInfo;
use crate::auth::session::{Identity, SessionStore};
use crate::core::tag::TagCheck;
use crate::sdk::client::RequestPipeline;
use crate::utils::error::Result;
use crate::utils::validation::InputValidator;
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

const GUILD_PATH: &str = "/guild";
const JOIN_PATH: &str = "/guild/join";
const NOTICE_PATH: &str = "/guild/management/notice";
const CHECK_TAG_PATH: &str = "/guild/management/check-tag";
const TAG_PATH: &str = "/guild/management/tag";

/// Guild operations outside member management
#[derive(Clone)]
pub struct GuildService {
    pipeline: Arc<RequestPipeline>,
    members: Arc<MemberDirectory>,
}

impl GuildService {
    pub fn new(pipeline: Arc<RequestPipeline>, members: Arc<MemberDirectory>) -> Self {
        Self { pipeline, members }
    }

    fn session(&self) -> &SessionStore {
        self.pipeline.session()
    }

    /// Guild overview; `None` without a session or outside a guild
    ///
    /// Like every call here, fails with `SessionExpired` when the session
    /// could not be renewed.
    pub async fn info(&self) -> Result<Option<GuildInfo>> {
        let in_guild = self
            .session()
            .identity()
            .is_some_and(|identity| identity.has_guild());
        if !in_guild {
            return Ok(None);
        }
        self.pipeline
            .fetch_checked(Method::GET, GUILD_PATH, None)
            .await
    }

    /// Found a guild; the caller becomes its master
    ///
    /// Returns whether the response re-issued the caller's identity.
    pub async fn create(&self, name: &str) -> Result<bool> {
        InputValidator::validate_guild_name(name)?;
        let response = self
            .pipeline
            .execute_checked(Method::POST, GUILD_PATH, Some(json!({ "name": name })))
            .await?;
        info!(name, "Guild created");
        Ok(self.apply_identity(response).await)
    }

    /// Join a guild with an invite code
    pub async fn join(&self, code: &str) -> Result<bool> {
        let code = code.trim();
        InputValidator::validate_invite_code(code)?;
        let response = self
            .pipeline
            .execute_checked(Method::POST, JOIN_PATH, Some(json!({ "code": code })))
            .await?;
        info!("Joined guild");
        Ok(self.apply_identity(response).await)
    }

    pub async fn update_notice(&self, notice: &str) -> Result<()> {
        self.pipeline
            .execute_checked(
                Method::PATCH,
                NOTICE_PATH,
                Some(json!({ "notice": notice })),
            )
            .await?;
        info!("Guild notice updated");
        Ok(())
    }

    /// Whether `tag` is free for this guild
    pub async fn check_tag(&self, tag: &str) -> Result<TagCheck> {
        InputValidator::validate_tag(tag)?;
        let response = self
            .pipeline
            .execute_checked(Method::POST, CHECK_TAG_PATH, Some(json!({ "tag": tag })))
            .await;
        TagCheck::from_response(response)
    }

    /// Change the guild tag; check it with [`check_tag`](Self::check_tag) first
    pub async fn update_tag(&self, tag: &str) -> Result<()> {
        InputValidator::validate_tag(tag)?;
        self.pipeline
            .execute_checked(Method::PATCH, TAG_PATH, Some(json!({ "tag": tag })))
            .await?;
        self.members.invalidate().await;
        Ok(())
    }

    async fn apply_identity(&self, response: Option<serde_json::Value>) -> bool {
        match response.as_ref().and_then(Identity::from_envelope) {
            Some(identity) => {
                self.session().authenticate(identity);
                self.members.invalidate().await;
                true
            }
            None => false,
        }
    }
}
