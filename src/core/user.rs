//! Account profile of the signed-in user

use crate::core::tag::TagCheck;
use crate::sdk::client::RequestPipeline;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::InputValidator;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

const USER_PATH: &str = "/user";
const NICKNAME_PATH: &str = "/user/nickname";
const CHECK_TAG_PATH: &str = "/user/check-tag";
const TAG_PATH: &str = "/user/tag";

/// Account details, not part of the session identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub nickname: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Profile reads and nickname/tag changes
///
/// A successful change ends the session: the identity the backend issued
/// still carries the old name, so the user signs in again.
#[derive(Clone)]
pub struct UserService {
    pipeline: Arc<RequestPipeline>,
}

impl UserService {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// `None` when the backend sent no profile
    pub async fn profile(&self) -> Result<Option<UserProfile>> {
        self.pipeline
            .fetch_checked(Method::GET, USER_PATH, None)
            .await
    }

    pub async fn update_nickname(&self, nickname: &str) -> Result<()> {
        InputValidator::validate_nickname(nickname)?;
        if let Some(current) = self.profile().await? {
            if current.nickname == nickname {
                return Err(ClientError::validation(
                    "Nickname is the same as the current one.",
                ));
            }
        }
        self.pipeline
            .execute_checked(
                Method::PATCH,
                NICKNAME_PATH,
                Some(json!({ "nickname": nickname })),
            )
            .await?;
        self.require_sign_in("nickname");
        Ok(())
    }

    /// Whether `tag` is free
    pub async fn check_tag(&self, tag: &str) -> Result<TagCheck> {
        InputValidator::validate_tag(tag)?;
        let response = self
            .pipeline
            .execute_checked(Method::POST, CHECK_TAG_PATH, Some(json!({ "tag": tag })))
            .await;
        TagCheck::from_response(response)
    }

    pub async fn update_tag(&self, tag: &str) -> Result<()> {
        InputValidator::validate_tag(tag)?;
        self.pipeline
            .execute_checked(Method::PATCH, TAG_PATH, Some(json!({ "tag": tag })))
            .await?;
        self.require_sign_in("tag");
        Ok(())
    }

    fn require_sign_in(&self, field: &str) {
        info!(field, "Profile updated, signing out");
        self.pipeline.session().expire();
    }
}
