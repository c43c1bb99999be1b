//! Archive endpoints

use super::types::{ArchivedDefense, Deck};
use crate::sdk::client::RequestPipeline;
use crate::utils::error::{ClientError, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

const PICK_PATH: &str = "/archive/pick";
const DEFENSE_PATH: &str = "/archive/defense";
const ATTACK_PATH: &str = "/archive/attack";

#[derive(Clone)]
pub struct ArchiveService {
    pipeline: Arc<RequestPipeline>,
}

impl ArchiveService {
    pub fn new(pipeline: Arc<RequestPipeline>) -> Self {
        Self { pipeline }
    }

    /// Defense decks picked by the guild, bare array or envelope
    pub async fn picked_decks(&self) -> Result<Vec<ArchivedDefense>> {
        let decks = self
            .pipeline
            .fetch_checked(Method::GET, PICK_PATH, None)
            .await?;
        Ok(decks.unwrap_or_default())
    }

    pub async fn register_defense(&self, deck: &Deck) -> Result<()> {
        deck.validate()?;
        self.pipeline
            .execute_checked(Method::POST, DEFENSE_PATH, Some(json!({ "deck": deck })))
            .await?;
        info!(heroes = ?deck.heroes, "Defense deck registered");
        Ok(())
    }

    /// Post an attack strategy against the defense `defense_id`
    pub async fn register_attack(
        &self,
        defense_id: &str,
        deck: &Deck,
        description: &str,
    ) -> Result<()> {
        if defense_id.trim().is_empty() {
            return Err(ClientError::validation("Choose a defense deck first."));
        }
        deck.validate()?;
        let body = json!({
            "defenseId": defense_id,
            "deck": deck,
            "description": description,
        });
        self.pipeline
            .execute_checked(Method::POST, ATTACK_PATH, Some(body))
            .await?;
        info!(defense_id, "Attack strategy registered");
        Ok(())
    }
}
