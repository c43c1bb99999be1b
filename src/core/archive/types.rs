//! Archive wire types

use crate::utils::error::{ClientError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Heroes in a deck
pub const TEAM_SIZE: usize = 3;
/// Skill casts that can be queued for one deck
pub const MAX_SKILL_RESERVATIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    S1,
    S2,
    Basic,
    Passive,
}

/// How well an attack strategy worked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackScore {
    Nice,
    Good,
    Try,
}

/// A queued skill, referring to a hero by position in the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillReservation {
    pub hero_index: usize,
    pub skill_type: SkillType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    /// Server-assigned key identifying the hero combination
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_key: Option<String>,
    pub heroes: [String; TEAM_SIZE],
    #[serde(default)]
    pub skill_reservation: Vec<SkillReservation>,
}

impl Deck {
    pub fn new(heroes: [String; TEAM_SIZE]) -> Self {
        Self {
            composition_key: None,
            heroes,
            skill_reservation: Vec::new(),
        }
    }

    /// Queue `skill_type` for the hero with id `hero_id`
    pub fn reserve(mut self, hero_id: &str, skill_type: SkillType) -> Result<Self> {
        let hero_index = self
            .heroes
            .iter()
            .position(|hero| hero == hero_id)
            .ok_or_else(|| ClientError::validation(format!("{} is not in this deck.", hero_id)))?;
        if self.skill_reservation.len() >= MAX_SKILL_RESERVATIONS {
            return Err(Self::too_many_reservations());
        }
        self.skill_reservation.push(SkillReservation {
            hero_index,
            skill_type,
        });
        Ok(self)
    }

    /// Check the deck before it is submitted
    pub fn validate(&self) -> Result<()> {
        let distinct: HashSet<&str> = self.heroes.iter().map(|h| h.trim()).collect();
        if distinct.len() != TEAM_SIZE || distinct.contains("") {
            return Err(ClientError::validation(format!(
                "Select {} different heroes.",
                TEAM_SIZE
            )));
        }
        if self.skill_reservation.len() > MAX_SKILL_RESERVATIONS {
            return Err(Self::too_many_reservations());
        }
        if let Some(bad) = self
            .skill_reservation
            .iter()
            .find(|r| r.hero_index >= TEAM_SIZE)
        {
            return Err(ClientError::validation(format!(
                "Skill reservation refers to hero {} of {}.",
                bad.hero_index, TEAM_SIZE
            )));
        }
        Ok(())
    }

    fn too_many_reservations() -> ClientError {
        ClientError::validation(format!(
            "At most {} skills can be reserved.",
            MAX_SKILL_RESERVATIONS
        ))
    }
}

/// An attack strategy posted against a defense deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedAttack {
    pub id: String,
    pub author_name: String,
    pub author_id: String,
    pub deck: Deck,
    #[serde(default)]
    pub description: String,
    pub score: AttackScore,
    #[serde(default)]
    pub is_picked: bool,
    pub created_at: DateTime<Utc>,
}

/// A defense deck with the attacks recorded against it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedDefense {
    pub id: String,
    pub deck: Deck,
    #[serde(default)]
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub attacks: Vec<ArchivedAttack>,
}

impl ArchivedDefense {
    /// Attacks the guild picked as recommended
    pub fn picked_attacks(&self) -> impl Iterator<Item = &ArchivedAttack> {
        self.attacks.iter().filter(|attack| attack.is_picked)
    }
}
