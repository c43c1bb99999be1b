//! Defense-deck archive: picked decks and attack strategies

mod service;
mod types;

pub use service::ArchiveService;
pub use types::{
    ArchivedAttack, ArchivedDefense, AttackScore, Deck, MAX_SKILL_RESERVATIONS, SkillReservation,
    SkillType, TEAM_SIZE,
};
