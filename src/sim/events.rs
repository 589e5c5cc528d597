//! Outbound simulation events
//!
//! The session controller queues these during a tick; the presentation layer,
//! audio and achievement tracker drain them afterwards. Nothing flows back
//! into the core except direction intents.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Sound cues the audio layer may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Regular food eaten
    FoodCollect,
    /// Precious gem eaten
    PreciousFoodCollect,
    /// Killed by a non-explosive obstacle
    RockHit,
    /// Killed by an explosive obstacle
    Explode,
    /// Any power-up collected
    SpeedUp,
    /// Speed-up expired
    SpeedDown,
    /// Played on every death
    GameOver,
}

/// Short-lived visual effects anchored to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Respawn finished, movement resumes
    Go,
    SpeedUp,
    Invulnerable,
}

impl EffectKind {
    pub fn label(&self) -> &'static str {
        match self {
            EffectKind::Go => "Go!",
            EffectKind::SpeedUp => "Speed Up!",
            EffectKind::Invulnerable => "Invulnerable!",
        }
    }
}

/// Why the snake died
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathReason {
    /// Hit a wall or its own body
    Collision,
    /// Ran into the named obstacle item
    Obstacle(String),
}

impl DeathReason {
    pub fn as_str(&self) -> &str {
        match self {
            DeathReason::Collision => "Collision",
            DeathReason::Obstacle(name) => name,
        }
    }
}

/// Achievement progress ids understood by the external tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    FoodMinor,
    FoodMedium,
    FoodMajor,
    SizeSmall,
    SizeMedium,
    SizeLarge,
    SpeedMinor,
    SpeedMedium,
    SpeedMajor,
    SpeedMaximal,
    /// Killed by an explosive obstacle
    InstaDie,
}

impl AchievementId {
    /// Stable id used by the achievement catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FoodMinor => "FoodC_m",
            AchievementId::FoodMedium => "FoodC_x",
            AchievementId::FoodMajor => "FoodC_xx",
            AchievementId::SizeSmall => "Size_x",
            AchievementId::SizeMedium => "Size_xx",
            AchievementId::SizeLarge => "Size_xxl",
            AchievementId::SpeedMinor => "SpeedC_m",
            AchievementId::SpeedMedium => "SpeedC_x",
            AchievementId::SpeedMajor => "SpeedC_xx",
            AchievementId::SpeedMaximal => "SpeedC_xxl",
            AchievementId::InstaDie => "InstaDie",
        }
    }
}

/// Everything the core reports to the outside world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Total score after a change
    ScoreChanged { total: u64 },
    /// Points awarded at a cell (floating score text)
    ScoreAdded { amount: u64, position: IVec2 },
    LivesChanged { remaining: u8 },
    Effect { kind: EffectKind, position: IVec2 },
    Sound(SoundCue),
    AchievementProgress(AchievementId),
    PlayerDied { reason: DeathReason },
    /// Terminal: no lives left
    GameOver { final_score: u64 },
    /// A precious gem was eaten; armed fuses start burning
    PreciousGemEaten,
    /// An item appeared; presentation should create its handle
    ItemSpawned { position: IVec2, item: String },
    /// Presentation should destroy the handle at this cell
    ItemDestroyed { position: IVec2 },
}
