//! Session configuration and difficulty selection
//!
//! Everything tunable about a session is supplied here at construction time.
//! Loaded from JSON when a host wants to override the defaults.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::achievements::AchievementThresholds;

/// Difficulty tiers; only used to pick the challenge-pattern pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a menu label. Unknown labels yield `None`, which selects the
    /// fallback challenge pool.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// A timed spawn cycle: first fire after `initial_delay`, then every `interval`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleTiming {
    pub initial_delay: f32,
    pub interval: f32,
}

/// Per-session tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Arena size in cells; movement bounds are half of this on each axis
    pub grid_size: IVec2,

    // === Cadence ===
    /// Seconds between steps at baseline
    pub base_move_frequency: f32,
    /// Seconds between steps while sped up
    pub speed_up_move_frequency: f32,
    /// Pause after a non-terminal death
    pub respawn_delay: f32,

    // === Lives ===
    pub starting_lives: u8,

    // === Spawning ===
    /// Chance (0-1) that eating food spawns the challenge pattern
    pub challenge_chance: f32,
    pub speed_up_cycle: CycleTiming,
    pub invulnerability_cycle: CycleTiming,

    // === Achievements ===
    pub achievements: AchievementThresholds,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_size: IVec2::new(GRID_WIDTH, GRID_HEIGHT),

            base_move_frequency: BASE_MOVE_FREQUENCY,
            speed_up_move_frequency: SPEED_UP_MOVE_FREQUENCY,
            respawn_delay: RESPAWN_DELAY,

            starting_lives: STARTING_LIVES,

            challenge_chance: CHALLENGE_CHANCE,
            speed_up_cycle: CycleTiming {
                initial_delay: SPEED_UP_INITIAL_DELAY,
                interval: SPEED_UP_INTERVAL,
            },
            invulnerability_cycle: CycleTiming {
                initial_delay: INVULNERABILITY_INITIAL_DELAY,
                interval: INVULNERABILITY_INTERVAL,
            },

            achievements: AchievementThresholds::default(),
        }
    }
}

impl SessionConfig {
    /// Load from JSON; omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        log::info!(
            "Loaded session config: grid {}x{}, base frequency {}s",
            config.grid_size.x,
            config.grid_size.y,
            config.base_move_frequency
        );
        Ok(config)
    }

    /// Half-width movement bounds (|x| <= bound.x, |y| <= bound.y)
    pub fn bounds(&self) -> IVec2 {
        self.grid_size / 2
    }
}
