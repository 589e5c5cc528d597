//! Snake Arcade - grid-based snake simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, session flow)
//! - `config`: Session tuning and difficulty selection
//! - `content`: Data-driven item database and spawn patterns

pub mod config;
pub mod content;
pub mod sim;

pub use config::{Difficulty, SessionConfig};
pub use content::{ContentError, ContentPack};

/// Game configuration constants
pub mod consts {
    /// Seconds between movement steps at baseline speed
    pub const BASE_MOVE_FREQUENCY: f32 = 0.1;
    /// Seconds between movement steps while a speed-up is active
    pub const SPEED_UP_MOVE_FREQUENCY: f32 = 0.08;
    /// Pause after a non-terminal death before the snake moves again
    pub const RESPAWN_DELAY: f32 = 0.4;
    /// Lives granted at session start and on revive
    pub const STARTING_LIVES: u8 = 3;

    /// Default arena size in cells (bounds are half of this on each axis)
    pub const GRID_WIDTH: i32 = 22;
    pub const GRID_HEIGHT: i32 = 22;

    /// Probability that eating food spawns the challenge pattern
    pub const CHALLENGE_CHANCE: f32 = 0.2;

    /// Speed-up spawn cycle (seconds)
    pub const SPEED_UP_INITIAL_DELAY: f32 = 7.0;
    pub const SPEED_UP_INTERVAL: f32 = 14.0;
    /// Invulnerability spawn cycle (seconds)
    pub const INVULNERABILITY_INITIAL_DELAY: f32 = 5.0;
    pub const INVULNERABILITY_INTERVAL: f32 = 25.0;

    /// Fixed frame step used by the native driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
