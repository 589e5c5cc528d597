//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed cadence steps, timers advanced by elapsed-time deltas only
//! - Seeded RNG only
//! - Single-threaded; every mutation happens inside one `tick` call
//! - No rendering, audio or platform dependencies

pub mod achievements;
pub mod engine;
pub mod events;
pub mod model;
pub mod spawner;
pub mod state;
pub mod tick;

pub use achievements::{AchievementThresholds, Milestone, MilestoneTable};
pub use engine::{MovementEngine, START_SEGMENT, StepResult};
pub use events::{AchievementId, DeathReason, EffectKind, GameEvent, SoundCue};
pub use model::{Direction, SnakeModel};
pub use spawner::{ActiveItem, ItemSpawner, SpawnCycle, SpawnNotice};
pub use state::{SessionController, SessionPhase, SessionState};
pub use tick::score_for;
