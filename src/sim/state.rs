//! Session state and lifecycle
//!
//! `SessionController` owns the lives, score and timers of one game session,
//! plus the model, engine and spawner it drives. Lifecycle signals (start,
//! revive, back to menu) live here; the per-tick simulation is in `tick.rs`.

use glam::IVec2;

use super::engine::MovementEngine;
use super::events::GameEvent;
use super::model::{Direction, SnakeModel};
use super::spawner::{ItemSpawner, SpawnNotice};
use crate::config::{Difficulty, SessionConfig};
use crate::content::{ContentError, ContentPack};

/// Stored lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No session; waiting in menus
    Idle,
    /// Frozen after a death until the respawn delay elapses
    Respawning,
    /// Active gameplay
    Running,
    /// No lives left; waiting for a new session or a revive
    GameOver,
}

/// Externally visible state, including the powered-up sub-state of `Running`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Respawning,
    Running,
    /// Running with a speed-up or invulnerability in effect
    PoweredUp,
    GameOver,
}

pub struct SessionController {
    pub(super) config: SessionConfig,
    pub(super) engine: MovementEngine,
    pub(super) model: SnakeModel,
    pub(super) spawner: ItemSpawner,
    pub(super) phase: SessionPhase,
    pub(super) difficulty: Option<Difficulty>,

    pub(super) lives: u8,
    pub(super) score: u64,

    /// Time accumulated toward the next movement step
    pub(super) move_timer: f32,
    /// Remaining power-up time (shared by all power-up kinds)
    pub(super) power_up_timer: f32,
    pub(super) respawn_timer: f32,

    /// Events queued since the last drain
    pub(super) events: Vec<GameEvent>,
}

impl SessionController {
    /// Build an idle controller. The content pack is validated up front.
    pub fn new(config: SessionConfig, content: ContentPack, seed: u64) -> Result<Self, ContentError> {
        content.validate()?;

        let engine = MovementEngine::new(config.grid_size);
        let mut model = SnakeModel::new(config.base_move_frequency);
        engine.reset(&mut model);
        let spawner = ItemSpawner::new(content, &config, seed);

        Ok(Self {
            lives: config.starting_lives,
            config,
            engine,
            model,
            spawner,
            phase: SessionPhase::Idle,
            difficulty: Some(Difficulty::Medium),
            score: 0,
            move_timer: 0.0,
            power_up_timer: 0.0,
            respawn_timer: 0.0,
            events: Vec::new(),
        })
    }

    /// Chosen before `start_session`; `None` selects the fallback pool
    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        self.difficulty = difficulty;
    }

    /// New game: full lives, zero score, baseline snake, fresh spawner
    pub fn start_session(&mut self) {
        self.score = 0;
        self.lives = self.config.starting_lives;
        self.emit(GameEvent::LivesChanged {
            remaining: self.lives,
        });
        self.emit(GameEvent::ScoreChanged { total: 0 });

        self.model.reset_session(self.config.base_move_frequency);
        self.engine.reset(&mut self.model);
        self.clear_timers();

        self.spawner.reset();
        self.spawner
            .initialize(self.engine.bounds(), self.model.body(), self.difficulty);
        self.flush_spawn_notices();

        self.phase = SessionPhase::Running;
        log::info!(
            "Session started ({})",
            self.difficulty.map_or("default", |d| d.as_str())
        );
    }

    /// Back to the menu from any state
    pub fn return_to_menu(&mut self) {
        self.spawner.reset();
        self.flush_spawn_notices();
        self.model.reset_session(self.config.base_move_frequency);
        self.engine.reset(&mut self.model);
        self.clear_timers();
        self.phase = SessionPhase::Idle;
        log::info!("Session returned to menu");
    }

    /// Granted continue after game over: lives are fully restocked
    pub fn revive(&mut self) {
        if self.phase != SessionPhase::GameOver {
            log::warn!("Revive ignored in {:?}", self.phase);
            return;
        }
        self.lives = self.config.starting_lives;
        self.emit(GameEvent::LivesChanged {
            remaining: self.lives,
        });
        log::info!("Player revived with {} lives", self.lives);
        self.start_respawn_sequence();
    }

    /// Direction intent from the input source
    pub fn set_input(&mut self, direction: Direction) {
        self.engine.set_input(&mut self.model, direction);
    }

    /// An item's lifespan ran out in the presentation layer
    pub fn notify_item_expired(&mut self, position: IVec2) {
        self.spawner.on_item_expired(position);
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            SessionPhase::Idle => SessionState::Idle,
            SessionPhase::Respawning => SessionState::Respawning,
            SessionPhase::GameOver => SessionState::GameOver,
            SessionPhase::Running if self.is_powered_up() => SessionState::PoweredUp,
            SessionPhase::Running => SessionState::Running,
        }
    }

    pub fn is_powered_up(&self) -> bool {
        self.model.move_frequency != self.config.base_move_frequency || self.model.is_invulnerable
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn model(&self) -> &SnakeModel {
        &self.model
    }

    pub fn spawner(&self) -> &ItemSpawner {
        &self.spawner
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub(super) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Mirror spawner registry changes as presentation events
    pub(super) fn flush_spawn_notices(&mut self) {
        for notice in self.spawner.drain_notices() {
            let event = match notice {
                SpawnNotice::Spawned { position, item } => GameEvent::ItemSpawned { position, item },
                SpawnNotice::Despawned { position } => GameEvent::ItemDestroyed { position },
            };
            self.events.push(event);
        }
    }

    /// Snake back to the start segment, frozen for the respawn delay
    pub(super) fn start_respawn_sequence(&mut self) {
        self.engine.reset(&mut self.model);
        self.model.is_respawning = true;
        self.respawn_timer = self.config.respawn_delay;
        self.move_timer = 0.0;
        self.phase = SessionPhase::Respawning;
    }

    fn clear_timers(&mut self) {
        self.move_timer = 0.0;
        self.power_up_timer = 0.0;
        self.respawn_timer = 0.0;
    }
}
