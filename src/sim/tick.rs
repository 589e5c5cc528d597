//! Fixed-cadence session tick
//!
//! One call per host frame. Order within a tick is fixed: respawn countdown,
//! then power-up countdown, then the movement accumulator, then item
//! interaction for the step that just happened.

use glam::IVec2;

use super::engine::StepResult;
use super::events::{AchievementId, DeathReason, EffectKind, GameEvent, SoundCue};
use super::state::{SessionController, SessionPhase};
use crate::content::{ItemKind, ItemType, PowerUpEffect};

/// What a movement step did to the body length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepOutcome {
    /// Plain move; the tail is trimmed
    Moved,
    /// Ate something; the tail stays
    Grew,
    /// Died during interaction; the body was already reset
    Died,
}

/// Points for a collectible: base value scaled by body length at pickup
pub fn score_for(score_value: u64, body_len: usize) -> u64 {
    score_value * body_len as u64
}

impl SessionController {
    /// Advance the session by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        match self.phase {
            SessionPhase::Respawning => {
                self.respawn_timer -= dt;
                if self.respawn_timer <= 0.0 {
                    self.model.is_respawning = false;
                    self.phase = SessionPhase::Running;
                    if let Some(head) = self.model.head() {
                        self.emit(GameEvent::Effect {
                            kind: EffectKind::Go,
                            position: head,
                        });
                    }
                    log::info!("Respawn complete");
                }
                self.spawner.update(dt, self.model.body());
                self.flush_spawn_notices();
                return;
            }
            SessionPhase::Running => {}
            SessionPhase::Idle | SessionPhase::GameOver => return,
        }

        if self.is_powered_up() {
            self.power_up_timer -= dt;
            if self.power_up_timer <= 0.0 {
                // Only a speed change is audible
                if self.model.move_frequency != self.config.base_move_frequency {
                    self.emit(GameEvent::Sound(SoundCue::SpeedDown));
                    self.model.move_frequency = self.config.base_move_frequency;
                }
                self.model.is_invulnerable = false;
                log::debug!("Power-up expired");
            }
        }

        // At most one step per tick, however large dt is
        self.move_timer += dt;
        if self.move_timer >= self.model.move_frequency {
            self.move_timer = 0.0;
            self.perform_movement_step();
        }

        if self.phase != SessionPhase::GameOver {
            self.spawner.update(dt, self.model.body());
        }
        self.flush_spawn_notices();
    }

    fn perform_movement_step(&mut self) {
        let head = match self.engine.tick(&mut self.model) {
            StepResult::Moved(head) => head,
            blocked => {
                log::debug!("Movement blocked: {:?}", blocked);
                self.handle_death(DeathReason::Collision);
                return;
            }
        };

        let outcome = match self.spawner.item_at(head).map(|active| active.item.clone()) {
            Some(item) => self.handle_item_interaction(&item, head),
            None => StepOutcome::Moved,
        };

        match outcome {
            StepOutcome::Moved => self.engine.remove_tail(&mut self.model),
            StepOutcome::Grew => self.check_growth_achievements(),
            StepOutcome::Died => {}
        }
    }

    fn handle_item_interaction(&mut self, item: &ItemType, position: IVec2) -> StepOutcome {
        match item.kind {
            ItemKind::Collectible => {
                self.model.gems_collected += 1;
                let gems = self.model.gems_collected;
                self.check_milestone(self.config.achievements.gems.hit(gems));

                let points = score_for(item.score_value, self.model.len());
                self.score += points;
                self.emit(GameEvent::ScoreChanged { total: self.score });
                self.emit(GameEvent::ScoreAdded {
                    amount: points,
                    position,
                });

                if item.precious {
                    self.emit(GameEvent::PreciousGemEaten);
                    self.spawner.arm_fuses();
                }
                self.emit(GameEvent::Sound(if item.precious {
                    SoundCue::PreciousFoodCollect
                } else {
                    SoundCue::FoodCollect
                }));

                self.spawner.remove_item(position);
                self.emit(GameEvent::ItemDestroyed { position });
                self.spawner.on_food_collected(self.model.body());
                StepOutcome::Grew
            }
            ItemKind::Obstacle => {
                if self.model.is_invulnerable || self.model.is_respawning {
                    return StepOutcome::Moved;
                }
                if item.explosive {
                    self.emit(GameEvent::Sound(SoundCue::Explode));
                    self.check_milestone(Some(AchievementId::InstaDie));
                } else {
                    self.emit(GameEvent::Sound(SoundCue::RockHit));
                }
                self.handle_death(DeathReason::Obstacle(item.name.clone()));
                StepOutcome::Died
            }
            ItemKind::PowerUp(effect) => {
                self.apply_power_up(effect, item.effect_duration, position);
                self.spawner.remove_item(position);
                self.emit(GameEvent::ItemDestroyed { position });
                StepOutcome::Moved
            }
        }
    }

    fn apply_power_up(&mut self, effect: PowerUpEffect, duration: f32, position: IVec2) {
        self.emit(GameEvent::Sound(SoundCue::SpeedUp));
        self.power_up_timer = duration;

        match effect {
            PowerUpEffect::SpeedUp => {
                self.model.move_frequency = self.config.speed_up_move_frequency;
                self.model.speed_ups_collected += 1;
                let count = self.model.speed_ups_collected;
                self.check_milestone(self.config.achievements.speed_ups.hit(count));
                self.emit(GameEvent::Effect {
                    kind: EffectKind::SpeedUp,
                    position,
                });
            }
            PowerUpEffect::Invulnerable => {
                self.model.is_invulnerable = true;
                self.emit(GameEvent::Effect {
                    kind: EffectKind::Invulnerable,
                    position,
                });
            }
        }
        log::debug!("Power-up {:?} for {}s", effect, duration);
    }

    fn handle_death(&mut self, reason: DeathReason) {
        log::info!("Player died: {}", reason.as_str());
        self.emit(GameEvent::Sound(SoundCue::GameOver));
        self.emit(GameEvent::PlayerDied { reason });

        self.lives = self.lives.saturating_sub(1);
        self.emit(GameEvent::LivesChanged {
            remaining: self.lives,
        });

        if self.lives > 0 {
            self.start_respawn_sequence();
        } else {
            self.phase = SessionPhase::GameOver;
            self.emit(GameEvent::GameOver {
                final_score: self.score,
            });
            log::info!("Game over, final score {}", self.score);
        }
    }

    fn check_growth_achievements(&mut self) {
        let len = self.model.len() as u32;
        self.check_milestone(self.config.achievements.body_length.hit(len));
    }

    fn check_milestone(&mut self, hit: Option<AchievementId>) {
        if let Some(id) = hit {
            log::info!("Achievement progress: {}", id.as_str());
            self.emit(GameEvent::AchievementProgress(id));
        }
    }
}
