//! Movement engine
//!
//! Advances the snake one cell per step, buffers direction input and checks
//! wall and self collisions. Growth is not handled here: a step only inserts
//! the new head, and the caller decides whether to call `remove_tail`.

use glam::IVec2;

use super::model::{Direction, SnakeModel};

/// Cells of the starting segment, head first
pub const START_SEGMENT: [IVec2; 4] = [
    IVec2::new(0, -5),
    IVec2::new(0, -6),
    IVec2::new(0, -7),
    IVec2::new(0, -8),
];

/// Outcome of a single movement step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Head inserted at this cell
    Moved(IVec2),
    /// Head would leave the grid
    HitWall(IVec2),
    /// Head would enter a body cell (tail included)
    HitBody(IVec2),
    /// Body was empty; nothing to move
    Stalled,
}

impl StepResult {
    pub fn is_moved(&self) -> bool {
        matches!(self, StepResult::Moved(_))
    }
}

/// Stateless stepping rules bound to a grid size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementEngine {
    /// Half-width bounds: a cell is inside when |x| <= x and |y| <= y
    bounds: IVec2,
}

impl MovementEngine {
    pub fn new(grid_size: IVec2) -> Self {
        Self {
            bounds: grid_size / 2,
        }
    }

    pub fn bounds(&self) -> IVec2 {
        self.bounds
    }

    pub fn in_bounds(&self, cell: IVec2) -> bool {
        cell.x.abs() <= self.bounds.x && cell.y.abs() <= self.bounds.y
    }

    /// Restore the four-cell starting segment facing up
    pub fn reset(&self, model: &mut SnakeModel) {
        model.body.clear();
        model.body.extend_from_slice(&START_SEGMENT);
        model.direction = Direction::Up;
        model.pending_direction = Direction::Up;
        model.last_tail_position = None;
    }

    /// Buffer a direction for the next step. Reversing onto the neck is
    /// silently ignored.
    pub fn set_input(&self, model: &mut SnakeModel, dir: Direction) {
        if dir != model.direction.opposite() {
            model.pending_direction = dir;
        }
    }

    /// Commit the buffered direction and insert the new head.
    ///
    /// Collision checks run against the body as it was before this step, so
    /// the tail cell still counts even though it may be vacated afterwards.
    /// Both checks are skipped while invulnerable or respawning.
    pub fn tick(&self, model: &mut SnakeModel) -> StepResult {
        model.direction = model.pending_direction;
        let Some(head) = model.head() else {
            log::error!("Movement step on an empty body");
            return StepResult::Stalled;
        };
        let new_head = head + model.direction.to_ivec2();

        if !model.is_invulnerable && !model.is_respawning {
            if !self.in_bounds(new_head) {
                return StepResult::HitWall(new_head);
            }
            if model.body.contains(&new_head) {
                return StepResult::HitBody(new_head);
            }
        }

        model.body.insert(0, new_head);
        StepResult::Moved(new_head)
    }

    /// Drop the tail cell, remembering where it was
    pub fn remove_tail(&self, model: &mut SnakeModel) {
        if let Some(tail) = model.body.pop() {
            model.last_tail_position = Some(tail);
        }
    }
}
