//! Grid model: authoritative snake state
//!
//! Pure data. The body is only ever changed through `MovementEngine`; the
//! session controller flips the session flags and counters.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step on the grid (+y is up)
    pub fn to_ivec2(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::Y,
            Direction::Down => IVec2::NEG_Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Snake body plus per-session flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeModel {
    /// Head first; index 0 is the head, the last element is the tail
    pub(crate) body: Vec<IVec2>,
    /// Direction used by the last step
    pub direction: Direction,
    /// Buffered input, committed at the start of the next step
    pub pending_direction: Direction,
    /// Cell vacated by the last tail removal (interpolation only)
    pub(crate) last_tail_position: Option<IVec2>,
    /// Seconds between movement steps
    pub move_frequency: f32,
    pub is_invulnerable: bool,
    /// Movement and collisions are suspended while set
    pub is_respawning: bool,
    /// Session counters driving achievements
    pub gems_collected: u32,
    pub speed_ups_collected: u32,
}

impl SnakeModel {
    pub fn new(move_frequency: f32) -> Self {
        Self {
            body: Vec::new(),
            direction: Direction::Up,
            pending_direction: Direction::Up,
            last_tail_position: None,
            move_frequency,
            is_invulnerable: false,
            is_respawning: false,
            gems_collected: 0,
            speed_ups_collected: 0,
        }
    }

    pub fn body(&self) -> &[IVec2] {
        &self.body
    }

    pub fn head(&self) -> Option<IVec2> {
        self.body.first().copied()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn last_tail_position(&self) -> Option<IVec2> {
        self.last_tail_position
    }

    pub fn occupies(&self, cell: IVec2) -> bool {
        self.body.contains(&cell)
    }

    /// Back to baseline for a fresh session (body is reset by the engine)
    pub fn reset_session(&mut self, base_frequency: f32) {
        self.move_frequency = base_frequency;
        self.is_invulnerable = false;
        self.is_respawning = false;
        self.gems_collected = 0;
        self.speed_ups_collected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposites() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_eq!(dir.to_ivec2() + dir.opposite().to_ivec2(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_reset_session_clears_counters() {
        let mut model = SnakeModel::new(0.1);
        model.move_frequency = 0.08;
        model.is_invulnerable = true;
        model.gems_collected = 12;
        model.speed_ups_collected = 4;

        model.reset_session(0.1);
        assert_eq!(model.move_frequency, 0.1);
        assert!(!model.is_invulnerable);
        assert_eq!(model.gems_collected, 0);
        assert_eq!(model.speed_ups_collected, 0);
    }
}
