//! Achievement milestone tables
//!
//! Milestones are exact-match: a counter fires a milestone only on the update
//! that makes it equal to the threshold. Counters only ever step by one, so
//! nothing is skipped. De-duplicating already unlocked achievements is the
//! tracker's job, not ours.

use serde::{Deserialize, Serialize};

use super::events::AchievementId;

/// A single counter value that unlocks an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub count: u32,
    pub id: AchievementId,
}

/// Milestones for one counter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MilestoneTable {
    pub milestones: Vec<Milestone>,
}

impl MilestoneTable {
    pub fn new(milestones: &[(u32, AchievementId)]) -> Self {
        Self {
            milestones: milestones
                .iter()
                .map(|&(count, id)| Milestone { count, id })
                .collect(),
        }
    }

    /// Achievement unlocked by the counter reaching exactly `count`
    pub fn hit(&self, count: u32) -> Option<AchievementId> {
        self.milestones
            .iter()
            .find(|m| m.count == count)
            .map(|m| m.id)
    }
}

/// All milestone tables checked by the session controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementThresholds {
    /// Gems (collectibles) eaten this session
    pub gems: MilestoneTable,
    /// Body length right after a growing move
    pub body_length: MilestoneTable,
    /// Speed-ups collected this session
    pub speed_ups: MilestoneTable,
}

impl Default for AchievementThresholds {
    fn default() -> Self {
        use AchievementId::*;
        Self {
            gems: MilestoneTable::new(&[(15, FoodMinor), (25, FoodMedium), (40, FoodMajor)]),
            body_length: MilestoneTable::new(&[(25, SizeSmall), (40, SizeMedium), (60, SizeLarge)]),
            speed_ups: MilestoneTable::new(&[
                (3, SpeedMinor),
                (10, SpeedMedium),
                (25, SpeedMajor),
                (40, SpeedMaximal),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let thresholds = AchievementThresholds::default();
        assert_eq!(thresholds.gems.hit(14), None);
        assert_eq!(thresholds.gems.hit(15), Some(AchievementId::FoodMinor));
        assert_eq!(thresholds.gems.hit(16), None);
        assert_eq!(thresholds.gems.hit(41), None);
    }

    #[test]
    fn test_default_tables() {
        let thresholds = AchievementThresholds::default();
        assert_eq!(thresholds.body_length.hit(60), Some(AchievementId::SizeLarge));
        assert_eq!(thresholds.speed_ups.hit(3), Some(AchievementId::SpeedMinor));
        assert_eq!(thresholds.speed_ups.hit(40), Some(AchievementId::SpeedMaximal));
        assert_eq!(thresholds.speed_ups.hit(4), None);
    }
}
