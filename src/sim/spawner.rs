//! Item spawner
//!
//! Owns the registry of items on the grid (keyed by cell), places spawn
//! patterns at round-robin anchors, and runs the timed power-up cycles as
//! plain countdowns advanced by `update`.
//!
//! The spawner never touches presentation. It queues `SpawnNotice`s that the
//! session controller forwards, so a renderer can keep its own cell->handle
//! map in parallel with ours.

use std::collections::HashMap;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{CycleTiming, Difficulty, SessionConfig};
use crate::content::{ContentPack, ItemType, SpawnPattern};

/// An item currently on the grid
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveItem {
    pub item: ItemType,
    /// Seconds until the item burns out, once armed
    pub fuse: Option<f32>,
}

/// Registry changes the presentation layer needs to mirror
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnNotice {
    Spawned { position: IVec2, item: String },
    /// Destroy the presentation handle at this cell
    Despawned { position: IVec2 },
}

/// Repeating countdown replacing a wait-then-loop coroutine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnCycle {
    pub remaining: f32,
    pub interval: f32,
}

impl SpawnCycle {
    pub fn new(timing: CycleTiming) -> Self {
        Self {
            remaining: timing.initial_delay,
            interval: timing.interval,
        }
    }

    /// Advance by `dt`; true when the cycle fires this update
    pub fn advance(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining += self.interval.max(dt);
            true
        } else {
            false
        }
    }
}

pub struct ItemSpawner {
    content: ContentPack,
    rng: Pcg32,
    challenge_chance: f32,
    speed_up_timing: CycleTiming,
    invulnerability_timing: CycleTiming,

    /// Half-width bounds, same as the movement engine's: a cell is placeable
    /// when |x| <= x and |y| <= y, so items may sit on the outermost ring
    bounds: IVec2,
    is_active: bool,
    items: HashMap<IVec2, ActiveItem>,
    /// Last anchor index used per primary item name
    last_anchor: HashMap<String, usize>,

    // Current session picks
    point_map: Option<usize>,
    challenge: Option<SpawnPattern>,

    speed_up_cycle: Option<SpawnCycle>,
    invulnerability_cycle: Option<SpawnCycle>,

    notices: Vec<SpawnNotice>,
}

impl ItemSpawner {
    pub fn new(content: ContentPack, config: &SessionConfig, seed: u64) -> Self {
        Self {
            content,
            rng: Pcg32::seed_from_u64(seed),
            challenge_chance: config.challenge_chance,
            speed_up_timing: config.speed_up_cycle,
            invulnerability_timing: config.invulnerability_cycle,
            bounds: config.bounds(),
            is_active: false,
            items: HashMap::new(),
            last_anchor: HashMap::new(),
            point_map: None,
            challenge: None,
            speed_up_cycle: None,
            invulnerability_cycle: None,
            notices: Vec::new(),
        }
    }

    /// Start a session: pick this session's spawn map and challenge pattern,
    /// drop the starting food and arm both power-up cycles.
    pub fn initialize(&mut self, bounds: IVec2, body: &[IVec2], difficulty: Option<Difficulty>) {
        self.bounds = bounds;
        self.is_active = true;
        self.choose_patterns(difficulty);

        if let Some(pattern) = self.content.starting_food.clone() {
            self.spawn_pattern(&pattern, body);
        }

        self.speed_up_cycle = Some(SpawnCycle::new(self.speed_up_timing));
        self.invulnerability_cycle = Some(SpawnCycle::new(self.invulnerability_timing));
    }

    /// Stop all cycles and clear the board. Safe to call repeatedly.
    pub fn reset(&mut self) {
        self.is_active = false;
        self.speed_up_cycle = None;
        self.invulnerability_cycle = None;

        let mut cleared: Vec<IVec2> = self.items.drain().map(|(pos, _)| pos).collect();
        cleared.sort_by_key(|p| (p.x, p.y));
        self.notices
            .extend(cleared.into_iter().map(|position| SpawnNotice::Despawned { position }));

        self.last_anchor.clear();
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Replenish food after a pickup, sometimes as the challenge pattern
    pub fn on_food_collected(&mut self, body: &[IVec2]) {
        if !self.is_active {
            return;
        }

        let roll: f32 = self.rng.random();
        let pattern = match &self.challenge {
            Some(challenge) if roll < self.challenge_chance => Some(challenge.clone()),
            _ => self.content.regular_food.clone(),
        };
        if let Some(pattern) = pattern {
            self.spawn_pattern(&pattern, body);
        }
    }

    pub fn item_at(&self, position: IVec2) -> Option<&ActiveItem> {
        self.items.get(&position)
    }

    /// Forget the item at `position`. No despawn notice is queued; the
    /// caller owns the presentation handle from here on.
    pub fn remove_item(&mut self, position: IVec2) -> Option<ActiveItem> {
        self.items.remove(&position)
    }

    /// Lifespan ran out outside the core (the handle is already gone)
    pub fn on_item_expired(&mut self, position: IVec2) {
        self.items.remove(&position);
    }

    /// A precious gem was eaten: light every fuse that is not burning yet
    pub fn arm_fuses(&mut self) {
        for active in self.items.values_mut() {
            if active.fuse.is_none() {
                active.fuse = active.item.lifespan;
            }
        }
    }

    /// Advance spawn cycles and burning fuses
    pub fn update(&mut self, dt: f32, body: &[IVec2]) {
        if !self.is_active {
            return;
        }

        let speed_up_due = self.speed_up_cycle.as_mut().is_some_and(|c| c.advance(dt));
        let invulnerability_due = self
            .invulnerability_cycle
            .as_mut()
            .is_some_and(|c| c.advance(dt));

        if speed_up_due && let Some(pattern) = self.content.speed_up.clone() {
            self.spawn_pattern(&pattern, body);
        }
        if invulnerability_due && let Some(pattern) = self.content.invulnerability.clone() {
            self.spawn_pattern(&pattern, body);
        }

        let mut burnt = Vec::new();
        for (pos, active) in self.items.iter_mut() {
            if let Some(fuse) = active.fuse.as_mut() {
                *fuse -= dt;
                if *fuse <= 0.0 {
                    burnt.push(*pos);
                }
            }
        }
        burnt.sort_by_key(|p| (p.x, p.y));
        for position in burnt {
            self.items.remove(&position);
            log::debug!("Item at {:?} burnt out", position);
            self.notices.push(SpawnNotice::Despawned { position });
        }
    }

    /// Place `pattern` at the first valid anchor after the last one used for
    /// its primary item. Returns false when no anchor fits; that is normal on
    /// a crowded board.
    pub fn spawn_pattern(&mut self, pattern: &SpawnPattern, body: &[IVec2]) -> bool {
        let Some(primary) = pattern.primary() else {
            log::error!("Pattern '{}' has no items", pattern.name);
            return false;
        };
        if let Some(entry) = pattern
            .items
            .iter()
            .find(|e| self.content.item(&e.item).is_none())
        {
            log::error!(
                "Pattern '{}' references unknown item '{}'",
                pattern.name,
                entry.item
            );
            return false;
        }
        if let Some(offset) = pattern.duplicate_offset() {
            log::error!(
                "Pattern '{}' places more than one item at offset {:?}",
                pattern.name,
                offset
            );
            return false;
        }

        let Some(map) = self.point_map.and_then(|i| self.content.spawn_point_maps.get(i)) else {
            return false;
        };
        let candidates = map.points_for(primary);
        if candidates.is_empty() {
            return false;
        }

        let start = self.last_anchor.get(primary).map_or(0, |last| last + 1);
        let found = (0..candidates.len())
            .map(|i| (start + i) % candidates.len())
            .find(|&index| self.is_location_valid(pattern, candidates[index], body));

        let Some(index) = found else {
            log::debug!("No free anchor for pattern '{}'", pattern.name);
            return false;
        };

        let anchor = candidates[index];
        let primary = primary.to_string();
        for entry in &pattern.items {
            self.spawn_item(&entry.item, anchor + entry.offset);
        }
        log::debug!("Spawned pattern '{}' at {:?}", pattern.name, anchor);
        self.last_anchor.insert(primary, index);
        true
    }

    fn is_location_valid(&self, pattern: &SpawnPattern, anchor: IVec2, body: &[IVec2]) -> bool {
        pattern.items.iter().all(|entry| {
            let pos = anchor + entry.offset;
            pos.x.abs() <= self.bounds.x
                && pos.y.abs() <= self.bounds.y
                && !body.contains(&pos)
                && !self.items.contains_key(&pos)
        })
    }

    pub(crate) fn spawn_item(&mut self, name: &str, position: IVec2) {
        let Some(item) = self.content.item(name).cloned() else {
            log::error!("Item '{}' not found in item types", name);
            return;
        };
        self.items.insert(position, ActiveItem { item, fuse: None });
        self.notices.push(SpawnNotice::Spawned {
            position,
            item: name.to_string(),
        });
    }

    fn choose_patterns(&mut self, difficulty: Option<Difficulty>) {
        let maps = self.content.spawn_point_maps.len();
        self.point_map = (maps > 0).then(|| self.rng.random_range(0..maps));

        let pool = match difficulty {
            Some(Difficulty::Easy) | None => &self.content.easy_challenges,
            Some(Difficulty::Medium) => &self.content.medium_challenges,
            Some(Difficulty::Hard) => &self.content.hard_challenges,
        };
        self.challenge = if pool.is_empty() {
            None
        } else {
            let index = self.rng.random_range(0..pool.len());
            Some(pool[index].clone())
        };

        log::info!(
            "Spawner initialized: map {:?}, challenge {:?}",
            self.point_map
                .and_then(|i| self.content.spawn_point_maps.get(i))
                .map(|m| m.name.as_str()),
            self.challenge.as_ref().map(|p| p.name.as_str())
        );
    }

    /// Take the queued registry notices
    pub fn drain_notices(&mut self) -> Vec<SpawnNotice> {
        std::mem::take(&mut self.notices)
    }

    pub fn active_items(&self) -> impl Iterator<Item = (&IVec2, &ActiveItem)> {
        self.items.iter()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Timed spawn cycles still scheduled
    pub fn pending_cycles(&self) -> usize {
        usize::from(self.speed_up_cycle.is_some()) + usize::from(self.invulnerability_cycle.is_some())
    }

    pub fn current_challenge(&self) -> Option<&SpawnPattern> {
        self.challenge.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ItemType, PowerUpEffect, SpawnPointMap};
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    const BOUNDS: IVec2 = IVec2::new(11, 11);

    fn every_cell() -> Vec<IVec2> {
        (-10..=10)
            .flat_map(|y| (-10..=10).map(move |x| IVec2::new(x, y)))
            .collect()
    }

    fn test_content(food_points: Vec<IVec2>) -> ContentPack {
        let mut points = BTreeMap::new();
        points.insert("Food".to_string(), food_points.clone());
        points.insert("Gem".to_string(), food_points);
        points.insert("SpeedUp".to_string(), vec![IVec2::new(5, 5)]);
        points.insert("Shield".to_string(), vec![IVec2::new(-5, 5)]);
        ContentPack {
            items: vec![
                ItemType::collectible("Food", 1),
                ItemType {
                    precious: true,
                    ..ItemType::collectible("Gem", 5)
                },
                ItemType {
                    lifespan: Some(1.0),
                    explosive: true,
                    ..ItemType::obstacle("Bomb")
                },
                ItemType::obstacle("Rock"),
                ItemType::power_up("SpeedUp", PowerUpEffect::SpeedUp, 5.0),
                ItemType::power_up("Shield", PowerUpEffect::Invulnerable, 5.0),
            ],
            spawn_point_maps: vec![SpawnPointMap {
                name: "Test".to_string(),
                points,
            }],
            starting_food: None,
            regular_food: Some(SpawnPattern::single("Food")),
            speed_up: Some(SpawnPattern::single("SpeedUp")),
            invulnerability: Some(SpawnPattern::single("Shield")),
            easy_challenges: vec![SpawnPattern::new(
                "Easy",
                &[("Gem", IVec2::ZERO), ("Bomb", IVec2::Y)],
            )],
            medium_challenges: vec![SpawnPattern::new(
                "Medium",
                &[("Gem", IVec2::ZERO), ("Rock", IVec2::Y)],
            )],
            hard_challenges: Vec::new(),
        }
    }

    fn spawner_with(content: ContentPack, challenge_chance: f32) -> ItemSpawner {
        let config = SessionConfig {
            challenge_chance,
            ..SessionConfig::default()
        };
        let mut spawner = ItemSpawner::new(content, &config, 7);
        spawner.initialize(BOUNDS, &[], Some(Difficulty::Easy));
        spawner
    }

    #[test]
    fn test_round_robin_advances_past_last_anchor() {
        let points = vec![IVec2::new(1, 1), IVec2::new(2, 2), IVec2::new(3, 3)];
        let mut spawner = spawner_with(test_content(points), 0.0);
        let food = SpawnPattern::single("Food");

        assert!(spawner.spawn_pattern(&food, &[]));
        assert!(spawner.item_at(IVec2::new(1, 1)).is_some());

        // Freed cell is skipped in favour of the next anchor
        spawner.remove_item(IVec2::new(1, 1));
        assert!(spawner.spawn_pattern(&food, &[]));
        assert!(spawner.item_at(IVec2::new(2, 2)).is_some());
        assert!(spawner.item_at(IVec2::new(1, 1)).is_none());

        // Wraps around
        assert!(spawner.spawn_pattern(&food, &[]));
        assert!(spawner.item_at(IVec2::new(3, 3)).is_some());
        assert!(spawner.spawn_pattern(&food, &[]));
        assert!(spawner.item_at(IVec2::new(1, 1)).is_some());
    }

    #[test]
    fn test_blocked_anchors_are_skipped() {
        let points = vec![IVec2::new(1, 1), IVec2::new(2, 2)];
        let mut spawner = spawner_with(test_content(points), 0.0);
        let body = [IVec2::new(1, 1)];

        assert!(spawner.spawn_pattern(&SpawnPattern::single("Food"), &body));
        assert!(spawner.item_at(IVec2::new(2, 2)).is_some());

        // Both anchors now taken: silent failure
        assert!(!spawner.spawn_pattern(&SpawnPattern::single("Food"), &body));
        assert_eq!(spawner.item_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let points = vec![IVec2::new(12, 0), IVec2::new(0, -12), IVec2::new(11, -11)];
        let mut spawner = spawner_with(test_content(points), 0.0);
        assert!(spawner.spawn_pattern(&SpawnPattern::single("Food"), &[]));
        assert!(spawner.item_at(IVec2::new(11, -11)).is_some());
        assert_eq!(spawner.item_count(), 1);

        // Only in-bounds anchor is now occupied
        assert!(!spawner.spawn_pattern(&SpawnPattern::single("Food"), &[]));
    }

    #[test]
    fn test_offset_past_edge_rules_out_anchor() {
        let points = vec![IVec2::new(0, 11), IVec2::new(0, 10)];
        let mut spawner = spawner_with(test_content(points), 0.0);
        let pattern = SpawnPattern::new("Easy", &[("Gem", IVec2::ZERO), ("Bomb", IVec2::Y)]);

        assert!(spawner.spawn_pattern(&pattern, &[]));
        assert!(spawner.item_at(IVec2::new(0, 10)).is_some());
        assert!(spawner.item_at(IVec2::new(0, 11)).is_some_and(|a| a.item.name == "Bomb"));
    }

    #[test]
    fn test_pattern_offsets_all_validated() {
        // Bomb sits above the gem; a body cell there rules out the anchor
        let points = vec![IVec2::new(0, 0), IVec2::new(4, 0)];
        let mut spawner = spawner_with(test_content(points), 0.0);
        let pattern = SpawnPattern::new("Easy", &[("Gem", IVec2::ZERO), ("Bomb", IVec2::Y)]);

        assert!(spawner.spawn_pattern(&pattern, &[IVec2::new(0, 1)]));
        assert!(spawner.item_at(IVec2::new(4, 0)).is_some());
        assert!(spawner.item_at(IVec2::new(4, 1)).is_some());
        assert!(spawner.item_at(IVec2::new(0, 0)).is_none());
    }

    #[test]
    fn test_unknown_item_aborts_pattern() {
        let mut spawner = spawner_with(test_content(every_cell()), 0.0);
        let pattern = SpawnPattern::new("Broken", &[("Food", IVec2::ZERO), ("Ghost", IVec2::X)]);
        assert!(!spawner.spawn_pattern(&pattern, &[]));
        assert_eq!(spawner.item_count(), 0);
    }

    #[test]
    fn test_stacked_offsets_abort_pattern() {
        let mut spawner = spawner_with(test_content(every_cell()), 0.0);
        spawner.drain_notices();
        let pattern = SpawnPattern::new("Stacked", &[("Food", IVec2::ZERO), ("Rock", IVec2::ZERO)]);

        assert!(!spawner.spawn_pattern(&pattern, &[]));
        assert_eq!(spawner.item_count(), 0);
        assert!(spawner.drain_notices().is_empty());
    }

    #[test]
    fn test_missing_point_list_is_silent() {
        let mut spawner = spawner_with(test_content(every_cell()), 0.0);
        assert!(!spawner.spawn_pattern(&SpawnPattern::single("Rock"), &[]));
    }

    #[test]
    fn test_challenge_chance_extremes() {
        let mut spawner = spawner_with(test_content(every_cell()), 0.0);
        spawner.on_food_collected(&[]);
        assert_eq!(spawner.item_count(), 1);
        assert!(spawner.active_items().all(|(_, a)| a.item.name == "Food"));

        let mut spawner = spawner_with(test_content(every_cell()), 1.0);
        spawner.on_food_collected(&[]);
        let mut names: Vec<_> = spawner.active_items().map(|(_, a)| a.item.name.clone()).collect();
        names.sort();
        assert_eq!(names, vec!["Bomb", "Gem"]);
    }

    #[test]
    fn test_difficulty_picks_pool() {
        let config = SessionConfig::default();
        let mut spawner = ItemSpawner::new(test_content(every_cell()), &config, 1);

        spawner.initialize(BOUNDS, &[], Some(Difficulty::Medium));
        assert_eq!(spawner.current_challenge().map(|p| p.name.as_str()), Some("Medium"));

        spawner.reset();
        spawner.initialize(BOUNDS, &[], None);
        assert_eq!(spawner.current_challenge().map(|p| p.name.as_str()), Some("Easy"));

        // Empty pool: no challenge, food still replenishes
        spawner.reset();
        spawner.initialize(BOUNDS, &[], Some(Difficulty::Hard));
        assert!(spawner.current_challenge().is_none());
    }

    #[test]
    fn test_starting_food_on_initialize() {
        let mut content = test_content(vec![IVec2::new(0, -5), IVec2::new(3, 3)]);
        content.starting_food = Some(SpawnPattern::single("Food"));
        let config = SessionConfig::default();
        let mut spawner = ItemSpawner::new(content, &config, 3);

        spawner.initialize(BOUNDS, &[IVec2::new(0, -5)], None);
        assert_eq!(spawner.item_count(), 1);
        assert!(spawner.item_at(IVec2::new(3, 3)).is_some());
        assert_eq!(
            spawner.drain_notices(),
            vec![SpawnNotice::Spawned {
                position: IVec2::new(3, 3),
                item: "Food".to_string()
            }]
        );
    }

    #[test]
    fn test_timed_cycles_fire_after_delays() {
        let mut spawner = spawner_with(test_content(every_cell()), 0.0);
        let speed_up = IVec2::new(5, 5);
        let shield = IVec2::new(-5, 5);

        // 4.9s: nothing yet
        for _ in 0..49 {
            spawner.update(0.1, &[]);
        }
        assert!(spawner.item_at(shield).is_none());

        // ~5s: shield appears, speed-up still waiting
        spawner.update(0.2, &[]);
        assert!(spawner.item_at(shield).is_some());
        assert!(spawner.item_at(speed_up).is_none());

        // ~7s: speed-up appears
        for _ in 0..20 {
            spawner.update(0.1, &[]);
        }
        assert!(spawner.item_at(speed_up).is_some());

        // Next speed-up is due 14s later
        spawner.remove_item(speed_up);
        for _ in 0..130 {
            spawner.update(0.1, &[]);
        }
        assert!(spawner.item_at(speed_up).is_none());
        for _ in 0..20 {
            spawner.update(0.1, &[]);
        }
        assert!(spawner.item_at(speed_up).is_some());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut spawner = spawner_with(test_content(every_cell()), 1.0);
        spawner.on_food_collected(&[]);
        spawner.on_food_collected(&[]);
        assert!(spawner.item_count() > 0);
        spawner.drain_notices();

        spawner.reset();
        assert_eq!(spawner.item_count(), 0);
        assert_eq!(spawner.pending_cycles(), 0);
        assert!(!spawner.is_active());
        assert!(
            spawner
                .drain_notices()
                .iter()
                .all(|n| matches!(n, SpawnNotice::Despawned { .. }))
        );

        // Idempotent, and nothing fires afterwards
        spawner.reset();
        for _ in 0..400 {
            spawner.update(0.1, &[]);
        }
        spawner.on_food_collected(&[]);
        assert_eq!(spawner.item_count(), 0);
        assert!(spawner.drain_notices().is_empty());
    }

    #[test]
    fn test_fuses_burn_after_precious_gem() {
        let mut spawner = spawner_with(test_content(every_cell()), 1.0);
        spawner.on_food_collected(&[]);
        let bomb = spawner
            .active_items()
            .find(|(_, a)| a.item.name == "Bomb")
            .map(|(p, _)| *p)
            .expect("challenge spawned a bomb");
        spawner.drain_notices();

        // Unarmed fuses never burn
        spawner.update(5.0, &[]);
        assert!(spawner.item_at(bomb).is_some());

        spawner.arm_fuses();
        spawner.update(0.5, &[]);
        assert!(spawner.item_at(bomb).is_some());
        spawner.update(0.6, &[]);
        assert!(spawner.item_at(bomb).is_none());
        assert!(
            spawner
                .drain_notices()
                .contains(&SpawnNotice::Despawned { position: bomb })
        );
    }

    #[test]
    fn test_remove_item_queues_no_notice() {
        let mut spawner = spawner_with(test_content(every_cell()), 0.0);
        spawner.on_food_collected(&[]);
        let (pos, _) = spawner.active_items().next().map(|(p, a)| (*p, a.clone())).unwrap();
        spawner.drain_notices();

        assert!(spawner.remove_item(pos).is_some());
        assert!(spawner.drain_notices().is_empty());

        spawner.on_food_collected(&[]);
        let (pos, _) = spawner.active_items().next().map(|(p, a)| (*p, a.clone())).unwrap();
        spawner.drain_notices();
        spawner.on_item_expired(pos);
        assert!(spawner.item_at(pos).is_none());
        assert!(spawner.drain_notices().is_empty());
    }

    fn arb_cells(max: usize) -> impl Strategy<Value = Vec<IVec2>> {
        prop::collection::vec((-10i32..=10, -10i32..=10), 0..max)
            .prop_map(|cells| cells.into_iter().map(|(x, y)| IVec2::new(x, y)).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn prop_placement_never_overlaps(
            body in arb_cells(120),
            existing in arb_cells(60),
            seed in any::<u64>(),
        ) {
            let config = SessionConfig::default();
            let mut spawner = ItemSpawner::new(test_content(every_cell()), &config, seed);
            spawner.initialize(BOUNDS, &[], Some(Difficulty::Medium));
            for cell in &existing {
                if !body.contains(cell) {
                    spawner.spawn_item("Rock", *cell);
                }
            }
            let before: Vec<IVec2> = spawner.active_items().map(|(p, _)| *p).collect();

            let pattern = SpawnPattern::new(
                "Cross",
                &[
                    ("Gem", IVec2::ZERO),
                    ("Rock", IVec2::X),
                    ("Rock", IVec2::NEG_X),
                    ("Rock", IVec2::Y),
                    ("Rock", IVec2::NEG_Y),
                ],
            );
            let placed = spawner.spawn_pattern(&pattern, &body);

            let added: Vec<IVec2> = spawner
                .active_items()
                .map(|(p, _)| *p)
                .filter(|p| !before.contains(p))
                .collect();
            if placed {
                prop_assert_eq!(added.len(), 5);
            } else {
                prop_assert!(added.is_empty());
            }
            for cell in added {
                prop_assert!(!body.contains(&cell));
                prop_assert!(cell.x.abs() <= BOUNDS.x && cell.y.abs() <= BOUNDS.y);
            }
        }
    }
}
