//! Data-driven item database and spawn layouts
//!
//! Item types, spawn patterns and spawn point maps are authored content. A
//! pack is validated once when loaded so that authoring mistakes surface as
//! a `ContentError` instead of silently failing spawns mid-session.

use std::collections::{BTreeMap, HashSet};

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Effect applied by a power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpEffect {
    /// Moves faster for the effect duration
    SpeedUp,
    /// Ignores walls, body and obstacles for the effect duration
    Invulnerable,
}

/// What happens when the head enters the item's cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// Eaten for score and growth
    Collectible,
    /// Kills unless invulnerable; never consumed
    Obstacle,
    PowerUp(PowerUpEffect),
}

/// An entry in the item database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemType {
    pub name: String,
    pub kind: ItemKind,
    /// Base points, multiplied by body length on pickup
    #[serde(default)]
    pub score_value: u64,
    /// Power-up duration in seconds
    #[serde(default)]
    pub effect_duration: f32,
    /// Fuse length in seconds, armed when a precious gem is eaten
    #[serde(default)]
    pub lifespan: Option<f32>,
    /// Eating it broadcasts `PreciousGemEaten`
    #[serde(default)]
    pub precious: bool,
    /// Death by this obstacle counts as an explosion
    #[serde(default)]
    pub explosive: bool,
}

impl ItemType {
    pub fn collectible(name: &str, score_value: u64) -> Self {
        Self {
            name: name.to_string(),
            kind: ItemKind::Collectible,
            score_value,
            effect_duration: 0.0,
            lifespan: None,
            precious: false,
            explosive: false,
        }
    }

    pub fn obstacle(name: &str) -> Self {
        Self {
            kind: ItemKind::Obstacle,
            ..Self::collectible(name, 0)
        }
    }

    pub fn power_up(name: &str, effect: PowerUpEffect, duration: f32) -> Self {
        Self {
            kind: ItemKind::PowerUp(effect),
            effect_duration: duration,
            ..Self::collectible(name, 0)
        }
    }
}

/// One item of a pattern, relative to the anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub item: String,
    pub offset: IVec2,
}

/// Anchor-relative item layout. The first entry is the primary item and
/// decides which anchor candidates are tried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPattern {
    pub name: String,
    pub items: Vec<PatternEntry>,
}

impl SpawnPattern {
    pub fn new(name: &str, items: &[(&str, IVec2)]) -> Self {
        Self {
            name: name.to_string(),
            items: items
                .iter()
                .map(|&(item, offset)| PatternEntry {
                    item: item.to_string(),
                    offset,
                })
                .collect(),
        }
    }

    /// Single item at the anchor
    pub fn single(item: &str) -> Self {
        Self::new(item, &[(item, IVec2::ZERO)])
    }

    pub fn primary(&self) -> Option<&str> {
        self.items.first().map(|e| e.item.as_str())
    }

    /// First offset used by more than one entry; each cell holds one item
    pub fn duplicate_offset(&self) -> Option<IVec2> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|e| e.offset)
            .find(|offset| !seen.insert(*offset))
    }
}

/// Candidate anchors per primary item name. One map is active per session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpawnPointMap {
    pub name: String,
    pub points: BTreeMap<String, Vec<IVec2>>,
}

impl SpawnPointMap {
    pub fn points_for(&self, item: &str) -> &[IVec2] {
        self.points.get(item).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Authoring errors found while loading a content pack
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item type '{0}' is defined more than once")]
    DuplicateItem(String),
    #[error("pattern '{pattern}' references unknown item '{item}'")]
    UnknownPatternItem { pattern: String, item: String },
    #[error("spawn point map '{map}' references unknown item '{item}'")]
    UnknownMapItem { map: String, item: String },
    #[error("pattern '{0}' has no items")]
    EmptyPattern(String),
    #[error("pattern '{pattern}' places more than one item at offset {offset}")]
    DuplicateOffset { pattern: String, offset: IVec2 },
    #[error("content defines no spawn point maps")]
    NoSpawnPointMaps,
}

/// Complete item database plus spawn layouts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPack {
    pub items: Vec<ItemType>,
    pub spawn_point_maps: Vec<SpawnPointMap>,
    #[serde(default)]
    pub starting_food: Option<SpawnPattern>,
    #[serde(default)]
    pub regular_food: Option<SpawnPattern>,
    #[serde(default)]
    pub speed_up: Option<SpawnPattern>,
    #[serde(default)]
    pub invulnerability: Option<SpawnPattern>,
    #[serde(default)]
    pub easy_challenges: Vec<SpawnPattern>,
    #[serde(default)]
    pub medium_challenges: Vec<SpawnPattern>,
    #[serde(default)]
    pub hard_challenges: Vec<SpawnPattern>,
}

impl ContentPack {
    /// Parse and validate a pack
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let pack: Self = serde_json::from_str(json)?;
        pack.validate()?;
        log::info!(
            "Loaded content pack: {} item types, {} spawn point maps",
            pack.items.len(),
            pack.spawn_point_maps.len()
        );
        Ok(pack)
    }

    pub fn item(&self, name: &str) -> Option<&ItemType> {
        self.items.iter().find(|i| i.name == name)
    }

    /// All patterns, named slots first, then challenge pools
    pub fn patterns(&self) -> impl Iterator<Item = &SpawnPattern> {
        [
            &self.starting_food,
            &self.regular_food,
            &self.speed_up,
            &self.invulnerability,
        ]
        .into_iter()
        .flatten()
        .chain(&self.easy_challenges)
        .chain(&self.medium_challenges)
        .chain(&self.hard_challenges)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                return Err(ContentError::DuplicateItem(item.name.clone()));
            }
        }

        for pattern in self.patterns() {
            if pattern.items.is_empty() {
                return Err(ContentError::EmptyPattern(pattern.name.clone()));
            }
            if let Some(entry) = pattern.items.iter().find(|e| !seen.contains(e.item.as_str())) {
                return Err(ContentError::UnknownPatternItem {
                    pattern: pattern.name.clone(),
                    item: entry.item.clone(),
                });
            }
            if let Some(offset) = pattern.duplicate_offset() {
                return Err(ContentError::DuplicateOffset {
                    pattern: pattern.name.clone(),
                    offset,
                });
            }
        }

        if self.spawn_point_maps.is_empty() {
            return Err(ContentError::NoSpawnPointMaps);
        }
        for map in &self.spawn_point_maps {
            if let Some(item) = map.points.keys().find(|k| !seen.contains(k.as_str())) {
                return Err(ContentError::UnknownMapItem {
                    map: map.name.clone(),
                    item: item.clone(),
                });
            }
        }

        Ok(())
    }

    /// Built-in content for a 22x22 arena
    pub fn builtin() -> Self {
        let items = vec![
            ItemType::collectible("Food", 1),
            ItemType {
                precious: true,
                ..ItemType::collectible("PreciousFood", 5)
            },
            ItemType::obstacle("Rock"),
            ItemType {
                explosive: true,
                lifespan: Some(3.0),
                ..ItemType::obstacle("Bomb")
            },
            ItemType::power_up("SpeedUp", PowerUpEffect::SpeedUp, 5.0),
            ItemType::power_up("Shield", PowerUpEffect::Invulnerable, 6.0),
        ];

        let scatter = grid_points(-9..=9, 3);
        let lanes: Vec<IVec2> = [-8, -4, 0, 4, 8]
            .into_iter()
            .flat_map(|x| (-8..=8).step_by(2).map(move |y| IVec2::new(x, y)))
            .collect();
        let corners = vec![
            IVec2::new(-7, 7),
            IVec2::new(7, 7),
            IVec2::new(7, -7),
            IVec2::new(-7, -7),
            IVec2::new(0, 4),
        ];

        let spawn_point_maps = vec![
            point_map("Scatter", &scatter, &corners),
            point_map("Lanes", &lanes, &corners),
        ];

        let right = IVec2::X;
        let left = IVec2::NEG_X;
        let up = IVec2::Y;
        let down = IVec2::NEG_Y;

        Self {
            items,
            spawn_point_maps,
            starting_food: Some(SpawnPattern::single("Food")),
            regular_food: Some(SpawnPattern::single("Food")),
            speed_up: Some(SpawnPattern::single("SpeedUp")),
            invulnerability: Some(SpawnPattern::single("Shield")),
            easy_challenges: vec![
                SpawnPattern::new(
                    "Guarded Gem",
                    &[("PreciousFood", IVec2::ZERO), ("Rock", left), ("Rock", right)],
                ),
                SpawnPattern::new("Gem Pair", &[("PreciousFood", IVec2::ZERO), ("Food", up)]),
            ],
            medium_challenges: vec![
                SpawnPattern::new(
                    "Fused Gem",
                    &[("PreciousFood", IVec2::ZERO), ("Bomb", up), ("Rock", down)],
                ),
                SpawnPattern::new(
                    "Rock Wall",
                    &[
                        ("PreciousFood", IVec2::ZERO),
                        ("Rock", up + left),
                        ("Rock", up),
                        ("Rock", up + right),
                    ],
                ),
            ],
            hard_challenges: vec![SpawnPattern::new(
                "Minefield",
                &[
                    ("PreciousFood", IVec2::ZERO),
                    ("Bomb", up),
                    ("Bomb", down),
                    ("Bomb", left),
                    ("Bomb", right),
                ],
            )],
        }
    }
}

fn grid_points(range: std::ops::RangeInclusive<i32>, step: usize) -> Vec<IVec2> {
    range
        .clone()
        .step_by(step)
        .flat_map(|y| range.clone().step_by(step).map(move |x| IVec2::new(x, y)))
        .collect()
}

fn point_map(name: &str, food: &[IVec2], power_ups: &[IVec2]) -> SpawnPointMap {
    let mut points = BTreeMap::new();
    points.insert("Food".to_string(), food.to_vec());
    points.insert("PreciousFood".to_string(), food.iter().rev().copied().collect());
    points.insert("SpeedUp".to_string(), power_ups.to_vec());
    points.insert("Shield".to_string(), power_ups.iter().rev().copied().collect());
    SpawnPointMap {
        name: name.to_string(),
        points,
    }
}
