//! Enemy descriptors - the read-only content records spawns start from

pub mod builtin;
pub mod loader;

pub use builtin::{class_descriptor, descriptor_by_name, monster_descriptor};
pub use loader::{load_bestiary, BestiaryEntry};

use crate::core::Gender;
use crate::items::WeaponMaterial;
use serde::{Deserialize, Serialize};

/// Raw enemy record consumed by the generation pipeline.
///
/// Monsters carry fixed level/health/armor; class enemies level to the
/// player and ignore those fields. The descriptor is read-only input,
/// never mutated by generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyDescriptor {
    pub id: u16,
    /// Fixed level (monsters only)
    pub level: i32,
    /// Inclusive health roll range (monsters only)
    pub min_health: i32,
    pub max_health: i32,
    /// Innate armor rating; per-slot values are `rating * 5`
    pub armor_rating: i16,
    pub gender: Gender,
    pub casts_magic: bool,
    /// Loot-table key; empty means no loot roll
    pub loot_key: String,
    /// Percent chance of carrying a treasure map
    pub map_chance: i32,
    /// Body weight in classic units (monsters only)
    pub weight: i32,
    /// Weapons below this material tier cannot hit the enemy
    pub min_metal_to_hit: Option<WeaponMaterial>,
}
