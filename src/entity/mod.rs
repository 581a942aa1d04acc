//! The enemy entity aggregate under construction during a spawn

pub mod skills;

pub use skills::{Skill, SkillSet};

use crate::career::{CareerTemplate, ResolvedCareer};
use crate::catalog::EnemyDescriptor;
use crate::core::config::UNARMORED_VALUE;
use crate::core::{BodyPart, EntityId, EntityType};
use crate::items::Inventory;
use serde::{Deserialize, Serialize};

/// Per-body-slot armor values; lower is better, 100 is bare skin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorValues([i16; BodyPart::COUNT]);

impl ArmorValues {
    pub fn unarmored() -> Self {
        Self([UNARMORED_VALUE; BodyPart::COUNT])
    }

    pub fn get(&self, part: BodyPart) -> i16 {
        self.0[part.index()]
    }

    pub fn set(&mut self, part: BodyPart, value: i16) {
        self.0[part.index()] = value;
    }

    pub fn set_all(&mut self, value: i16) {
        self.0 = [value; BodyPart::COUNT];
    }

    pub fn values(&self) -> &[i16; BodyPart::COUNT] {
        &self.0
    }

    pub fn values_mut(&mut self) -> &mut [i16; BodyPart::COUNT] {
        &mut self.0
    }
}

impl Default for ArmorValues {
    fn default() -> Self {
        Self::unarmored()
    }
}

/// The entity's spell collection.
///
/// Identifiers are retained as-is; resolving them against a spell
/// catalog is a capability the slice explicitly does not have yet, so
/// a populated roster reports itself as pending rather than pretending
/// to carry effect data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpellRoster {
    #[default]
    None,
    /// Spell identifiers awaiting catalog resolution
    Pending(Vec<u8>),
}

impl SpellRoster {
    pub fn is_empty(&self) -> bool {
        matches!(self, SpellRoster::None)
    }

    pub fn pending_ids(&self) -> &[u8] {
        match self {
            SpellRoster::None => &[],
            SpellRoster::Pending(ids) => ids,
        }
    }
}

/// An enemy being built by the generation pipeline, then mutated by
/// gameplay until despawn. Constructed once per spawn; no pooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyEntity {
    pub id: EntityId,
    pub entity_type: EntityType,
    pub career: ResolvedCareer,
    pub template: CareerTemplate,
    /// Source descriptor; absent only for the inert degenerate case
    pub descriptor: Option<EnemyDescriptor>,
    pub name: String,
    pub level: i32,
    pub max_health: i32,
    pub current_health: i32,
    pub max_magicka: i32,
    pub current_magicka: i32,
    /// Weapons below this material tier cannot hit the entity
    pub min_metal_to_hit: Option<crate::items::WeaponMaterial>,
    pub armor: ArmorValues,
    pub skills: SkillSet,
    pub inventory: Inventory,
    pub spells: SpellRoster,
    /// One-shot flag: the player gets a single pickpocket attempt
    pub pickpocket_attempted: bool,
}

impl EnemyEntity {
    /// A blank, inert entity; the generation pipeline fills it in
    pub fn new() -> Self {
        Self {
            id: EntityId::new(),
            entity_type: EntityType::None,
            career: ResolvedCareer::Unset,
            template: CareerTemplate::empty(),
            descriptor: None,
            name: String::new(),
            level: 0,
            max_health: 0,
            current_health: 0,
            max_magicka: 0,
            current_magicka: 0,
            min_metal_to_hit: None,
            armor: ArmorValues::unarmored(),
            skills: SkillSet::new(),
            inventory: Inventory::new(),
            spells: SpellRoster::None,
            pickpocket_attempted: false,
        }
    }

    /// True when career resolution hit the degenerate case; such an
    /// entity must be treated as a no-op by callers
    pub fn is_inert(&self) -> bool {
        self.career.is_unset()
    }

    /// Top up current health and magicka to their maxima
    pub fn fill_vital_signs(&mut self) {
        self.current_health = self.max_health;
        self.current_magicka = self.max_magicka;
    }
}

impl Default for EnemyEntity {
    fn default() -> Self {
        Self::new()
    }
}
