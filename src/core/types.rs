//! Core type definitions shared across the crate

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for spawned entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which career family an enemy belongs to.
///
/// `None` marks an entity whose career was never resolved; such an
/// entity stays inert and is skipped by the generation pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[default]
    None,
    Monster,
    Class,
}

/// Entity gender, where the content defines one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
}

/// Playable races; armor pieces are fitted per race/gender variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Breton,
    Redguard,
    Nord,
    DarkElf,
    HighElf,
    WoodElf,
    Khajiit,
    Argonian,
}

/// Read-only snapshot of the player consulted during generation.
///
/// Class enemies level to the player and equipment quality scales with
/// player level; passing this explicitly keeps generation free of any
/// ambient singleton reads.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub level: i32,
    pub gender: Gender,
    pub race: Race,
}

impl PlayerSnapshot {
    pub fn new(level: i32, gender: Gender, race: Race) -> Self {
        Self {
            level,
            gender,
            race,
        }
    }
}

/// Body parts carrying a per-slot armor value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    Head,
    RightArm,
    LeftArm,
    Chest,
    Hands,
    Legs,
    Feet,
}

impl BodyPart {
    pub const COUNT: usize = 7;

    /// All body parts in head-to-feet order
    pub const ALL: [BodyPart; Self::COUNT] = [
        BodyPart::Head,
        BodyPart::RightArm,
        BodyPart::LeftArm,
        BodyPart::Chest,
        BodyPart::Hands,
        BodyPart::Legs,
        BodyPart::Feet,
    ];

    pub fn index(self) -> usize {
        match self {
            BodyPart::Head => 0,
            BodyPart::RightArm => 1,
            BodyPart::LeftArm => 2,
            BodyPart::Chest => 3,
            BodyPart::Hands => 4,
            BodyPart::Legs => 5,
            BodyPart::Feet => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_part_order_is_head_to_feet() {
        assert_eq!(BodyPart::ALL[0], BodyPart::Head);
        assert_eq!(BodyPart::ALL[BodyPart::COUNT - 1], BodyPart::Feet);
        for (i, part) in BodyPart::ALL.iter().enumerate() {
            assert_eq!(part.index(), i);
        }
    }

    #[test]
    fn test_entity_ids_unique() {
        assert_ne!(EntityId::new(), EntityId::new());
    }
}
