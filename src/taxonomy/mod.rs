//! Stateless classification queries over a generated enemy
//!
//! Consumed by downstream AI, dialogue, and combat. The career tables
//! are exhaustive matches so adding a career is a compile error until
//! every classification knows about it.

use crate::career::{ClassCareer, MonsterCareer, ResolvedCareer};
use crate::core::config::{CLASSIC_WEIGHT_SCALE, FEMALE_BASE_WEIGHT, MALE_BASE_WEIGHT};
use crate::core::{EntityType, Gender};
use crate::entity::{EnemyEntity, Skill};
use serde::{Deserialize, Serialize};

/// Broad enemy grouping used by AI and lore checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyGroup {
    #[default]
    None,
    Animals,
    Undead,
    Daedra,
    Humanoid,
}

fn monster_group(career: MonsterCareer) -> EnemyGroup {
    use MonsterCareer::*;
    match career {
        // The horse and alternate dragonling were grouped as undead in
        // the classic tables; animal fits what they are.
        Rat | GiantBat | GrizzlyBear | SabertoothTiger | Spider | Slaughterfish
        | GiantScorpion | Dragonling | HorseInvalid | DragonlingAlternate => EnemyGroup::Animals,
        // Dreugh and lamia were classic-undead; humanoid here.
        Imp | Spriggan | Orc | Centaur | Werewolf | Nymph | OrcSergeant | Harpy | Wereboar
        | Giant | OrcShaman | Gargoyle | OrcWarlord | Dreugh | Lamia => EnemyGroup::Humanoid,
        // Zombie was classic-animal; undead here.
        SkeletalWarrior | Zombie | Ghost | Mummy | Wraith | Vampire | VampireAncient | Lich
        | AncientLich => EnemyGroup::Undead,
        FrostDaedra | FireDaedra | Daedroth | DaedraSeducer | DaedraLord => EnemyGroup::Daedra,
        // Atronachs belong to no group.
        FireAtronach | IronAtronach | FleshAtronach | IceAtronach => EnemyGroup::None,
    }
}

fn monster_language(career: MonsterCareer) -> Option<Skill> {
    use MonsterCareer::*;
    match career {
        Orc | OrcSergeant | OrcShaman | OrcWarlord => Some(Skill::Orcish),
        Harpy => Some(Skill::Harpy),
        Giant | Gargoyle => Some(Skill::Giantish),
        Dragonling | DragonlingAlternate => Some(Skill::Dragonish),
        Nymph | Lamia => Some(Skill::Nymph),
        FrostDaedra | FireDaedra | Daedroth | DaedraSeducer | DaedraLord => Some(Skill::Daedric),
        Spriggan => Some(Skill::Spriggan),
        Centaur => Some(Skill::Centaurian),
        Imp | Dreugh => Some(Skill::Impish),
        Vampire | VampireAncient | Lich | AncientLich => Some(Skill::Etiquette),
        Rat | GiantBat | GrizzlyBear | SabertoothTiger | Spider | Slaughterfish | Wereboar
        | Werewolf | SkeletalWarrior | Zombie | Ghost | Mummy | Wraith | GiantScorpion
        | FireAtronach | IronAtronach | FleshAtronach | IceAtronach | HorseInvalid => None,
    }
}

fn class_language(career: ClassCareer) -> Skill {
    use ClassCareer::*;
    // The classic table used etiquette for every class; the sneaking
    // professions speak streetwise instead. Intentional divergence.
    match career {
        Burglar | Rogue | Acrobat | Thief | Assassin | Nightblade => Skill::Streetwise,
        Mage | Spellsword | Battlemage | Sorcerer | Healer | Bard | Monk | Archer | Ranger
        | Barbarian | Warrior | Knight | KnightCityWatch => Skill::Etiquette,
    }
}

impl EnemyEntity {
    /// Broad group classification by career
    pub fn enemy_group(&self) -> EnemyGroup {
        match self.career {
            ResolvedCareer::Monster(career) => monster_group(career),
            ResolvedCareer::Class(_) | ResolvedCareer::Unset => EnemyGroup::None,
        }
    }

    /// The language skill checked when this enemy parleys; `None` for
    /// creatures with no language at all
    pub fn language_skill(&self) -> Option<Skill> {
        match self.career {
            ResolvedCareer::Class(career) => Some(class_language(career)),
            ResolvedCareer::Monster(career) => monster_language(career),
            ResolvedCareer::Unset => None,
        }
    }

    /// Total weight in classic units: scaled carried weight plus a
    /// base body weight. Class enemies without a descriptor gender
    /// fall back to the player-facing defaults.
    pub fn weight_in_classic_units(&self) -> i32 {
        let carried = (self.inventory.total_weight_kg() * CLASSIC_WEIGHT_SCALE as f32) as i32;
        let base = if self.entity_type == EntityType::Monster {
            self.descriptor
                .as_ref()
                .map(|descriptor| descriptor.weight)
                .unwrap_or(0)
        } else {
            let gender = self
                .descriptor
                .as_ref()
                .map(|descriptor| descriptor.gender)
                .unwrap_or_default();
            if gender == Gender::Female {
                FEMALE_BASE_WEIGHT
            } else {
                MALE_BASE_WEIGHT
            }
        };
        carried + base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{Item, ItemKind};

    fn monster(career: MonsterCareer) -> EnemyEntity {
        let mut entity = EnemyEntity::new();
        entity.entity_type = EntityType::Monster;
        entity.career = ResolvedCareer::Monster(career);
        entity.descriptor = Some(crate::catalog::monster_descriptor(career));
        entity
    }

    fn class(career: ClassCareer) -> EnemyEntity {
        let mut entity = EnemyEntity::new();
        entity.entity_type = EntityType::Class;
        entity.career = ResolvedCareer::Class(career);
        entity.descriptor = Some(crate::catalog::class_descriptor(career));
        entity
    }

    #[test]
    fn test_group_table() {
        assert_eq!(monster(MonsterCareer::Rat).enemy_group(), EnemyGroup::Animals);
        assert_eq!(monster(MonsterCareer::Orc).enemy_group(), EnemyGroup::Humanoid);
        assert_eq!(monster(MonsterCareer::Lich).enemy_group(), EnemyGroup::Undead);
        assert_eq!(monster(MonsterCareer::Daedroth).enemy_group(), EnemyGroup::Daedra);
        assert_eq!(class(ClassCareer::Knight).enemy_group(), EnemyGroup::None);
        assert_eq!(EnemyEntity::new().enemy_group(), EnemyGroup::None);
    }

    #[test]
    fn test_atronachs_have_no_group() {
        for career in [
            MonsterCareer::FireAtronach,
            MonsterCareer::IronAtronach,
            MonsterCareer::FleshAtronach,
            MonsterCareer::IceAtronach,
        ] {
            assert_eq!(monster(career).enemy_group(), EnemyGroup::None);
        }
    }

    #[test]
    fn test_language_table() {
        assert_eq!(
            monster(MonsterCareer::OrcWarlord).language_skill(),
            Some(Skill::Orcish)
        );
        assert_eq!(
            monster(MonsterCareer::Dreugh).language_skill(),
            Some(Skill::Impish)
        );
        assert_eq!(
            monster(MonsterCareer::Vampire).language_skill(),
            Some(Skill::Etiquette)
        );
        assert_eq!(monster(MonsterCareer::Rat).language_skill(), None);
        // Wraiths cast spells but speak nothing.
        assert_eq!(monster(MonsterCareer::Wraith).language_skill(), None);
        assert_eq!(
            class(ClassCareer::Thief).language_skill(),
            Some(Skill::Streetwise)
        );
        assert_eq!(
            class(ClassCareer::Knight).language_skill(),
            Some(Skill::Etiquette)
        );
    }

    #[test]
    fn test_monster_weight_uses_descriptor() {
        let entity = monster(MonsterCareer::Giant);
        assert_eq!(entity.weight_in_classic_units(), 3000);
    }

    #[test]
    fn test_class_weight_gender_fallback() {
        let mut entity = class(ClassCareer::Warrior);
        assert_eq!(entity.weight_in_classic_units(), MALE_BASE_WEIGHT);
        if let Some(descriptor) = entity.descriptor.as_mut() {
            descriptor.gender = Gender::Female;
        }
        assert_eq!(entity.weight_in_classic_units(), FEMALE_BASE_WEIGHT);
    }

    #[test]
    fn test_carried_weight_scales_by_four() {
        let mut entity = class(ClassCareer::Warrior);
        entity.inventory.add(Item {
            kind: ItemKind::Gold { amount: 100 },
            equipped: None,
            weight_kg: 10.0,
        });
        assert_eq!(
            entity.weight_in_classic_units(),
            MALE_BASE_WEIGHT + 40
        );
    }
}
