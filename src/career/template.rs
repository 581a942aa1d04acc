//! Career templates - permanent baselines an enemy is stamped from

use crate::career::{ClassCareer, MonsterCareer};
use serde::{Deserialize, Serialize};

/// The eight permanent attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Intelligence,
    Willpower,
    Agility,
    Endurance,
    Personality,
    Speed,
    Luck,
}

/// Permanent attribute baseline of a career
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: i16,
    pub intelligence: i16,
    pub willpower: i16,
    pub agility: i16,
    pub endurance: i16,
    pub personality: i16,
    pub speed: i16,
    pub luck: i16,
}

impl Attributes {
    const fn uniform(value: i16) -> Self {
        Self {
            strength: value,
            intelligence: value,
            willpower: value,
            agility: value,
            endurance: value,
            personality: value,
            speed: value,
            luck: value,
        }
    }

    /// Quick beasts: high agility and speed, dim
    const fn feral() -> Self {
        Self {
            strength: 55,
            intelligence: 5,
            willpower: 20,
            agility: 70,
            endurance: 50,
            personality: 5,
            speed: 70,
            luck: 50,
        }
    }

    /// Big and tough: orcs, giants, gargoyles
    const fn brute() -> Self {
        Self {
            strength: 80,
            intelligence: 30,
            willpower: 40,
            agility: 40,
            endurance: 75,
            personality: 25,
            speed: 40,
            luck: 50,
        }
    }

    /// Fey and woodland creatures
    const fn sylvan() -> Self {
        Self {
            strength: 40,
            intelligence: 60,
            willpower: 60,
            agility: 65,
            endurance: 45,
            personality: 70,
            speed: 55,
            luck: 50,
        }
    }

    /// The walking (and floating) dead
    const fn undead() -> Self {
        Self {
            strength: 60,
            intelligence: 50,
            willpower: 70,
            agility: 45,
            endurance: 60,
            personality: 10,
            speed: 45,
            luck: 40,
        }
    }

    /// Daedra of all ranks
    const fn daedric() -> Self {
        Self {
            strength: 75,
            intelligence: 75,
            willpower: 80,
            agility: 60,
            endurance: 75,
            personality: 50,
            speed: 55,
            luck: 50,
        }
    }

    /// Animated constructs: atronachs
    const fn construct() -> Self {
        Self {
            strength: 70,
            intelligence: 5,
            willpower: 50,
            agility: 35,
            endurance: 85,
            personality: 5,
            speed: 35,
            luck: 50,
        }
    }

    /// Spell-first classes
    const fn caster() -> Self {
        Self {
            strength: 40,
            intelligence: 75,
            willpower: 70,
            agility: 50,
            endurance: 45,
            personality: 55,
            speed: 50,
            luck: 50,
        }
    }

    /// Stealth-first classes
    const fn rogue() -> Self {
        Self {
            strength: 50,
            intelligence: 55,
            willpower: 45,
            agility: 75,
            endurance: 50,
            personality: 55,
            speed: 70,
            luck: 55,
        }
    }

    /// Arms-first classes
    const fn warrior() -> Self {
        Self {
            strength: 75,
            intelligence: 40,
            willpower: 50,
            agility: 60,
            endurance: 70,
            personality: 45,
            speed: 55,
            luck: 50,
        }
    }

    /// Spell-and-sword classes
    const fn hybrid() -> Self {
        Self {
            strength: 60,
            intelligence: 65,
            willpower: 60,
            agility: 55,
            endurance: 55,
            personality: 50,
            speed: 50,
            luck: 50,
        }
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(50)
    }
}

/// Named bundle of permanent baselines an entity is initialized from.
///
/// Exactly one career family (monster or class) produces the template
/// for a given entity; an empty template marks the inert degenerate
/// case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerTemplate {
    pub name: String,
    pub hit_points_per_level: i32,
    pub attributes: Attributes,
}

impl CareerTemplate {
    /// Empty template for the unresolved-career degenerate case
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            hit_points_per_level: 0,
            attributes: Attributes::default(),
        }
    }

    pub fn for_monster(career: MonsterCareer) -> Self {
        use MonsterCareer::*;
        let (name, hp, attributes) = match career {
            Rat => ("Rat", 4, Attributes::feral()),
            Imp => ("Imp", 4, Attributes::sylvan()),
            Spriggan => ("Spriggan", 6, Attributes::sylvan()),
            GiantBat => ("Giant Bat", 4, Attributes::feral()),
            GrizzlyBear => ("Grizzly Bear", 10, Attributes::feral()),
            SabertoothTiger => ("Sabertooth Tiger", 10, Attributes::feral()),
            Spider => ("Spider", 6, Attributes::feral()),
            Orc => ("Orc", 10, Attributes::brute()),
            Centaur => ("Centaur", 10, Attributes::sylvan()),
            Werewolf => ("Werewolf", 10, Attributes::feral()),
            Nymph => ("Nymph", 6, Attributes::sylvan()),
            Slaughterfish => ("Slaughterfish", 6, Attributes::feral()),
            OrcSergeant => ("Orc Sergeant", 12, Attributes::brute()),
            Harpy => ("Harpy", 8, Attributes::sylvan()),
            Wereboar => ("Wereboar", 12, Attributes::feral()),
            SkeletalWarrior => ("Skeletal Warrior", 8, Attributes::undead()),
            Giant => ("Giant", 14, Attributes::brute()),
            Zombie => ("Zombie", 8, Attributes::undead()),
            Ghost => ("Ghost", 8, Attributes::undead()),
            Mummy => ("Mummy", 10, Attributes::undead()),
            GiantScorpion => ("Giant Scorpion", 8, Attributes::feral()),
            OrcShaman => ("Orc Shaman", 10, Attributes::brute()),
            Gargoyle => ("Gargoyle", 12, Attributes::brute()),
            Wraith => ("Wraith", 10, Attributes::undead()),
            OrcWarlord => ("Orc Warlord", 14, Attributes::brute()),
            FrostDaedra => ("Frost Daedra", 12, Attributes::daedric()),
            FireDaedra => ("Fire Daedra", 12, Attributes::daedric()),
            Daedroth => ("Daedroth", 12, Attributes::daedric()),
            Vampire => ("Vampire", 12, Attributes::undead()),
            DaedraSeducer => ("Daedra Seducer", 12, Attributes::daedric()),
            VampireAncient => ("Vampire Ancient", 14, Attributes::undead()),
            DaedraLord => ("Daedra Lord", 16, Attributes::daedric()),
            Lich => ("Lich", 14, Attributes::undead()),
            AncientLich => ("Ancient Lich", 16, Attributes::undead()),
            Dragonling => ("Dragonling", 10, Attributes::feral()),
            FireAtronach => ("Fire Atronach", 10, Attributes::construct()),
            IronAtronach => ("Iron Atronach", 12, Attributes::construct()),
            FleshAtronach => ("Flesh Atronach", 10, Attributes::construct()),
            IceAtronach => ("Ice Atronach", 10, Attributes::construct()),
            HorseInvalid => ("Horse", 8, Attributes::feral()),
            DragonlingAlternate => ("Dragonling", 12, Attributes::feral()),
            Dreugh => ("Dreugh", 8, Attributes::feral()),
            Lamia => ("Lamia", 10, Attributes::sylvan()),
        };
        Self {
            name: name.to_string(),
            hit_points_per_level: hp,
            attributes,
        }
    }

    pub fn for_class(career: ClassCareer) -> Self {
        use ClassCareer::*;
        let (name, hp, attributes) = match career {
            Mage => ("Mage", 6, Attributes::caster()),
            Spellsword => ("Spellsword", 14, Attributes::hybrid()),
            Battlemage => ("Battlemage", 12, Attributes::hybrid()),
            Sorcerer => ("Sorcerer", 8, Attributes::caster()),
            Healer => ("Healer", 8, Attributes::caster()),
            Nightblade => ("Nightblade", 10, Attributes::rogue()),
            Bard => ("Bard", 12, Attributes::rogue()),
            Burglar => ("Burglar", 10, Attributes::rogue()),
            Rogue => ("Rogue", 14, Attributes::rogue()),
            Acrobat => ("Acrobat", 10, Attributes::rogue()),
            Thief => ("Thief", 12, Attributes::rogue()),
            Assassin => ("Assassin", 14, Attributes::rogue()),
            Monk => ("Monk", 16, Attributes::warrior()),
            Archer => ("Archer", 12, Attributes::warrior()),
            Ranger => ("Ranger", 14, Attributes::warrior()),
            Barbarian => ("Barbarian", 20, Attributes::warrior()),
            Warrior => ("Warrior", 18, Attributes::warrior()),
            Knight => ("Knight", 18, Attributes::warrior()),
            KnightCityWatch => ("Knight of the City Watch", 18, Attributes::warrior()),
        };
        Self {
            name: name.to_string(),
            hit_points_per_level: hp,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_template_is_inert() {
        let template = CareerTemplate::empty();
        assert!(template.name.is_empty());
        assert_eq!(template.hit_points_per_level, 0);
    }

    #[test]
    fn test_monster_templates_named() {
        for id in 0..MonsterCareer::COUNT as u16 {
            let career = MonsterCareer::from_id(id).unwrap();
            let template = CareerTemplate::for_monster(career);
            assert!(!template.name.is_empty(), "{:?} has no name", career);
            assert!(template.hit_points_per_level > 0);
        }
    }

    #[test]
    fn test_class_templates_named() {
        for raw in 128..128 + ClassCareer::COUNT as u16 {
            let career = ClassCareer::from_raw_id(raw).unwrap();
            let template = CareerTemplate::for_class(career);
            assert!(!template.name.is_empty(), "{:?} has no name", career);
            assert!(template.hit_points_per_level > 0);
        }
    }
}
