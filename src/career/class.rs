//! Class careers - playable character classes used as enemies
//!
//! Raw descriptor ids for class enemies carry a fixed bias; subtracting
//! it yields the index into this table. The city watch sits at the end
//! and is the one career with its own level band.

use crate::core::config::CLASS_ID_BIAS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum ClassCareer {
    Mage = 0,
    Spellsword = 1,
    Battlemage = 2,
    Sorcerer = 3,
    Healer = 4,
    Nightblade = 5,
    Bard = 6,
    Burglar = 7,
    Rogue = 8,
    Acrobat = 9,
    Thief = 10,
    Assassin = 11,
    Monk = 12,
    Archer = 13,
    Ranger = 14,
    Barbarian = 15,
    Warrior = 16,
    Knight = 17,
    KnightCityWatch = 18,
}

impl ClassCareer {
    pub const COUNT: usize = 19;

    /// Index within the class-career table
    pub fn index(self) -> u16 {
        self as u16
    }

    /// Raw id as it appears on enemy descriptors
    pub fn id(self) -> u16 {
        self as u16 + CLASS_ID_BIAS
    }

    /// Resolve a raw (biased) descriptor id
    pub fn from_raw_id(raw: u16) -> Option<Self> {
        use ClassCareer::*;
        let career = match raw.checked_sub(CLASS_ID_BIAS)? {
            0 => Mage,
            1 => Spellsword,
            2 => Battlemage,
            3 => Sorcerer,
            4 => Healer,
            5 => Nightblade,
            6 => Bard,
            7 => Burglar,
            8 => Rogue,
            9 => Acrobat,
            10 => Thief,
            11 => Assassin,
            12 => Monk,
            13 => Archer,
            14 => Ranger,
            15 => Barbarian,
            16 => Warrior,
            17 => Knight,
            18 => KnightCityWatch,
            _ => return None,
        };
        Some(career)
    }
}
