//! Monster careers - the classic bestiary
//!
//! Identifiers map 1:1 onto the classic monster table; the numeric
//! values are wire-compatible with the host engine's enemy ids.

use serde::{Deserialize, Serialize};

/// Every monster species an enemy descriptor can reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum MonsterCareer {
    Rat = 0,
    Imp = 1,
    Spriggan = 2,
    GiantBat = 3,
    GrizzlyBear = 4,
    SabertoothTiger = 5,
    Spider = 6,
    Orc = 7,
    Centaur = 8,
    Werewolf = 9,
    Nymph = 10,
    Slaughterfish = 11,
    OrcSergeant = 12,
    Harpy = 13,
    Wereboar = 14,
    SkeletalWarrior = 15,
    Giant = 16,
    Zombie = 17,
    Ghost = 18,
    Mummy = 19,
    GiantScorpion = 20,
    OrcShaman = 21,
    Gargoyle = 22,
    Wraith = 23,
    OrcWarlord = 24,
    FrostDaedra = 25,
    FireDaedra = 26,
    Daedroth = 27,
    Vampire = 28,
    DaedraSeducer = 29,
    VampireAncient = 30,
    DaedraLord = 31,
    Lich = 32,
    AncientLich = 33,
    Dragonling = 34,
    FireAtronach = 35,
    IronAtronach = 36,
    FleshAtronach = 37,
    IceAtronach = 38,
    HorseInvalid = 39,
    DragonlingAlternate = 40,
    Dreugh = 41,
    Lamia = 42,
}

impl MonsterCareer {
    pub const COUNT: usize = 43;

    /// Numeric id as it appears on enemy descriptors
    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Self> {
        use MonsterCareer::*;
        let career = match id {
            0 => Rat,
            1 => Imp,
            2 => Spriggan,
            3 => GiantBat,
            4 => GrizzlyBear,
            5 => SabertoothTiger,
            6 => Spider,
            7 => Orc,
            8 => Centaur,
            9 => Werewolf,
            10 => Nymph,
            11 => Slaughterfish,
            12 => OrcSergeant,
            13 => Harpy,
            14 => Wereboar,
            15 => SkeletalWarrior,
            16 => Giant,
            17 => Zombie,
            18 => Ghost,
            19 => Mummy,
            20 => GiantScorpion,
            21 => OrcShaman,
            22 => Gargoyle,
            23 => Wraith,
            24 => OrcWarlord,
            25 => FrostDaedra,
            26 => FireDaedra,
            27 => Daedroth,
            28 => Vampire,
            29 => DaedraSeducer,
            30 => VampireAncient,
            31 => DaedraLord,
            32 => Lich,
            33 => AncientLich,
            34 => Dragonling,
            35 => FireAtronach,
            36 => IronAtronach,
            37 => FleshAtronach,
            38 => IceAtronach,
            39 => HorseInvalid,
            40 => DragonlingAlternate,
            41 => Dreugh,
            42 => Lamia,
            _ => return None,
        };
        Some(career)
    }

    /// Equipment variant used by the few gear-carrying monsters.
    /// Everything else fights with its natural weapons.
    pub fn equipment_variant(self) -> Option<u8> {
        match self {
            MonsterCareer::Orc | MonsterCareer::OrcShaman => Some(0),
            MonsterCareer::Centaur | MonsterCareer::OrcSergeant => Some(1),
            MonsterCareer::OrcWarlord => Some(2),
            _ => None,
        }
    }

    /// Monsters whose equipped right-hand weapon may carry poison
    pub fn can_poison_weapon(self) -> bool {
        matches!(
            self,
            MonsterCareer::Orc | MonsterCareer::Centaur | MonsterCareer::OrcSergeant
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for id in 0..MonsterCareer::COUNT as u16 {
            let career = MonsterCareer::from_id(id).unwrap();
            assert_eq!(career.id(), id);
        }
        assert!(MonsterCareer::from_id(43).is_none());
    }

    #[test]
    fn test_equipment_variants() {
        assert_eq!(MonsterCareer::Orc.equipment_variant(), Some(0));
        assert_eq!(MonsterCareer::OrcShaman.equipment_variant(), Some(0));
        assert_eq!(MonsterCareer::Centaur.equipment_variant(), Some(1));
        assert_eq!(MonsterCareer::OrcSergeant.equipment_variant(), Some(1));
        assert_eq!(MonsterCareer::OrcWarlord.equipment_variant(), Some(2));
        assert_eq!(MonsterCareer::Rat.equipment_variant(), None);
    }
}
