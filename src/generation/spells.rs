//! Spell-list assignment
//!
//! The fixed rosters are the classic per-monster byte tables; class
//! casters get one of seven level-banded lists. Identifiers are spell
//! ids in the host engine's spell file - resolving them to effect data
//! is not part of this slice, so rosters stay in the pending state.

use crate::core::config::CASTER_SCHOOL_FLOOR;
use crate::entity::{EnemyEntity, Skill, SpellRoster};

pub const IMP_SPELLS: [u8; 4] = [0x07, 0x0A, 0x1D, 0x2C];
pub const GHOST_SPELLS: [u8; 1] = [0x22];
pub const ORC_SHAMAN_SPELLS: [u8; 5] = [0x06, 0x07, 0x16, 0x19, 0x1F];
pub const WRAITH_SPELLS: [u8; 2] = [0x1C, 0x1F];
pub const FROST_DAEDRA_SPELLS: [u8; 2] = [0x10, 0x14];
pub const FIRE_DAEDRA_SPELLS: [u8; 2] = [0x0E, 0x19];
pub const DAEDROTH_SPELLS: [u8; 3] = [0x16, 0x17, 0x1F];
pub const VAMPIRE_SPELLS: [u8; 1] = [0x33];
pub const SEDUCER_SPELLS: [u8; 2] = [0x34, 0x43];
pub const VAMPIRE_ANCIENT_SPELLS: [u8; 2] = [0x08, 0x32];
pub const DAEDRA_LORD_SPELLS: [u8; 5] = [0x08, 0x0A, 0x0E, 0x3C, 0x43];
pub const LICH_SPELLS: [u8; 5] = [0x08, 0x0A, 0x0E, 0x22, 0x3C];
pub const ANCIENT_LICH_SPELLS: [u8; 7] = [0x08, 0x0A, 0x0E, 0x1D, 0x1F, 0x22, 0x3C];

/// Level-banded lists for class casters, weakest band first
pub const CLASS_CASTER_BANDS: [&[u8]; 7] = [
    &FROST_DAEDRA_SPELLS,
    &DAEDROTH_SPELLS,
    &ORC_SHAMAN_SPELLS,
    &VAMPIRE_ANCIENT_SPELLS,
    &DAEDRA_LORD_SPELLS,
    &LICH_SPELLS,
    &ANCIENT_LICH_SPELLS,
];

/// Fixed roster for the monster casters; everything else has none
pub fn monster_spell_list(career: crate::career::MonsterCareer) -> Option<&'static [u8]> {
    use crate::career::MonsterCareer::*;
    match career {
        Imp => Some(&IMP_SPELLS),
        Ghost => Some(&GHOST_SPELLS),
        OrcShaman => Some(&ORC_SHAMAN_SPELLS),
        Wraith => Some(&WRAITH_SPELLS),
        FrostDaedra => Some(&FROST_DAEDRA_SPELLS),
        FireDaedra => Some(&FIRE_DAEDRA_SPELLS),
        Daedroth => Some(&DAEDROTH_SPELLS),
        Vampire => Some(&VAMPIRE_SPELLS),
        DaedraSeducer => Some(&SEDUCER_SPELLS),
        VampireAncient => Some(&VAMPIRE_ANCIENT_SPELLS),
        DaedraLord => Some(&DAEDRA_LORD_SPELLS),
        Lich => Some(&LICH_SPELLS),
        AncientLich => Some(&ANCIENT_LICH_SPELLS),
        _ => None,
    }
}

/// Pick the class-caster band for a level: `min(level / 3, 6)`
pub fn class_spell_band(level: i32) -> &'static [u8] {
    let band = (level / 3).clamp(0, 6) as usize;
    CLASS_CASTER_BANDS[band]
}

/// Attach a spell list to an entity: tops up magicka, floors the six
/// magic-school skills, and retains the ids as a pending roster.
pub fn assign_spells(entity: &mut EnemyEntity, spell_ids: &[u8]) {
    entity.current_magicka = entity.max_magicka;
    for school in Skill::MAGIC_SCHOOLS {
        if entity.skills.get(school) < CASTER_SCHOOL_FLOOR {
            entity.skills.set_permanent(school, CASTER_SCHOOL_FLOOR);
        }
    }
    entity.spells = SpellRoster::Pending(spell_ids.to_vec());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::career::MonsterCareer;

    #[test]
    fn test_band_selection() {
        assert_eq!(class_spell_band(1), CLASS_CASTER_BANDS[0]);
        assert_eq!(class_spell_band(3), CLASS_CASTER_BANDS[1]);
        assert_eq!(class_spell_band(17), CLASS_CASTER_BANDS[5]);
        // Level 19 hits the highest band: min(19/3, 6) = 6
        assert_eq!(class_spell_band(19), CLASS_CASTER_BANDS[6]);
        assert_eq!(class_spell_band(40), CLASS_CASTER_BANDS[6]);
    }

    #[test]
    fn test_thirteen_monster_casters() {
        let casters = (0..MonsterCareer::COUNT as u16)
            .filter_map(MonsterCareer::from_id)
            .filter(|career| monster_spell_list(*career).is_some())
            .count();
        assert_eq!(casters, 13);
    }

    #[test]
    fn test_assign_spells_floors_schools_and_fills_magicka() {
        let mut entity = EnemyEntity::new();
        entity.max_magicka = 150;
        entity.skills.set_permanent(Skill::Destruction, 95);
        assign_spells(&mut entity, &IMP_SPELLS);

        assert_eq!(entity.current_magicka, 150);
        // Already-higher school values stay; lower ones come up to 80.
        assert_eq!(entity.skills.get(Skill::Destruction), 95);
        assert_eq!(entity.skills.get(Skill::Mysticism), 80);
        assert_eq!(entity.spells.pending_ids(), &IMP_SPELLS);
    }
}
