//! Builtin bestiary - descriptor values for every career
//!
//! Stand-in for the host engine's enemy-basics table. A TOML bestiary
//! (see `loader`) can override these records; the values here keep the
//! crate usable without content files.

use crate::career::{CareerTemplate, ClassCareer, MonsterCareer};
use crate::catalog::EnemyDescriptor;
use crate::core::{EntityType, Gender};
use crate::items::WeaponMaterial;

struct MonsterRow {
    level: i32,
    health: (i32, i32),
    armor_rating: i16,
    weight: i32,
    loot_key: &'static str,
    map_chance: i32,
    casts_magic: bool,
    min_metal_to_hit: Option<WeaponMaterial>,
}

impl MonsterRow {
    const fn plain(
        level: i32,
        health: (i32, i32),
        armor_rating: i16,
        weight: i32,
        loot_key: &'static str,
    ) -> Self {
        Self {
            level,
            health,
            armor_rating,
            weight,
            loot_key,
            map_chance: 0,
            casts_magic: false,
            min_metal_to_hit: None,
        }
    }

    const fn caster(mut self) -> Self {
        self.casts_magic = true;
        self
    }

    const fn map_chance(mut self, chance: i32) -> Self {
        self.map_chance = chance;
        self
    }

    const fn needs_metal(mut self, material: WeaponMaterial) -> Self {
        self.min_metal_to_hit = Some(material);
        self
    }
}

fn monster_row(career: MonsterCareer) -> MonsterRow {
    use MonsterCareer::*;
    use WeaponMaterial::{Mithril, Silver};
    match career {
        Rat => MonsterRow::plain(1, (4, 14), 8, 8, "A"),
        Imp => MonsterRow::plain(2, (10, 20), 6, 4, "D").caster(),
        Spriggan => MonsterRow::plain(3, (12, 26), 5, 120, "B"),
        GiantBat => MonsterRow::plain(2, (6, 16), 8, 4, "A"),
        GrizzlyBear => MonsterRow::plain(4, (24, 54), 9, 400, "C"),
        SabertoothTiger => MonsterRow::plain(5, (30, 60), 8, 320, "C"),
        Spider => MonsterRow::plain(4, (18, 36), 7, 50, "C"),
        Orc => MonsterRow::plain(6, (40, 70), 7, 600, "B").map_chance(1),
        Centaur => MonsterRow::plain(7, (45, 85), 6, 500, "F").map_chance(1),
        Werewolf => MonsterRow::plain(8, (40, 80), 6, 480, "E").needs_metal(Silver),
        Nymph => MonsterRow::plain(6, (25, 45), 7, 180, "G"),
        Slaughterfish => MonsterRow::plain(5, (20, 50), 7, 50, ""),
        OrcSergeant => MonsterRow::plain(9, (60, 100), 6, 600, "B").map_chance(1),
        Harpy => MonsterRow::plain(8, (35, 65), 7, 200, "D"),
        Wereboar => MonsterRow::plain(8, (45, 85), 7, 560, "E").needs_metal(Silver),
        SkeletalWarrior => MonsterRow::plain(9, (40, 80), 6, 80, "H").map_chance(1),
        Giant => MonsterRow::plain(10, (70, 110), 7, 3000, "F").map_chance(2),
        Zombie => MonsterRow::plain(5, (35, 75), 9, 400, "G"),
        Ghost => MonsterRow::plain(11, (30, 60), 4, 0, "I").caster().needs_metal(Silver),
        Mummy => MonsterRow::plain(10, (60, 100), 6, 300, "E").map_chance(1),
        GiantScorpion => MonsterRow::plain(9, (40, 70), 5, 600, ""),
        OrcShaman => MonsterRow::plain(11, (50, 90), 6, 600, "U").caster().map_chance(2),
        Gargoyle => MonsterRow::plain(12, (60, 110), 3, 300, "B"),
        Wraith => MonsterRow::plain(13, (40, 80), 3, 0, "I").caster().needs_metal(Silver),
        OrcWarlord => MonsterRow::plain(14, (80, 130), 3, 700, "T").map_chance(3),
        FrostDaedra => MonsterRow::plain(15, (70, 120), 2, 800, "J").caster().map_chance(3),
        FireDaedra => MonsterRow::plain(16, (70, 120), 2, 800, "J").caster().map_chance(3),
        Daedroth => MonsterRow::plain(17, (80, 130), 2, 400, "E").caster().map_chance(3),
        Vampire => MonsterRow::plain(17, (70, 120), 1, 400, "Q").caster().map_chance(4).needs_metal(Silver),
        DaedraSeducer => MonsterRow::plain(18, (70, 120), 1, 200, "S").caster().map_chance(4),
        VampireAncient => MonsterRow::plain(19, (90, 140), 0, 400, "Q").caster().map_chance(5).needs_metal(Mithril),
        DaedraLord => MonsterRow::plain(20, (100, 160), 0, 1200, "S").caster().map_chance(5).needs_metal(Mithril),
        Lich => MonsterRow::plain(20, (80, 130), 0, 300, "S").caster().map_chance(5).needs_metal(Mithril),
        AncientLich => MonsterRow::plain(21, (100, 160), 0, 300, "S").caster().map_chance(5).needs_metal(Mithril),
        Dragonling => MonsterRow::plain(16, (60, 100), 3, 2000, ""),
        FireAtronach => MonsterRow::plain(16, (60, 100), 3, 1000, ""),
        IronAtronach => MonsterRow::plain(21, (90, 140), 1, 3000, ""),
        FleshAtronach => MonsterRow::plain(16, (120, 180), 5, 1000, ""),
        IceAtronach => MonsterRow::plain(16, (70, 110), 3, 1000, ""),
        HorseInvalid => MonsterRow::plain(3, (20, 40), 9, 800, ""),
        DragonlingAlternate => MonsterRow::plain(18, (80, 140), 3, 2000, "S"),
        Dreugh => MonsterRow::plain(16, (50, 90), 4, 600, "R"),
        Lamia => MonsterRow::plain(16, (55, 95), 4, 200, "R"),
    }
}

/// Builtin descriptor for a monster career
pub fn monster_descriptor(career: MonsterCareer) -> EnemyDescriptor {
    let row = monster_row(career);
    EnemyDescriptor {
        id: career.id(),
        level: row.level,
        min_health: row.health.0,
        max_health: row.health.1,
        armor_rating: row.armor_rating,
        gender: Gender::Unspecified,
        casts_magic: row.casts_magic,
        loot_key: row.loot_key.to_string(),
        map_chance: row.map_chance,
        weight: row.weight,
        min_metal_to_hit: row.min_metal_to_hit,
    }
}

/// Builtin descriptor for a class career. Level/health fields are
/// unused on this path (class enemies level to the player).
pub fn class_descriptor(career: ClassCareer) -> EnemyDescriptor {
    use ClassCareer::*;
    let casts_magic = matches!(
        career,
        Mage | Spellsword | Battlemage | Sorcerer | Healer | Nightblade
    );
    EnemyDescriptor {
        id: career.id(),
        level: 0,
        min_health: 0,
        max_health: 0,
        armor_rating: 12,
        gender: Gender::Unspecified,
        casts_magic,
        loot_key: "O".to_string(),
        map_chance: 2,
        weight: 0,
        min_metal_to_hit: None,
    }
}

/// Look up a builtin descriptor by career display name.
/// Convenience for tools; generation itself works from ids.
pub fn descriptor_by_name(name: &str) -> Option<(EnemyDescriptor, EntityType)> {
    for id in 0..MonsterCareer::COUNT as u16 {
        let career = MonsterCareer::from_id(id)?;
        if CareerTemplate::for_monster(career).name.eq_ignore_ascii_case(name) {
            return Some((monster_descriptor(career), EntityType::Monster));
        }
    }
    for index in 0..ClassCareer::COUNT as u16 {
        let career = ClassCareer::from_raw_id(index + 128)?;
        if CareerTemplate::for_class(career).name.eq_ignore_ascii_case(name) {
            return Some((class_descriptor(career), EntityType::Class));
        }
    }
    None
}
