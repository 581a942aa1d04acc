//! Generation rule constants with documented provenance
//!
//! All magic numbers of the enemy-generation rules are collected here.
//! Most of them are fixed by the classic rules the engine reproduces;
//! changing them changes combat balance.

/// Raw identifiers at or above this value denote class careers;
/// subtracting it yields the class-career index.
pub const CLASS_ID_BIAS: u16 = 128;

/// Flat term of the baseline skill formula `level * 5 + 30`
pub const SKILL_FLOOR_BASE: i16 = 30;

/// Per-level term of the baseline skill formula
pub const SKILL_PER_LEVEL: i16 = 5;

/// Baseline skills never exceed this cap
pub const SKILL_CAP: i16 = 100;

/// Magic-school skills of spellcasters are raised to this floor
pub const CASTER_SCHOOL_FLOOR: i16 = 80;

/// Armor value of a bare body slot (lower is better protection)
pub const UNARMORED_VALUE: i16 = 100;

/// A descriptor's innate armor rating is scaled by this factor to get
/// per-slot armor values
pub const ARMOR_RATING_SCALE: i16 = 5;

/// Class enemies never end up with a slot value above this ceiling,
/// even when that is worse than their innate rating. Historical rule;
/// monsters instead keep the better of equipment and innate values.
pub const CLASS_ARMOR_CEILING: i16 = 60;

/// City-watch knights spawn this many levels above the player (uniform,
/// inclusive range)
pub const CITY_WATCH_BONUS_MIN: i32 = 3;
pub const CITY_WATCH_BONUS_MAX: i32 = 6;

/// Flat term of the class max-health roll
pub const CLASS_BASE_HEALTH: i32 = 10;

/// Baseline chance (percent) to poison an equipped right-hand weapon
pub const POISON_CHANCE: i32 = 5;

/// Assassins poison far more often
pub const ASSASSIN_POISON_CHANCE: i32 = 60;

/// Chance (percent) of a potion in loot when the loot key is set
pub const POTION_CHANCE: i32 = 3;

/// Chance (percent) of a potion recipe in loot when the loot key is set
pub const POTION_RECIPE_CHANCE: i32 = 2;

/// Spellcaster magicka formula: `MAGICKA_BASE + MAGICKA_PER_LEVEL * level`
pub const MAGICKA_BASE: i32 = 100;
pub const MAGICKA_PER_LEVEL: i32 = 10;

/// Equipped-armor chance (percent) per body slot, by equipment variant.
/// Variant 0 rolls no body armor after the weapon/off-hand decision.
pub const VARIANT_ARMOR_CHANCE: [i32; 3] = [0, 75, 90];

/// Classic weight units per kilogram of carried items
pub const CLASSIC_WEIGHT_SCALE: i32 = 4;

/// Default body weight in classic units for class enemies, by gender
pub const FEMALE_BASE_WEIGHT: i32 = 240;
pub const MALE_BASE_WEIGHT: i32 = 350;
