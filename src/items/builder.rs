//! Item construction and level-banded material rolls
//!
//! The catalog builder the equipment generator draws from. Material
//! quality scales with the player's level: the roll is uniform over
//! the tiers unlocked so far.

use crate::core::{Gender, Race};
use crate::items::{ArmorKind, ArmorMaterial, Item, ItemKind, WeaponKind, WeaponMaterial};
use rand::Rng;

/// Levels needed to unlock each further material tier
const LEVELS_PER_TIER: i32 = 2;

pub fn create_weapon(kind: WeaponKind, material: WeaponMaterial) -> Item {
    Item {
        kind: ItemKind::Weapon {
            kind,
            material,
            poison: None,
        },
        equipped: None,
        weight_kg: kind.weight_kg(),
    }
}

/// Armor is fitted to a body variant; the fit is cosmetic but recorded
/// so downstream paper-doll rendering can pick the right art.
pub fn create_armor(gender: Gender, race: Race, kind: ArmorKind, material: ArmorMaterial) -> Item {
    Item {
        kind: ItemKind::Armor {
            kind,
            material,
            fitted_for: Some((gender, race)),
        },
        equipped: None,
        weight_kg: kind.weight_kg(),
    }
}

/// Random weapon material for an item level
pub fn random_material(item_level: i32, rng: &mut impl Rng) -> WeaponMaterial {
    let ceiling = tier_ceiling(item_level, WeaponMaterial::ALL.len());
    WeaponMaterial::ALL[rng.gen_range(0..=ceiling)]
}

/// Random armor material for an item level
pub fn random_armor_material(item_level: i32, rng: &mut impl Rng) -> ArmorMaterial {
    let ceiling = tier_ceiling(item_level, ArmorMaterial::ALL.len());
    ArmorMaterial::ALL[rng.gen_range(0..=ceiling)]
}

fn tier_ceiling(item_level: i32, tier_count: usize) -> usize {
    let unlocked = (item_level.max(1) / LEVELS_PER_TIER) as usize;
    unlocked.min(tier_count - 1)
}

/// Roll a kind uniformly from one of the fixed catalog ranges
pub fn roll_kind<T: Copy>(range: &[T], rng: &mut impl Rng) -> T {
    range[rng.gen_range(0..range.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ONE_HANDED_BLADES, SHIELD_KINDS};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_low_level_gets_low_tiers() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            let material = random_material(1, &mut rng);
            assert_eq!(material, WeaponMaterial::Iron);
            let armor = random_armor_material(1, &mut rng);
            assert_eq!(armor, ArmorMaterial::Leather);
        }
    }

    #[test]
    fn test_high_level_reaches_all_tiers() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut saw_daedric = false;
        for _ in 0..500 {
            if random_material(30, &mut rng) == WeaponMaterial::Daedric {
                saw_daedric = true;
            }
        }
        assert!(saw_daedric);
    }

    #[test]
    fn test_roll_kind_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let blade = roll_kind(&ONE_HANDED_BLADES, &mut rng);
            assert!(ONE_HANDED_BLADES.contains(&blade));
            let shield = roll_kind(&SHIELD_KINDS, &mut rng);
            assert!(SHIELD_KINDS.contains(&shield));
        }
    }

    #[test]
    fn test_created_items_start_unequipped() {
        let weapon = create_weapon(WeaponKind::Broadsword, WeaponMaterial::Steel);
        assert_eq!(weapon.equipped, None);
        let armor = create_armor(
            Gender::Male,
            Race::Nord,
            ArmorKind::Helm,
            ArmorMaterial::Chain,
        );
        assert_eq!(armor.equipped, None);
        assert!(armor.is_armor());
    }
}
