//! Best-effort loot attachment
//!
//! Loot tables are keyed by single letters as in the classic game data.
//! Unknown or empty keys generate nothing; missing loot is a valid
//! state, never an error.

use crate::items::{Inventory, Item, ItemKind};
use rand::Rng;

/// Gold ranges per loot-table key. Keys not listed here resolve to
/// nothing (best-effort content generation).
fn gold_range(key: &str) -> Option<(u32, u32)> {
    let range = match key {
        "A" => (1, 10),
        "B" => (0, 2),
        "C" => (2, 20),
        "D" => (1, 4),
        "E" => (2, 20),
        "F" => (2, 15),
        "G" => (1, 10),
        "H" => (2, 20),
        "I" => (0, 2),
        "J" => (50, 150),
        "K" => (1, 10),
        "L" => (1, 20),
        "M" => (1, 15),
        "N" => (1, 80),
        "O" => (5, 20),
        "P" => (5, 20),
        "Q" => (20, 80),
        "R" => (5, 20),
        "S" => (50, 125),
        "T" => (20, 80),
        "U" => (7, 32),
        _ => return None,
    };
    Some(range)
}

/// Populate an inventory from a loot-table key
pub fn generate_items(loot_key: &str, inventory: &mut Inventory, rng: &mut impl Rng) {
    let Some((min, max)) = gold_range(loot_key) else {
        if !loot_key.is_empty() {
            tracing::debug!(loot_key, "no loot table for key");
        }
        return;
    };
    let amount = rng.gen_range(min..=max);
    if amount > 0 {
        inventory.add(Item {
            kind: ItemKind::Gold { amount },
            equipped: None,
            weight_kg: amount as f32 * 0.0025,
        });
    }
}

/// Percentage-chance attachment of a treasure map
pub fn randomly_add_map(chance: i32, inventory: &mut Inventory, rng: &mut impl Rng) {
    if chance > 0 && rng.gen_range(1..=100) <= chance {
        inventory.add(Item {
            kind: ItemKind::Map,
            equipped: None,
            weight_kg: 0.0,
        });
    }
}

/// Percentage-chance attachment of a potion
pub fn randomly_add_potion(chance: i32, inventory: &mut Inventory, rng: &mut impl Rng) {
    if rng.gen_range(1..=100) <= chance {
        inventory.add(Item {
            kind: ItemKind::Potion,
            equipped: None,
            weight_kg: 0.25,
        });
    }
}

/// Percentage-chance attachment of a potion recipe
pub fn randomly_add_potion_recipe(chance: i32, inventory: &mut Inventory, rng: &mut impl Rng) {
    if rng.gen_range(1..=100) <= chance {
        inventory.add(Item {
            kind: ItemKind::PotionRecipe,
            equipped: None,
            weight_kg: 0.1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_unknown_key_generates_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut inventory = Inventory::new();
        generate_items("ZZ", &mut inventory, &mut rng);
        generate_items("", &mut inventory, &mut rng);
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_known_key_rolls_gold_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let mut inventory = Inventory::new();
            generate_items("O", &mut inventory, &mut rng);
            assert_eq!(inventory.len(), 1);
            let ItemKind::Gold { amount } = inventory.items()[0].kind else {
                panic!("expected gold");
            };
            assert!((5..=20).contains(&amount));
        }
    }

    #[test]
    fn test_zero_map_chance_never_adds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut inventory = Inventory::new();
        for _ in 0..100 {
            randomly_add_map(0, &mut inventory, &mut rng);
        }
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_full_chance_always_adds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut inventory = Inventory::new();
        randomly_add_potion(100, &mut inventory, &mut rng);
        randomly_add_potion_recipe(100, &mut inventory, &mut rng);
        assert_eq!(inventory.len(), 2);
    }
}
