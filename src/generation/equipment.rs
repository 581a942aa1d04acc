//! Equipment generation
//!
//! An equipment variant picks the weapon tier and the per-slot body
//! armor chance. After all rolls, armor values are recomputed from
//! what actually got equipped and reconciled against the innate rating
//! via the policy for the entity's type.

use crate::career::{ClassCareer, ResolvedCareer};
use crate::core::config::{
    ARMOR_RATING_SCALE, ASSASSIN_POISON_CHANCE, POISON_CHANCE, UNARMORED_VALUE,
    VARIANT_ARMOR_CHANCE,
};
use crate::core::{EntityType, PlayerSnapshot};
use crate::entity::EnemyEntity;
use crate::items::builder::{
    create_armor, create_weapon, random_armor_material, random_material, roll_kind,
};
use crate::items::{
    EquipSlot, ItemKind, Poison, BODY_ARMOR_ROLL_ORDER, LIGHT_OFFHAND_WEAPONS, ONE_HANDED_BLADES,
    SHIELD_KINDS, TWO_HANDED_WEAPONS,
};
use rand::Rng;

/// Chance (percent) of the variant-0 shield roll and of the
/// independent off-hand roll
const OFFHAND_CHANCE: i32 = 50;

/// Roll and equip gear for the given variant, then reconcile armor
/// values and maybe poison the main weapon.
pub fn set_enemy_equipment(
    entity: &mut EnemyEntity,
    variant: u8,
    player: &PlayerSnapshot,
    rng: &mut impl Rng,
) {
    let item_level = player.level;
    let chance = VARIANT_ARMOR_CHANCE[(variant as usize).min(2)];

    if variant == 0 {
        // Main hand: one-handed blade, always.
        let blade = roll_kind(&ONE_HANDED_BLADES, rng);
        let weapon = create_weapon(blade, random_material(item_level, rng));
        let index = entity.inventory.add(weapon);
        entity.inventory.try_equip(index);

        // The shield kind is drawn before its equip roll; the draw
        // consumes randomness even when the roll fails.
        let shield_kind = roll_kind(&SHIELD_KINDS, rng);
        if rng.gen_range(1..=100) <= OFFHAND_CHANCE {
            let shield = create_armor(
                player.gender,
                player.race,
                shield_kind,
                random_armor_material(item_level, rng),
            );
            let index = entity.inventory.add(shield);
            entity.inventory.try_equip(index);
        }

        // Off-hand weapon: an independent roll. When a shield already
        // holds the left hand the weapon is carried unequipped.
        if rng.gen_range(1..=100) <= OFFHAND_CHANCE {
            let kind = roll_kind(&LIGHT_OFFHAND_WEAPONS, rng);
            let weapon = create_weapon(kind, random_material(item_level, rng));
            let index = entity.inventory.add(weapon);
            entity.inventory.try_equip(index);
        }
    } else {
        // Main hand: heavy two-hander, always. No off-hand.
        let kind = roll_kind(&TWO_HANDED_WEAPONS, rng);
        let weapon = create_weapon(kind, random_material(item_level, rng));
        let index = entity.inventory.add(weapon);
        entity.inventory.try_equip(index);
    }

    // Body slots roll independently in the fixed helm-to-boots order.
    for armor_kind in BODY_ARMOR_ROLL_ORDER {
        if chance > 0 && rng.gen_range(1..=100) <= chance {
            let piece = create_armor(
                player.gender,
                player.race,
                armor_kind,
                random_armor_material(item_level, rng),
            );
            let index = entity.inventory.add(piece);
            entity.inventory.try_equip(index);
        }
    }

    recompute_armor_values(entity);

    super::armor_policy::ReconciliationPolicy::for_enemy(
        entity.entity_type,
        entity
            .descriptor
            .as_ref()
            .map(|descriptor| descriptor.armor_rating)
            .unwrap_or(0),
    )
    .apply(&mut entity.armor);

    maybe_poison_weapon(entity, player, rng);
}

/// Reset all slots to unarmored and rebuild them from equipped armor,
/// head through legs. The feet slot is never recomputed; boots are
/// worn but not counted, as in the classic rules. Overlapping coverage
/// keeps the better value.
fn recompute_armor_values(entity: &mut EnemyEntity) {
    entity.armor.set_all(UNARMORED_VALUE);
    // Collect first; the armor array and the inventory are both on the
    // entity.
    let covered: Vec<(crate::core::BodyPart, i16)> = entity
        .inventory
        .equipped_armor()
        .filter_map(|item| match &item.kind {
            ItemKind::Armor { kind, material, .. } => {
                let value =
                    (UNARMORED_VALUE - material.protection_modifier() * ARMOR_RATING_SCALE).max(0);
                Some(kind.covered_parts().iter().map(move |part| (*part, value)))
            }
            _ => None,
        })
        .flatten()
        .collect();
    for (part, value) in covered {
        if part == crate::core::BodyPart::Feet {
            continue;
        }
        if value < entity.armor.get(part) {
            entity.armor.set(part, value);
        }
    }
}

/// Some enemies carry poisoned blades once the player is past level 1
fn maybe_poison_weapon(entity: &mut EnemyEntity, player: &PlayerSnapshot, rng: &mut impl Rng) {
    if player.level <= 1 {
        return;
    }
    let eligible = match entity.career {
        ResolvedCareer::Class(_) => true,
        ResolvedCareer::Monster(career) => career.can_poison_weapon(),
        ResolvedCareer::Unset => false,
    };
    if !eligible || entity.inventory.equipped_at(EquipSlot::RightHand).is_none() {
        return;
    }

    let chance = if entity.career == ResolvedCareer::Class(ClassCareer::Assassin) {
        ASSASSIN_POISON_CHANCE
    } else {
        POISON_CHANCE
    };
    // Strict less-than, as in the classic rules.
    if rng.gen_range(1..=100) < chance {
        let poison = Poison::ALL[rng.gen_range(0..Poison::ALL.len())];
        if let Some(item) = entity.inventory.equipped_at_mut(EquipSlot::RightHand) {
            if let ItemKind::Weapon {
                poison: weapon_poison,
                ..
            } = &mut item.kind
            {
                *weapon_poison = Some(poison);
            }
        }
    }
}

/// Which equipment variant an enemy uses, if any. Class enemies roll
/// variant 0 or 1; a handful of monsters use fixed variants.
pub fn equipment_variant_for(
    career: ResolvedCareer,
    entity_type: EntityType,
    rng: &mut impl Rng,
) -> Option<u8> {
    match career {
        ResolvedCareer::Monster(career) => career.equipment_variant(),
        ResolvedCareer::Class(_) if entity_type == EntityType::Class => {
            Some(rng.gen_range(0..2) as u8)
        }
        _ => None,
    }
}
