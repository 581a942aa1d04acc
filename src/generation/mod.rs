//! The spawn generation pipeline
//!
//! An external spawner hands over a descriptor and a family
//! discriminant; the pipeline resolves the career, fills vitals and
//! skills, rolls loot, equipment, and spells, and returns the finished
//! entity. Everything random comes from the injected generator, so the
//! whole pipeline is reproducible under a seed.

pub mod armor_policy;
pub mod equipment;
pub mod formulas;
pub mod spells;

pub use armor_policy::ReconciliationPolicy;
pub use equipment::{equipment_variant_for, set_enemy_equipment};
pub use formulas::roll_class_max_health;
pub use spells::{assign_spells, class_spell_band, monster_spell_list};

use crate::career::{resolve, ClassCareer, ResolvedCareer};
use crate::catalog::EnemyDescriptor;
use crate::core::config::{
    ARMOR_RATING_SCALE, CITY_WATCH_BONUS_MAX, CITY_WATCH_BONUS_MIN, MAGICKA_BASE,
    MAGICKA_PER_LEVEL, POTION_CHANCE, POTION_RECIPE_CHANCE, SKILL_CAP, SKILL_FLOOR_BASE,
    SKILL_PER_LEVEL,
};
use crate::core::{EntityType, PlayerSnapshot};
use crate::entity::{EnemyEntity, Skill};
use crate::items::loot;
use rand::Rng;

/// Baseline value written across the whole skill table
pub fn baseline_skill_value(level: i32) -> i16 {
    let value = level * i32::from(SKILL_PER_LEVEL) + i32::from(SKILL_FLOOR_BASE);
    value.min(i32::from(SKILL_CAP)) as i16
}

/// Build a ready-to-simulate enemy from a descriptor.
///
/// A descriptor that resolves to no career returns an inert entity
/// with the unset career sentinel; callers treat that as a no-op.
pub fn generate_enemy(
    descriptor: &EnemyDescriptor,
    entity_type: EntityType,
    player: &PlayerSnapshot,
    rng: &mut impl Rng,
) -> EnemyEntity {
    let mut entity = EnemyEntity::new();
    let (career, template) = resolve(descriptor.id, entity_type);
    if career.is_unset() {
        // Deliberate degenerate case: the entity stays blank.
        return entity;
    }
    entity.career = career;
    entity.entity_type = entity_type;

    match career {
        ResolvedCareer::Monster(_) => {
            // Monsters come with predefined level, health, and armor.
            // Equipment may still improve the armor below.
            entity.level = descriptor.level;
            entity.max_health = rng.gen_range(descriptor.min_health..=descriptor.max_health);
            entity
                .armor
                .set_all(descriptor.armor_rating * ARMOR_RATING_SCALE);
        }
        ResolvedCareer::Class(class_career) => {
            // Class enemies level with the player; the city watch runs
            // a few levels hot.
            entity.level = player.level;
            if class_career == ClassCareer::KnightCityWatch {
                entity.level += rng.gen_range(CITY_WATCH_BONUS_MIN..=CITY_WATCH_BONUS_MAX);
            }
            entity.max_health =
                roll_class_max_health(entity.level, template.hit_points_per_level, rng);
        }
        ResolvedCareer::Unset => unreachable!("unset career returned above"),
    }

    entity.name = template.name.clone();
    entity.template = template;
    entity.descriptor = Some(descriptor.clone());
    entity.min_metal_to_hit = descriptor.min_metal_to_hit;
    entity.max_magicka = if descriptor.casts_magic {
        MAGICKA_BASE + MAGICKA_PER_LEVEL * entity.level
    } else {
        0
    };

    // Baseline skills. The classic loop bound is inclusive of the
    // skill count; the table drops the out-of-range write.
    let skill_value = baseline_skill_value(entity.level);
    for index in 0..=Skill::COUNT {
        entity.skills.set_permanent_by_index(index, skill_value);
    }

    loot::generate_items(&descriptor.loot_key, &mut entity.inventory, rng);

    if let Some(variant) = equipment_variant_for(career, entity_type, rng) {
        set_enemy_equipment(&mut entity, variant, player, rng);
    }

    match career {
        ResolvedCareer::Monster(monster_career) => {
            if let Some(list) = monster_spell_list(monster_career) {
                assign_spells(&mut entity, list);
            }
        }
        ResolvedCareer::Class(_) if descriptor.casts_magic => {
            let band = class_spell_band(entity.level);
            assign_spells(&mut entity, band);
        }
        _ => {}
    }

    loot::randomly_add_map(descriptor.map_chance, &mut entity.inventory, rng);
    if !descriptor.loot_key.is_empty() {
        loot::randomly_add_potion(POTION_CHANCE, &mut entity.inventory, rng);
        loot::randomly_add_potion_recipe(POTION_RECIPE_CHANCE, &mut entity.inventory, rng);
    }

    entity.fill_vital_signs();
    tracing::debug!(
        name = %entity.name,
        level = entity.level,
        health = entity.max_health,
        items = entity.inventory.len(),
        "generated enemy"
    );
    entity
}
