//! Property-based tests for the generation formulas.

use proptest::prelude::*;

use gravenhold::core::config::{CLASS_BASE_HEALTH, SKILL_CAP};
use gravenhold::core::BodyPart;
use gravenhold::entity::ArmorValues;
use gravenhold::generation::{baseline_skill_value, roll_class_max_health, ReconciliationPolicy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn baseline_skill_never_exceeds_cap(level in 0..10_000i32) {
        let value = baseline_skill_value(level);
        prop_assert!(value <= SKILL_CAP);
        prop_assert!(value >= 0);
    }

    #[test]
    fn baseline_skill_monotonic(level in 0..1_000i32) {
        prop_assert!(baseline_skill_value(level + 1) >= baseline_skill_value(level));
    }

    #[test]
    fn class_health_bounded_by_die(
        level in 1..30i32,
        die in 1..30i32,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let health = roll_class_max_health(level, die, &mut rng);
        prop_assert!(health >= CLASS_BASE_HEALTH + level);
        prop_assert!(health <= CLASS_BASE_HEALTH + level * die);
    }

    #[test]
    fn clamp_ceiling_respects_ceiling(
        values in prop::array::uniform7(-20..200i16),
        ceiling in 0..100i16,
    ) {
        let mut armor = ArmorValues::unarmored();
        for (part, value) in BodyPart::ALL.iter().zip(values.iter()) {
            armor.set(*part, *value);
        }
        ReconciliationPolicy::ClampCeiling { ceiling }.apply(&mut armor);
        for (part, original) in BodyPart::ALL.iter().zip(values.iter()) {
            let after = armor.get(*part);
            prop_assert!(after <= ceiling);
            // Values already at or under the ceiling pass through.
            if *original <= ceiling {
                prop_assert_eq!(after, *original);
            }
        }
    }

    #[test]
    fn prefer_innate_never_raises_values(
        values in prop::array::uniform7(0..200i16),
        innate in 0..100i16,
    ) {
        let mut armor = ArmorValues::unarmored();
        for (part, value) in BodyPart::ALL.iter().zip(values.iter()) {
            armor.set(*part, *value);
        }
        ReconciliationPolicy::PreferInnate { innate }.apply(&mut armor);
        for (part, original) in BodyPart::ALL.iter().zip(values.iter()) {
            prop_assert_eq!(armor.get(*part), (*original).min(innate));
        }
    }
}
