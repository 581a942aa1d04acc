//! Armor reconciliation after equipment is applied
//!
//! Two historical rule sets diverge here and both must be preserved
//! exactly. In the classic game every equipment user was clamped to a
//! ceiling of 60, which made armored monsters easier to hit than their
//! own innate ratings. Class enemies keep that clamp for fidelity;
//! monsters instead keep whichever value is better per slot. The
//! policy is an explicit strategy so the divergence stays auditable.

use crate::core::config::{ARMOR_RATING_SCALE, CLASS_ARMOR_CEILING};
use crate::core::EntityType;
use crate::entity::ArmorValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconciliationPolicy {
    /// No slot may end up above the ceiling (class enemies)
    ClampCeiling { ceiling: i16 },
    /// Equipment only counts where it beats the innate value (monsters)
    PreferInnate { innate: i16 },
}

impl ReconciliationPolicy {
    /// Select the policy for an enemy from its type tag and innate
    /// armor rating
    pub fn for_enemy(entity_type: EntityType, armor_rating: i16) -> Self {
        match entity_type {
            EntityType::Class => ReconciliationPolicy::ClampCeiling {
                ceiling: CLASS_ARMOR_CEILING,
            },
            _ => ReconciliationPolicy::PreferInnate {
                innate: armor_rating * ARMOR_RATING_SCALE,
            },
        }
    }

    pub fn apply(self, armor: &mut ArmorValues) {
        match self {
            ReconciliationPolicy::ClampCeiling { ceiling } => {
                for value in armor.values_mut() {
                    if *value > ceiling {
                        *value = ceiling;
                    }
                }
            }
            ReconciliationPolicy::PreferInnate { innate } => {
                for value in armor.values_mut() {
                    if *value > innate {
                        *value = innate;
                    }
                }
            }
        }
    }
}
