//! Career resolution - raw descriptor id to career and template
//!
//! Monster ids index the bestiary directly; class ids carry the fixed
//! bias. A descriptor that fits neither family resolves to the unset
//! sentinel, which leaves the entity inert rather than failing.

use crate::career::{CareerTemplate, ClassCareer, MonsterCareer};
use crate::core::EntityType;
use serde::{Deserialize, Serialize};

/// Resolved career index; `Unset` is the deliberate degenerate case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolvedCareer {
    #[default]
    Unset,
    Monster(MonsterCareer),
    Class(ClassCareer),
}

impl ResolvedCareer {
    pub fn is_unset(self) -> bool {
        matches!(self, ResolvedCareer::Unset)
    }

    pub fn monster(self) -> Option<MonsterCareer> {
        match self {
            ResolvedCareer::Monster(career) => Some(career),
            _ => None,
        }
    }

    pub fn class(self) -> Option<ClassCareer> {
        match self {
            ResolvedCareer::Class(career) => Some(career),
            _ => None,
        }
    }
}

/// Resolve a raw enemy id under the given family discriminant.
///
/// Exactly one family is consulted; the other id space stays unused.
/// Unknown ids and `EntityType::None` yield `(Unset, empty template)`.
pub fn resolve(id: u16, entity_type: EntityType) -> (ResolvedCareer, CareerTemplate) {
    match entity_type {
        EntityType::Monster => match MonsterCareer::from_id(id) {
            Some(career) => (
                ResolvedCareer::Monster(career),
                CareerTemplate::for_monster(career),
            ),
            None => (ResolvedCareer::Unset, CareerTemplate::empty()),
        },
        EntityType::Class => match ClassCareer::from_raw_id(id) {
            Some(career) => (
                ResolvedCareer::Class(career),
                CareerTemplate::for_class(career),
            ),
            None => (ResolvedCareer::Unset, CareerTemplate::empty()),
        },
        EntityType::None => (ResolvedCareer::Unset, CareerTemplate::empty()),
    }
}
