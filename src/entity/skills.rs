//! The classic 35-skill table
//!
//! Skill values are small integers; baseline assignment writes by raw
//! index, and callers historically iterate one index past the count.
//! The setter tolerates that (out-of-range writes are dropped) so the
//! classic loop bound stays safe.

use serde::{Deserialize, Serialize};

/// Every skill in the classic table, in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum Skill {
    Medical = 0,
    Etiquette = 1,
    Streetwise = 2,
    Jumping = 3,
    Orcish = 4,
    Harpy = 5,
    Giantish = 6,
    Dragonish = 7,
    Nymph = 8,
    Daedric = 9,
    Spriggan = 10,
    Centaurian = 11,
    Impish = 12,
    Lockpicking = 13,
    Mercantile = 14,
    Pickpocket = 15,
    Stealth = 16,
    Swimming = 17,
    Climbing = 18,
    Backstabbing = 19,
    Dodging = 20,
    Running = 21,
    Destruction = 22,
    Restoration = 23,
    Illusion = 24,
    Alteration = 25,
    Thaumaturgy = 26,
    Mysticism = 27,
    ShortBlade = 28,
    LongBlade = 29,
    HandToHand = 30,
    Axe = 31,
    BluntWeapon = 32,
    Archery = 33,
    CriticalStrike = 34,
}

impl Skill {
    pub const COUNT: usize = 35;

    /// The six magic-school skills floored for spellcasters
    pub const MAGIC_SCHOOLS: [Skill; 6] = [
        Skill::Destruction,
        Skill::Restoration,
        Skill::Illusion,
        Skill::Alteration,
        Skill::Thaumaturgy,
        Skill::Mysticism,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Permanent skill values of an entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    values: Vec<i16>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self {
            values: vec![0; Skill::COUNT],
        }
    }

    pub fn get(&self, skill: Skill) -> i16 {
        self.values[skill.index()]
    }

    pub fn set_permanent(&mut self, skill: Skill, value: i16) {
        self.values[skill.index()] = value;
    }

    /// Raw-index setter used by baseline assignment. Indices at or past
    /// the skill count are dropped; the classic loop runs through
    /// `Skill::COUNT` inclusive and relies on this.
    pub fn set_permanent_by_index(&mut self, index: usize, value: i16) {
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        } else {
            tracing::trace!(index, "skill write past table end dropped");
        }
    }

    pub fn values(&self) -> &[i16] {
        &self.values
    }
}

impl Default for SkillSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_indices_dense() {
        assert_eq!(Skill::Medical.index(), 0);
        assert_eq!(Skill::CriticalStrike.index(), Skill::COUNT - 1);
    }

    #[test]
    fn test_one_past_end_write_is_noop() {
        let mut skills = SkillSet::new();
        skills.set_permanent_by_index(Skill::COUNT, 77);
        assert!(skills.values().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_inclusive_baseline_loop_is_safe() {
        // The classic baseline loop bound: 0..=COUNT.
        let mut skills = SkillSet::new();
        for i in 0..=Skill::COUNT {
            skills.set_permanent_by_index(i, 55);
        }
        assert!(skills.values().iter().all(|&v| v == 55));
        assert_eq!(skills.values().len(), Skill::COUNT);
    }
}
