//! Disease-effect definitions
//!
//! Each classic disease is a thin definition over the shared
//! disease-data table: a stable effect key, the disease id, and the
//! attribute-damage data the ongoing-effect system consumes. Message
//! tokens and save-state plumbing live with the host engine.

use crate::career::Attribute;
use serde::{Deserialize, Serialize};

/// Classic disease identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Disease {
    WitchesPox = 0,
    Plague = 1,
    YellowFever = 2,
    StomachRot = 3,
    Consumption = 4,
    BrainFever = 5,
    SwampRot = 6,
    CalironsCurse = 7,
    Cholera = 8,
    Leprosy = 9,
    WoundRot = 10,
    RedDeath = 11,
    BloodRot = 12,
    TyphoidFever = 13,
    Dementia = 14,
    Chrondiasis = 15,
    WizardFever = 16,
}

/// Per-disease rules data from the classic tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseData {
    /// Attributes drained while the disease runs
    pub affected_attributes: Vec<Attribute>,
    /// Inclusive daily attribute damage range
    pub min_daily_damage: i32,
    pub max_daily_damage: i32,
    /// Days before symptoms (and damage) begin
    pub incubation_days: u8,
}

/// Classic disease data lookup
pub fn classic_disease_data(disease: Disease) -> DiseaseData {
    use Attribute::*;
    use Disease::*;
    let (affected, damage, incubation) = match disease {
        WitchesPox => (vec![Personality, Endurance], (1, 2), 1),
        Plague => (vec![Strength, Endurance, Speed], (2, 4), 2),
        YellowFever => (vec![Strength, Endurance, Agility], (1, 3), 1),
        StomachRot => (vec![Strength, Endurance], (1, 2), 1),
        Consumption => (vec![Strength, Endurance, Willpower], (1, 2), 3),
        BrainFever => (vec![Intelligence, Willpower], (1, 3), 2),
        SwampRot => (vec![Strength, Agility, Speed], (1, 2), 2),
        CalironsCurse => (vec![Strength, Agility], (1, 4), 3),
        Cholera => (vec![Strength, Endurance], (2, 4), 1),
        Leprosy => (vec![Strength, Endurance, Personality], (1, 2), 5),
        WoundRot => (vec![Strength, Endurance], (1, 3), 1),
        RedDeath => (vec![Strength, Endurance, Speed], (3, 5), 2),
        BloodRot => (vec![Endurance, Willpower], (2, 4), 2),
        TyphoidFever => (vec![Strength, Endurance, Agility], (1, 3), 2),
        Dementia => (vec![Intelligence, Personality], (1, 3), 3),
        Chrondiasis => (vec![Agility, Speed], (1, 2), 4),
        WizardFever => (vec![Intelligence, Willpower, Luck], (2, 4), 1),
    };
    DiseaseData {
        affected_attributes: affected,
        min_daily_damage: damage.0,
        max_daily_damage: damage.1,
        incubation_days: incubation,
    }
}

/// Stable effect key for a classic disease
pub fn classic_disease_effect_key(disease: Disease) -> String {
    format!("Disease-{:?}", disease)
}

/// A disease effect definition ready to hand to the effect system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseEffect {
    pub key: String,
    pub disease: Disease,
    pub data: DiseaseData,
}

impl DiseaseEffect {
    /// Build the definition for any classic disease
    pub fn from_disease(disease: Disease) -> Self {
        Self {
            key: classic_disease_effect_key(disease),
            disease,
            data: classic_disease_data(disease),
        }
    }

    pub fn yellow_fever() -> Self {
        Self::from_disease(Disease::YellowFever)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yellow_fever_definition() {
        let effect = DiseaseEffect::yellow_fever();
        assert_eq!(effect.disease, Disease::YellowFever);
        assert_eq!(effect.key, "Disease-YellowFever");
        assert!(effect
            .data
            .affected_attributes
            .contains(&Attribute::Endurance));
    }

    #[test]
    fn test_all_diseases_have_sane_data() {
        for disease in [
            Disease::WitchesPox,
            Disease::Plague,
            Disease::YellowFever,
            Disease::StomachRot,
            Disease::Consumption,
            Disease::BrainFever,
            Disease::SwampRot,
            Disease::CalironsCurse,
            Disease::Cholera,
            Disease::Leprosy,
            Disease::WoundRot,
            Disease::RedDeath,
            Disease::BloodRot,
            Disease::TyphoidFever,
            Disease::Dementia,
            Disease::Chrondiasis,
            Disease::WizardFever,
        ] {
            let data = classic_disease_data(disease);
            assert!(!data.affected_attributes.is_empty(), "{:?}", disease);
            assert!(data.min_daily_damage <= data.max_daily_damage);
            assert!(data.min_daily_damage > 0);
        }
    }
}
