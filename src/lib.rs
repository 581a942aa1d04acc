//! Gravenhold - enemy-generation rules for a classic dungeon-crawler RPG
//!
//! This crate is the spawn-time rules engine: career templates, vital
//! stats, equipment rolls, armor reconciliation, spell rosters, and the
//! taxonomy queries downstream AI/dialogue/combat consume. Rendering,
//! scene lifecycle, and save serialization belong to the host engine.

pub mod career;
pub mod catalog;
pub mod core;
pub mod disease;
pub mod entity;
pub mod generation;
pub mod items;
pub mod taxonomy;
