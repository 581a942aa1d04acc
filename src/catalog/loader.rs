//! Load bestiary overrides from TOML content files

use crate::catalog::EnemyDescriptor;
use crate::core::{EntityType, Gender, GravenError, Result};
use crate::items::WeaponMaterial;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One loaded bestiary record: which career family it belongs to plus
/// the descriptor itself
#[derive(Debug, Clone, PartialEq)]
pub struct BestiaryEntry {
    pub family: EntityType,
    pub descriptor: EnemyDescriptor,
}

#[derive(Debug, Deserialize)]
struct BestiaryFile {
    #[serde(default)]
    enemy: Vec<RawEntry>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    id: u16,
    family: String,
    #[serde(default)]
    level: i32,
    #[serde(default)]
    min_health: i32,
    #[serde(default)]
    max_health: i32,
    #[serde(default)]
    armor_rating: i16,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    casts_magic: bool,
    #[serde(default)]
    loot_key: String,
    #[serde(default)]
    map_chance: i32,
    #[serde(default)]
    weight: i32,
    #[serde(default)]
    min_metal_to_hit: Option<WeaponMaterial>,
}

impl RawEntry {
    fn into_entry(self) -> Result<BestiaryEntry> {
        let family = match self.family.as_str() {
            "monster" => EntityType::Monster,
            "class" => EntityType::Class,
            other => {
                return Err(GravenError::InvalidEntry(
                    format!("enemy {}", self.id),
                    format!("unknown family {:?}", other),
                ))
            }
        };
        if self.min_health > self.max_health {
            return Err(GravenError::InvalidEntry(
                format!("enemy {}", self.id),
                format!(
                    "health range {}..{} is inverted",
                    self.min_health, self.max_health
                ),
            ));
        }
        Ok(BestiaryEntry {
            family,
            descriptor: EnemyDescriptor {
                id: self.id,
                level: self.level,
                min_health: self.min_health,
                max_health: self.max_health,
                armor_rating: self.armor_rating,
                gender: self.gender.unwrap_or_default(),
                casts_magic: self.casts_magic,
                loot_key: self.loot_key,
                map_chance: self.map_chance,
                weight: self.weight,
                min_metal_to_hit: self.min_metal_to_hit,
            },
        })
    }
}

/// Parse bestiary TOML content
pub fn parse_bestiary(content: &str) -> Result<Vec<BestiaryEntry>> {
    let file: BestiaryFile = toml::from_str(content)?;
    file.enemy.into_iter().map(RawEntry::into_entry).collect()
}

/// Load a bestiary file. A missing file is tolerated (empty result)
/// so content overrides stay optional; malformed content is an error.
pub fn load_bestiary(path: &Path) -> Result<Vec<BestiaryEntry>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no bestiary file, using builtin table");
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let entries = parse_bestiary(&content)?;
    tracing::info!(count = entries.len(), path = %path.display(), "loaded bestiary entries");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_entry() {
        let entries = parse_bestiary(
            r#"
            [[enemy]]
            id = 7
            family = "monster"
            level = 9
            min_health = 70
            max_health = 110
            armor_rating = 7
            loot_key = "B"
            weight = 600
            "#,
        )
        .unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.family, EntityType::Monster);
        assert_eq!(entry.descriptor.id, 7);
        assert_eq!(entry.descriptor.min_health, 70);
        assert_eq!(entry.descriptor.gender, Gender::Unspecified);
        assert_eq!(entry.descriptor.min_metal_to_hit, None);
    }

    #[test]
    fn test_unknown_family_rejected() {
        let result = parse_bestiary(
            r#"
            [[enemy]]
            id = 1
            family = "construct"
            "#,
        );
        assert!(matches!(result, Err(GravenError::InvalidEntry(_, _))));
    }

    #[test]
    fn test_inverted_health_range_rejected() {
        let result = parse_bestiary(
            r#"
            [[enemy]]
            id = 1
            family = "monster"
            min_health = 50
            max_health = 10
            "#,
        );
        assert!(matches!(result, Err(GravenError::InvalidEntry(_, _))));
    }

    #[test]
    fn test_missing_file_is_empty_not_error() {
        let entries = load_bestiary(Path::new("/nonexistent/bestiary.toml")).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_metal_threshold_parses() {
        let entries = parse_bestiary(
            r#"
            [[enemy]]
            id = 9
            family = "monster"
            min_metal_to_hit = "Silver"
            "#,
        )
        .unwrap();
        assert_eq!(
            entries[0].descriptor.min_metal_to_hit,
            Some(WeaponMaterial::Silver)
        );
    }
}
