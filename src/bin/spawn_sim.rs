//! Headless Spawn Runner
//!
//! Generates enemies from the bestiary and prints them, for balance
//! inspection and deterministic repro of spawn rolls.

use clap::Parser;
use gravenhold::catalog::{self, loader};
use gravenhold::core::{Gender, PlayerSnapshot, Race, Result};
use gravenhold::generation::generate_enemy;
use gravenhold::items::ItemKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Headless Spawn Runner - roll enemies from the bestiary
#[derive(Parser, Debug)]
#[command(name = "spawn_sim")]
#[command(about = "Generate enemies and print the resulting loadouts")]
struct Args {
    /// Enemy name, e.g. "Orc" or "Knight of the City Watch"
    #[arg(long, default_value = "Orc")]
    enemy: String,

    /// Player level the spawn is generated against
    #[arg(long, default_value_t = 5)]
    player_level: i32,

    /// Number of spawns to roll
    #[arg(long, default_value_t = 1)]
    count: u64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Optional bestiary TOML overriding the builtin table
    #[arg(long)]
    bestiary: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(seed, enemy = %args.enemy, "rolling spawns");

    let Some((mut descriptor, entity_type)) = catalog::descriptor_by_name(&args.enemy) else {
        eprintln!("unknown enemy {:?}", args.enemy);
        std::process::exit(1);
    };

    // Bestiary overrides replace the builtin record for matching ids.
    if let Some(path) = &args.bestiary {
        for entry in loader::load_bestiary(path)? {
            if entry.descriptor.id == descriptor.id && entry.family == entity_type {
                descriptor = entry.descriptor;
            }
        }
    }

    let player = PlayerSnapshot::new(args.player_level, Gender::Male, Race::Breton);
    for _ in 0..args.count {
        let entity = generate_enemy(&descriptor, entity_type, &player, &mut rng);
        if args.format == "json" {
            println!("{}", serde_json::to_string_pretty(&entity)?);
        } else {
            print_entity(&entity);
        }
    }
    Ok(())
}

fn print_entity(entity: &gravenhold::entity::EnemyEntity) {
    println!(
        "{} (level {}) hp {} magicka {} group {:?}",
        entity.name,
        entity.level,
        entity.max_health,
        entity.max_magicka,
        entity.enemy_group()
    );
    println!("  armor {:?}", entity.armor.values());
    for item in entity.inventory.items() {
        let slot = item
            .equipped
            .map(|slot| format!(" [{:?}]", slot))
            .unwrap_or_default();
        match &item.kind {
            ItemKind::Weapon {
                kind,
                material,
                poison,
            } => {
                let poison = poison
                    .map(|poison| format!(" poisoned ({:?})", poison))
                    .unwrap_or_default();
                println!("  {:?} {:?}{}{}", material, kind, slot, poison);
            }
            ItemKind::Armor { kind, material, .. } => {
                println!("  {:?} {:?}{}", material, kind, slot);
            }
            other => println!("  {:?}", other),
        }
    }
    if !entity.spells.is_empty() {
        println!("  spells (pending): {:?}", entity.spells.pending_ids());
    }
}
