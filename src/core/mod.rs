//! Shared types, rule constants, and error handling

pub mod config;
pub mod error;
pub mod types;

pub use error::{GravenError, Result};
pub use types::{BodyPart, EntityId, EntityType, Gender, PlayerSnapshot, Race};
