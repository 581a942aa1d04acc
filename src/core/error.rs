use thiserror::Error;

#[derive(Error, Debug)]
pub enum GravenError {
    #[error("Unknown career identifier: {0}")]
    UnknownCareer(u16),

    #[error("Bestiary entry {0:?} is invalid: {1}")]
    InvalidEntry(String, String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GravenError>;
