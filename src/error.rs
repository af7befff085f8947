//! Error types for the Skein suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Hashing failed: {0}")]
    Hash(#[from] skein_core::Error),

    #[error("Invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Unknown hash variant: {0}")]
    UnknownVariant(String),
}

pub type Result<T> = std::result::Result<T, Error>;
