//! Error type for the fallible edges (frame parsing, config, replay files)
//!
//! Classification and validation never fail; they degrade to `none` or
//! "unconfirmed" instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid frame: {0}")]
    InvalidFrame(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
