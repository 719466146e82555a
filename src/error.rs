//! Error types.
//!
//! Only construction can fail. Play operations (`choose`, `restart`) absorb
//! anomalous input as no-ops and never return errors.

use thiserror::Error;

/// Errors raised while building a game.
#[derive(Debug, Error)]
pub enum GameError {
    /// The content generator failed for a pair index.
    #[error("content generator failed at pair index {index}")]
    Content {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration names fewer content keys than pairs.
    #[error("{requested} pairs requested but only {available} content keys configured")]
    NotEnoughContent { requested: usize, available: usize },

    /// Configuration could not be read.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err.to_string())
    }
}

/// Crate result alias.
pub type Result<T, E = GameError> = std::result::Result<T, E>;
