//! Core engine types: card ids, RNG, configuration.

pub mod config;
pub mod id;
pub mod rng;

pub use config::{GameConfig, DEFAULT_CONTENTS};
pub use id::CardId;
pub use rng::{GameRng, GameRngState};
