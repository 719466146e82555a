//! # flower-pairs
//!
//! Game-state engine for a single-player memory-matching card game.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, animation or timers. A presentation
//!    layer reads `cards()` and calls `choose`/`restart`.
//!
//! 2. **Explicit Ownership**: The engine owns its cards. Callers see
//!    `&[Card]` and re-read after every mutating call.
//!
//! 3. **Permissive Play**: Unknown ids and re-taps are no-ops.
//!    `try_choose` reports them for callers that care.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration
//! - `cards`: Cards and the deck
//! - `engine`: The memory game and turn selection
//! - `error`: Construction errors

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CardId, GameConfig, GameRng, GameRngState, DEFAULT_CONTENTS};

pub use crate::cards::{Card, Deck};

pub use crate::engine::{ChooseOutcome, GameSnapshot, IgnoreReason, MemoryGame, Selection};

pub use crate::error::{GameError, Result};
