//! Game engine: the memory game and its turn state machine.
//!
//! ## Turn Rules
//!
//! - First pick of a turn turns a card face-up
//! - Second pick either matches (both cards resolved, progress +1) or
//!   leaves a mismatched pair face-up
//! - A third pick turns the mismatched pair back down and starts a new turn
//!
//! Picking an unknown or already face-up card does nothing.

pub mod game;
pub mod outcome;
pub mod selection;

pub use game::{GameSnapshot, MemoryGame};
pub use outcome::{ChooseOutcome, IgnoreReason};
pub use selection::Selection;
