//! What a single pick did.

use serde::{Deserialize, Serialize};

/// Why a pick changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// No card in the deck has the requested id.
    UnknownCard,
    /// The card is already revealed (pending or matched).
    AlreadyFaceUp,
}

/// Result of `MemoryGame::try_choose`.
///
/// Positions are layout positions at the time of the pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChooseOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),

    /// First card of a turn revealed.
    Revealed { position: usize },

    /// Second card matched the first; the pair is resolved.
    Matched { first: usize, second: usize },

    /// Second card differs from the first; both stay face-up.
    Mismatched { first: usize, second: usize },

    /// A mismatched pair was turned back down and the picked card starts a
    /// new turn.
    Cleared {
        hidden: (usize, usize),
        position: usize,
    },
}

impl ChooseOutcome {
    /// Did the pick change any state?
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, ChooseOutcome::Ignored(_))
    }

    /// Did the pick resolve a pair?
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, ChooseOutcome::Matched { .. })
    }
}
