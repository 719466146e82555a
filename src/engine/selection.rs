//! Turn selection state.
//!
//! A turn reveals up to two cards. The selection records their layout
//! positions:
//!
//! - `Empty`: nothing pending
//! - `One(first)`: one card revealed, waiting for its partner
//! - `Two(first, second)`: a mismatched pair left face-up until the next pick
//!
//! A matched pair never stays in `Two`; it resolves straight back to `Empty`.

use serde::{Deserialize, Serialize};

/// Positions of the face-up, unresolved cards of the current turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Empty,
    One(usize),
    Two(usize, usize),
}

impl Selection {
    /// Position of the first face-up card, if any.
    #[must_use]
    pub fn first(self) -> Option<usize> {
        match self {
            Selection::Empty => None,
            Selection::One(first) | Selection::Two(first, _) => Some(first),
        }
    }

    /// Position of the second face-up card, if any.
    #[must_use]
    pub fn second(self) -> Option<usize> {
        match self {
            Selection::Two(_, second) => Some(second),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Selection::Empty
    }

    /// Number of pending positions (0, 1 or 2).
    #[must_use]
    pub fn len(self) -> usize {
        match self {
            Selection::Empty => 0,
            Selection::One(_) => 1,
            Selection::Two(..) => 2,
        }
    }
}
