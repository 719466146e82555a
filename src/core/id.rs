//! Card identification.
//!
//! Every card in a deck has a unique `CardId`.
//!
//! ## ID Layout
//!
//! IDs are allocated per pair index `i`:
//! - `2i`: first card of the pair (even)
//! - `2i + 1`: second card of the pair (odd)
//!
//! A deck of `n` pairs therefore uses exactly the ids `0..2n`.
//!
//! ```
//! use flower_pairs::core::CardId;
//!
//! let (first, second) = CardId::pair(3);
//! assert_eq!(first, CardId(6));
//! assert_eq!(second, CardId(7));
//! assert_eq!(second.pair_index(), 3);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card in a deck.
///
/// Stable for the lifetime of the game; shuffling moves cards, never ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The two ids allocated to pair index `index`.
    #[must_use]
    pub const fn pair(index: u32) -> (Self, Self) {
        (Self(index * 2), Self(index * 2 + 1))
    }

    /// Pair index this id was allocated for.
    #[must_use]
    pub const fn pair_index(self) -> u32 {
        self.0 / 2
    }

    /// The other card of the same pair.
    ///
    /// ```
    /// use flower_pairs::core::CardId;
    ///
    /// assert_eq!(CardId(4).twin(), CardId(5));
    /// assert_eq!(CardId(5).twin(), CardId(4));
    /// ```
    #[must_use]
    pub const fn twin(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
