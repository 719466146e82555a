//! Cards - identity plus display state.
//!
//! A `Card` carries an immutable identity (`id`, `content`) and the two
//! flags the engine flips during play. Two cards are equal when their ids
//! are equal, whatever their current state.

use serde::{Deserialize, Serialize};

use crate::core::id::CardId;

/// A card in a memory game.
///
/// Fields are read-only outside the crate; only the engine flips them.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    pub(crate) id: CardId,
    pub(crate) content: String,
    pub(crate) is_face_up: bool,
    pub(crate) is_matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Unique, stable id.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Face token (asset or category key). Shared by exactly one other card.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Is this card revealed?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    /// Has this card been resolved as part of a matched pair?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    /// Does this card show the same face as `other`?
    #[must_use]
    pub fn same_content(&self, other: &Card) -> bool {
        self.content == other.content
    }

    pub(crate) fn reset(&mut self) {
        self.is_face_up = false;
        self.is_matched = false;
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_new() {
        let card = Card::new(CardId(4), "flower3");

        assert_eq!(card.id(), CardId(4));
        assert_eq!(card.content(), "flower3");
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_equality_by_id() {
        let mut a = Card::new(CardId(1), "rose");
        let b = Card::new(CardId(1), "tulip");
        let c = Card::new(CardId(2), "rose");

        a.is_face_up = true;
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.same_content(&c));
        assert!(!a.same_content(&b));
    }

    #[test]
    fn test_reset() {
        let mut card = Card::new(CardId(0), "rose");
        card.is_face_up = true;
        card.is_matched = true;

        card.reset();
        assert!(!card.is_face_up());
        assert!(!card.is_matched());
    }

    #[test]
    fn test_card_hash_ignores_state() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = Card::new(CardId(10), "rose");
        let mut b = a.clone();
        b.is_face_up = true;

        let mut h1 = DefaultHasher::new();
        let mut h2 = DefaultHasher::new();
        a.hash(&mut h1);
        b.hash(&mut h2);

        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn test_card_serialization() {
        let mut card = Card::new(CardId(3), "flower2");
        card.is_face_up = true;

        let json = serde_json::to_string(&card).unwrap();
        assert!(json.contains("\"is_face_up\":true"));
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.id(), card.id());
        assert_eq!(deserialized.content(), "flower2");
        assert!(deserialized.is_face_up());
        assert!(!deserialized.is_matched());
    }
}
