//! The ordered card collection.
//!
//! A `Deck` holds every card of a game in its current layout order. Cards are
//! created once, two per pair index, and never added or removed; only their
//! order and flags change.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::id::CardId;
use crate::core::rng::GameRng;
use crate::error::{GameError, Result};

/// Ordered cards of one game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build an unshuffled deck of `number_of_pairs` pairs.
    ///
    /// `content_at` is called exactly once per pair index, in order. Cards
    /// come out in id order: `2i` then `2i + 1` for each index `i`.
    ///
    /// ```
    /// use flower_pairs::cards::Deck;
    ///
    /// let deck = Deck::build(2, |i| format!("c{}", i));
    /// let contents: Vec<_> = deck.cards().iter().map(|c| c.content()).collect();
    /// assert_eq!(contents, ["c0", "c0", "c1", "c1"]);
    /// ```
    pub fn build<F>(number_of_pairs: usize, mut content_at: F) -> Self
    where
        F: FnMut(usize) -> String,
    {
        let mut deck = Self::with_capacity(number_of_pairs);
        for index in 0..number_of_pairs {
            deck.push_pair(index, content_at(index));
        }
        deck
    }

    /// Build an unshuffled deck from a fallible content generator.
    ///
    /// Stops at the first failing index.
    pub fn try_build<F, E>(number_of_pairs: usize, mut content_at: F) -> Result<Self>
    where
        F: FnMut(usize) -> std::result::Result<String, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let mut deck = Self::with_capacity(number_of_pairs);
        for index in 0..number_of_pairs {
            let content = content_at(index).map_err(|err| GameError::Content {
                index,
                source: err.into(),
            })?;
            deck.push_pair(index, content);
        }
        Ok(deck)
    }

    fn with_capacity(number_of_pairs: usize) -> Self {
        Self {
            cards: Vec::with_capacity(number_of_pairs * 2),
        }
    }

    fn push_pair(&mut self, index: usize, content: String) {
        let (first, second) = CardId::pair(index as u32);
        self.cards.push(Card::new(first, content.clone()));
        self.cards.push(Card::new(second, content));
    }

    /// Cards in layout order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards (twice the pair count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is this the empty deck?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card at a layout position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut Card> {
        self.cards.get_mut(position)
    }

    /// First layout position holding `id`.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Card with `id`, wherever it currently lies.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Randomly permute the layout.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Turn every card face-down and unmatched. Order is untouched.
    pub fn reset(&mut self) {
        for card in &mut self.cards {
            card.reset();
        }
    }

    /// How many cards carry each content value.
    ///
    /// A generator returning distinct tokens gives 2 for every key. Duplicate
    /// tokens across indices give larger groups, which the engine accepts.
    #[must_use]
    pub fn content_counts(&self) -> FxHashMap<&str, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.content.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Are the ids exactly `0..len`, each appearing once?
    #[must_use]
    pub fn ids_are_dense(&self) -> bool {
        let mut seen = vec![false; self.cards.len()];
        for card in &self.cards {
            match seen.get_mut(card.id.raw() as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }
}
