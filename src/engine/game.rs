//! The memory game engine.

use serde::{Deserialize, Serialize};

use super::outcome::{ChooseOutcome, IgnoreReason};
use super::selection::Selection;
use crate::cards::{Card, Deck};
use crate::core::config::GameConfig;
use crate::core::id::CardId;
use crate::core::rng::GameRng;
use crate::error::Result;

/// A single-player memory game.
///
/// Owns the deck, the turn selection and the shuffle RNG. Callers read state
/// through accessors and mutate it only through `choose` and `restart`.
///
/// ```
/// use flower_pairs::{CardId, MemoryGame};
///
/// let mut game = MemoryGame::new(6, |i| format!("flower{}", i + 1));
/// assert_eq!(game.cards().len(), 12);
///
/// // Ids 0 and 1 are the two cards of pair 0.
/// game.choose(CardId(0));
/// game.choose(CardId(1));
/// assert_eq!(game.match_progress(), 1.0);
///
/// game.restart();
/// assert_eq!(game.match_progress(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryGame {
    deck: Deck,
    number_of_pairs: usize,
    matched_pairs: usize,
    selection: Selection,
    rng: GameRng,
}

impl MemoryGame {
    /// Deal `number_of_pairs` pairs and shuffle them with a fresh random seed.
    ///
    /// `content_at(i)` supplies the face of pair `i` and is called once per
    /// index. A panic inside it aborts construction.
    pub fn new<F>(number_of_pairs: usize, content_at: F) -> Self
    where
        F: FnMut(usize) -> String,
    {
        Self::with_rng(number_of_pairs, content_at, GameRng::from_entropy())
    }

    /// Like `new`, shuffling with the given RNG.
    pub fn with_rng<F>(number_of_pairs: usize, content_at: F, rng: GameRng) -> Self
    where
        F: FnMut(usize) -> String,
    {
        Self::deal(Deck::build(number_of_pairs, content_at), number_of_pairs, rng)
    }

    /// Deal from a fallible content generator.
    ///
    /// The first failing index aborts construction with
    /// [`GameError::Content`](crate::GameError::Content).
    pub fn try_new<F, E>(number_of_pairs: usize, content_at: F) -> Result<Self>
    where
        F: FnMut(usize) -> std::result::Result<String, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::try_with_rng(number_of_pairs, content_at, GameRng::from_entropy())
    }

    /// Like `try_new`, shuffling with the given RNG.
    pub fn try_with_rng<F, E>(number_of_pairs: usize, content_at: F, rng: GameRng) -> Result<Self>
    where
        F: FnMut(usize) -> std::result::Result<String, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let deck = Deck::try_build(number_of_pairs, content_at)?;
        Ok(Self::deal(deck, number_of_pairs, rng))
    }

    /// Deal the game a configuration describes.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Ok(Self::with_rng(
            config.number_of_pairs,
            |i| config.contents[i].clone(),
            rng,
        ))
    }

    fn deal(mut deck: Deck, number_of_pairs: usize, mut rng: GameRng) -> Self {
        deck.shuffle(&mut rng);
        log::debug!(
            "dealt {} pairs ({} cards), seed {}",
            number_of_pairs,
            deck.len(),
            rng.seed()
        );
        Self {
            deck,
            number_of_pairs,
            matched_pairs: 0,
            selection: Selection::Empty,
            rng,
        }
    }

    // === Accessors ===

    /// Cards in layout order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.deck.cards()
    }

    /// The deck, for inspection.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Pairs dealt at construction.
    #[must_use]
    pub fn number_of_pairs(&self) -> usize {
        self.number_of_pairs
    }

    /// Matched pairs so far, as a progress-bar numerator.
    #[must_use]
    pub fn match_progress(&self) -> f64 {
        self.matched_pairs as f64
    }

    /// Matched pairs so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Have all pairs been matched? Always true for an empty game.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.matched_pairs == self.number_of_pairs
    }

    /// Card with `id`.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.find(id)
    }

    /// Current layout position of `id`.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.deck.position_of(id)
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    #[must_use]
    pub fn index_of_first_face_up(&self) -> Option<usize> {
        self.selection.first()
    }

    #[must_use]
    pub fn index_of_second_face_up(&self) -> Option<usize> {
        self.selection.second()
    }

    /// The shuffle RNG (its seed reproduces the layouts).
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Serializable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cards: self.deck.cards().to_vec(),
            number_of_pairs: self.number_of_pairs,
            match_progress: self.match_progress(),
            selection: self.selection,
        }
    }

    // === Play ===

    /// Pick the card with `target`.
    ///
    /// Unknown ids and already face-up cards are ignored.
    pub fn choose(&mut self, target: CardId) {
        let _ = self.try_choose(target);
    }

    /// Pick the card with `target` and report what happened.
    ///
    /// Performs exactly the same transition as `choose`.
    pub fn try_choose(&mut self, target: CardId) -> ChooseOutcome {
        let Some(position) = self.deck.position_of(target) else {
            log::trace!("choose {}: unknown card", target);
            return ChooseOutcome::Ignored(IgnoreReason::UnknownCard);
        };
        if self.deck.cards()[position].is_face_up {
            log::trace!("choose {}: already face-up", target);
            return ChooseOutcome::Ignored(IgnoreReason::AlreadyFaceUp);
        }
        self.set_face_up(position, true);

        let outcome = match self.selection {
            Selection::Empty => {
                self.selection = Selection::One(position);
                ChooseOutcome::Revealed { position }
            }
            Selection::One(first) => {
                let cards = self.deck.cards();
                if cards[first].same_content(&cards[position]) {
                    self.set_matched(first, true);
                    self.set_matched(position, true);
                    self.matched_pairs += 1;
                    self.selection = Selection::Empty;
                    ChooseOutcome::Matched {
                        first,
                        second: position,
                    }
                } else {
                    self.selection = Selection::Two(first, position);
                    ChooseOutcome::Mismatched {
                        first,
                        second: position,
                    }
                }
            }
            Selection::Two(first, second) => {
                for hidden in [first, second] {
                    self.set_face_up(hidden, false);
                    self.set_matched(hidden, false);
                }
                self.selection = Selection::One(position);
                ChooseOutcome::Cleared {
                    hidden: (first, second),
                    position,
                }
            }
        };
        log::trace!("choose {}: {:?}", target, outcome);
        outcome
    }

    /// Start over: every card face-down and unmatched, progress zero,
    /// selection cleared, layout reshuffled.
    pub fn restart(&mut self) {
        self.deck.reset();
        self.matched_pairs = 0;
        self.selection = Selection::Empty;
        self.deck.shuffle(&mut self.rng);
        log::debug!("restarted {} pairs", self.number_of_pairs);
    }

    fn set_face_up(&mut self, position: usize, value: bool) {
        if let Some(card) = self.deck.get_mut(position) {
            card.is_face_up = value;
        }
    }

    fn set_matched(&mut self, position: usize, value: bool) {
        if let Some(card) = self.deck.get_mut(position) {
            card.is_matched = value;
        }
    }
}

/// Point-in-time copy of a game's observable state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cards: Vec<Card>,
    pub number_of_pairs: usize,
    pub match_progress: f64,
    pub selection: Selection,
}
