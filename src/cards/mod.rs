//! Card system: cards and the deck that orders them.
//!
//! ## Key Types
//!
//! - `Card`: id, face content, face-up and matched flags
//! - `Deck`: ordered cards with id lookup and pairing checks

pub mod card;
pub mod deck;

pub use card::Card;
pub use deck::Deck;
