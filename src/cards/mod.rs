//! Card system: field values, immutable cards, and the deck.
//!
//! ## Key Types
//!
//! - `CardValue`: Loosely typed field value, and the input to deck setup
//! - `Card`: Immutable record admitted to a deck
//! - `Deck`: Non-empty immutable card sequence
//! - `DeckInfo`: Deck summary (count plus a copy of the cards)

pub mod card;
pub mod deck;
pub mod value;

pub use card::Card;
pub use deck::{Deck, DeckInfo};
pub use value::{CardFields, CardValue};
