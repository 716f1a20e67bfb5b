//! Readings: binding drawn cards to spread positions.
//!
//! - `Tarot`: the engine owning deck, spreads and current spread
//! - `SpreadEntry`: one position/card pair
//! - `map_cards_to_spread`: pure pairing of positions with cards

pub mod engine;
pub mod entry;

pub use engine::{EngineState, Tarot};
pub use entry::{map_cards_to_spread, SpreadEntry};
