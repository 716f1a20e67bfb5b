//! # tarot
//!
//! A tarot deck and reading engine.
//!
//! ## Design Principles
//!
//! 1. **Cards Are Opaque**: The engine never interprets card fields. Callers
//!    supply records; the engine shuffles, draws and lays them out.
//!
//! 2. **Copies Out, Never References**: Every getter returns an owned value.
//!    `im` persistent structures keep those copies O(1).
//!
//! 3. **All Or Nothing**: Operations validate before they mutate, so a
//!    failed call leaves the engine untouched.
//!
//! ## Flow
//!
//! Initialize the deck, register spreads, then ask for a reading by spread
//! name. Each reading draws from a fresh shuffle of the full deck.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card values, immutable cards, the deck
//! - `spreads`: Spread definitions and the registry
//! - `reading`: The `Tarot` engine and reading results

pub mod core;
pub mod cards;
pub mod spreads;
pub mod reading;

// Re-export commonly used types
pub use crate::core::{
    ErrorKind, Result, TarotError,
    ReadingRng, ReadingRngState,
    TarotConfig,
};

pub use crate::cards::{Card, CardFields, CardValue, Deck, DeckInfo};

pub use crate::spreads::{SpreadConfig, SpreadDefinition, SpreadRegistry};

pub use crate::reading::{map_cards_to_spread, EngineState, SpreadEntry, Tarot};
