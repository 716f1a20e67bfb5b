//! Error taxonomy for deck, spread and reading operations.
//!
//! Every fallible operation returns `TarotError`. Callers match on the
//! variant (or on `kind()`) instead of inspecting types at runtime.
//!
//! `InvalidArgument` is a plain validation failure: a blank name or an empty
//! list is a programmer error, not a domain condition. `is_domain_error()`
//! separates it from the rest.

use thiserror::Error;

/// Errors returned by the tarot engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TarotError {
    /// A deck-dependent operation ran before `initialize_deck`.
    #[error("Deck not initialized. Call initialize_deck() first")]
    DeckNotInitialized,

    /// An element passed to `initialize_deck` is not a record.
    #[error("Item at index {index} is not a valid card record")]
    InvalidCard { index: usize },

    /// The named spread is not registered.
    #[error("Spread \"{name}\" not found. Add it using add_spread() first")]
    SpreadNotFound { name: String },

    /// A spread configuration breaks its invariants.
    #[error("Invalid spread: {reason}")]
    InvalidSpread { reason: String },

    /// More cards were requested than the deck holds.
    #[error("Cannot draw {requested} cards. Only {available} cards available")]
    InsufficientCards { requested: usize, available: usize },

    /// A malformed argument: blank string or empty list.
    #[error("{name} must be {expected}")]
    InvalidArgument { name: String, expected: &'static str },
}

/// Discriminant of a `TarotError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DeckNotInitialized,
    InvalidCard,
    SpreadNotFound,
    InvalidSpread,
    /// Catch-all domain failure (draw count too large).
    Generic,
    Validation,
}

impl TarotError {
    pub(crate) fn non_empty_string(name: impl Into<String>) -> Self {
        TarotError::InvalidArgument {
            name: name.into(),
            expected: "a non-empty string",
        }
    }

    pub(crate) fn non_empty_list(name: impl Into<String>) -> Self {
        TarotError::InvalidArgument {
            name: name.into(),
            expected: "a non-empty list",
        }
    }

    /// The kind of failure, for coarse matching.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            TarotError::DeckNotInitialized => ErrorKind::DeckNotInitialized,
            TarotError::InvalidCard { .. } => ErrorKind::InvalidCard,
            TarotError::SpreadNotFound { .. } => ErrorKind::SpreadNotFound,
            TarotError::InvalidSpread { .. } => ErrorKind::InvalidSpread,
            TarotError::InsufficientCards { .. } => ErrorKind::Generic,
            TarotError::InvalidArgument { .. } => ErrorKind::Validation,
        }
    }

    /// True for every failure except plain argument validation.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        self.kind() != ErrorKind::Validation
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TarotError>;
