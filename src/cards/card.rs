//! Immutable card records.
//!
//! A `Card` is the record form of a `CardValue::Record` once it has been
//! admitted to a deck. It has no mutating methods: builders consume the
//! card and hand back a new one, and `into_fields` yields an owned map the
//! caller may edit without touching any deck the card came from.

use serde::{Deserialize, Serialize};

use super::value::{CardFields, CardValue};

/// Opaque, immutable card record.
///
/// ## Example
///
/// ```
/// use tarot::cards::Card;
///
/// let fool = Card::new()
///     .with_field("name", "The Fool")
///     .with_field("number", 0i32);
///
/// assert_eq!(fool.get_text("name"), Some("The Fool"));
/// assert_eq!(fool.get_int("number", -1), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card {
    fields: CardFields,
}

impl Card {
    /// Create a card with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field (builder pattern).
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<CardValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CardValue> {
        self.fields.get(key)
    }

    /// Get an integer field with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get(key).and_then(CardValue::as_int).unwrap_or(default)
    }

    /// Get a boolean field with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(CardValue::as_bool).unwrap_or(default)
    }

    /// Get a text field.
    #[must_use]
    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(CardValue::as_text)
    }

    /// Check whether a field is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the card has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&String, &CardValue)> {
        self.fields.iter()
    }

    /// Take an owned, independently mutable copy of the fields.
    #[must_use]
    pub fn into_fields(self) -> CardFields {
        self.fields
    }
}

impl TryFrom<CardValue> for Card {
    type Error = CardValue;

    /// Only records become cards; anything else is handed back.
    fn try_from(value: CardValue) -> Result<Self, Self::Error> {
        match value {
            CardValue::Record(fields) => Ok(Self { fields }),
            other => Err(other),
        }
    }
}

impl From<CardFields> for Card {
    fn from(fields: CardFields) -> Self {
        Self { fields }
    }
}

impl From<Card> for CardValue {
    fn from(card: Card) -> Self {
        CardValue::Record(card.fields)
    }
}
