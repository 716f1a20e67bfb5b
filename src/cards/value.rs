//! Dynamic values for card fields.
//!
//! Cards are opaque to the engine: callers decide what fields a card has
//! ("name", "arcana", "upright meaning", ...). `CardValue` is the loosely
//! typed value those fields hold, and also the input type of
//! `initialize_deck`, which admits only `Record` values as cards.
//!
//! ## CardValue Types
//!
//! - `Null`: Explicit absence
//! - `Bool`: Flags (reversed, major arcana)
//! - `Int` / `Float`: Numbers (card number, weight)
//! - `Text`: Strings (name, suit, meaning)
//! - `List`: Sequences (keywords)
//! - `Record`: Nested field maps; a top-level record becomes a card

use im::OrdMap;
use serde::{Deserialize, Serialize};

/// Field map of a record, ordered by field name.
pub type CardFields = OrdMap<String, CardValue>;

/// Value of a card field, or a candidate card.
///
/// Serialized untagged, so plain JSON maps directly onto it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<CardValue>),
    Record(CardFields),
}

impl CardValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            CardValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float. Int values widen.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            CardValue::Float(v) => Some(*v),
            CardValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CardValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CardValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as slice if this is a List value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[CardValue]> {
        match self {
            CardValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Get the field map if this is a Record value.
    #[must_use]
    pub fn as_record(&self) -> Option<&CardFields> {
        match self {
            CardValue::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// True only for `Record`.
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, CardValue::Record(_))
    }
}

impl From<i64> for CardValue {
    fn from(v: i64) -> Self {
        CardValue::Int(v)
    }
}

impl From<i32> for CardValue {
    fn from(v: i32) -> Self {
        CardValue::Int(v as i64)
    }
}

impl From<f64> for CardValue {
    fn from(v: f64) -> Self {
        CardValue::Float(v)
    }
}

impl From<bool> for CardValue {
    fn from(v: bool) -> Self {
        CardValue::Bool(v)
    }
}

impl From<String> for CardValue {
    fn from(v: String) -> Self {
        CardValue::Text(v)
    }
}

impl From<&str> for CardValue {
    fn from(v: &str) -> Self {
        CardValue::Text(v.to_string())
    }
}

impl From<Vec<CardValue>> for CardValue {
    fn from(v: Vec<CardValue>) -> Self {
        CardValue::List(v)
    }
}

impl From<CardFields> for CardValue {
    fn from(fields: CardFields) -> Self {
        CardValue::Record(fields)
    }
}

impl From<serde_json::Value> for CardValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CardValue::Null,
            Value::Bool(b) => CardValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CardValue::Int(i),
                None => n.as_f64().map_or(CardValue::Null, CardValue::Float),
            },
            Value::String(s) => CardValue::Text(s),
            Value::Array(items) => CardValue::List(items.into_iter().map(CardValue::from).collect()),
            Value::Object(map) => CardValue::Record(
                map.into_iter()
                    .map(|(k, v)| (k, CardValue::from(v)))
                    .collect(),
            ),
        }
    }
}
