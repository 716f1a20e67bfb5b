//! Spread definitions and stored spread configurations.
//!
//! Callers describe a spread with a `SpreadDefinition` (positions plus an
//! optional description). The registry validates it and stores a
//! `SpreadConfig`, whose `card_count` is always derived from the positions.

use serde::{Deserialize, Serialize};

use crate::core::{Result, TarotError};

/// Caller-supplied description of a spread.
///
/// ## Example
///
/// ```
/// use tarot::spreads::SpreadDefinition;
///
/// let three = SpreadDefinition::new(["past", "present", "future"])
///     .with_description("Classic three-card line");
///
/// assert_eq!(three.positions.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadDefinition {
    /// Position labels, in the order cards are laid out.
    pub positions: Vec<String>,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
}

impl SpreadDefinition {
    /// Create a definition from position labels.
    pub fn new<I, S>(positions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positions: positions.into_iter().map(Into::into).collect(),
            description: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check the definition and turn it into a stored configuration.
    ///
    /// Fails with `InvalidArgument` if there are no positions or a label is
    /// blank; the error names the offending position index.
    pub fn validate(self) -> Result<SpreadConfig> {
        if self.positions.is_empty() {
            return Err(TarotError::non_empty_list("Positions"));
        }
        if let Some(index) = self.positions.iter().position(|p| p.trim().is_empty()) {
            return Err(TarotError::non_empty_string(format!("Position {index}")));
        }

        Ok(SpreadConfig {
            card_count: self.positions.len(),
            positions: self.positions,
            description: self.description,
        })
    }
}

/// A validated spread layout.
///
/// Invariants: `positions` is non-empty, every label is non-blank, and
/// `card_count == positions.len()`. Deserialized values are re-checked and
/// rejected with `InvalidSpread` when they break these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSpreadConfig")]
pub struct SpreadConfig {
    positions: Vec<String>,
    description: Option<String>,
    card_count: usize,
}

impl SpreadConfig {
    /// Position labels in layout order.
    #[must_use]
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    /// Optional description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Number of cards a reading of this spread draws.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.card_count
    }
}

#[derive(Deserialize)]
struct RawSpreadConfig {
    positions: Vec<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    card_count: Option<usize>,
}

impl TryFrom<RawSpreadConfig> for SpreadConfig {
    type Error = TarotError;

    fn try_from(raw: RawSpreadConfig) -> Result<Self> {
        let declared = raw.card_count;
        let config = SpreadDefinition {
            positions: raw.positions,
            description: raw.description,
        }
        .validate()
        .map_err(|e| TarotError::InvalidSpread { reason: e.to_string() })?;

        match declared {
            Some(count) if count != config.card_count => Err(TarotError::InvalidSpread {
                reason: format!(
                    "card_count {count} does not match {} positions",
                    config.card_count
                ),
            }),
            _ => Ok(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_derives_card_count() {
        let config = SpreadDefinition::new(["situation", "challenge"])
            .with_description("Two-card cross")
            .validate()
            .unwrap();

        assert_eq!(config.card_count(), 2);
        assert_eq!(config.positions(), ["situation", "challenge"]);
        assert_eq!(config.description(), Some("Two-card cross"));
    }

    #[test]
    fn test_duplicate_labels_allowed() {
        let config = SpreadDefinition::new(["card", "card"]).validate().unwrap();
        assert_eq!(config.card_count(), 2);
    }

    #[test]
    fn test_empty_positions_rejected() {
        let err = SpreadDefinition::new(Vec::<String>::new()).validate().unwrap_err();
        assert_eq!(err, TarotError::non_empty_list("Positions"));
    }

    #[test]
    fn test_blank_position_named_by_index() {
        let err = SpreadDefinition::new(["past", "  ", "future"]).validate().unwrap_err();
        assert_eq!(err.to_string(), "Position 1 must be a non-empty string");
        assert!(!err.is_domain_error());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = SpreadDefinition::new(["one"]).validate().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"positions":["one"],"description":null,"card_count":1}"#);

        let back: SpreadConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let mismatched = r#"{"positions":["a","b"],"card_count":3}"#;
        let err = serde_json::from_str::<SpreadConfig>(mismatched).unwrap_err();
        assert!(err.to_string().contains("card_count 3 does not match 2 positions"));

        let empty = r#"{"positions":[]}"#;
        let err = serde_json::from_str::<SpreadConfig>(empty).unwrap_err();
        assert!(err.to_string().contains("Invalid spread"));

        let derived: SpreadConfig = serde_json::from_str(r#"{"positions":["x","y"]}"#).unwrap();
        assert_eq!(derived.card_count(), 2);
    }
}
