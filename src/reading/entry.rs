//! Position-to-card bindings produced by a reading.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One laid-out card: a spread position and the card drawn for it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpreadEntry {
    pub position: String,
    pub card: Card,
}

/// Pair `positions[i]` with `cards[i]`.
///
/// Callers draw at least as many cards as there are positions; surplus
/// cards are ignored.
#[must_use]
pub fn map_cards_to_spread(positions: &[String], cards: &Vector<Card>) -> Vector<SpreadEntry> {
    debug_assert!(cards.len() >= positions.len());

    positions
        .iter()
        .zip(cards.iter())
        .map(|(position, card)| SpreadEntry {
            position: position.clone(),
            card: card.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_in_order() {
        let positions = vec!["past".to_string(), "present".to_string()];
        let cards: Vector<Card> = (0..3i64).map(|i| Card::new().with_field("id", i)).collect();

        let entries = map_cards_to_spread(&positions, &cards);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position, "past");
        assert_eq!(entries[0].card.get_int("id", -1), 0);
        assert_eq!(entries[1].position, "present");
        assert_eq!(entries[1].card.get_int("id", -1), 1);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = SpreadEntry {
            position: "outcome".into(),
            card: Card::new().with_field("name", "The Sun"),
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"position":"outcome","card":{"name":"The Sun"}}"#);
    }
}
