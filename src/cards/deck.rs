//! The deck: a non-empty, immutable snapshot of cards.
//!
//! A `Deck` is never edited in place. Shuffling produces a new deck, and
//! drawing permutes a copy of the full deck and takes a prefix, so the deck
//! is never depleted: every draw starts from all of its cards.
//!
//! Backed by `im::Vector`, so handing out copies is O(1).

use im::Vector;
use serde::Serialize;

use crate::core::{ReadingRng, Result, TarotError};

use super::card::Card;
use super::value::CardValue;

/// Non-empty ordered collection of cards.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vector<Card>,
}

/// Summary returned by `Tarot::deck_info`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeckInfo {
    pub card_count: usize,
    pub cards: Vector<Card>,
}

impl Deck {
    /// Admit a sequence of candidate cards.
    ///
    /// Fails with `InvalidArgument` when the sequence is empty and with
    /// `InvalidCard` naming the first element that is not a record.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<CardValue>,
    {
        let cards = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Card::try_from(value.into()).map_err(|_| TarotError::InvalidCard { index })
            })
            .collect::<Result<Vector<Card>>>()?;

        if cards.is_empty() {
            return Err(TarotError::non_empty_list("Cards"));
        }
        Ok(Self { cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Copy of the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Iterate over cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// A new deck holding a random permutation of this one.
    #[must_use]
    pub fn shuffled(&self, rng: &mut ReadingRng) -> Self {
        Self {
            cards: rng.shuffled(&self.cards),
        }
    }

    /// Draw `count` distinct cards from a fresh permutation of the full deck.
    ///
    /// `count == 0` yields an empty result.
    pub fn draw(&self, count: usize, rng: &mut ReadingRng) -> Result<Vector<Card>> {
        if count > self.cards.len() {
            return Err(TarotError::InsufficientCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        let mut drawn = rng.shuffled(&self.cards);
        drawn.truncate(count);
        Ok(drawn)
    }

    /// Summary with a copy of every card.
    #[must_use]
    pub fn info(&self) -> DeckInfo {
        DeckInfo {
            card_count: self.cards.len(),
            cards: self.cards(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: i64) -> Vec<Card> {
        (0..n).map(|i| Card::new().with_field("id", i)).collect()
    }

    fn ids(cards: &Vector<Card>) -> Vec<i64> {
        cards.iter().map(|c| c.get_int("id", -1)).collect()
    }

    #[test]
    fn test_from_values() {
        let deck = Deck::from_values(numbered(5)).unwrap();
        assert_eq!(deck.len(), 5);
        assert!(!deck.is_empty());
        assert_eq!(ids(&deck.cards()), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_rejected() {
        let err = Deck::from_values(Vec::<Card>::new()).unwrap_err();
        assert_eq!(err, TarotError::non_empty_list("Cards"));
    }

    #[test]
    fn test_non_record_rejected_with_index() {
        let values = vec![
            CardValue::from(Card::new()),
            CardValue::from(Card::new()),
            CardValue::List(vec![]),
        ];
        assert_eq!(
            Deck::from_values(values).unwrap_err(),
            TarotError::InvalidCard { index: 2 }
        );
    }

    #[test]
    fn test_draw_bounds() {
        let deck = Deck::from_values(numbered(4)).unwrap();
        let mut rng = ReadingRng::new(1);

        assert!(deck.draw(0, &mut rng).unwrap().is_empty());
        assert_eq!(deck.draw(4, &mut rng).unwrap().len(), 4);
        assert_eq!(
            deck.draw(5, &mut rng).unwrap_err(),
            TarotError::InsufficientCards { requested: 5, available: 4 }
        );
    }

    #[test]
    fn test_draw_does_not_deplete() {
        let deck = Deck::from_values(numbered(3)).unwrap();
        let mut rng = ReadingRng::new(9);

        for _ in 0..10 {
            let mut drawn = ids(&deck.draw(3, &mut rng).unwrap());
            drawn.sort_unstable();
            assert_eq!(drawn, vec![0, 1, 2]);
        }
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn test_shuffled_keeps_cards() {
        let deck = Deck::from_values(numbered(20)).unwrap();
        let mut rng = ReadingRng::new(4);

        let shuffled = deck.shuffled(&mut rng);
        assert_ne!(ids(&shuffled.cards()), ids(&deck.cards()));

        let mut sorted = ids(&shuffled.cards());
        sorted.sort_unstable();
        assert_eq!(sorted, ids(&deck.cards()));
    }

    #[test]
    fn test_info() {
        let deck = Deck::from_values(numbered(2)).unwrap();
        let info = deck.info();
        assert_eq!(info.card_count, 2);
        assert_eq!(info.cards, deck.cards());
    }
}
