//! The `Tarot` engine: deck, spread registry and current reading.
//!
//! ## Lifecycle
//!
//! An engine starts `Uninitialized`. `initialize_deck` moves it to `Ready`;
//! calling it again swaps in a new deck and stays `Ready`. Spreads can be
//! added and removed in either state, but draws and readings need a deck.
//! Re-initializing never clears the registry or the current spread.
//!
//! Every call checks its preconditions before touching any state, so a
//! failed call leaves the engine exactly as it was.
//!
//! All getters return owned copies. Cards are persistent values, so these
//! copies are cheap and nothing a caller does to them reaches the engine.
//!
//! An engine is a single-owner value; share it across threads behind a
//! `Mutex` if needed.

use im::Vector;
use tracing::{debug, trace};

use crate::cards::{Card, CardValue, Deck, DeckInfo};
use crate::core::{ReadingRng, ReadingRngState, Result, TarotConfig, TarotError};
use crate::spreads::{SpreadConfig, SpreadDefinition, SpreadRegistry};

use super::entry::{map_cards_to_spread, SpreadEntry};

/// Engine lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No deck yet.
    Uninitialized,
    /// Deck present; readings allowed.
    Ready,
}

/// Tarot deck and reading engine.
///
/// ## Example
///
/// ```
/// use tarot::{Card, SpreadDefinition, Tarot};
///
/// let mut tarot = Tarot::with_seed(7);
/// tarot.initialize_deck(vec![
///     Card::new().with_field("name", "The Fool"),
///     Card::new().with_field("name", "The Magician"),
///     Card::new().with_field("name", "The High Priestess"),
/// ])?;
/// tarot.add_spread("three", SpreadDefinition::new(["past", "present", "future"]))?;
///
/// let reading = tarot.do_reading("three")?;
/// assert_eq!(reading.len(), 3);
/// assert_eq!(reading[0].position, "past");
/// assert_eq!(tarot.current_spread(), reading);
/// # Ok::<(), tarot::TarotError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Tarot {
    config: TarotConfig,
    rng: ReadingRng,
    deck: Option<Deck>,
    spreads: SpreadRegistry,
    current_spread: Vector<SpreadEntry>,
}

impl Default for Tarot {
    fn default() -> Self {
        Self::new()
    }
}

impl Tarot {
    /// Create an entropy-seeded engine with no deck.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TarotConfig::default())
    }

    /// Create an engine with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(TarotConfig::new().with_seed(seed))
    }

    /// Create an engine from a configuration.
    #[must_use]
    pub fn with_config(config: TarotConfig) -> Self {
        Self {
            rng: config.build_rng(),
            config,
            deck: None,
            spreads: SpreadRegistry::new(),
            current_spread: Vector::new(),
        }
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &TarotConfig {
        &self.config
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.is_initialized() {
            EngineState::Ready
        } else {
            EngineState::Uninitialized
        }
    }

    /// True once a deck has been admitted.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        loaded(&self.deck).is_ok()
    }

    /// Snapshot of the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> ReadingRngState {
        self.rng.state()
    }

    /// Resume the RNG from a saved position.
    pub fn restore_rng(&mut self, state: &ReadingRngState) {
        self.rng = ReadingRng::from_state(state);
    }

    // === Deck ===

    /// Replace the deck with the given cards.
    ///
    /// Every element must be a record; the first that is not fails the
    /// call with `InvalidCard { index }`. An empty sequence fails with
    /// `InvalidArgument`. On failure the previous deck stays in place.
    pub fn initialize_deck<I>(&mut self, cards: I) -> Result<Vector<Card>>
    where
        I: IntoIterator,
        I::Item: Into<CardValue>,
    {
        let deck = Deck::from_values(cards)?;
        debug!(card_count = deck.len(), "deck initialized");

        let cards = deck.cards();
        self.deck = Some(deck);
        Ok(cards)
    }

    /// Fail with `DeckNotInitialized` unless a deck is present.
    pub fn validate_deck_initialized(&self) -> Result<()> {
        self.deck().map(|_| ())
    }

    fn deck(&self) -> Result<&Deck> {
        loaded(&self.deck)
    }

    /// Replace the deck with a random permutation of itself.
    pub fn shuffle_deck(&mut self) -> Result<()> {
        let shuffled = loaded(&self.deck)?.shuffled(&mut self.rng);
        debug!(card_count = shuffled.len(), "deck shuffled");
        self.deck = Some(shuffled);
        Ok(())
    }

    /// Card count plus a copy of the deck in its current order.
    pub fn deck_info(&self) -> Result<DeckInfo> {
        Ok(self.deck()?.info())
    }

    /// Draw `count` distinct cards from a fresh shuffle of the full deck.
    ///
    /// The deck is not depleted: each call draws from every card.
    pub fn draw_cards(&mut self, count: usize) -> Result<Vector<Card>> {
        let drawn = loaded(&self.deck)?.draw(count, &mut self.rng)?;
        trace!(count, "drew cards");
        Ok(drawn)
    }

    // === Spreads ===

    /// Register or replace a spread. Returns a copy of the stored config.
    pub fn add_spread(&mut self, name: impl Into<String>, definition: SpreadDefinition) -> Result<SpreadConfig> {
        self.spreads.add(name, definition)
    }

    /// Remove a registered spread.
    pub fn remove_spread(&mut self, name: &str) -> Result<()> {
        self.spreads.remove(name)
    }

    /// Copy of a registered spread's configuration.
    pub fn spread_info(&self, name: &str) -> Result<SpreadConfig> {
        self.spreads.info(name)
    }

    /// Registered spread names in insertion order.
    #[must_use]
    pub fn list_spreads(&self) -> Vec<String> {
        self.spreads.names()
    }

    /// Fail with `SpreadNotFound` unless the spread is registered.
    pub fn validate_spread_exists(&self, name: &str) -> Result<()> {
        self.spreads.ensure_exists(name)
    }

    // === Readings ===

    /// Draw one card per position of the named spread and lay them out.
    ///
    /// Checks the deck first, then the spread. The result replaces the
    /// current spread and a copy is returned.
    pub fn do_reading(&mut self, spread_name: &str) -> Result<Vector<SpreadEntry>> {
        self.validate_deck_initialized()?;
        self.validate_spread_exists(spread_name)?;

        let spread = self.spreads.info(spread_name)?;
        let cards = self.draw_cards(spread.card_count())?;
        self.current_spread = map_cards_to_spread(spread.positions(), &cards);

        debug!(spread = %spread_name, card_count = spread.card_count(), "reading complete");
        Ok(self.current_spread.clone())
    }

    /// Copy of the last reading; empty before the first one.
    #[must_use]
    pub fn current_spread(&self) -> Vector<SpreadEntry> {
        self.current_spread.clone()
    }
}

// Borrows only the deck field so callers can still use the RNG mutably.
fn loaded(deck: &Option<Deck>) -> Result<&Deck> {
    deck.as_ref()
        .filter(|deck| !deck.is_empty())
        .ok_or(TarotError::DeckNotInitialized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn major_arcana(n: i64) -> Vec<Card> {
        (0..n).map(|i| Card::new().with_field("number", i)).collect()
    }

    #[test]
    fn test_lifecycle() {
        let mut tarot = Tarot::with_seed(1);
        assert_eq!(tarot.state(), EngineState::Uninitialized);
        assert!(!tarot.is_initialized());

        tarot.initialize_deck(major_arcana(22)).unwrap();
        assert_eq!(tarot.state(), EngineState::Ready);

        tarot.initialize_deck(major_arcana(5)).unwrap();
        assert_eq!(tarot.state(), EngineState::Ready);
        assert_eq!(tarot.deck_info().unwrap().card_count, 5);
    }

    #[test]
    fn test_deck_operations_need_deck() {
        let mut tarot = Tarot::with_seed(1);

        assert_eq!(tarot.validate_deck_initialized(), Err(TarotError::DeckNotInitialized));
        assert_eq!(tarot.draw_cards(1), Err(TarotError::DeckNotInitialized));
        assert_eq!(tarot.shuffle_deck(), Err(TarotError::DeckNotInitialized));
        assert_eq!(tarot.deck_info(), Err(TarotError::DeckNotInitialized));
    }

    #[test]
    fn test_failed_initialize_keeps_previous_deck() {
        let mut tarot = Tarot::with_seed(1);
        tarot.initialize_deck(major_arcana(3)).unwrap();

        let bad = vec![CardValue::from(Card::new()), CardValue::Int(1)];
        assert_eq!(tarot.initialize_deck(bad), Err(TarotError::InvalidCard { index: 1 }));
        assert_eq!(tarot.deck_info().unwrap().card_count, 3);
    }

    #[test]
    fn test_reading_checks_deck_before_spread() {
        let mut tarot = Tarot::with_seed(1);
        assert_eq!(tarot.do_reading("missing"), Err(TarotError::DeckNotInitialized));

        tarot.initialize_deck(major_arcana(3)).unwrap();
        assert_eq!(
            tarot.do_reading("missing"),
            Err(TarotError::SpreadNotFound { name: "missing".into() })
        );
    }

    #[test]
    fn test_reading_larger_than_deck_keeps_current_spread() {
        let mut tarot = Tarot::with_seed(1);
        tarot.initialize_deck(major_arcana(3)).unwrap();
        tarot.add_spread("one", SpreadDefinition::new(["focus"])).unwrap();
        let first = tarot.do_reading("one").unwrap();

        tarot.add_spread("big", SpreadDefinition::new(["a", "b", "c", "d"])).unwrap();
        assert_eq!(
            tarot.do_reading("big"),
            Err(TarotError::InsufficientCards { requested: 4, available: 3 })
        );
        assert_eq!(tarot.current_spread(), first);
    }

    #[test]
    fn test_reinitialize_keeps_registry_and_current_spread() {
        let mut tarot = Tarot::with_seed(1);
        tarot.initialize_deck(major_arcana(3)).unwrap();
        tarot.add_spread("one", SpreadDefinition::new(["focus"])).unwrap();
        let reading = tarot.do_reading("one").unwrap();

        tarot.initialize_deck(major_arcana(10)).unwrap();
        assert_eq!(tarot.list_spreads(), vec!["one"]);
        assert_eq!(tarot.current_spread(), reading);
    }

    #[test]
    fn test_rng_restore_replays_draws() {
        let mut tarot = Tarot::with_seed(3);
        tarot.initialize_deck(major_arcana(22)).unwrap();

        let saved = tarot.rng_state();
        let first = tarot.draw_cards(5).unwrap();

        tarot.restore_rng(&saved);
        assert_eq!(tarot.draw_cards(5).unwrap(), first);
    }

    #[test]
    fn test_config_accessor() {
        let tarot = Tarot::with_seed(12);
        assert_eq!(tarot.config().seed, Some(12));
        assert_eq!(Tarot::new().config().seed, None);
    }
}
