//! Engine configuration.
//!
//! `TarotConfig` is handed to `Tarot::with_config` at construction time.
//! Without a seed the engine draws its seed from OS entropy, so readings
//! differ between runs; with a seed every shuffle and draw is reproducible.

use serde::{Deserialize, Serialize};

use super::rng::ReadingRng;

/// Configuration for a `Tarot` engine.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TarotConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl TarotConfig {
    /// Create a default configuration (entropy-seeded).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed for reproducible readings.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn build_rng(&self) -> ReadingRng {
        match self.seed {
            Some(seed) => ReadingRng::new(seed),
            None => ReadingRng::from_entropy(),
        }
    }
}
