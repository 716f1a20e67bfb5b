//! Core engine types: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::TarotConfig;
pub use error::{ErrorKind, Result, TarotError};
pub use rng::{ReadingRng, ReadingRngState};
