//! Spread registry: named spread configurations.
//!
//! Lookup goes through an `FxHashMap`; a separate name list keeps
//! insertion order for listing. Re-adding an existing name replaces the
//! configuration but keeps the name's original slot in the listing.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{Result, TarotError};

use super::config::{SpreadConfig, SpreadDefinition};

/// Registry of spread configurations keyed by name.
///
/// ## Example
///
/// ```
/// use tarot::spreads::{SpreadDefinition, SpreadRegistry};
///
/// let mut registry = SpreadRegistry::new();
/// registry.add("three", SpreadDefinition::new(["past", "present", "future"])).unwrap();
///
/// assert_eq!(registry.get("three").unwrap().card_count(), 3);
/// assert_eq!(registry.names(), vec!["three".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpreadRegistry {
    spreads: FxHashMap<String, SpreadConfig>,
    order: Vec<String>,
}

impl SpreadRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a spread, replacing any existing one of that name.
    ///
    /// Returns a copy of the stored configuration.
    pub fn add(&mut self, name: impl Into<String>, definition: SpreadDefinition) -> Result<SpreadConfig> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TarotError::non_empty_string("Spread name"));
        }
        let config = definition.validate()?;

        debug!(spread = %name, card_count = config.card_count(), "registering spread");
        if self.spreads.insert(name.clone(), config.clone()).is_none() {
            self.order.push(name);
        }
        Ok(config)
    }

    /// Remove a spread. Fails with `SpreadNotFound` if it is absent.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        self.ensure_exists(name)?;
        self.spreads.remove(name);
        self.order.retain(|n| n != name);
        debug!(spread = %name, "removed spread");
        Ok(())
    }

    /// Get a spread configuration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SpreadConfig> {
        self.spreads.get(name)
    }

    /// Get a copy of a spread configuration, or `SpreadNotFound`.
    pub fn info(&self, name: &str) -> Result<SpreadConfig> {
        self.get(name).cloned().ok_or_else(|| TarotError::SpreadNotFound {
            name: name.to_string(),
        })
    }

    /// Fail with `SpreadNotFound` unless the name is registered.
    pub fn ensure_exists(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            Ok(())
        } else {
            Err(TarotError::SpreadNotFound {
                name: name.to_string(),
            })
        }
    }

    /// Check if a spread name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.spreads.contains_key(name)
    }

    /// Registered names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Iterate over `(name, config)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpreadConfig)> {
        self.order
            .iter()
            .filter_map(|name| self.spreads.get(name).map(|config| (name.as_str(), config)))
    }

    /// Get the number of registered spreads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
