//! Spreads: named layouts of positions.
//!
//! - `SpreadDefinition`: caller input (positions, optional description)
//! - `SpreadConfig`: validated layout with derived card count
//! - `SpreadRegistry`: insertion-ordered name lookup

pub mod config;
pub mod registry;

pub use config::{SpreadConfig, SpreadDefinition};
pub use registry::SpreadRegistry;
