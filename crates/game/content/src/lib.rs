//! Data-driven encounter content and loaders.
//!
//! This crate reads the data files an encounter is assembled from:
//! - Height maps (data-driven via RON)
//! - Unit rosters (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Loaders turn files into tactics-core values and never keep state of their
//! own. Missing or malformed files surface as `anyhow` errors that name the
//! offending file.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, MapLoader, RosterLoader, UnitSpec};
