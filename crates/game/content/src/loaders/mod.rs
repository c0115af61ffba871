//! Content loaders for reading encounter data from files.
//!
//! Maps and rosters are RON, configuration is TOML. Every loader takes a path
//! and returns a fully validated tactics-core value.

pub mod config;
pub mod factory;
pub mod map;
pub mod roster;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;
pub use roster::{RosterLoader, UnitSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
