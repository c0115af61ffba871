//! Content factory for assembling encounters from data files.

use std::path::{Path, PathBuf};

use tactics_core::{Battle, Encounter, GameConfig, Grid, Unit};

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, RosterLoader};

/// Content factory that loads all encounter content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml        (optional)
/// ├── maps/
/// │   └── ridge.ron
/// └── rosters/
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or the defaults if the
    /// directory has none.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<Grid> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Load units from `rosters/{roster_name}.ron`, placed on `grid`.
    pub fn load_roster(
        &self,
        roster_name: &str,
        grid: &Grid,
        config: &GameConfig,
    ) -> LoadResult<Vec<Unit>> {
        let path = self
            .data_dir
            .join("rosters")
            .join(format!("{}.ron", roster_name));
        RosterLoader::load(&path, grid, config)
    }

    /// Build a ready-to-play encounter from a map and a roster.
    pub fn encounter(&self, map_name: &str, roster_name: &str) -> LoadResult<Encounter> {
        let config = self.load_config()?;
        let grid = self.load_map(map_name)?;
        let units = self.load_roster(roster_name, &grid, &config)?;

        Ok(Encounter::new(grid, Battle::new(units)))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
