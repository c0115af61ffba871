//! Height map loader.
//!
//! Loads terrain elevation only. Unit placement is handled separately via
//! roster files.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::Grid;

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
///
/// Row index is `y`, column index is `x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    height_map: Vec<Vec<i32>>,
}

/// Loader for height maps from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a grid from a RON file of the form `(height_map: [[1, 1], [1, 2]])`.
    pub fn load(path: &Path) -> LoadResult<Grid> {
        let content = read_file(path)?;
        let data: MapDataRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        Grid::new(&data.height_map)
            .map_err(|e| anyhow::anyhow!("Invalid height map in {}: {}", path.display(), e))
    }
}
