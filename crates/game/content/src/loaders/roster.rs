//! Unit roster loader.
//!
//! Places units on an already loaded [`Grid`]. Elevation is never stored in the
//! file; each spawn point is lifted onto the terrain.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tactics_core::{Facing, GameConfig, Grid, Position, Unit};

use crate::loaders::{LoadResult, read_file};

/// One unit entry in a roster file.
///
/// Optional stats fall back to the [`GameConfig`] the roster is loaded with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSpec {
    pub label: String,
    /// Spawn tile as `(x, y)`.
    pub position: (i32, i32),
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub hit_points: Option<i32>,
    #[serde(default)]
    pub movement_range: Option<u32>,
    #[serde(default)]
    pub max_height_difference: Option<u32>,
    #[serde(default)]
    pub attack_range: Option<u32>,
    /// Facing name such as `"degrees_135"`.
    #[serde(default)]
    pub facing: Option<String>,
}

impl UnitSpec {
    /// Builds the unit standing on `grid` at the spawn tile.
    pub fn spawn(&self, grid: &Grid, config: &GameConfig) -> LoadResult<Unit> {
        let tile = Position::new(self.position.0, self.position.1);
        if !grid.contains(tile) {
            return Err(anyhow::anyhow!(
                "Unit '{}' spawns at {} outside the {}x{} map",
                self.label,
                tile,
                grid.column_count(),
                grid.row_count()
            ));
        }

        let mut unit = Unit::with_config(self.label.as_str(), grid.to_3d(tile), config)
            .with_team(self.team.as_str());
        if let Some(hit_points) = self.hit_points {
            unit = unit.with_hit_points(hit_points);
        }
        if let Some(range) = self.movement_range {
            unit = unit.with_movement_range(range);
        }
        if let Some(difference) = self.max_height_difference {
            unit = unit.with_max_height_difference(difference);
        }
        if let Some(range) = self.attack_range {
            unit = unit.with_attack_range(range);
        }
        if let Some(name) = &self.facing {
            let facing: Facing = name.parse().map_err(|_| {
                anyhow::anyhow!(
                    "Unit '{}' has unknown facing '{}' (expected degrees_45, degrees_135, degrees_225 or degrees_315)",
                    self.label,
                    name
                )
            })?;
            unit = unit.with_facing(facing);
        }

        Ok(unit)
    }
}

/// Loader for unit rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load units from a RON list of [`UnitSpec`]s, in file order.
    ///
    /// Fails if a unit spawns off the map or two units share a tile.
    pub fn load(path: &Path, grid: &Grid, config: &GameConfig) -> LoadResult<Vec<Unit>> {
        let content = read_file(path)?;
        let specs: Vec<UnitSpec> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut occupied = HashSet::new();
        let mut units = Vec::with_capacity(specs.len());
        for spec in &specs {
            let unit = spec
                .spawn(grid, config)
                .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))?;

            if !occupied.insert(unit.position.xy()) {
                return Err(anyhow::anyhow!(
                    "Invalid roster {}: unit '{}' spawns on occupied tile {}",
                    path.display(),
                    spec.label,
                    unit.position.xy()
                ));
            }
            units.push(unit);
        }

        Ok(units)
    }
}
