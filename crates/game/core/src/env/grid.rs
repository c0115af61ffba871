use std::collections::HashMap;

use super::GridError;
use crate::state::{Position, Position3};

/// Width and height of a grid in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub const fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Immutable elevation map addressed by integer `(x, y)` coordinates.
///
/// Every populated coordinate satisfies `0 <= x < column_count` and
/// `0 <= y < row_count`. Coordinates outside that set are "off-map" and report
/// [`Grid::OFF_MAP`] as their elevation instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Grid {
    dimensions: MapDimensions,
    tiles: HashMap<Position, i32>,
}

impl Grid {
    /// Elevation reported for coordinates that are not part of the map.
    pub const OFF_MAP: i32 = -1;

    /// Grid with no tiles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a grid from a row-major height map.
    ///
    /// Row index becomes `y` and column index becomes `x`. The column count is
    /// taken from the first row; every other row must match it.
    pub fn new<R: AsRef<[i32]>>(height_map: &[R]) -> Result<Self, GridError> {
        let columns = height_map.first().map_or(0, |row| row.as_ref().len());
        // rows without columns hold no tiles
        let rows = if columns == 0 { 0 } else { height_map.len() };

        let too_large = || GridError::TooLarge { columns, rows };
        let width = u32::try_from(columns).map_err(|_| too_large())?;
        let height = u32::try_from(rows).map_err(|_| too_large())?;
        i32::try_from(columns).map_err(|_| too_large())?;
        i32::try_from(rows).map_err(|_| too_large())?;

        let mut tiles = HashMap::with_capacity(columns * rows);
        for (y, row) in height_map.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: columns,
                    found: row.len(),
                });
            }

            for (x, &elevation) in row.iter().enumerate() {
                let position = Position::new(x as i32, y as i32);
                if elevation < 0 {
                    return Err(GridError::NegativeElevation {
                        x: position.x,
                        y: position.y,
                        elevation,
                    });
                }
                tiles.insert(position, elevation);
            }
        }

        Ok(Self {
            dimensions: MapDimensions::new(width, height),
            tiles,
        })
    }

    pub fn column_count(&self) -> u32 {
        self.dimensions.width
    }

    pub fn row_count(&self) -> u32 {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Whether the coordinate is part of the map.
    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Stored elevation, or [`Grid::OFF_MAP`] for coordinates outside the map.
    pub fn elevation(&self, position: Position) -> i32 {
        self.tiles.get(&position).copied().unwrap_or(Self::OFF_MAP)
    }

    /// Lifts a coordinate to 3D using its elevation.
    pub fn to_3d(&self, position: Position) -> Position3 {
        Position3::new(position.x, position.y, self.elevation(position))
    }

    /// Every tile in row-major order, lifted to 3D.
    pub fn tiles(&self) -> impl Iterator<Item = Position3> + '_ {
        let width = self.dimensions.width as i32;
        let height = self.dimensions.height as i32;
        (0..height).flat_map(move |y| (0..width).map(move |x| self.to_3d(Position::new(x, y))))
    }

    /// Number of populated tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}
