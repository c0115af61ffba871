//! Static battlefield data.
//!
//! The [`Grid`] is built once per encounter and never mutated afterwards;
//! pathfinding queries borrow it immutably and return owned [`CostMap`]s.
mod error;
mod grid;
mod pathfinding;

pub use error::GridError;
pub use grid::{Grid, MapDimensions};
pub use pathfinding::CostMap;
