pub mod common;
pub mod facing;
pub mod roster;
pub mod unit;

pub use common::{Position, Position3, UnitId};
pub use facing::Facing;
pub use roster::Roster;
pub use unit::Unit;
