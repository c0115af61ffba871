//! Mutable encounter state.
//!
//! This module owns the unit data that actions mutate: positions, facings,
//! hit points and per-round bookkeeping. The static terrain lives in
//! [`crate::env`]; turn sequencing on top of this state lives in
//! [`crate::engine`].
pub mod types;

pub use types::{Facing, Position, Position3, Roster, Unit, UnitId};
