//! Deterministic tactics rules shared across front-ends.
//!
//! `tactics-core` defines the height-aware grid and its pathfinding, the units
//! taking part in an encounter, the actions they can be ordered to perform and
//! the team-based turn loop that sequences them. Everything here is pure,
//! in-memory logic; content loading and presentation live in other crates.
//! All unit state is owned by [`engine::Battle`] and addressed through
//! [`state::UnitId`] handles.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Action, ActionError, ActionKind, AttackAction, MoveAction};
pub use config::GameConfig;
pub use engine::{Battle, BattleState, CommitError, Encounter};
pub use env::{CostMap, Grid, GridError, MapDimensions};
pub use error::{ErrorSeverity, GameError};
pub use state::{Facing, Position, Position3, Roster, Unit, UnitId};
