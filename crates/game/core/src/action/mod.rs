//! Action domain - commands a unit can be ordered to carry out.
//!
//! The variant set is closed, so actions are a plain enum:
//! - `ActionKind`: field-less discriminant used for the factory queries
//!   (`reachable_tiles`, `make`) before a concrete target is known
//! - `Action`: a concrete, validated command ready to be committed to a unit
//!
//! Actions never own units. They hold [`UnitId`] handles and resolve them
//! against the [`Roster`] when described or completed.
//!
//! # Module Structure
//!
//! - `error`: rejection reasons for `try_make`
//! - `movement`: `MoveAction` (path-following)
//! - `combat`: `AttackAction` (melee and ranged)

pub mod combat;
pub mod error;
pub mod movement;

pub use combat::AttackAction;
pub use error::ActionError;
pub use movement::MoveAction;

use std::collections::BTreeSet;

use crate::env::Grid;
use crate::state::{Position3, Roster, UnitId};

/// Kinds of action a unit can be ordered to perform.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionKind {
    /// Ends the turn without doing anything.
    Dummy,
    Move,
    Attack,
    /// Hit reaction queued by damage intake; does not end the turn.
    TakeDamage,
    /// Marker queued when a unit's hit points run out.
    Defeat,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::Dummy,
        ActionKind::Move,
        ActionKind::Attack,
        ActionKind::TakeDamage,
        ActionKind::Defeat,
    ];

    /// Tiles this kind of action could legally target for `unit`.
    ///
    /// Kinds without a targeting rule accept every tile on the grid.
    pub fn reachable_tiles(self, grid: &Grid, unit: UnitId, roster: &Roster) -> BTreeSet<Position3> {
        match self {
            ActionKind::Move => MoveAction::reachable_tiles(grid, unit, roster),
            ActionKind::Attack => AttackAction::reachable_tiles(grid, unit, roster),
            ActionKind::Dummy | ActionKind::TakeDamage | ActionKind::Defeat => {
                grid.tiles().collect()
            }
        }
    }

    /// Builds a concrete action aimed at `target`, explaining any rejection.
    pub fn try_make(
        self,
        grid: &Grid,
        unit: UnitId,
        target: Position3,
        roster: &Roster,
    ) -> Result<Action, ActionError> {
        match self {
            ActionKind::Dummy => Ok(Action::Dummy),
            ActionKind::Move => MoveAction::try_make(grid, unit, target, roster).map(Action::Move),
            ActionKind::Attack => {
                AttackAction::try_make(grid, unit, target, roster).map(Action::Attack)
            }
            ActionKind::TakeDamage => Ok(Action::TakeDamage),
            ActionKind::Defeat => Ok(Action::Defeat),
        }
    }

    /// Builds a concrete action aimed at `target`, or `None` if the target is
    /// not legal. Pure in its inputs.
    pub fn make(
        self,
        grid: &Grid,
        unit: UnitId,
        target: Position3,
        roster: &Roster,
    ) -> Option<Action> {
        self.try_make(grid, unit, target, roster)
            .inspect_err(|error| {
                tracing::debug!(kind = %self, %unit, %target, %error, "action rejected");
            })
            .ok()
    }
}

/// A concrete command, validated against a target and ready to commit.
///
/// Completing is not idempotent: commit an action to a unit, complete it once
/// and then drop it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Dummy,
    Move(MoveAction),
    Attack(AttackAction),
    TakeDamage,
    Defeat,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Dummy => ActionKind::Dummy,
            Action::Move(_) => ActionKind::Move,
            Action::Attack(_) => ActionKind::Attack,
            Action::TakeDamage => ActionKind::TakeDamage,
            Action::Defeat => ActionKind::Defeat,
        }
    }

    /// Whether completing the action consumes the unit's turn.
    pub fn ends_turn(&self) -> bool {
        !matches!(self, Action::TakeDamage)
    }

    /// Whether [`Action::complete`] would have an effect.
    pub fn can_complete(&self, roster: &Roster) -> bool {
        match self {
            Action::Move(action) => action.can_complete(),
            Action::Attack(action) => action.can_complete(roster),
            Action::Dummy | Action::TakeDamage | Action::Defeat => true,
        }
    }

    /// Label for menus and confirmation prompts.
    pub fn description(&self, roster: &Roster) -> String {
        match self {
            Action::Dummy => "Wait".to_string(),
            Action::Move(action) => action.description(),
            Action::Attack(action) => action.description(roster),
            Action::TakeDamage => "Take damage".to_string(),
            Action::Defeat => "Defeated".to_string(),
        }
    }

    /// Applies the action's effect to the units it refers to.
    ///
    /// `Dummy`, `TakeDamage` and `Defeat` only exist to drive turn
    /// bookkeeping and presentation; they change nothing here.
    pub fn complete(&self, roster: &mut Roster) {
        match self {
            Action::Move(action) => action.complete(roster),
            Action::Attack(action) => action.complete(roster),
            Action::Dummy | Action::TakeDamage | Action::Defeat => {}
        }
    }
}
