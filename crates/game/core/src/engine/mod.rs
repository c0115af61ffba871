//! Turn sequencing for an encounter.
//!
//! The [`Battle`] is the authoritative owner of every unit. It derives whose
//! team may act from the per-unit acted flags, rolls rounds over once every
//! active unit has acted, and classifies the outcome from which teams still
//! have units standing. [`Encounter`] layers tile/unit selection on top for
//! interactive front-ends.

mod encounter;
mod outcome;
mod turns;

pub use encounter::{CommitError, Encounter};
pub use outcome::BattleState;

use crate::action::Action;
use crate::state::{Position3, Roster, Unit, UnitId};

/// Round-robin, team-based turn scheduler.
///
/// Units keep the order they were given at construction, and the roster never
/// grows or shrinks during the battle; defeated units stay in place as
/// inactive entries so [`UnitId`] handles remain valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Battle {
    roster: Roster,
    round: u32,
}

impl Battle {
    pub fn new(units: Vec<Unit>) -> Self {
        Self {
            roster: Roster::new(units),
            round: 1,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// All units in battle order.
    pub fn entities(&self) -> &[Unit] {
        self.roster.units()
    }

    /// Mutable access to the units, for collaborators that adjust flags or
    /// positions directly.
    pub fn entities_mut(&mut self) -> &mut [Unit] {
        self.roster.units_mut()
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.roster.get(id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.roster.get_mut(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.roster.ids()
    }

    /// Unit standing exactly on `tile`, if any.
    pub fn unit_at(&self, tile: Position3) -> Option<UnitId> {
        self.roster.unit_at(tile)
    }

    /// Units that still have hit points left.
    pub fn active_entities(&self) -> impl Iterator<Item = &Unit> {
        self.roster.units().iter().filter(|unit| unit.is_active())
    }

    /// Completes the unit's pending action and advances the round if that was
    /// the last turn in it.
    pub fn complete_current_action(&mut self, id: UnitId) -> Option<Action> {
        let completed = self.roster.complete_current_action(id);
        self.advance_round_if_complete();
        completed
    }
}
