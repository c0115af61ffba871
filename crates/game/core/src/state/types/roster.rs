use super::{Position, Position3, Unit, UnitId};
use crate::action::Action;

/// Ordered, fixed-length collection of every unit in an encounter.
///
/// The roster is the single owner of unit state. Actions, the battle and
/// presentation layers refer to units through [`UnitId`] handles, so completing
/// an action is observed by every holder of the same handle.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Roster {
    units: Vec<Unit>,
}

impl Roster {
    pub fn new(units: Vec<Unit>) -> Self {
        Self { units }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns a unit by handle.
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.index())
    }

    /// Returns a mutable unit by handle.
    pub fn get_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id.index())
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Mutable view of the units; the roster length itself cannot change.
    pub fn units_mut(&mut self) -> &mut [Unit] {
        &mut self.units
    }

    pub fn ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        (0..self.units.len()).map(|index| UnitId(index as u32))
    }

    /// Iterates `(handle, unit)` pairs in roster order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| (UnitId(index as u32), unit))
    }

    /// First unit standing exactly on `tile`, elevation included.
    pub fn unit_at(&self, tile: Position3) -> Option<UnitId> {
        self.iter()
            .find(|(_, unit)| unit.position == tile)
            .map(|(id, _)| id)
    }

    /// Whether any unit, active or not, stands on the tile.
    pub fn is_occupied(&self, tile: Position) -> bool {
        self.units.iter().any(|unit| unit.occupies(tile))
    }

    /// Completes the unit's pending action.
    ///
    /// Runs the action's effect, marks the unit as having acted when the
    /// action ends the turn, and clears the pending slot. Returns the
    /// completed action, or `None` (acted flag untouched) when nothing was
    /// pending.
    pub fn complete_current_action(&mut self, id: UnitId) -> Option<Action> {
        let action = self.get_mut(id)?.current_action.take()?;
        tracing::debug!(unit = %id, action = %action.kind(), "completing action");

        action.complete(self);

        let unit = self.get_mut(id)?;
        if action.ends_turn() {
            unit.has_acted = true;
        }
        unit.current_action = None;

        Some(action)
    }
}

impl FromIterator<Unit> for Roster {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
