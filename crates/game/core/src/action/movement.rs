use std::collections::BTreeSet;

use super::ActionError;
use crate::env::Grid;
use crate::state::{Facing, Position3, Roster, UnitId};

/// Walk along a precomputed shortest path.
///
/// The path runs from the owner's position to the destination, both
/// included, or is empty when no route exists.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    owner: UnitId,
    path: Vec<Position3>,
}

impl MoveAction {
    pub fn new(owner: UnitId, path: Vec<Position3>) -> Self {
        Self { owner, path }
    }

    pub fn owner(&self) -> UnitId {
        self.owner
    }

    pub fn path(&self) -> &[Position3] {
        &self.path
    }

    pub fn destination(&self) -> Option<Position3> {
        self.path.last().copied()
    }

    /// Unoccupied tiles within the unit's movement range, honouring its
    /// climbing limit.
    pub fn reachable_tiles(grid: &Grid, unit: UnitId, roster: &Roster) -> BTreeSet<Position3> {
        let Some(owner) = roster.get(unit) else {
            return BTreeSet::new();
        };

        grid.dijkstra(owner.position.xy(), owner.max_height_difference())
            .within(owner.movement_range())
            .filter(|&tile| !roster.is_occupied(tile))
            .map(|tile| grid.to_3d(tile))
            .collect()
    }

    pub fn try_make(
        grid: &Grid,
        unit: UnitId,
        target: Position3,
        roster: &Roster,
    ) -> Result<Self, ActionError> {
        let owner = roster.get(unit).ok_or(ActionError::UnknownUnit(unit))?;

        if !Self::reachable_tiles(grid, unit, roster).contains(&target) {
            return Err(if roster.is_occupied(target.xy()) {
                ActionError::Occupied { target }
            } else {
                ActionError::Unreachable { target }
            });
        }

        let limit = owner.max_height_difference();
        let cost_map = grid.dijkstra(owner.position.xy(), limit);
        let path = grid
            .reconstruct_path(target.xy(), &cost_map, limit)
            .into_iter()
            .map(|step| grid.to_3d(step))
            .collect();

        Ok(Self::new(unit, path))
    }

    pub fn can_complete(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn description(&self) -> String {
        match self.destination() {
            Some(destination) => format!("Move to {}", destination.xy()),
            None => "Move nowhere".to_string(),
        }
    }

    /// Places the owner on the last tile, facing along the final step.
    pub fn complete(&self, roster: &mut Roster) {
        let Some(owner) = roster.get_mut(self.owner) else {
            return;
        };

        if let [.., previous, last] = self.path.as_slice() {
            owner.position = *last;
            owner.facing = Facing::from_direction(last.xy() - previous.xy()).unwrap_or(owner.facing);
        }
    }
}
