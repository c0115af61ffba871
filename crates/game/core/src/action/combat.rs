use std::collections::BTreeSet;

use super::ActionError;
use crate::config::GameConfig;
use crate::env::Grid;
use crate::state::{Facing, Position3, Roster, UnitId};

/// Melee or ranged strike, depending on the owner's attack range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackAction {
    owner: UnitId,
    target: UnitId,
}

impl AttackAction {
    pub fn new(owner: UnitId, target: UnitId) -> Self {
        Self { owner, target }
    }

    pub fn owner(&self) -> UnitId {
        self.owner
    }

    pub fn target(&self) -> UnitId {
        self.target
    }

    /// Tiles within attack range. Elevation adds to the distance but never
    /// blocks a line of attack.
    pub fn reachable_tiles(grid: &Grid, unit: UnitId, roster: &Roster) -> BTreeSet<Position3> {
        let Some(owner) = roster.get(unit) else {
            return BTreeSet::new();
        };

        grid.dijkstra(owner.position.xy(), None)
            .within(Some(owner.attack_range()))
            .map(|tile| grid.to_3d(tile))
            .collect()
    }

    pub fn try_make(
        grid: &Grid,
        unit: UnitId,
        target: Position3,
        roster: &Roster,
    ) -> Result<Self, ActionError> {
        roster.get(unit).ok_or(ActionError::UnknownUnit(unit))?;

        if !Self::reachable_tiles(grid, unit, roster).contains(&target) {
            return Err(ActionError::OutOfRange { target });
        }

        let victim = roster
            .unit_at(target)
            .ok_or(ActionError::NoTarget { target })?;

        Ok(Self::new(unit, victim))
    }

    pub fn can_complete(&self, roster: &Roster) -> bool {
        roster.get(self.target).is_some()
    }

    pub fn description(&self, roster: &Roster) -> String {
        let name = roster.get(self.target).map_or("Nothing", |unit| unit.label());
        format!("Attack {name}")
    }

    /// Deals [`GameConfig::ATTACK_DAMAGE`] to the target, then turns the two
    /// units to face each other.
    pub fn complete(&self, roster: &mut Roster) {
        let Some(target) = roster.get_mut(self.target) else {
            return;
        };
        target.take_damage(GameConfig::ATTACK_DAMAGE);
        let target_position = target.position;

        let Some(owner) = roster.get_mut(self.owner) else {
            return;
        };
        let Some(facing) = Facing::from_direction(target_position.xy() - owner.position.xy())
        else {
            return;
        };
        owner.facing = facing;

        if let Some(target) = roster.get_mut(self.target) {
            target.facing = facing.opposite();
        }
    }
}
