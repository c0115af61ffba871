use std::collections::BTreeSet;

use super::Battle;
use crate::action::{Action, ActionKind};
use crate::env::Grid;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position3, UnitId};

/// Why [`Encounter::try_commit`] refused an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommitError {
    #[error("no unit is selected")]
    NoSelection,

    #[error("unit {0} not found")]
    UnknownUnit(UnitId),

    #[error("unit {unit} belongs to {team:?}, but it is {active:?}'s turn")]
    NotActiveTeam {
        unit: UnitId,
        team: String,
        active: String,
    },

    #[error("unit {0} has already acted this round")]
    AlreadyActed(UnitId),

    #[error("unit {0} is defeated")]
    Defeated(UnitId),
}

impl GameError for CommitError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            CommitError::UnknownUnit(_) => ErrorSeverity::Internal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CommitError::NoSelection => "COMMIT_NO_SELECTION",
            CommitError::UnknownUnit(_) => "COMMIT_UNKNOWN_UNIT",
            CommitError::NotActiveTeam { .. } => "COMMIT_NOT_ACTIVE_TEAM",
            CommitError::AlreadyActed(_) => "COMMIT_ALREADY_ACTED",
            CommitError::Defeated(_) => "COMMIT_DEFEATED",
        }
    }
}

/// A battle on a map, plus the tile and unit a player currently has selected.
///
/// Drives the select, plan, commit, finish loop without any presentation
/// concerns. Animation layers call [`Encounter::finish`] once they have played
/// out the committed action.
#[derive(Clone, Debug)]
pub struct Encounter {
    grid: Grid,
    battle: Battle,
    selected_tile: Option<Position3>,
    selected_unit: Option<UnitId>,
}

impl Encounter {
    pub fn new(grid: Grid, battle: Battle) -> Self {
        Self {
            grid,
            battle,
            selected_tile: None,
            selected_unit: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn battle(&self) -> &Battle {
        &self.battle
    }

    pub fn battle_mut(&mut self) -> &mut Battle {
        &mut self.battle
    }

    pub fn selected_tile(&self) -> Option<Position3> {
        self.selected_tile
    }

    pub fn selected_unit(&self) -> Option<UnitId> {
        self.selected_unit
    }

    /// Replaces the selection with `tile` and whoever stands on it.
    ///
    /// Only on-map tiles can be selected, but a unit is picked up wherever it
    /// stands.
    pub fn click_tile(&mut self, tile: Position3) {
        self.selected_tile = self.grid.contains(tile.xy()).then_some(tile);
        self.selected_unit = self.battle.unit_at(tile);
    }

    /// Tiles the selected unit could target with `kind`.
    pub fn reachable_tiles(&self, kind: ActionKind) -> BTreeSet<Position3> {
        match self.selected_unit {
            Some(unit) => kind.reachable_tiles(&self.grid, unit, self.battle.roster()),
            None => BTreeSet::new(),
        }
    }

    /// Builds an action of `kind` for the selected unit aimed at `target`.
    pub fn plan(&self, kind: ActionKind, target: Position3) -> Option<Action> {
        let unit = self.selected_unit?;
        kind.make(&self.grid, unit, target, self.battle.roster())
    }

    /// Queues `action` as the selected unit's pending action.
    ///
    /// Only a standing unit of the active team that has not yet acted this
    /// round may receive an action.
    pub fn try_commit(&mut self, action: Action) -> Result<UnitId, CommitError> {
        let id = self.selected_unit.ok_or(CommitError::NoSelection)?;
        let unit = self.battle.unit(id).ok_or(CommitError::UnknownUnit(id))?;

        if !unit.is_active() {
            return Err(CommitError::Defeated(id));
        }
        let active = self.battle.active_team();
        if unit.team() != active {
            return Err(CommitError::NotActiveTeam {
                unit: id,
                team: unit.team().to_string(),
                active: active.to_string(),
            });
        }
        if unit.has_acted {
            return Err(CommitError::AlreadyActed(id));
        }

        tracing::debug!(unit = %id, action = %action.kind(), "action committed");
        if let Some(unit) = self.battle.unit_mut(id) {
            unit.current_action = Some(action);
        }
        Ok(id)
    }

    /// [`Encounter::try_commit`] without the reason for a refusal.
    pub fn commit(&mut self, action: Action) -> bool {
        self.try_commit(action)
            .inspect_err(|error| tracing::debug!(%error, "commit refused"))
            .is_ok()
    }

    /// Completes the unit's pending action once it has been played out.
    pub fn finish(&mut self, unit: UnitId) -> Option<Action> {
        self.battle.complete_current_action(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Position, Unit};

    fn encounter() -> Encounter {
        let grid = Grid::new(&[[1, 1, 1, 1], [1, 2, 2, 1], [1, 1, 1, 1]]).unwrap();
        let units = vec![
            Unit::new("Knight", grid.to_3d(Position::new(0, 0)))
                .with_team("Player")
                .with_movement_range(3),
            Unit::new("Goblin", grid.to_3d(Position::new(3, 2))).with_team("AI"),
        ];
        Encounter::new(grid, Battle::new(units))
    }

    #[test]
    fn clicking_a_unit_selects_it() {
        let mut encounter = encounter();
        encounter.click_tile(Position3::new(0, 0, 1));

        assert_eq!(encounter.selected_tile(), Some(Position3::new(0, 0, 1)));
        assert_eq!(encounter.selected_unit(), Some(UnitId(0)));
    }

    #[test]
    fn clicking_an_empty_tile_clears_the_unit() {
        let mut encounter = encounter();
        encounter.click_tile(Position3::new(0, 0, 1));
        encounter.click_tile(Position3::new(1, 1, 2));

        assert_eq!(encounter.selected_tile(), Some(Position3::new(1, 1, 2)));
        assert_eq!(encounter.selected_unit(), None);
        assert!(encounter.reachable_tiles(ActionKind::Move).is_empty());
    }

    #[test]
    fn clicking_off_the_map_clears_everything() {
        let mut encounter = encounter();
        encounter.click_tile(Position3::new(0, 0, 1));
        encounter.click_tile(Position3::new(9, 0, 0));

        assert_eq!(encounter.selected_tile(), None);
        assert_eq!(encounter.selected_unit(), None);
    }

    #[test]
    fn units_off_the_map_can_still_be_selected() {
        let grid = Grid::new(&[[1, 1]]).unwrap();
        let units = vec![Unit::new("Scout", Position3::new(5, 5, 0)).with_team("Player")];
        let mut encounter = Encounter::new(grid, Battle::new(units));

        encounter.click_tile(Position3::new(5, 5, 0));

        assert_eq!(encounter.selected_tile(), None);
        assert_eq!(encounter.selected_unit(), Some(UnitId(0)));
    }

    #[test]
    fn plan_uses_selected_unit() {
        let mut encounter = encounter();
        assert_eq!(
            encounter.plan(ActionKind::Move, Position3::new(1, 0, 1)),
            None
        );

        encounter.click_tile(Position3::new(0, 0, 1));
        let action = encounter
            .plan(ActionKind::Move, Position3::new(1, 0, 1))
            .unwrap();

        assert_eq!(action.kind(), ActionKind::Move);
        assert!(
            encounter
                .reachable_tiles(ActionKind::Move)
                .contains(&Position3::new(1, 0, 1))
        );
    }

    #[test]
    fn commit_and_finish_move() {
        let mut encounter = encounter();
        encounter.click_tile(Position3::new(0, 0, 1));
        let action = encounter
            .plan(ActionKind::Move, Position3::new(2, 0, 1))
            .unwrap();

        assert!(encounter.commit(action));
        assert_eq!(encounter.finish(UnitId(0)).map(|a| a.kind()), Some(ActionKind::Move));

        let knight = encounter.battle().unit(UnitId(0)).unwrap();
        assert_eq!(knight.position, Position3::new(2, 0, 1));
        assert!(knight.has_acted);
        assert_eq!(encounter.battle().active_team(), "AI");
    }

    #[test]
    fn commit_requires_active_team() {
        let mut encounter = encounter();
        encounter.click_tile(Position3::new(3, 2, 1));

        assert_eq!(
            encounter.try_commit(Action::Dummy),
            Err(CommitError::NotActiveTeam {
                unit: UnitId(1),
                team: "AI".to_string(),
                active: "Player".to_string(),
            })
        );
        assert!(!encounter.commit(Action::Dummy));
        assert!(encounter.battle().unit(UnitId(1)).unwrap().current_action.is_none());
    }

    #[test]
    fn commit_refuses_units_that_already_acted() {
        let grid = Grid::new(&[[1, 1, 1]]).unwrap();
        let units = vec![
            Unit::new("Knight", Position3::new(0, 0, 1)).with_team("Player"),
            Unit::new("Archer", Position3::new(1, 0, 1)).with_team("Player"),
            Unit::new("Goblin", Position3::new(2, 0, 1)).with_team("AI"),
        ];
        let mut encounter = Encounter::new(grid, Battle::new(units));
        encounter.battle_mut().entities_mut()[0].has_acted = true;

        encounter.click_tile(Position3::new(0, 0, 1));
        assert_eq!(
            encounter.try_commit(Action::Dummy),
            Err(CommitError::AlreadyActed(UnitId(0)))
        );

        encounter.click_tile(Position3::new(1, 0, 1));
        assert_eq!(encounter.try_commit(Action::Dummy), Ok(UnitId(1)));
    }

    #[test]
    fn commit_without_selection_is_refused() {
        let mut encounter = encounter();
        let error = encounter.try_commit(Action::Dummy).unwrap_err();

        assert_eq!(error, CommitError::NoSelection);
        assert_eq!(error.error_code(), "COMMIT_NO_SELECTION");
        assert!(error.severity().is_recoverable());
    }
}
