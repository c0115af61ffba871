use crate::state::Unit;

use super::Battle;

/// Distinct values in first-seen order.
pub(super) fn distinct<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Round and team bookkeeping for Battle.
impl Battle {
    /// Current round, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Distinct team names across all units, in first-seen order.
    pub fn teams(&self) -> Vec<&str> {
        distinct(self.entities().iter().map(Unit::team))
    }

    /// Distinct team names that still have an active unit.
    pub fn active_teams(&self) -> Vec<&str> {
        distinct(self.active_entities().map(Unit::team))
    }

    /// Whether every active unit has used its turn.
    pub fn is_round_complete(&self) -> bool {
        self.active_entities().all(|unit| unit.has_acted)
    }

    /// Team of the first active unit that has not acted yet.
    ///
    /// Once the round is complete this already reports the team that opens the
    /// next round. Empty when no active unit remains.
    pub fn active_team(&self) -> &str {
        self.active_entities()
            .find(|unit| !unit.has_acted)
            .or_else(|| self.active_entities().next())
            .map_or("", Unit::team)
    }

    /// Starts a new round if every active unit has acted.
    ///
    /// Clears the acted flag of every unit, active or not, and returns whether
    /// a new round began. A battle without active units never rolls over.
    pub fn advance_round_if_complete(&mut self) -> bool {
        if self.active_entities().next().is_none() || !self.is_round_complete() {
            return false;
        }

        for unit in self.entities_mut() {
            unit.has_acted = false;
        }
        self.round += 1;
        tracing::info!(round = self.round, "round complete; acted flags reset");
        true
    }
}
