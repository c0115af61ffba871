use std::fmt;

use super::Battle;

/// Outcome classification derived from the teams that still have units up.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleState {
    /// Two or more teams are still fighting.
    Undecided,
    /// Nobody is left standing.
    Draw,
    Won { team: String },
}

impl BattleState {
    pub fn is_over(&self) -> bool {
        !matches!(self, BattleState::Undecided)
    }

    pub fn winner(&self) -> Option<&str> {
        match self {
            BattleState::Won { team } => Some(team),
            BattleState::Undecided | BattleState::Draw => None,
        }
    }
}

impl fmt::Display for BattleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleState::Undecided => f.write_str("undecided"),
            BattleState::Draw => f.write_str("draw"),
            BattleState::Won { team } => write!(f, "won by {team}"),
        }
    }
}

impl Battle {
    pub fn state(&self) -> BattleState {
        match self.active_teams().as_slice() {
            [] => BattleState::Draw,
            [team] => BattleState::Won {
                team: (*team).to_string(),
            },
            _ => BattleState::Undecided,
        }
    }
}
