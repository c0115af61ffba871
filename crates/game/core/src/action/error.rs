//! Reasons an action could not be built for a target tile.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Position3, UnitId};

/// Why [`ActionKind::try_make`](super::ActionKind::try_make) rejected a target.
///
/// [`ActionKind::make`](super::ActionKind::make) folds all of these into `None`;
/// the variants exist for diagnostics and UI feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("unit {0} not found")]
    UnknownUnit(UnitId),

    #[error("{target} is not reachable")]
    Unreachable { target: Position3 },

    #[error("{target} is occupied")]
    Occupied { target: Position3 },

    #[error("{target} is out of attack range")]
    OutOfRange { target: Position3 },

    #[error("no unit stands on {target}")]
    NoTarget { target: Position3 },
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::UnknownUnit(_) => ErrorSeverity::Validation,
            ActionError::Unreachable { .. }
            | ActionError::Occupied { .. }
            | ActionError::OutOfRange { .. }
            | ActionError::NoTarget { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::UnknownUnit(_) => "ACTION_UNKNOWN_UNIT",
            ActionError::Unreachable { .. } => "ACTION_UNREACHABLE",
            ActionError::Occupied { .. } => "ACTION_OCCUPIED",
            ActionError::OutOfRange { .. } => "ACTION_OUT_OF_RANGE",
            ActionError::NoTarget { .. } => "ACTION_NO_TARGET",
        }
    }
}
