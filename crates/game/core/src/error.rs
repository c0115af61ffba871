//! Common error infrastructure for tactics-core.
//!
//! Rules queries never fail: "can this happen" questions are answered with
//! `Option`, empty collections or enums. Errors only describe why a value
//! could not be built (a malformed height map, a rejected action target), and
//! each domain keeps its own enum next to the code that produces it.

/// Severity level of an error, used for categorization and log levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The player can pick another target or action.
    ///
    /// Examples: destination occupied, target out of range
    Recoverable,

    /// Invalid input that should be fixed at the source.
    ///
    /// Examples: ragged height map, unknown unit handle
    Validation,

    /// State inconsistency that indicates a bug.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all tactics-core errors.
///
/// All error enums derive `thiserror::Error` for `Display` and implement this
/// trait for classification.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier for the variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
