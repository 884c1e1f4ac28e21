//! Common error infrastructure for gridworld-core.
//!
//! Domain-specific errors (e.g. [`crate::state::GridError`]) live next to the
//! code that raises them and implement [`SimError`] so callers can classify
//! them uniformly.
//!
//! A movement policy that produces no legal move is not represented here: the
//! "stay" candidate makes that impossible, so it is asserted instead.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that was rejected without changing any state.
    ///
    /// Examples: entity placed outside the grid
    Validation,

    /// The requested object cannot exist; nothing can proceed from here.
    ///
    /// Examples: grid with a non-positive dimension
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all gridworld-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by what the caller can still do, not by impact
pub trait SimError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Grid, GridError};

    #[test]
    fn grid_errors_are_classified() {
        let err = Grid::new(-2, 3).unwrap_err();
        assert!(err.severity().is_fatal());
        assert_eq!(err.error_code(), "GRID_INVALID_DIMENSION");
        assert_eq!(
            err.to_string(),
            "invalid grid dimensions -2x3: both must be positive"
        );

        let mut grid = Grid::new(2, 2).unwrap();
        let err = grid
            .spawn(crate::state::EntityKind::Actor, crate::state::Position::new(5, 0))
            .unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.severity().as_str(), "validation");
    }
}
