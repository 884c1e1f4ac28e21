//! Grid construction and placement errors.

use crate::error::{ErrorSeverity, SimError};
use crate::state::{EntityId, Position};

/// Errors raised while building a grid or placing entities on it.
///
/// Adding an entity that is already present is not an error; see
/// [`crate::state::Grid::add_entity`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridError {
    /// Width or height is zero or negative.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimension {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },

    /// Entity position lies outside the grid.
    #[error("entity {entity} at {position} is out of bounds (grid size: {width}x{height})")]
    OutOfBounds {
        /// The rejected entity.
        entity: EntityId,
        /// The invalid position.
        position: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl SimError for GridError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Nothing can be simulated on a grid that was never built
            GridError::InvalidDimension { .. } => ErrorSeverity::Fatal,

            // The entity is rejected before it is stored; the grid stays valid
            GridError::OutOfBounds { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GridError::InvalidDimension { .. } => "GRID_INVALID_DIMENSION",
            GridError::OutOfBounds { .. } => "GRID_OUT_OF_BOUNDS",
        }
    }
}
