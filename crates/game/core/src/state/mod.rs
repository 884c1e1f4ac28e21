//! Grid and entity state.
//!
//! The [`Grid`] owns every entity of one episode. Entities move only through
//! their own step; the grid derives occupancy and rendering snapshots from
//! them on demand.
mod error;
mod grid;
pub mod types;

pub use error::GridError;
pub use grid::{Grid, GridDimensions, GridSnapshot};
pub use types::{Entity, EntityId, EntityKind, Position, Symbol, Tick};
