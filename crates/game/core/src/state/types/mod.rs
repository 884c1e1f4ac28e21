pub mod common;
pub mod entity;

// Re-export common types
pub use common::{EntityId, Position, Tick};

// Re-export entity model
pub use entity::{Entity, EntityKind, Symbol};
