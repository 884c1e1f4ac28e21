use rand::Rng;

use crate::action::MovementPolicy;
use crate::config::SimConfig;
use crate::state::Grid;

use super::{EntityId, Position};

/// Closed set of entity kinds that can live on a grid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntityKind {
    /// Mobile entity that walks the grid looking for the target.
    Actor,
    /// Static, passable cell the actor tries to reach.
    Target,
}

impl EntityKind {
    pub const fn symbol(self) -> Symbol {
        match self {
            EntityKind::Actor => Symbol::Actor,
            EntityKind::Target => Symbol::Target,
        }
    }

    /// Whether other entities may share a cell with this kind.
    pub const fn is_passable(self) -> bool {
        matches!(self, EntityKind::Target)
    }

    pub const fn is_target(self) -> bool {
        matches!(self, EntityKind::Target)
    }

    /// Whether this kind ever changes position when stepped.
    pub const fn is_mobile(self) -> bool {
        matches!(self, EntityKind::Actor)
    }
}

/// Rendering tag drawn into grid snapshots. Simulation logic never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Symbol {
    #[default]
    Empty = SimConfig::EMPTY_SYMBOL,
    Actor = SimConfig::ACTOR_SYMBOL,
    Target = SimConfig::TARGET_SYMBOL,
}

impl Symbol {
    pub const fn value(self) -> u8 {
        self as u8
    }
}

/// An object placed on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    position: Position,
    last_position: Position,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            last_position: position,
        }
    }

    pub fn actor(id: EntityId, position: Position) -> Self {
        Self::new(id, EntityKind::Actor, position)
    }

    pub fn target(id: EntityId, position: Position) -> Self {
        Self::new(id, EntityKind::Target, position)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Position held before the most recent step.
    pub fn last_position(&self) -> Position {
        self.last_position
    }

    pub fn symbol(&self) -> Symbol {
        self.kind.symbol()
    }

    pub fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    pub fn is_target(&self) -> bool {
        self.kind.is_target()
    }

    /// Returns true if this entity blocks other entities from entering `position`.
    ///
    /// Must be asked every time; positions change on every tick.
    pub fn occupies_space(&self, position: Position) -> bool {
        self.position == position && !self.is_passable()
    }

    /// Chooses where this entity goes next without moving it.
    ///
    /// Actors ask the movement policy; targets stay where they are.
    pub fn propose_step<R>(&self, grid: &Grid, policy: MovementPolicy, rng: &mut R) -> Position
    where
        R: Rng + ?Sized,
    {
        match self.kind {
            EntityKind::Actor => policy.next_position(self, grid, rng),
            EntityKind::Target => self.position,
        }
    }

    /// Adopts a position chosen by [`Self::propose_step`].
    ///
    /// The previous position moves into `last_position`. Static kinds ignore
    /// the call.
    pub fn commit_step(&mut self, next: Position) {
        if !self.kind.is_mobile() {
            return;
        }
        self.last_position = self.position;
        self.position = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_blocks_only_its_own_cell() {
        let actor = Entity::actor(EntityId(1), Position::new(2, 3));
        assert!(actor.occupies_space(Position::new(2, 3)));
        assert!(!actor.occupies_space(Position::new(3, 3)));
    }

    #[test]
    fn target_never_blocks() {
        let target = Entity::target(EntityId(0), Position::new(1, 1));
        assert!(!target.occupies_space(Position::new(1, 1)));
        assert!(target.is_target());
        assert_eq!(target.symbol().value(), 9);
    }

    #[test]
    fn commit_step_tracks_last_position() {
        let mut actor = Entity::actor(EntityId(1), Position::new(0, 0));
        actor.commit_step(Position::new(1, 0));
        assert_eq!(actor.position(), Position::new(1, 0));
        assert_eq!(actor.last_position(), Position::new(0, 0));
    }

    #[test]
    fn commit_step_leaves_targets_in_place() {
        let mut target = Entity::target(EntityId(0), Position::new(4, 4));
        target.commit_step(Position::new(3, 4));
        assert_eq!(target.position(), Position::new(4, 4));
        assert_eq!(target.last_position(), Position::new(4, 4));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("ACTOR".parse::<EntityKind>().ok(), Some(EntityKind::Actor));
        assert_eq!(EntityKind::Target.to_string(), "target");
    }
}
