use rand::Rng;
use tracing::{debug, trace};

use crate::action::MovementPolicy;

use super::{Entity, EntityId, EntityKind, GridError, Position, Symbol};

/// Immutable width/height pair of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    /// Validates signed dimensions, rejecting anything non-positive.
    pub fn try_new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Bounded 2-D field plus the ordered entities living on it.
///
/// Occupancy is never stored; every query walks the entity list so it cannot
/// drift from entity positions. Targets sit at the front of the list, every
/// other kind is appended, which fixes stepping and drawing order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: GridDimensions,
    entities: Vec<Entity>,
    /// Never reused within one grid.
    next_entity_id: u32,
}

impl Grid {
    /// Creates an empty grid. Fails if either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        let dimensions = GridDimensions::try_new(width, height)?;
        Ok(Self {
            dimensions,
            entities: Vec::new(),
            next_entity_id: 0,
        })
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Allocates an id that no entity of this grid has used before.
    ///
    /// # Panics
    ///
    /// Panics if all `u32` ids have been handed out.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self
            .next_entity_id
            .checked_add(1)
            .expect("EntityId overflow");
        id
    }

    /// Places an entity on the grid.
    ///
    /// Adding an entity whose id is already present is a no-op and returns
    /// that id. Targets are inserted at the front, everything else at the back.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the entity lies outside the grid;
    /// the entity is not stored in that case.
    pub fn add_entity(&mut self, entity: Entity) -> Result<EntityId, GridError> {
        let id = entity.id();
        if self.entity(id).is_some() {
            debug!(entity = %id, "entity already present, ignoring");
            return Ok(id);
        }

        let position = entity.position();
        if !self.contains(position) {
            return Err(GridError::OutOfBounds {
                entity: id,
                position,
                width: self.width(),
                height: self.height(),
            });
        }

        debug!(entity = %id, kind = %entity.kind(), %position, "entity added");
        if entity.is_target() {
            self.entities.insert(0, entity);
        } else {
            self.entities.push(entity);
        }

        // Keep caller-chosen ids from colliding with future allocations
        self.next_entity_id = self.next_entity_id.max(id.0.saturating_add(1));

        Ok(id)
    }

    /// Allocates an id, builds the entity and adds it.
    pub fn spawn(&mut self, kind: EntityKind, position: Position) -> Result<EntityId, GridError> {
        let id = self.allocate_entity_id();
        self.add_entity(Entity::new(id, kind, position))
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.id() == id)
    }

    /// First target in entity order, if any.
    pub fn target(&self) -> Option<&Entity> {
        self.entities.iter().find(|entity| entity.is_target())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns true if any entity blocks `position`.
    pub fn is_blocked(&self, position: Position) -> bool {
        self.entities
            .iter()
            .any(|entity| entity.occupies_space(position))
    }

    /// Steps the entity at `index` and returns its new position.
    ///
    /// The entity plans against the current grid, then adopts the plan itself.
    /// Returns `None` if the index is out of range.
    pub fn step_entity<R>(
        &mut self,
        index: usize,
        policy: MovementPolicy,
        rng: &mut R,
    ) -> Option<Position>
    where
        R: Rng + ?Sized,
    {
        let next = self.entities.get(index)?.propose_step(self, policy, rng);
        let entity = &mut self.entities[index];
        entity.commit_step(next);
        trace!(
            entity = %entity.id(),
            from = %entity.last_position(),
            to = %next,
            "entity stepped"
        );
        Some(next)
    }

    /// Steps every entity once, in list order.
    ///
    /// Later entities see the moves of earlier ones.
    pub fn step_all<R>(&mut self, policy: MovementPolicy, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for index in 0..self.entities.len() {
            self.step_entity(index, policy, rng);
        }
    }

    /// Draws entity symbols into a fresh matrix; later entities overwrite earlier ones.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut snapshot = GridSnapshot::empty(self.dimensions);
        for entity in &self.entities {
            snapshot.draw(entity.position(), entity.symbol());
        }
        snapshot
    }
}

/// Symbol matrix derived from a grid, handed to renderers.
///
/// Stored row-major: one row per `y`, one column per `x`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    dimensions: GridDimensions,
    cells: Vec<u8>,
}

impl GridSnapshot {
    pub fn empty(dimensions: GridDimensions) -> Self {
        Self {
            dimensions,
            cells: vec![Symbol::Empty.value(); dimensions.cell_count()],
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn symbol_at(&self, position: Position) -> Option<u8> {
        self.index_of(position).map(|index| self.cells[index])
    }

    /// Iterates over rows from `y = 0` upwards.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.dimensions.width as usize)
    }

    fn draw(&mut self, position: Position, symbol: Symbol) {
        if let Some(index) = self.index_of(position) {
            self.cells[index] = symbol.value();
        }
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        self.dimensions.contains(position).then(|| {
            position.y as usize * self.dimensions.width as usize + position.x as usize
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 4),
            Err(GridError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(3, -1).is_err());
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn targets_are_inserted_first() {
        let mut grid = Grid::new(4, 4).unwrap();
        let actor = grid.spawn(EntityKind::Actor, Position::new(0, 0)).unwrap();
        let target = grid.spawn(EntityKind::Target, Position::new(3, 3)).unwrap();

        let order: Vec<_> = grid.entities().iter().map(Entity::id).collect();
        assert_eq!(order, vec![target, actor]);
    }

    #[test]
    fn adding_same_entity_twice_is_noop() {
        let mut grid = Grid::new(4, 4).unwrap();
        let id = grid.allocate_entity_id();
        let actor = Entity::actor(id, Position::new(1, 1));

        grid.add_entity(actor.clone()).unwrap();
        grid.add_entity(actor).unwrap();

        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn out_of_bounds_entity_is_not_stored() {
        let mut grid = Grid::new(3, 2).unwrap();
        let err = grid
            .spawn(EntityKind::Actor, Position::new(1, 2))
            .unwrap_err();

        assert!(matches!(err, GridError::OutOfBounds { width: 3, height: 2, .. }));
        assert!(grid.is_empty());
    }

    #[test]
    fn manual_ids_do_not_collide_with_allocations() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.add_entity(Entity::actor(EntityId(7), Position::ORIGIN))
            .unwrap();
        assert_eq!(grid.allocate_entity_id(), EntityId(8));
    }

    #[test]
    fn target_does_not_block_its_cell() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.spawn(EntityKind::Target, Position::new(2, 2)).unwrap();
        grid.spawn(EntityKind::Actor, Position::new(1, 1)).unwrap();

        assert!(!grid.is_blocked(Position::new(2, 2)));
        assert!(grid.is_blocked(Position::new(1, 1)));
    }

    #[test]
    fn snapshot_draws_actor_over_target() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.spawn(EntityKind::Actor, Position::new(2, 1)).unwrap();
        grid.spawn(EntityKind::Target, Position::new(2, 1)).unwrap();

        let snapshot = grid.snapshot();
        assert_eq!(snapshot.symbol_at(Position::new(2, 1)), Some(1));
        assert_eq!(snapshot.symbol_at(Position::new(0, 0)), Some(0));

        let rows: Vec<_> = snapshot.rows().collect();
        assert_eq!(rows, vec![&[0, 0, 0][..], &[0, 0, 1][..]]);
    }
}
