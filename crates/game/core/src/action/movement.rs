use arrayvec::ArrayVec;
use rand::Rng;

use crate::state::{Entity, Grid, Position};

/// Upper bound on legal moves: staying put plus the four cardinal neighbours.
pub const MAX_LEGAL_MOVES: usize = 5;

/// Ordered set of legal next positions for one entity.
pub type LegalMoves = ArrayVec<Position, MAX_LEGAL_MOVES>;

/// How a mobile entity picks its next position.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MovementPolicy {
    /// Uniform draw over [`valid_moves`].
    #[default]
    Random,
    /// One cell to the right each step until the right edge is reached.
    /// Does not consult occupancy.
    SweepRight,
}

impl MovementPolicy {
    pub fn next_position<R>(self, entity: &Entity, grid: &Grid, rng: &mut R) -> Position
    where
        R: Rng + ?Sized,
    {
        match self {
            MovementPolicy::Random => random_step(entity, grid, rng),
            MovementPolicy::SweepRight => sweep_right(entity, grid),
        }
    }
}

/// Enumerates the positions `entity` may adopt on its next step.
///
/// The current position always comes first. The 3×3 neighbourhood is then
/// scanned by increasing x, and increasing y within each x; a neighbour is kept
/// if it is inside the grid, no entity blocks it, and it is at most one
/// Manhattan step away (diagonals are scanned but never kept).
pub fn valid_moves(entity: &Entity, grid: &Grid) -> LegalMoves {
    let origin = entity.position();
    let mut moves = LegalMoves::new();
    moves.push(origin);

    for dx in -1..=1 {
        for dy in -1..=1 {
            // Staying is already the first entry
            if dx == 0 && dy == 0 {
                continue;
            }

            let candidate = origin.offset(dx, dy);
            if !grid.contains(candidate) {
                continue;
            }
            if grid.is_blocked(candidate) {
                continue;
            }
            if origin.manhattan(candidate) > 1 {
                continue;
            }

            moves.push(candidate);
        }
    }

    moves
}

/// Picks one of [`valid_moves`] uniformly at random.
///
/// # Panics
///
/// Panics if the legal-move set is empty, which the "stay" entry rules out.
pub fn random_step<R>(entity: &Entity, grid: &Grid, rng: &mut R) -> Position
where
    R: Rng + ?Sized,
{
    let moves = valid_moves(entity, grid);
    assert!(
        !moves.is_empty(),
        "entity {} has no legal move at {}",
        entity.id(),
        entity.position()
    );
    moves[rng.gen_range(0..moves.len())]
}

/// Moves one cell right unless already on the last column.
pub fn sweep_right(entity: &Entity, grid: &Grid) -> Position {
    let position = entity.position();
    if position.x < grid.width() as i32 - 1 {
        position.offset(1, 0)
    } else {
        position
    }
}
