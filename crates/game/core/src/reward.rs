//! Reward signal for the actor/target game.

use std::fmt;

use crate::state::Grid;

/// Binary reward: 1 when a non-target entity stands on the target, else 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Reward(u8);

impl Reward {
    pub const NONE: Self = Self(0);
    pub const REACHED: Self = Self(1);

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_reached(self) -> bool {
        self.0 == Self::REACHED.0
    }
}

impl From<bool> for Reward {
    fn from(reached: bool) -> Self {
        if reached { Self::REACHED } else { Self::NONE }
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scores the current grid. Pure: no memory of earlier ticks.
///
/// Only the first target in entity order is considered.
pub fn evaluate_reward(grid: &Grid) -> Reward {
    let Some(target) = grid.target() else {
        return Reward::NONE;
    };

    let reached = grid
        .entities()
        .iter()
        .any(|entity| !entity.is_target() && entity.position() == target.position());
    Reward::from(reached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityKind, Position};

    #[test]
    fn no_target_means_no_reward() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.spawn(EntityKind::Actor, Position::ORIGIN).unwrap();
        assert_eq!(evaluate_reward(&grid), Reward::NONE);
    }

    #[test]
    fn actor_on_target_is_rewarded() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.spawn(EntityKind::Target, Position::new(1, 1)).unwrap();
        grid.spawn(EntityKind::Actor, Position::new(1, 1)).unwrap();
        assert_eq!(evaluate_reward(&grid).value(), 1);
    }

    #[test]
    fn actor_elsewhere_is_not_rewarded() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.spawn(EntityKind::Target, Position::new(1, 1)).unwrap();
        grid.spawn(EntityKind::Actor, Position::new(1, 2)).unwrap();
        assert!(!evaluate_reward(&grid).is_reached());
    }

    #[test]
    fn second_target_does_not_count_as_visitor() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.spawn(EntityKind::Target, Position::new(0, 0)).unwrap();
        grid.spawn(EntityKind::Target, Position::new(0, 0)).unwrap();
        assert_eq!(evaluate_reward(&grid), Reward::NONE);
    }
}
