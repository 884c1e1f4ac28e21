//! Ready-made starting layouts.

use crate::config::SimConfig;
use crate::state::{EntityKind, Grid, GridError, Position};

/// Actor in the top-left corner, target in the opposite corner.
pub fn corner_to_corner(config: &SimConfig) -> Result<Grid, GridError> {
    let mut grid = Grid::new(config.width, config.height)?;
    grid.spawn(EntityKind::Actor, Position::ORIGIN)?;
    grid.spawn(
        EntityKind::Target,
        Position::new(config.width - 1, config.height - 1),
    )?;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_spans_the_grid() {
        let grid = corner_to_corner(&SimConfig::default()).unwrap();

        assert_eq!(grid.len(), 2);
        let target = grid.target().unwrap();
        assert_eq!(target.position(), Position::new(5, 5));
        assert_eq!(grid.entities()[1].position(), Position::ORIGIN);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimConfig::default().with_dimensions(0, 3);
        assert!(matches!(
            corner_to_corner(&config),
            Err(GridError::InvalidDimension { .. })
        ));
    }
}
