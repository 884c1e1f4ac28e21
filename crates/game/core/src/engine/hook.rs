//! Side-effect hooks the episode loop calls into.
//!
//! Neither hook can influence the simulation: the loop lends the grid
//! read-only and never reads anything back. Headless runs use
//! [`NoopRenderer`] and [`NoPacing`].

use crate::state::Grid;

use super::StatusLabel;

/// Display surface for grid snapshots.
pub trait Renderer {
    /// Drops any transient display state before a tick is simulated.
    fn clear(&mut self) {}

    /// Shows one frame.
    ///
    /// Renderers that need the symbol matrix build it with
    /// [`Grid::snapshot`]; the loop never allocates one on their behalf.
    fn render(&mut self, grid: &Grid, status: StatusLabel);
}

/// Points in an episode where a pacer may pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacingPoint {
    /// Once, after the initial frame and before tick 0.
    Startup,
    /// After every simulated tick.
    Tick,
    /// Once, after the final frame.
    Finish,
}

/// Cosmetic delay between frames.
pub trait Pacer {
    fn pause(&mut self, point: PacingPoint);
}

/// Renderer that discards every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _grid: &Grid, _status: StatusLabel) {}
}

/// Pacer that never waits.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&mut self, _point: PacingPoint) {}
}
