//! Full-screen terminal surface for the CLI animation.
use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use gridworld_core::{Grid, Renderer, StatusLabel};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use super::text::pretty_grid;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const STATUS_PANEL_HEIGHT: u16 = 3;

pub fn init() -> Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

pub fn restore() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}

/// Redraws the grid and status label in place on every frame.
///
/// Leaves the alternate screen when dropped.
pub struct TuiRenderer {
    terminal: Tui,
}

impl TuiRenderer {
    pub fn new() -> Result<Self> {
        let mut terminal = init()?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl Renderer for TuiRenderer {
    fn render(&mut self, grid: &Grid, status: StatusLabel) {
        let grid_text = pretty_grid(&grid.snapshot());
        let status_text = status.to_string();
        let grid_height = grid_panel_height(grid.height());

        let drawn = self
            .terminal
            .draw(|frame| draw_frame(frame, &grid_text, grid_height, &status_text));
        if let Err(err) = drawn {
            tracing::warn!(%err, "failed to draw frame");
        }
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Rows needed for the bordered grid panel, clamped to what a terminal can address.
fn grid_panel_height(grid_height: u32) -> u16 {
    u16::try_from(grid_height)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn draw_frame(frame: &mut Frame, grid_text: &str, grid_height: u16, status_text: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(grid_height),
        Constraint::Length(STATUS_PANEL_HEIGHT),
        Constraint::Min(0),
    ])
    .split(frame.area());

    let grid = Paragraph::new(grid_text)
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" gridworld "));
    frame.render_widget(grid, chunks[0]);

    let status = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::bordered().title(" status "));
    frame.render_widget(status, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_height_adds_borders() {
        assert_eq!(grid_panel_height(6), 8);
    }

    #[test]
    fn panel_height_saturates_for_tall_grids() {
        assert_eq!(grid_panel_height(65_534), u16::MAX);
        assert_eq!(grid_panel_height(65_535), u16::MAX);
        assert_eq!(grid_panel_height(1_000_000), u16::MAX);
    }
}
