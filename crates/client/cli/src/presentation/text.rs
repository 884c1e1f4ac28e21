//! Plain-text grid formatting.
use std::io::{self, Write};

use gridworld_core::{Grid, GridSnapshot, Renderer, StatusLabel};

const MAX_ENTRY_LEN: usize = 1;
const COLUMN_SPACER: &str = "  ";
const ROW_SPACER: &str = "\n";

/// Formats a snapshot as aligned rows, one line per `y`.
///
/// Every cell is exactly [`MAX_ENTRY_LEN`] characters wide: longer entries are
/// cut, shorter ones padded with spaces.
pub fn pretty_grid(snapshot: &GridSnapshot) -> String {
    let mut output = String::new();

    for row in snapshot.rows() {
        for (column, symbol) in row.iter().enumerate() {
            if column != 0 {
                output.push_str(COLUMN_SPACER);
            }
            let entry = symbol.to_string();
            let fixed: String = entry.chars().take(MAX_ENTRY_LEN).collect();
            output.push_str(&format!("{fixed:<width$}", width = MAX_ENTRY_LEN));
        }
        output.push_str(ROW_SPACER);
    }

    output
}

/// Renderer that appends every frame to a writer.
pub struct PlainRenderer<W: Write> {
    out: W,
}

impl PlainRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for PlainRenderer<W> {
    fn render(&mut self, grid: &Grid, status: StatusLabel) {
        let frame = format!("{}{status}\n\n", pretty_grid(&grid.snapshot()));
        if let Err(err) = self.out.write_all(frame.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(%err, "failed to write frame");
        }
    }
}
