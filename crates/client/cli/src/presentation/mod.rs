//! Terminal presentation components used by the CLI client.
pub mod pacing;
pub mod terminal;
pub mod text;

pub use pacing::SleepPacer;
pub use terminal::TuiRenderer;
pub use text::{PlainRenderer, pretty_grid};
