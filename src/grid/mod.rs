//! Road grids.
//!
//! - `Grid`: fixed rows, growing columns, explicit empty cells
//! - `StreakPlacer`: fills a grid streak by streak, with dragon tails

mod placement;
mod sparse;

pub use placement::StreakPlacer;
pub use sparse::{Grid, Position};
