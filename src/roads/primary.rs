//! Primary grid contract.
//!
//! Derived roads only need two things from a primary grid: which cells are
//! occupied and the chronological order of each occupied cell. Any builder
//! that turns rounds into such a grid can back the derived roads and the
//! predictor.

use crate::core::round::Round;
use crate::grid::Grid;

/// A grid cell that knows which round produced it.
pub trait Ordered {
    /// Order of the round that produced this cell.
    fn order(&self) -> u64;
}

impl Ordered for u64 {
    fn order(&self) -> u64 {
        *self
    }
}

/// Builds a primary (streak) grid from rounds.
///
/// ## Implementation Notes
///
/// - Must be deterministic: the same rounds always give the same grid
/// - Cell orders must increase strictly in the order rounds are given
/// - Within a column, a streak fills contiguously from row 0
pub trait PrimaryGrid {
    /// Cell type stored in the grid.
    type Cell: Ordered;

    /// Build a fresh grid from rounds in chronological order.
    fn build<'a, I>(&self, rounds: I) -> Grid<Self::Cell>
    where
        I: IntoIterator<Item = &'a Round>;
}
