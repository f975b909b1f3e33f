//! Derived roads: big eye boy, small road and cockroach pig.
//!
//! All three come from the same procedure over the primary grid and differ
//! only in how many columns they look back (the gap). Each derived mark
//! answers one question about the primary cell with the same order: does
//! the streak structure repeat what happened `gap` columns earlier?
//!
//! ## Reading the primary grid
//!
//! - A cell that starts a column (row 0) repeats when the two columns ending
//!   `gap` and `gap + 1` columns back have the same length.
//! - A cell further down a column repeats unless the column `gap` back
//!   stopped exactly one row above it.
//!
//! Marks are only produced once the primary grid reaches the cell at
//! `(row 1, column gap)`, or failing that `(row 0, column gap + 1)`.
//!
//! ## Usage
//!
//! ```
//! use baccarat_roads::core::{Outcome, PairFlag, RoadConfig, RoundHistory};
//! use baccarat_roads::roads::{derive_marks, BigRoad, DerivedRoadKind, PrimaryGrid};
//!
//! let mut history = RoundHistory::new();
//! for outcome in [Outcome::BankerWin, Outcome::PlayerWin, Outcome::PlayerWin] {
//!     history.record(0, outcome, PairFlag::NoPair).unwrap();
//! }
//!
//! let grid = BigRoad::new(RoadConfig::default()).unwrap().build(&history);
//! let marks = derive_marks(&grid, DerivedRoadKind::BigEyeBoy.gap());
//!
//! assert_eq!(marks.len(), 1);
//! assert_eq!(marks[0].order, 3);
//! assert!(!marks[0].repeats);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use super::primary::Ordered;
use crate::core::error::RoadError;
use crate::grid::{Grid, Position, StreakPlacer};

/// Lookback distance in columns.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gap {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Gap {
    /// All gaps, smallest first.
    pub const ALL: [Gap; 3] = [Gap::One, Gap::Two, Gap::Three];

    /// Number of columns to look back.
    #[must_use]
    pub const fn columns(self) -> usize {
        self as usize
    }
}

/// The three derived roads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DerivedRoadKind {
    /// Looks back one column.
    BigEyeBoy,
    /// Looks back two columns.
    SmallRoad,
    /// Looks back three columns.
    CockroachPig,
}

impl DerivedRoadKind {
    /// All derived roads in scoreboard order.
    pub const ALL: [DerivedRoadKind; 3] = [
        DerivedRoadKind::BigEyeBoy,
        DerivedRoadKind::SmallRoad,
        DerivedRoadKind::CockroachPig,
    ];

    /// Gap this road looks back by.
    #[must_use]
    pub const fn gap(self) -> Gap {
        match self {
            DerivedRoadKind::BigEyeBoy => Gap::One,
            DerivedRoadKind::SmallRoad => Gap::Two,
            DerivedRoadKind::CockroachPig => Gap::Three,
        }
    }

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for DerivedRoadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DerivedRoadKind::BigEyeBoy => write!(f, "Big Eye Boy"),
            DerivedRoadKind::SmallRoad => write!(f, "Small Road"),
            DerivedRoadKind::CockroachPig => write!(f, "Cockroach Pig"),
        }
    }
}

/// One mark on a derived road.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DerivedMark {
    /// Order of the primary cell this mark reads.
    pub order: u64,
    /// Pattern repeated (red) or broke (blue).
    pub repeats: bool,
}

impl DerivedMark {
    /// Red marks repeat.
    #[must_use]
    pub const fn is_red(&self) -> bool {
        self.repeats
    }

    /// Blue marks break.
    #[must_use]
    pub const fn is_blue(&self) -> bool {
        !self.repeats
    }
}

/// Order of the first primary cell that gets a derived mark.
///
/// `None` while the primary grid is too short for this gap.
#[must_use]
pub fn begin_order<C: Ordered>(grid: &Grid<C>, gap: Gap) -> Option<u64> {
    let back = gap.columns();
    grid.get(1, back)
        .or_else(|| grid.get(0, back + 1))
        .map(Ordered::order)
}

/// Build a derived road from a primary grid.
///
/// Marks come out in ascending order, one per primary cell at or after
/// [`begin_order`]. An empty or short grid gives no marks.
#[must_use]
pub fn derive_marks<C: Ordered>(grid: &Grid<C>, gap: Gap) -> Vec<DerivedMark> {
    let Some(begin) = begin_order(grid, gap) else {
        return Vec::new();
    };

    let max_columns = grid.used_columns();
    let mut lengths: SmallVec<[usize; 64]> = SmallVec::with_capacity(max_columns);
    let mut cells: Vec<(Position, u64)> = Vec::with_capacity(grid.occupied_count());

    for column in 0..max_columns {
        let mut length = 0;
        for row in 0..grid.rows() {
            if let Some(cell) = grid.get(row, column) {
                cells.push((Position::new(row, column), cell.order()));
                length += 1;
            }
        }
        lengths.push(length);
    }

    // Tails put later rounds in earlier rows, so grid order is not time order.
    cells.sort_unstable_by_key(|&(_, order)| order);

    let marks: Vec<DerivedMark> = cells
        .into_iter()
        .filter(|&(_, order)| order >= begin)
        .map(|(position, order)| DerivedMark {
            order,
            repeats: repeats_at(grid, &lengths, position, gap.columns()),
        })
        .collect();

    trace!(gap = gap.columns(), begin, marks = marks.len(), "derived road");
    marks
}

fn repeats_at<C>(grid: &Grid<C>, lengths: &[usize], position: Position, back: usize) -> bool {
    let Position { row, column } = position;
    if row == 0 {
        let length = |offset: usize| column.checked_sub(offset).and_then(|c| lengths.get(c));
        length(back + 1) == length(back)
    } else {
        let above = grid.get_back(row - 1, column, back).is_some();
        let beside = grid.get_back(row, column, back).is_some();
        !(above && !beside)
    }
}

/// Draw a derived road on its own grid.
///
/// Runs of same-colored marks form columns, placed like big road streaks.
pub fn layout_marks(marks: &[DerivedMark], rows: usize) -> Result<Grid<DerivedMark>, RoadError> {
    let mut grid = Grid::new(rows, 1)?;
    let mut placer = StreakPlacer::new();
    let mut previous: Option<bool> = None;

    for &mark in marks {
        if previous == Some(mark.repeats) {
            placer.extend_streak(&mut grid, mark);
        } else {
            placer.start_streak(&mut grid, mark);
        }
        previous = Some(mark.repeats);
    }
    Ok(grid)
}
