//! Sparse road grid.
//!
//! A `Grid<T>` has a fixed number of rows and a column count that grows as
//! cells are placed further right. Unfilled positions are `None`.
//!
//! Storage is one flat column-major `Vec<Option<T>>`: lookups are a single
//! index computation, and adding a column appends `rows` empty slots.

use serde::{Deserialize, Serialize};

use crate::core::config::RoadConfig;
use crate::core::error::RoadError;

/// A cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Fixed-row, growing-column grid with explicit empty cells.
///
/// The grid does not know how it gets populated; builders such as
/// [`BigRoad`](crate::roads::BigRoad) fill it.
///
/// ## Usage
///
/// ```
/// use baccarat_roads::grid::Grid;
///
/// let mut grid: Grid<u64> = Grid::new(6, 2).unwrap();
/// assert_eq!(grid.get(0, 0), None);
///
/// grid.set(0, 5, 17);
/// assert_eq!(grid.columns(), 6);
/// assert_eq!(grid.get(0, 5), Some(&17));
///
/// // Out of range is just empty.
/// assert_eq!(grid.get(9, 9), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr<T>")]
pub struct Grid<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

/// Wire form of a grid, checked against its dimensions on the way in.
#[derive(Deserialize)]
struct GridRepr<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

impl<T> TryFrom<GridRepr<T>> for Grid<T> {
    type Error = RoadError;

    fn try_from(repr: GridRepr<T>) -> Result<Self, RoadError> {
        let GridRepr { rows, columns, cells } = repr;
        RoadConfig::new(rows, columns).validate()?;
        let expected = rows.checked_mul(columns);
        if expected != Some(cells.len()) {
            return Err(RoadError::CellCountMismatch {
                rows,
                columns,
                expected: expected.unwrap_or(usize::MAX),
                found: cells.len(),
            });
        }
        Ok(Self { rows, columns, cells })
    }
}

impl<T> Grid<T> {
    /// Create an empty grid.
    ///
    /// Fails with [`RoadError::InvalidDimensions`] if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Result<Self, RoadError> {
        RoadConfig::new(rows, columns).validate()?;
        Ok(Self {
            rows,
            columns,
            cells: std::iter::repeat_with(|| None).take(rows * columns).collect(),
        })
    }

    /// Create an empty grid from a road configuration.
    pub fn from_config(config: &RoadConfig) -> Result<Self, RoadError> {
        Self::new(config.rows, config.columns)
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Current number of columns, filled or not.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| column * self.rows + row)
    }

    /// Look up a cell. Out-of-range coordinates are empty.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        let index = self.index(row, column)?;
        self.cells[index].as_ref()
    }

    /// Mutable access to an occupied cell.
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        let index = self.index(row, column)?;
        self.cells[index].as_mut()
    }

    /// Look up a cell by position.
    #[must_use]
    pub fn at(&self, position: Position) -> Option<&T> {
        self.get(position.row, position.column)
    }

    /// Look up a cell whose column is given as an offset to the left.
    ///
    /// Returns `None` when `column - back` would be negative.
    #[must_use]
    pub fn get_back(&self, row: usize, column: usize, back: usize) -> Option<&T> {
        column
            .checked_sub(back)
            .and_then(|column| self.get(row, column))
    }

    /// Check if a cell holds a value.
    #[must_use]
    pub fn is_occupied(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some()
    }

    /// Grow to at least `columns` columns.
    pub fn ensure_columns(&mut self, columns: usize) {
        if columns > self.columns {
            self.cells
                .extend(std::iter::repeat_with(|| None).take((columns - self.columns) * self.rows));
            self.columns = columns;
        }
    }

    /// Store a value, growing to the right if needed.
    ///
    /// Returns the previous value at that position.
    ///
    /// Panics if `row` is outside the grid; rows never grow.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Option<T> {
        assert!(
            row < self.rows,
            "Row {} out of range for grid with {} rows",
            row,
            self.rows
        );
        self.ensure_columns(column + 1);
        let index = column * self.rows + row;
        self.cells[index].replace(value)
    }

    /// Number of occupied cells in a column. Out-of-range columns are empty.
    #[must_use]
    pub fn column_len(&self, column: usize) -> usize {
        if column >= self.columns {
            return 0;
        }
        let start = column * self.rows;
        self.cells[start..start + self.rows]
            .iter()
            .filter(|cell| cell.is_some())
            .count()
    }

    /// Width actually used: one past the rightmost occupied column.
    ///
    /// Zero for a grid with no occupied cells.
    #[must_use]
    pub fn used_columns(&self) -> usize {
        self.cells
            .iter()
            .rposition(Option::is_some)
            .map_or(0, |i| i / self.rows + 1)
    }

    /// Total occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if no cell is occupied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterate over occupied cells, column by column, top to bottom.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, &T)> {
        let rows = self.rows;
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|value| (Position::new(i % rows, i / rows), value))
        })
    }
}
