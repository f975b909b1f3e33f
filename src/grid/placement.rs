//! Streak placement shared by every road that draws streaks as columns.
//!
//! A streak starts at the top of the column after the previous streak's
//! starting column. It grows downward until it hits the bottom row or an
//! occupied cell, then continues to the right along its current row (the
//! "dragon tail"). Once a streak has turned it keeps going right.

use serde::{Deserialize, Serialize};

use super::sparse::{Grid, Position};

/// Cursor that places streak cells into a [`Grid`].
///
/// ## Usage
///
/// ```
/// use baccarat_roads::grid::{Grid, Position, StreakPlacer};
///
/// let mut grid = Grid::new(2, 1).unwrap();
/// let mut placer = StreakPlacer::new();
///
/// assert_eq!(placer.start_streak(&mut grid, 'B'), Position::new(0, 0));
/// assert_eq!(placer.extend_streak(&mut grid, 'B'), Position::new(1, 0));
/// // Bottom row reached: the streak turns right.
/// assert_eq!(placer.extend_streak(&mut grid, 'B'), Position::new(1, 1));
///
/// // The next streak starts in the column after the previous start.
/// assert_eq!(placer.start_streak(&mut grid, 'P'), Position::new(0, 1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakPlacer {
    /// Column where the current streak started.
    start_column: Option<usize>,
    /// Last cell placed.
    cursor: Option<Position>,
    /// The current streak has turned right.
    turned: bool,
}

impl StreakPlacer {
    /// Create a placer for an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cell placed, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    /// Column where the current streak started, if any.
    #[must_use]
    pub fn start_column(&self) -> Option<usize> {
        self.start_column
    }

    /// Begin a new streak with `value`.
    ///
    /// Columns whose top cell is already taken are skipped.
    pub fn start_streak<T>(&mut self, grid: &mut Grid<T>, value: T) -> Position {
        let mut column = self.start_column.map_or(0, |c| c + 1);
        while grid.is_occupied(0, column) {
            column += 1;
        }

        let position = Position::new(0, column);
        grid.set(position.row, position.column, value);
        self.start_column = Some(column);
        self.cursor = Some(position);
        self.turned = false;
        position
    }

    /// Add `value` to the current streak.
    ///
    /// Starts a streak if none is in progress.
    pub fn extend_streak<T>(&mut self, grid: &mut Grid<T>, value: T) -> Position {
        let Some(last) = self.cursor else {
            return self.start_streak(grid, value);
        };

        let below = last.row + 1;
        let can_drop = below < grid.rows() && !grid.is_occupied(below, last.column);
        let position = if !self.turned && can_drop {
            Position::new(below, last.column)
        } else {
            self.turned = true;
            let mut column = last.column + 1;
            while grid.is_occupied(last.row, column) {
                column += 1;
            }
            Position::new(last.row, column)
        };

        grid.set(position.row, position.column, value);
        self.cursor = Some(position);
        position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(grid: &mut Grid<u32>, streaks: &[usize]) -> Vec<Position> {
        let mut placer = StreakPlacer::new();
        let mut positions = Vec::new();
        let mut n = 0;
        for &len in streaks {
            for i in 0..len {
                n += 1;
                let pos = if i == 0 {
                    placer.start_streak(grid, n)
                } else {
                    placer.extend_streak(grid, n)
                };
                positions.push(pos);
            }
        }
        positions
    }

    #[test]
    fn test_short_streaks_fill_columns() {
        let mut grid = Grid::new(6, 1).unwrap();
        let positions = place(&mut grid, &[3, 1, 2]);

        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
            ]
        );
        assert_eq!(grid.column_len(0), 3);
        assert_eq!(grid.column_len(1), 1);
        assert_eq!(grid.column_len(2), 2);
    }

    #[test]
    fn test_long_streak_turns_at_bottom() {
        let mut grid = Grid::new(3, 1).unwrap();
        let positions = place(&mut grid, &[5]);

        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_streak_turns_above_existing_tail() {
        let mut grid = Grid::new(3, 1).unwrap();
        // First streak of 4 leaves a tail at (2, 1).
        // Second streak starts at column 1 and is blocked at row 2.
        let positions = place(&mut grid, &[4, 3]);

        assert_eq!(positions[3], Position::new(2, 1));
        assert_eq!(positions[4], Position::new(0, 1));
        assert_eq!(positions[5], Position::new(1, 1));
        assert_eq!(positions[6], Position::new(1, 2));
        assert_eq!(grid.column_len(1), 3);
    }

    #[test]
    fn test_start_skips_occupied_top_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        // Single-row grid: every streak runs along row 0.
        let positions = place(&mut grid, &[3, 1]);

        assert_eq!(positions[2], Position::new(0, 2));
        assert_eq!(positions[3], Position::new(0, 3));
    }

    #[test]
    fn test_extend_without_streak_starts_one() {
        let mut grid = Grid::new(6, 1).unwrap();
        let mut placer = StreakPlacer::new();
        assert_eq!(placer.cursor(), None);

        let pos = placer.extend_streak(&mut grid, 1);
        assert_eq!(pos, Position::new(0, 0));
        assert_eq!(placer.start_column(), Some(0));
    }
}
