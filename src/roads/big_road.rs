//! The big road: the primary streak grid.
//!
//! Each column is a run of consecutive wins by the same side. Ties do not
//! take a cell; they are counted on the most recent cell instead (or on the
//! first cell, for ties dealt before anyone has won).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::primary::{Ordered, PrimaryGrid};
use crate::core::config::RoadConfig;
use crate::core::error::RoadError;
use crate::core::round::{PairFlag, Round, Side};
use crate::grid::{Grid, Position, StreakPlacer};

/// One win on the big road.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BigRoadCell {
    /// Order of the round that produced this cell.
    pub order: u64,
    /// Side that won.
    pub winner: Side,
    /// Ties attached to this cell.
    pub ties: u32,
    /// Pair bets that landed in the winning round.
    pub pair: PairFlag,
}

impl Ordered for BigRoadCell {
    fn order(&self) -> u64 {
        self.order
    }
}

/// Big road builder.
///
/// ## Usage
///
/// ```
/// use baccarat_roads::core::{Outcome, PairFlag, RoadConfig, RoundHistory};
/// use baccarat_roads::roads::{BigRoad, PrimaryGrid};
///
/// let mut history = RoundHistory::new();
/// for outcome in [Outcome::BankerWin, Outcome::BankerWin, Outcome::Tie, Outcome::PlayerWin] {
///     history.record(0, outcome, PairFlag::NoPair).unwrap();
/// }
///
/// let road = BigRoad::new(RoadConfig::default()).unwrap();
/// let grid = road.build(&history);
///
/// assert_eq!(grid.column_len(0), 2);
/// assert_eq!(grid.column_len(1), 1);
/// assert_eq!(grid.get(1, 0).map(|cell| cell.ties), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct BigRoad {
    config: RoadConfig,
    blank: Grid<BigRoadCell>,
}

impl BigRoad {
    /// Create a builder producing grids of the configured size.
    ///
    /// Fails with [`RoadError::InvalidDimensions`] if a dimension is zero.
    pub fn new(config: RoadConfig) -> Result<Self, RoadError> {
        let blank = Grid::from_config(&config)?;
        Ok(Self { config, blank })
    }

    /// Grid dimensions this builder starts from.
    #[must_use]
    pub fn config(&self) -> &RoadConfig {
        &self.config
    }
}

impl PrimaryGrid for BigRoad {
    type Cell = BigRoadCell;

    fn build<'a, I>(&self, rounds: I) -> Grid<BigRoadCell>
    where
        I: IntoIterator<Item = &'a Round>,
    {
        let mut grid = self.blank.clone();
        let mut placer = StreakPlacer::new();
        let mut last: Option<(Position, Side)> = None;
        let mut leading_ties = 0u32;
        let mut count = 0usize;

        for round in rounds {
            count += 1;
            match round.outcome.winner() {
                None => match last {
                    Some((pos, _)) => {
                        if let Some(cell) = grid.get_mut(pos.row, pos.column) {
                            cell.ties += 1;
                        }
                    }
                    None => leading_ties += 1,
                },
                Some(winner) => {
                    let cell = BigRoadCell {
                        order: round.order,
                        winner,
                        ties: std::mem::take(&mut leading_ties),
                        pair: round.pair,
                    };
                    let pos = match last {
                        Some((_, previous)) if previous == winner => {
                            placer.extend_streak(&mut grid, cell)
                        }
                        _ => placer.start_streak(&mut grid, cell),
                    };
                    last = Some((pos, winner));
                }
            }
        }

        debug!(
            rounds = count,
            cells = grid.occupied_count(),
            columns = grid.used_columns(),
            "built big road"
        );
        grid
    }
}
