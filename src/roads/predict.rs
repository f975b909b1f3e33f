//! What-if predictions for the derived roads.
//!
//! A prediction answers: "if the next round were a banker (or player) win,
//! what color would this derived road's next mark be?" The predictor copies
//! the history, appends the hypothetical round to the copy, rebuilds the
//! primary grid and derived road from scratch and reads the last mark.
//! Recorded history is never touched.
//!
//! ## Usage
//!
//! ```
//! use baccarat_roads::core::{Outcome, PairFlag, RoadConfig};
//! use baccarat_roads::roads::{BigRoad, DerivedRoadKind, Prediction, RoadPredictor};
//!
//! let mut predictor = RoadPredictor::new(BigRoad::new(RoadConfig::default()).unwrap());
//! predictor.record(0, Outcome::BankerWin, PairFlag::NoPair).unwrap();
//! predictor.record(0, Outcome::PlayerWin, PairFlag::NoPair).unwrap();
//!
//! // Not enough columns for the small road yet.
//! let small_road = predictor.road(DerivedRoadKind::SmallRoad);
//! assert_eq!(small_road.banker_prediction(), Prediction::Unknown);
//!
//! // The big eye boy can already answer.
//! let big_eye = predictor.road(DerivedRoadKind::BigEyeBoy);
//! assert_eq!(big_eye.player_prediction(), Prediction::Breaks);
//! assert_eq!(big_eye.banker_prediction(), Prediction::Repeats);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::big_road::BigRoad;
use super::derived::{derive_marks, layout_marks, DerivedMark, DerivedRoadKind, Gap};
use super::primary::PrimaryGrid;
use crate::core::error::RoadError;
use crate::core::history::RoundHistory;
use crate::core::round::{Outcome, PairFlag, Round, Side};
use crate::grid::Grid;

/// Color of the next derived mark under a hypothetical round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    /// The next mark would be red.
    Repeats,
    /// The next mark would be blue.
    Breaks,
    /// The road would still have no marks.
    Unknown,
}

impl Prediction {
    /// Read the last mark of a derived road.
    #[must_use]
    pub fn from_last(marks: &[DerivedMark]) -> Self {
        match marks.last() {
            Some(mark) if mark.repeats => Prediction::Repeats,
            Some(_) => Prediction::Breaks,
            None => Prediction::Unknown,
        }
    }

    /// `Some(repeats)` if known.
    #[must_use]
    pub const fn repeats(self) -> Option<bool> {
        match self {
            Prediction::Repeats => Some(true),
            Prediction::Breaks => Some(false),
            Prediction::Unknown => None,
        }
    }

    /// Check if the road could answer.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Prediction::Unknown)
    }
}

/// Predictions for both sides on every derived road.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadReading {
    /// Banker-win predictions, indexed by [`DerivedRoadKind::index`].
    pub banker: [Prediction; 3],
    /// Player-win predictions, indexed by [`DerivedRoadKind::index`].
    pub player: [Prediction; 3],
}

impl RoadReading {
    /// Prediction for one road and side.
    #[must_use]
    pub fn get(&self, kind: DerivedRoadKind, side: Side) -> Prediction {
        match side {
            Side::Banker => self.banker[kind.index()],
            Side::Player => self.player[kind.index()],
        }
    }
}

/// Owns a round history and answers derived-road questions about it.
///
/// Generic over the primary grid builder; [`BigRoad`] is the default.
#[derive(Clone, Debug)]
pub struct RoadPredictor<P: PrimaryGrid = BigRoad> {
    primary: P,
    history: RoundHistory,
}

impl<P: PrimaryGrid> RoadPredictor<P> {
    /// Create a predictor with an empty history.
    #[must_use]
    pub fn new(primary: P) -> Self {
        Self::with_history(primary, RoundHistory::new())
    }

    /// Create a predictor over an existing history.
    #[must_use]
    pub fn with_history(primary: P, history: RoundHistory) -> Self {
        Self { primary, history }
    }

    /// Recorded rounds.
    #[must_use]
    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Primary grid builder.
    #[must_use]
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Record a real round, assigning it the next order.
    pub fn record(
        &mut self,
        result: i64,
        outcome: Outcome,
        pair: PairFlag,
    ) -> Result<Round, RoadError> {
        self.history.record(result, outcome, pair)
    }

    /// Record a real round with a caller-assigned order.
    pub fn push(&mut self, round: Round) -> Result<(), RoadError> {
        self.history.push(round)
    }

    /// Primary grid over the recorded rounds.
    #[must_use]
    pub fn primary_grid(&self) -> Grid<P::Cell> {
        self.primary.build(&self.history)
    }

    /// Derived road over the recorded rounds.
    #[must_use]
    pub fn marks(&self, kind: DerivedRoadKind) -> Vec<DerivedMark> {
        derive_marks(&self.primary_grid(), kind.gap())
    }

    /// Next mark for a derived road if `hypothetical` were the next round.
    ///
    /// The hypothetical is appended to a private copy of the history. Its
    /// order should follow the last recorded order; it is not validated.
    #[must_use]
    pub fn simulate(&self, hypothetical: Round, gap: Gap) -> Prediction {
        let rounds = self.history.snapshot_with(hypothetical);
        let grid = self.primary.build(&rounds);
        let prediction = Prediction::from_last(&derive_marks(&grid, gap));
        debug!(
            order = hypothetical.order,
            outcome = ?hypothetical.outcome,
            gap = gap.columns(),
            ?prediction,
            "simulated next mark"
        );
        prediction
    }

    /// Next mark for a derived road if `side` won the next round.
    ///
    /// `Unknown` if the history has used up every order.
    #[must_use]
    pub fn predict(&self, kind: DerivedRoadKind, side: Side) -> Prediction {
        let Some(order) = self.history.next_order() else {
            debug!(%kind, %side, "no order left for a hypothetical round");
            return Prediction::Unknown;
        };
        self.simulate(Round::hypothetical(order, side), kind.gap())
    }

    /// All six predictions at once.
    #[must_use]
    pub fn read_all(&self) -> RoadReading {
        let read = |side| DerivedRoadKind::ALL.map(|kind| self.predict(kind, side));
        RoadReading {
            banker: read(Side::Banker),
            player: read(Side::Player),
        }
    }

    /// View of one derived road.
    #[must_use]
    pub fn road(&self, kind: DerivedRoadKind) -> DerivedRoad<'_, P> {
        DerivedRoad {
            predictor: self,
            kind,
        }
    }
}

/// One derived road over a predictor's history.
#[derive(Clone, Debug)]
pub struct DerivedRoad<'a, P: PrimaryGrid = BigRoad> {
    predictor: &'a RoadPredictor<P>,
    kind: DerivedRoadKind,
}

impl<P: PrimaryGrid> DerivedRoad<'_, P> {
    /// Which road this is.
    #[must_use]
    pub fn kind(&self) -> DerivedRoadKind {
        self.kind
    }

    /// Marks over the recorded rounds.
    #[must_use]
    pub fn marks(&self) -> Vec<DerivedMark> {
        self.predictor.marks(self.kind)
    }

    /// Marks drawn on a grid with `rows` rows.
    pub fn layout(&self, rows: usize) -> Result<Grid<DerivedMark>, RoadError> {
        layout_marks(&self.marks(), rows)
    }

    /// Next mark if the banker won the next round.
    #[must_use]
    pub fn banker_prediction(&self) -> Prediction {
        self.predictor.predict(self.kind, Side::Banker)
    }

    /// Next mark if the player won the next round.
    #[must_use]
    pub fn player_prediction(&self) -> Prediction {
        self.predictor.predict(self.kind, Side::Player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RoadConfig;

    fn predictor(outcomes: &[Outcome]) -> RoadPredictor {
        let mut predictor = RoadPredictor::new(BigRoad::new(RoadConfig::default()).unwrap());
        for &outcome in outcomes {
            predictor.record(0, outcome, PairFlag::NoPair).unwrap();
        }
        predictor
    }

    const B: Outcome = Outcome::BankerWin;
    const P: Outcome = Outcome::PlayerWin;
    const T: Outcome = Outcome::Tie;

    #[test]
    fn test_prediction_from_last() {
        let red = DerivedMark { order: 1, repeats: true };
        let blue = DerivedMark { order: 2, repeats: false };
        assert_eq!(Prediction::from_last(&[]), Prediction::Unknown);
        assert_eq!(Prediction::from_last(&[blue, red]), Prediction::Repeats);
        assert_eq!(Prediction::from_last(&[red, blue]), Prediction::Breaks);

        assert_eq!(Prediction::Repeats.repeats(), Some(true));
        assert_eq!(Prediction::Breaks.repeats(), Some(false));
        assert_eq!(Prediction::Unknown.repeats(), None);
        assert!(!Prediction::Unknown.is_known());
    }

    #[test]
    fn test_empty_history_is_unknown() {
        let predictor = predictor(&[]);
        let reading = predictor.read_all();
        for kind in DerivedRoadKind::ALL {
            assert_eq!(reading.get(kind, Side::Banker), Prediction::Unknown);
            assert_eq!(reading.get(kind, Side::Player), Prediction::Unknown);
        }
    }

    #[test]
    fn test_big_eye_boy_predictions() {
        // Columns: [B], [P]. A banker win opens column 2, comparing lengths
        // of columns 0 and 1 (both 1) -> red. A player win lands at (1, 1),
        // where column 0 stopped at row 0 -> blue.
        let predictor = predictor(&[B, P]);
        assert_eq!(
            predictor.predict(DerivedRoadKind::BigEyeBoy, Side::Banker),
            Prediction::Repeats
        );
        assert_eq!(
            predictor.predict(DerivedRoadKind::BigEyeBoy, Side::Player),
            Prediction::Breaks
        );
    }

    #[test]
    fn test_ties_do_not_change_predictions() {
        let without = predictor(&[B, P, P]);
        let with = predictor(&[B, T, P, T, P, T]);
        assert_eq!(without.read_all(), with.read_all());
    }

    #[test]
    fn test_simulate_uses_given_round() {
        let predictor = predictor(&[B, P]);
        let round = Round::hypothetical(predictor.history().next_order().unwrap(), Side::Banker);
        assert_eq!(
            predictor.simulate(round, Gap::One),
            predictor.predict(DerivedRoadKind::BigEyeBoy, Side::Banker)
        );
    }

    #[test]
    fn test_exhausted_orders_read_unknown() {
        let mut predictor = predictor(&[B, P, B, P]);
        assert!(predictor.read_all().banker[0].is_known());

        predictor
            .push(Round::new(u64::MAX, 0, P, PairFlag::NoPair))
            .unwrap();
        assert_eq!(predictor.history().next_order(), None);

        let reading = predictor.read_all();
        assert!(reading.banker.iter().all(|p| *p == Prediction::Unknown));
        assert!(reading.player.iter().all(|p| *p == Prediction::Unknown));
        assert_eq!(predictor.history().len(), 5);

        // The recorded road is still readable.
        assert!(!predictor.marks(DerivedRoadKind::BigEyeBoy).is_empty());
    }

    #[test]
    fn test_road_view() {
        let predictor = predictor(&[B, P, P]);
        let road = predictor.road(DerivedRoadKind::BigEyeBoy);

        assert_eq!(road.kind(), DerivedRoadKind::BigEyeBoy);
        assert_eq!(road.marks(), vec![DerivedMark { order: 3, repeats: false }]);

        let grid = road.layout(6).unwrap();
        assert_eq!(grid.occupied_count(), 1);
        assert!(road.layout(0).is_err());
    }

    #[test]
    fn test_reading_serialization() {
        let reading = predictor(&[B, P, B, B]).read_all();
        let json = serde_json::to_string(&reading).unwrap();
        let deserialized: RoadReading = serde_json::from_str(&json).unwrap();
        assert_eq!(reading, deserialized);
    }
}
