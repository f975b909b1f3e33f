//! Append-only round history.
//!
//! Backed by an `im` persistent vector: taking a snapshot is O(1) and
//! pushing onto the snapshot never touches the recorded rounds. Predictions
//! rely on this to simulate a hypothetical round without committing it.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::RoadError;
use super::round::{Outcome, PairFlag, Round, Side};

/// Ordered record of every real round in a shoe.
///
/// Rounds can only be appended, and each must carry an order greater than
/// the previous one. Deserializing checks the same rule.
///
/// ## Usage
///
/// ```
/// use baccarat_roads::core::{Outcome, PairFlag, RoundHistory, Side};
///
/// let mut history = RoundHistory::new();
/// history.record(6, Outcome::BankerWin, PairFlag::NoPair).unwrap();
/// history.record(0, Outcome::Tie, PairFlag::NoPair).unwrap();
///
/// // Speculative copy with one more round; the history is untouched.
/// let what_if = history.with_hypothetical(Side::Player).unwrap();
/// assert_eq!(what_if.len(), 3);
/// assert_eq!(history.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HistoryRepr")]
pub struct RoundHistory {
    rounds: Vector<Round>,
}

/// Wire form of a history, validated on the way in.
#[derive(Deserialize)]
struct HistoryRepr {
    rounds: Vec<Round>,
}

impl TryFrom<HistoryRepr> for RoundHistory {
    type Error = RoadError;

    fn try_from(repr: HistoryRepr) -> Result<Self, RoadError> {
        Self::from_rounds(repr.rounds)
    }
}

impl RoundHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from rounds already carrying their orders.
    pub fn from_rounds(rounds: impl IntoIterator<Item = Round>) -> Result<Self, RoadError> {
        let mut history = Self::new();
        for round in rounds {
            history.push(round)?;
        }
        Ok(history)
    }

    /// Append a round with a caller-assigned order.
    ///
    /// Fails if the order does not exceed the last recorded order.
    pub fn push(&mut self, round: Round) -> Result<(), RoadError> {
        if let Some(last) = self.rounds.last() {
            if round.order <= last.order {
                return Err(RoadError::OrderNotIncreasing {
                    previous: last.order,
                    order: round.order,
                });
            }
        }
        trace!(order = round.order, outcome = ?round.outcome, "recording round");
        self.rounds.push_back(round);
        Ok(())
    }

    /// Append a round, assigning it the next order.
    ///
    /// Fails with [`RoadError::OrderExhausted`] once a round with order
    /// `u64::MAX` has been recorded.
    pub fn record(
        &mut self,
        result: i64,
        outcome: Outcome,
        pair: PairFlag,
    ) -> Result<Round, RoadError> {
        let order = self
            .next_order()
            .ok_or(RoadError::OrderExhausted { last: u64::MAX })?;
        let round = Round::new(order, result, outcome, pair);
        trace!(order = round.order, outcome = ?round.outcome, "recording round");
        self.rounds.push_back(round);
        Ok(round)
    }

    /// The order the next recorded round will receive.
    ///
    /// Orders start at 1. `None` once `u64::MAX` has been recorded.
    #[must_use]
    pub fn next_order(&self) -> Option<u64> {
        match self.rounds.last() {
            Some(round) => round.order.checked_add(1),
            None => Some(1),
        }
    }

    /// A private copy of the history with `round` appended.
    ///
    /// The round is not validated or recorded; the copy shares structure
    /// with the history but pushing onto it never changes recorded rounds.
    #[must_use]
    pub fn snapshot_with(&self, round: Round) -> Vector<Round> {
        let mut rounds = self.rounds.clone();
        rounds.push_back(round);
        rounds
    }

    /// A private copy of the history with one hypothetical win for `side`.
    ///
    /// The extra round takes [`next_order`](Self::next_order), has no pair
    /// and an empty payload. `None` when no next order exists.
    #[must_use]
    pub fn with_hypothetical(&self, side: Side) -> Option<Vector<Round>> {
        let order = self.next_order()?;
        Some(self.snapshot_with(Round::hypothetical(order, side)))
    }

    /// All recorded rounds, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &Vector<Round> {
        &self.rounds
    }

    /// Iterate over recorded rounds, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    /// Most recent round.
    #[must_use]
    pub fn last(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Number of recorded rounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Count rounds with the given outcome.
    #[must_use]
    pub fn count(&self, outcome: Outcome) -> usize {
        self.rounds.iter().filter(|r| r.outcome == outcome).count()
    }
}

impl<'a> IntoIterator for &'a RoundHistory {
    type Item = &'a Round;
    type IntoIter = im::vector::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
