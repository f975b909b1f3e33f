//! Resolved baccarat rounds.
//!
//! A [`Round`] is a plain value. Copying one always yields an independent
//! value, so hypothetical rounds built for predictions can never reach back
//! into recorded history.

use serde::{Deserialize, Serialize};

/// Which hand won a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both hands finished on the same total.
    Tie,
    /// The banker hand won.
    BankerWin,
    /// The player hand won.
    PlayerWin,
}

impl Outcome {
    /// The winning side, or `None` for a tie.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Tie => None,
            Outcome::BankerWin => Some(Side::Banker),
            Outcome::PlayerWin => Some(Side::Player),
        }
    }
}

/// One of the two betting sides that can win a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Banker,
    Player,
}

impl Side {
    /// The outcome in which this side wins.
    #[must_use]
    pub const fn outcome(self) -> Outcome {
        match self {
            Side::Banker => Outcome::BankerWin,
            Side::Player => Outcome::PlayerWin,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Banker => write!(f, "Banker"),
            Side::Player => write!(f, "Player"),
        }
    }
}

/// Pair side bets that landed in a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairFlag {
    #[default]
    NoPair,
    BankerPair,
    PlayerPair,
    AllPair,
}

impl PairFlag {
    /// Combine the per-hand pair checks into a single flag.
    #[must_use]
    pub const fn from_hands(banker_pair: bool, player_pair: bool) -> Self {
        match (banker_pair, player_pair) {
            (false, false) => PairFlag::NoPair,
            (true, false) => PairFlag::BankerPair,
            (false, true) => PairFlag::PlayerPair,
            (true, true) => PairFlag::AllPair,
        }
    }
}

/// One resolved round.
///
/// `order` is assigned by whoever records the round and must increase
/// strictly across a history. `result` is an opaque payload carried along
/// for callers; nothing in this crate reads it.
///
/// ## Usage
///
/// ```
/// use baccarat_roads::core::{Outcome, PairFlag, Round};
///
/// let recorded = Round::new(1, 9, Outcome::BankerWin, PairFlag::NoPair);
///
/// // Copies are independent values.
/// let mut what_if = recorded;
/// what_if.outcome = Outcome::PlayerWin;
/// assert_eq!(recorded.outcome, Outcome::BankerWin);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    /// Chronological position, strictly increasing per history.
    pub order: u64,
    /// Opaque numeric payload.
    pub result: i64,
    /// Who won.
    pub outcome: Outcome,
    /// Pair bets that landed.
    pub pair: PairFlag,
}

impl Round {
    /// Create a round.
    #[must_use]
    pub const fn new(order: u64, result: i64, outcome: Outcome, pair: PairFlag) -> Self {
        Self {
            order,
            result,
            outcome,
            pair,
        }
    }

    /// A what-if round: `side` wins with no pair and an empty payload.
    #[must_use]
    pub const fn hypothetical(order: u64, side: Side) -> Self {
        Self::new(order, 0, side.outcome(), PairFlag::NoPair)
    }

    /// Check if this round was a tie.
    #[must_use]
    pub const fn is_tie(&self) -> bool {
        matches!(self.outcome, Outcome::Tie)
    }
}
