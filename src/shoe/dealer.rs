//! Multi-deck shoe that deals punto banco rounds.

use smallvec::smallvec;
use tracing::debug;

use super::cards::{banker_draws, hand_total, player_draws, Card, Coup, CARDS_PER_DECK};
use crate::core::config::ShoeConfig;
use crate::core::error::RoadError;
use crate::core::history::RoundHistory;
use crate::core::rng::{ShoeRng, ShoeRngState};
use crate::core::round::Round;

/// Most cards a single round can use.
const MAX_CARDS_PER_ROUND: usize = 6;

/// Seeded shoe of shuffled decks.
///
/// ## Usage
///
/// ```
/// use baccarat_roads::core::{RoundHistory, ShoeConfig};
/// use baccarat_roads::shoe::Shoe;
///
/// let mut shoe = Shoe::new(ShoeConfig::default().with_seed(7));
/// let mut history = RoundHistory::new();
/// for _ in 0..60 {
///     shoe.deal_into(&mut history).unwrap();
/// }
/// assert_eq!(history.len(), 60);
///
/// // Same seed, same rounds.
/// let mut replay = Shoe::new(ShoeConfig::default().with_seed(7));
/// let first = replay.deal_round(1);
/// assert_eq!(history.rounds()[0], first);
/// ```
#[derive(Clone, Debug)]
pub struct Shoe {
    config: ShoeConfig,
    rng: ShoeRng,
    cards: Vec<Card>,
    next: usize,
    shuffles: u32,
}

impl Shoe {
    /// Create and shuffle a shoe.
    #[must_use]
    pub fn new(config: ShoeConfig) -> Self {
        let rng = ShoeRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Start a new shoe from a saved RNG position.
    ///
    /// The decks are gathered and shuffled again at that position, so the
    /// result is the shoe the saved one would get on its next shuffle. Cards
    /// already dealt from the saved shoe are not replayed or skipped.
    #[must_use]
    pub fn from_state(config: ShoeConfig, state: &ShoeRngState) -> Self {
        Self::with_rng(config, ShoeRng::from_state(state))
    }

    fn with_rng(config: ShoeConfig, rng: ShoeRng) -> Self {
        let cards = (0..config.decks)
            .flat_map(|_| (0..CARDS_PER_DECK).map(Card::new))
            .collect();
        let mut shoe = Self {
            config,
            rng,
            cards,
            next: 0,
            shuffles: 0,
        };
        shoe.shuffle();
        shoe
    }

    /// Gather every card and shuffle.
    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
        self.next = 0;
        self.shuffles += 1;
        debug!(cards = self.cards.len(), shuffles = self.shuffles, "shuffled shoe");
    }

    /// Cards left before the end of the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.next
    }

    /// Times the shoe has been shuffled, including the first.
    #[must_use]
    pub fn shuffles(&self) -> u32 {
        self.shuffles
    }

    /// RNG state, for resuming with [`from_state`](Self::from_state).
    #[must_use]
    pub fn rng_state(&self) -> ShoeRngState {
        self.rng.state()
    }

    /// Check if the cut card has come out.
    #[must_use]
    pub fn needs_shuffle(&self) -> bool {
        self.remaining() < self.config.cut_card.max(MAX_CARDS_PER_ROUND)
    }

    fn draw(&mut self) -> Card {
        let card = self.cards[self.next];
        self.next += 1;
        card
    }

    /// Deal one round's hands, reshuffling first if the cut card is out.
    pub fn deal(&mut self) -> Coup {
        if self.needs_shuffle() {
            self.shuffle();
        }

        let (p1, b1, p2, b2) = (self.draw(), self.draw(), self.draw(), self.draw());
        let mut coup = Coup {
            player: smallvec![p1, p2],
            banker: smallvec![b1, b2],
        };

        let player_total = hand_total(&coup.player);
        let banker_total = hand_total(&coup.banker);
        if player_total >= 8 || banker_total >= 8 {
            return coup;
        }

        let mut player_third = None;
        if player_draws(player_total) {
            let card = self.draw();
            coup.player.push(card);
            player_third = Some(card);
        }
        if banker_draws(banker_total, player_third) {
            coup.banker.push(self.draw());
        }
        coup
    }

    /// Deal a round and describe it as a [`Round`] with the given order.
    ///
    /// The round's payload is the winning hand's total.
    pub fn deal_round(&mut self, order: u64) -> Round {
        let coup = self.deal();
        Round::new(order, i64::from(coup.winning_total()), coup.outcome(), coup.pair())
    }

    /// Deal a round and record it in `history`.
    pub fn deal_into(&mut self, history: &mut RoundHistory) -> Result<Round, RoadError> {
        let coup = self.deal();
        history.record(i64::from(coup.winning_total()), coup.outcome(), coup.pair())
    }
}
