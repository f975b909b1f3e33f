//! Playing cards and baccarat hands.
//!
//! Cards are encoded as `0..52`, where:
//! - suit = card / 13 (0..=3)
//! - rank = card % 13 (0..=12, 0 is Ace)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::round::{Outcome, PairFlag};

/// Cards per standard deck.
pub const CARDS_PER_DECK: u8 = 52;

const RANKS_PER_SUIT: u8 = 13;

/// A single playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card(u8);

impl Card {
    /// Create a card from its `0..52` encoding.
    ///
    /// Panics on an out-of-range encoding.
    #[must_use]
    pub fn new(code: u8) -> Self {
        assert!(code < CARDS_PER_DECK, "Card code {} out of range", code);
        Self(code)
    }

    /// Rank, 0-based: 0 is Ace, 12 is King.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 % RANKS_PER_SUIT
    }

    /// Suit, 0..=3.
    #[must_use]
    pub const fn suit(self) -> u8 {
        self.0 / RANKS_PER_SUIT
    }

    /// Baccarat point value: Ace is 1, 2-9 face value, tens and faces 0.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank() {
            r @ 0..=8 => r + 1,
            _ => 0,
        }
    }
}

/// Cards in one baccarat hand (two or three).
pub type Hand = SmallVec<[Card; 3]>;

/// Hand total (mod 10).
#[must_use]
pub fn hand_total(cards: &[Card]) -> u8 {
    cards.iter().map(|c| c.value()).sum::<u8>() % 10
}

/// First two cards share a rank.
#[must_use]
pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() >= 2 && cards[0].rank() == cards[1].rank()
}

/// Player draws a third card on 0-5.
#[must_use]
pub const fn player_draws(player_total: u8) -> bool {
    player_total <= 5
}

/// Banker third-card rule.
///
/// Depends on the banker's two-card total and the player's third card, if
/// the player drew one.
#[must_use]
pub fn banker_draws(banker_total: u8, player_third_card: Option<Card>) -> bool {
    let third = player_third_card.map(Card::value);
    match banker_total {
        0..=2 => true,
        3 => third != Some(8),
        4 => third.map_or(true, |v| (2..=7).contains(&v)),
        5 => third.map_or(true, |v| (4..=7).contains(&v)),
        6 => matches!(third, Some(6 | 7)),
        _ => false,
    }
}

/// Both hands of one dealt round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coup {
    pub player: Hand,
    pub banker: Hand,
}

impl Coup {
    /// Player hand total.
    #[must_use]
    pub fn player_total(&self) -> u8 {
        hand_total(&self.player)
    }

    /// Banker hand total.
    #[must_use]
    pub fn banker_total(&self) -> u8 {
        hand_total(&self.banker)
    }

    /// Who won.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.banker_total().cmp(&self.player_total()) {
            std::cmp::Ordering::Greater => Outcome::BankerWin,
            std::cmp::Ordering::Less => Outcome::PlayerWin,
            std::cmp::Ordering::Equal => Outcome::Tie,
        }
    }

    /// Pair flag from each hand's first two cards.
    #[must_use]
    pub fn pair(&self) -> PairFlag {
        PairFlag::from_hands(is_pair(&self.banker), is_pair(&self.player))
    }

    /// Winning total, or the shared total on a tie.
    #[must_use]
    pub fn winning_total(&self) -> u8 {
        self.banker_total().max(self.player_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    /// Card of the given point value in spades (value 0 is a King).
    fn v(value: u8) -> Card {
        match value {
            0 => Card::new(12),
            1..=9 => Card::new(value - 1),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_card_encoding() {
        let ace_of_hearts = Card::new(13);
        assert_eq!(ace_of_hearts.rank(), 0);
        assert_eq!(ace_of_hearts.suit(), 1);
        assert_eq!(ace_of_hearts.value(), 1);

        assert_eq!(Card::new(8).value(), 9);
        assert_eq!(Card::new(9).value(), 0);
        assert_eq!(Card::new(51).value(), 0);
    }

    #[test]
    #[should_panic(expected = "Card code 52 out of range")]
    fn test_card_out_of_range() {
        let _ = Card::new(52);
    }

    #[test]
    fn test_hand_total_wraps() {
        assert_eq!(hand_total(&[v(7), v(8)]), 5);
        assert_eq!(hand_total(&[v(9), v(0), v(1)]), 0);
        assert_eq!(hand_total(&[]), 0);
    }

    #[test]
    fn test_is_pair() {
        assert!(is_pair(&[Card::new(3), Card::new(16)]));
        assert!(!is_pair(&[Card::new(3), Card::new(4)]));
        assert!(!is_pair(&[Card::new(3)]));
        // Only the first two cards count.
        assert!(!is_pair(&[Card::new(3), Card::new(4), Card::new(3)]));
    }

    #[test]
    fn test_player_draws() {
        assert!(player_draws(0));
        assert!(player_draws(5));
        assert!(!player_draws(6));
        assert!(!player_draws(7));
    }

    #[test]
    fn test_banker_draw_table() {
        for total in 0..=2 {
            assert!(banker_draws(total, None));
            assert!(banker_draws(total, Some(v(9))));
        }

        assert!(banker_draws(3, Some(v(7))));
        assert!(!banker_draws(3, Some(v(8))));

        assert!(banker_draws(4, Some(v(2))));
        assert!(!banker_draws(4, Some(v(1))));
        assert!(!banker_draws(4, Some(v(8))));

        assert!(banker_draws(5, Some(v(4))));
        assert!(!banker_draws(5, Some(v(3))));

        assert!(banker_draws(6, Some(v(6))));
        assert!(banker_draws(6, Some(v(7))));
        assert!(!banker_draws(6, None));
        assert!(!banker_draws(6, Some(v(5))));

        // Player stood: banker draws on 0-5.
        assert!(banker_draws(5, None));
        assert!(!banker_draws(7, None));
    }

    #[test]
    fn test_coup_outcome_and_pairs() {
        let coup = Coup {
            player: smallvec![v(4), v(4)],
            banker: smallvec![v(9), v(0)],
        };
        assert_eq!(coup.player_total(), 8);
        assert_eq!(coup.banker_total(), 9);
        assert_eq!(coup.outcome(), Outcome::BankerWin);
        assert_eq!(coup.pair(), PairFlag::PlayerPair);
        assert_eq!(coup.winning_total(), 9);

        let tie = Coup {
            player: smallvec![v(3), v(3)],
            banker: smallvec![v(1), v(5)],
        };
        assert_eq!(tie.outcome(), Outcome::Tie);
        assert_eq!(tie.winning_total(), 6);
    }
}
