//! Configuration types.
//!
//! - `RoadConfig`: grid dimensions for the big road and derived-road layouts
//! - `ShoeConfig`: deck count, cut card and seed for the shoe simulator
//!
//! Both follow the same builder style: start from `Default` and chain
//! `with_*` calls.

use serde::{Deserialize, Serialize};

use super::error::RoadError;

/// Grid dimensions for a road.
///
/// `rows` is fixed for the life of a grid. `columns` is the initial width;
/// grids grow to the right as streaks need more room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadConfig {
    /// Number of rows (6 on a standard scoreboard).
    pub rows: usize,

    /// Initial number of columns.
    pub columns: usize,
}

impl Default for RoadConfig {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 40,
        }
    }
}

impl RoadConfig {
    /// Create a config with explicit dimensions.
    #[must_use]
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Set the row count.
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Set the initial column count.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Check that both dimensions are positive.
    pub fn validate(&self) -> Result<(), RoadError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(RoadError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }
}

/// Shoe simulator configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoeConfig {
    /// Decks shuffled together (punto banco is dealt from eight).
    pub decks: u8,

    /// Reshuffle once fewer than this many cards remain.
    pub cut_card: usize,

    /// RNG seed. Same seed produces the same rounds.
    pub seed: u64,
}

impl Default for ShoeConfig {
    fn default() -> Self {
        Self {
            decks: 8,
            cut_card: 14,
            seed: 42,
        }
    }
}

impl ShoeConfig {
    /// Set the deck count.
    #[must_use]
    pub fn with_decks(mut self, decks: u8) -> Self {
        assert!(decks > 0, "Shoe needs at least 1 deck");
        self.decks = decks;
        self
    }

    /// Set the cut card position, counted from the end of the shoe.
    #[must_use]
    pub fn with_cut_card(mut self, cut_card: usize) -> Self {
        self.cut_card = cut_card;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_config_default() {
        let config = RoadConfig::default();
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_road_config_builder() {
        let config = RoadConfig::default().with_rows(3).with_columns(12);
        assert_eq!(config, RoadConfig::new(3, 12));
    }

    #[test]
    fn test_road_config_rejects_zero() {
        assert_eq!(
            RoadConfig::new(0, 5).validate(),
            Err(RoadError::InvalidDimensions { rows: 0, columns: 5 })
        );
        assert_eq!(
            RoadConfig::new(6, 0).validate(),
            Err(RoadError::InvalidDimensions { rows: 6, columns: 0 })
        );
    }

    #[test]
    fn test_shoe_config_builder() {
        let config = ShoeConfig::default()
            .with_decks(6)
            .with_cut_card(20)
            .with_seed(7);

        assert_eq!(config.decks, 6);
        assert_eq!(config.cut_card, 20);
        assert_eq!(config.seed, 7);
    }

    #[test]
    #[should_panic(expected = "Shoe needs at least 1 deck")]
    fn test_shoe_config_zero_decks() {
        let _ = ShoeConfig::default().with_decks(0);
    }

    #[test]
    fn test_serialization() {
        let config = ShoeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ShoeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
