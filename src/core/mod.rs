//! Core types: rounds, history, configuration, errors, RNG.
//!
//! Everything here is independent of how roads are drawn. The road builders
//! in [`crate::roads`] consume these types.

pub mod config;
pub mod error;
pub mod history;
pub mod rng;
pub mod round;

pub use config::{RoadConfig, ShoeConfig};
pub use error::RoadError;
pub use history::RoundHistory;
pub use rng::{ShoeRng, ShoeRngState};
pub use round::{Outcome, PairFlag, Round, Side};
