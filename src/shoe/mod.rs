//! Shoe simulator.
//!
//! Deals punto banco rounds from a seeded multi-deck shoe so that tests,
//! benchmarks and demos can work with realistic round histories.
//!
//! - `cards`: card encoding, hand totals, third-card rules
//! - `dealer`: the shoe itself

pub mod cards;
pub mod dealer;

pub use cards::{Card, Coup, Hand};
pub use dealer::Shoe;
