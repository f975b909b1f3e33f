//! # baccarat-roads
//!
//! Baccarat scoreboard roads and next-mark predictions.
//!
//! ## Design Principles
//!
//! 1. **Derived, not stored**: grids and derived roads are rebuilt from the
//!    round history on every query. The history is the only state.
//!
//! 2. **One engine, three roads**: big eye boy, small road and cockroach pig
//!    are the same procedure with a different lookback gap.
//!
//! 3. **Speculation never writes**: predictions append a hypothetical round
//!    to a private snapshot of the history, never to the history itself.
//!
//! ## Architecture
//!
//! - **Persistent history**: `im::Vector` makes a history snapshot O(1), so
//!   each prediction gets its own copy to append to.
//!
//! - **Sparse grids**: fixed rows, growing columns, explicit empty cells.
//!
//! - **Pluggable primary grid**: derived roads depend only on the
//!   `PrimaryGrid` trait; `BigRoad` is the standard implementation.
//!
//! ## Modules
//!
//! - `core`: rounds, history, configuration, errors, RNG
//! - `grid`: sparse grid and streak placement
//! - `roads`: big road, derived roads, predictions
//! - `shoe`: seeded shoe simulator for realistic histories

pub mod core;
pub mod grid;
pub mod roads;
pub mod shoe;

// Re-export commonly used types
pub use crate::core::{
    Outcome, PairFlag, Round, Side,
    RoundHistory,
    RoadConfig, ShoeConfig,
    RoadError,
    ShoeRng, ShoeRngState,
};

pub use crate::grid::{Grid, Position, StreakPlacer};

pub use crate::roads::{
    BigRoad, BigRoadCell,
    Ordered, PrimaryGrid,
    begin_order, derive_marks, layout_marks,
    DerivedMark, DerivedRoadKind, Gap,
    DerivedRoad, Prediction, RoadPredictor, RoadReading,
};

pub use crate::shoe::{Card, Coup, Shoe};
