//! Big road, derived roads and next-mark predictions.
//!
//! ## Data flow
//!
//! ```text
//! RoundHistory -> PrimaryGrid (BigRoad) -> Grid<BigRoadCell>
//!              -> derive_marks(grid, gap) -> Vec<DerivedMark>
//!              -> last mark -> Prediction
//! ```
//!
//! - `primary`: the contract a primary grid builder fulfils
//! - `big_road`: the standard primary grid
//! - `derived`: big eye boy, small road and cockroach pig
//! - `predict`: what-if readings without touching recorded history

pub mod big_road;
pub mod derived;
pub mod predict;
pub mod primary;

pub use big_road::{BigRoad, BigRoadCell};
pub use derived::{begin_order, derive_marks, layout_marks, DerivedMark, DerivedRoadKind, Gap};
pub use predict::{DerivedRoad, Prediction, RoadPredictor, RoadReading};
pub use primary::{Ordered, PrimaryGrid};
