//! Closed-form position math.

pub mod position;

pub use position::{PositionSplit, split_position};
