//! Cube engine: history, derived state, scrambles and snapshots.

pub mod cube;
pub mod scramble;
pub mod snapshot;

pub use cube::CubeEngine;
pub use scramble::{is_axis_alternating, random_moves};
pub use snapshot::CubeSnapshot;
