//! # rubik-engine
//!
//! A 3x3x3 Rubik's Cube facelet model and move engine.
//!
//! ## Design Principles
//!
//! 1. **One Addressing Function**: every (face, position) reference goes
//!    through `core::index`. Move tables are built from it, renderers
//!    read through it.
//!
//! 2. **State Is Derived**: an engine stores an initial array and a move
//!    history. The current array is a cache of replaying that history.
//!
//! 3. **Lenient Notation, Strict Model**: malformed move tokens are
//!    dropped with a log record; bad faces, positions or colors are
//!    errors.
//!
//! ## Architecture
//!
//! - **Flat Facelets**: 54 colors in `U R F D L B` order, 9 per face,
//!   row-major.
//!
//! - **4-Cycle Tables**: each clockwise quarter turn is five disjoint
//!   4-cycles. Prime and double moves repeat it 3 and 2 times.
//!
//! - **Deterministic Scrambles**: seeded ChaCha8, snapshot-restorable.
//!
//! ## Modules
//!
//! - `core`: colors, faces, facelet array, addressing, RNG, config, errors
//! - `moves`: notation parsing and quarter-turn permutations
//! - `engine`: the cube engine, scrambles, snapshots
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod moves;
pub mod engine;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    index, locate, Color, CubeError, CubeResult, CubeRng, CubeRngState, EngineConfig,
    Face, Facelets, FACE_ORDER, FACELET_COUNT, SOLVED,
};

pub use crate::moves::{
    apply_move, apply_moves, format_sequence, invert_sequence, parse_sequence,
    Modifier, Move, ParsedSequence, Permutation,
};

pub use crate::engine::{CubeEngine, CubeSnapshot};
