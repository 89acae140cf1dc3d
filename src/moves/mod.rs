//! Move notation and facelet permutations.
//!
//! ## Key Types
//!
//! - `Move`: a face plus a `Modifier` (plain, prime, double)
//! - `ParsedSequence`: accepted moves and dropped tokens from a string
//! - `Permutation`: the 4-cycle table of one clockwise quarter turn

pub mod notation;
pub mod permutation;

pub use notation::{format_sequence, invert_sequence, parse_sequence, Modifier, Move, ParsedSequence};
pub use permutation::{apply_move, apply_moves, Permutation};
