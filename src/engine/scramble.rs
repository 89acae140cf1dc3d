//! Random scramble generation.
//!
//! Each move picks a face that is neither the previous face nor its
//! opposite, then a modifier uniformly from plain, prime and double.
//! Back-to-back turns on one axis would merge or commute into something
//! shorter, so they are skipped.

use crate::core::{CubeRng, Face, FACE_ORDER};
use crate::moves::{Modifier, Move};

/// Generate `length` random moves with no two consecutive moves on the
/// same axis.
pub fn random_moves(rng: &mut CubeRng, length: usize) -> Vec<Move> {
    let mut moves = Vec::with_capacity(length);
    let mut previous: Option<Face> = None;

    for _ in 0..length {
        let candidates: Vec<Face> = FACE_ORDER
            .iter()
            .copied()
            .filter(|&face| previous.map_or(true, |p| !p.shares_axis(face)))
            .collect();

        // At most two of the six faces are excluded.
        let Some(&face) = rng.choose(&candidates) else {
            break;
        };
        let modifier = Modifier::ALL[rng.gen_range_usize(0..Modifier::ALL.len())];

        moves.push(Move::new(face, modifier));
        previous = Some(face);
    }

    moves
}

/// Check if no two consecutive moves share an axis.
#[must_use]
pub fn is_axis_alternating(moves: &[Move]) -> bool {
    moves
        .windows(2)
        .all(|pair| !pair[0].face.shares_axis(pair[1].face))
}
