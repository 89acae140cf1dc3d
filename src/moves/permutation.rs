//! Facelet permutations for the six clockwise quarter turns.
//!
//! ## Cycle Structure
//!
//! Every clockwise quarter turn is five disjoint 4-cycles (20 facelets):
//!
//! - corners of the turned face: 1 -> 3 -> 9 -> 7
//! - edges of the turned face: 2 -> 6 -> 8 -> 4
//! - three rings over the bordering facelets of the four neighbours,
//!   taken in the order the neighbours are met circling the face clockwise
//!
//! A cycle `[a, b, c, d]` moves the sticker in `a` to `b`, `b` to `c`,
//! `c` to `d` and `d` back to `a`. Centers never move.
//!
//! All slots are produced by the addressing function; no table here
//! contains a hand-written slot number.

use crate::core::facelets::slot;
use crate::core::{Face, Facelets};

use super::notation::Move;

use Face::{B, D, F, L, R, U};

/// A permutation of the 54 facelets stored as disjoint 4-cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Permutation {
    cycles: [[usize; 4]; 5],
}

const fn ring(a: (Face, u8), b: (Face, u8), c: (Face, u8), d: (Face, u8)) -> [usize; 4] {
    [slot(a.0, a.1), slot(b.0, b.1), slot(c.0, c.1), slot(d.0, d.1)]
}

const fn quarter_turn_table(face: Face, rings: [[usize; 4]; 3]) -> Permutation {
    Permutation {
        cycles: [
            ring((face, 1), (face, 3), (face, 9), (face, 7)),
            ring((face, 2), (face, 6), (face, 8), (face, 4)),
            rings[0],
            rings[1],
            rings[2],
        ],
    }
}

/// Clockwise quarter turns, indexed by [`Face::block`].
const QUARTER_TURNS: [Permutation; 6] = [
    // U: front row goes left
    quarter_turn_table(
        U,
        [
            ring((F, 1), (L, 1), (B, 1), (R, 1)),
            ring((F, 2), (L, 2), (B, 2), (R, 2)),
            ring((F, 3), (L, 3), (B, 3), (R, 3)),
        ],
    ),
    // R: front column goes up
    quarter_turn_table(
        R,
        [
            ring((F, 3), (U, 3), (B, 7), (D, 3)),
            ring((F, 6), (U, 6), (B, 4), (D, 6)),
            ring((F, 9), (U, 9), (B, 1), (D, 9)),
        ],
    ),
    // F: up row goes right
    quarter_turn_table(
        F,
        [
            ring((U, 7), (R, 1), (D, 3), (L, 9)),
            ring((U, 8), (R, 4), (D, 2), (L, 6)),
            ring((U, 9), (R, 7), (D, 1), (L, 3)),
        ],
    ),
    // D: front row goes right
    quarter_turn_table(
        D,
        [
            ring((F, 7), (R, 7), (B, 7), (L, 7)),
            ring((F, 8), (R, 8), (B, 8), (L, 8)),
            ring((F, 9), (R, 9), (B, 9), (L, 9)),
        ],
    ),
    // L: up column goes front
    quarter_turn_table(
        L,
        [
            ring((U, 1), (F, 1), (D, 1), (B, 9)),
            ring((U, 4), (F, 4), (D, 4), (B, 6)),
            ring((U, 7), (F, 7), (D, 7), (B, 3)),
        ],
    ),
    // B: up row goes left (seen from behind)
    quarter_turn_table(
        B,
        [
            ring((U, 3), (L, 1), (D, 7), (R, 9)),
            ring((U, 2), (L, 4), (D, 8), (R, 6)),
            ring((U, 1), (L, 7), (D, 9), (R, 3)),
        ],
    ),
];

impl Permutation {
    /// The clockwise quarter turn of `face`.
    #[must_use]
    pub fn quarter_turn(face: Face) -> &'static Permutation {
        &QUARTER_TURNS[face.block()]
    }

    /// Slots this permutation moves.
    pub fn moved_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.cycles.iter().flatten().copied()
    }

    /// Apply once. Reads only from `facelets`, writes into a new array.
    #[must_use]
    pub fn apply(&self, facelets: &Facelets) -> Facelets {
        let old = facelets.as_array();
        let mut new = *old;
        for &[a, b, c, d] in &self.cycles {
            new[b] = old[a];
            new[c] = old[b];
            new[d] = old[c];
            new[a] = old[d];
        }
        Facelets::from_permuted(new)
    }
}

/// Apply one move: the face's quarter turn repeated `turns()` times.
#[must_use]
pub fn apply_move(facelets: &Facelets, mv: Move) -> Facelets {
    let turn = Permutation::quarter_turn(mv.face);
    (0..mv.turns()).fold(*facelets, |acc, _| turn.apply(&acc))
}

/// Apply moves in order.
#[must_use]
pub fn apply_moves(facelets: &Facelets, moves: &[Move]) -> Facelets {
    moves.iter().fold(*facelets, |acc, &mv| apply_move(&acc, mv))
}
