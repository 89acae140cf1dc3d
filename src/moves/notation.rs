//! Move notation: face letter plus optional modifier.
//!
//! A move is one of `U R F D L B`, optionally followed by `'`
//! (counter-clockwise) or `2` (half turn). Sequences are whitespace
//! separated. Tokens that are not exactly a move are dropped, never
//! raised as errors.
//!
//! ```
//! use rubik_engine::moves::{parse_sequence, Move};
//!
//! let parsed = parse_sequence("R U2 x F'");
//! let tokens: Vec<String> = parsed.moves.iter().map(Move::to_string).collect();
//! assert_eq!(tokens, ["R", "U2", "F'"]);
//! assert_eq!(parsed.rejected, ["x"]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CubeError, Face, FACE_ORDER};

/// How far a face turns.
///
/// Resolved once at parse time. Applying a move repeats the clockwise
/// quarter-turn permutation [`Modifier::turns`] times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Clockwise quarter turn, no suffix.
    Plain,
    /// Counter-clockwise quarter turn, `'` suffix.
    Prime,
    /// Half turn, `2` suffix.
    Double,
}

impl Modifier {
    /// All modifiers.
    pub const ALL: [Modifier; 3] = [Modifier::Plain, Modifier::Prime, Modifier::Double];

    /// Number of clockwise quarter turns this modifier stands for.
    #[must_use]
    pub const fn turns(self) -> usize {
        match self {
            Modifier::Plain => 1,
            Modifier::Prime => 3,
            Modifier::Double => 2,
        }
    }

    /// The modifier that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Modifier {
        match self {
            Modifier::Plain => Modifier::Prime,
            Modifier::Prime => Modifier::Plain,
            Modifier::Double => Modifier::Double,
        }
    }

    /// Notation suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Modifier::Plain => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }
}

/// A single face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The face being turned.
    pub face: Face,
    /// How far it turns.
    pub modifier: Modifier,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(face: Face, modifier: Modifier) -> Self {
        Self { face, modifier }
    }

    /// Clockwise quarter turn of `face`.
    #[must_use]
    pub const fn plain(face: Face) -> Self {
        Self::new(face, Modifier::Plain)
    }

    /// Counter-clockwise quarter turn of `face`.
    #[must_use]
    pub const fn prime(face: Face) -> Self {
        Self::new(face, Modifier::Prime)
    }

    /// Half turn of `face`.
    #[must_use]
    pub const fn double(face: Face) -> Self {
        Self::new(face, Modifier::Double)
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Move {
        Self::new(self.face, self.modifier.inverse())
    }

    /// Number of clockwise quarter turns.
    #[must_use]
    pub const fn turns(self) -> usize {
        self.modifier.turns()
    }

    /// All 18 moves, grouped by face in facelet-array order.
    #[must_use]
    pub fn all() -> Vec<Move> {
        FACE_ORDER
            .iter()
            .flat_map(|&face| Modifier::ALL.iter().map(move |&m| Move::new(face, m)))
            .collect()
    }
}

impl std::str::FromStr for Move {
    type Err = CubeError;

    /// Parse exactly one token, e.g. `R`, `U'` or `F2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMove(s.to_string());
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(|letter| Face::try_from(letter).ok())
            .ok_or_else(invalid)?;
        let modifier = match (chars.next(), chars.next()) {
            (None, _) => Modifier::Plain,
            (Some('\''), None) => Modifier::Prime,
            (Some('2'), None) => Modifier::Double,
            _ => return Err(invalid()),
        };
        Ok(Move::new(face, modifier))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.face, self.modifier.suffix())
    }
}

/// Moves read from a sequence string, plus the tokens that were dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedSequence {
    /// Accepted moves, in input order.
    pub moves: SmallVec<[Move; 16]>,
    /// Tokens that were not valid moves, in input order.
    pub rejected: Vec<String>,
}

impl ParsedSequence {
    /// Check if no valid move was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Split a sequence on whitespace and keep the tokens that are moves.
///
/// Moves must be separated by whitespace. Unspaced input such as
/// `RUR'U'` is a single token, is not a move, and is dropped whole.
///
/// Dropped tokens are logged at debug level. A non-blank input that
/// yields no move at all logs a warning.
pub fn parse_sequence(sequence: &str) -> ParsedSequence {
    let mut parsed = ParsedSequence::default();

    for token in sequence.split_whitespace() {
        match token.parse::<Move>() {
            Ok(mv) => parsed.moves.push(mv),
            Err(_) => {
                log::debug!("dropping malformed move token {:?}", token);
                parsed.rejected.push(token.to_string());
            }
        }
    }

    if parsed.moves.is_empty() && !sequence.trim().is_empty() {
        log::warn!(
            "move sequence {:?} contained no valid moves ({} token(s) dropped)",
            sequence,
            parsed.rejected.len()
        );
    }

    parsed
}

/// Render moves as a space separated sequence.
#[must_use]
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence that undoes `moves`: reversed, each move inverted.
#[must_use]
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_turns() {
        assert_eq!(Modifier::Plain.turns(), 1);
        assert_eq!(Modifier::Prime.turns(), 3);
        assert_eq!(Modifier::Double.turns(), 2);
        for m in Modifier::ALL {
            assert_eq!((m.turns() + m.inverse().turns()) % 4, 0);
        }
    }

    #[test]
    fn test_parse_single_moves() {
        assert_eq!("R".parse::<Move>(), Ok(Move::plain(Face::R)));
        assert_eq!("U'".parse::<Move>(), Ok(Move::prime(Face::U)));
        assert_eq!("F2".parse::<Move>(), Ok(Move::double(Face::F)));
        assert_eq!("r".parse::<Move>(), Err(CubeError::InvalidMove("r".into())));
        assert!("M".parse::<Move>().is_err());
        assert!("R3".parse::<Move>().is_err());
        assert!("R'2".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_display() {
        let tokens: Vec<String> = Move::all().iter().map(Move::to_string).collect();
        assert_eq!(tokens.len(), 18);
        assert_eq!(&tokens[..3], ["U", "U'", "U2"]);
        assert!(tokens.contains(&"B'".to_string()));
    }

    #[test]
    fn test_parse_sequence_keeps_order() {
        let parsed = parse_sequence("R U R' U' F2 B'");
        assert_eq!(format_sequence(&parsed.moves), "R U R' U' F2 B'");
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_parse_sequence_drops_garbage() {
        let parsed = parse_sequence("  R  Rw x M2 D2\tL'\n");
        assert_eq!(format_sequence(&parsed.moves), "R D2 L'");
        assert_eq!(parsed.rejected, ["Rw", "x", "M2"]);
    }

    #[test]
    fn test_parse_sequence_needs_whitespace() {
        let parsed = parse_sequence("RUR'U'");
        assert!(parsed.is_empty());
        assert_eq!(parsed.rejected, ["RUR'U'"]);

        let spaced = parse_sequence("R U R' U'");
        assert_eq!(spaced.moves.len(), 4);
    }

    #[test]
    fn test_parse_sequence_empty_inputs() {
        assert!(parse_sequence("").is_empty());
        assert!(parse_sequence("   ").is_empty());

        let garbage = parse_sequence("hello world");
        assert!(garbage.is_empty());
        assert_eq!(garbage.rejected.len(), 2);
    }

    #[test]
    fn test_invert_sequence() {
        let moves = parse_sequence("R U2 F'").moves;
        assert_eq!(format_sequence(&invert_sequence(&moves)), "F U2 R'");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::prime(Face::L);
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
