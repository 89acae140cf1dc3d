//! Cube faces and their canonical order.
//!
//! ## Face Order
//!
//! Faces are laid out in the facelet array as `U R F D L B`. The
//! discriminant of each variant is its block number in that layout, so
//! `Face::R as usize * 9` is the first facelet of the Right face.

use serde::{Deserialize, Serialize};

use super::error::CubeError;

/// One of the six cube faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    /// Up.
    U = 0,
    /// Right.
    R = 1,
    /// Front.
    F = 2,
    /// Down.
    D = 3,
    /// Left.
    L = 4,
    /// Back.
    B = 5,
}

/// Faces in facelet-array order.
pub const FACE_ORDER: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

impl Face {
    /// Block number of this face in the facelet array (0..6).
    #[must_use]
    pub const fn block(self) -> usize {
        self as usize
    }

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::R => Face::L,
            Face::L => Face::R,
            Face::F => Face::B,
            Face::B => Face::F,
        }
    }

    /// Notation letter.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }

    /// Check if two faces turn around the same axis.
    #[must_use]
    pub fn shares_axis(self, other: Face) -> bool {
        self == other || self.opposite() == other
    }
}

impl TryFrom<char> for Face {
    type Error = CubeError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'U' => Ok(Face::U),
            'R' => Ok(Face::R),
            'F' => Ok(Face::F),
            'D' => Ok(Face::D),
            'L' => Ok(Face::L),
            'B' => Ok(Face::B),
            other => Err(CubeError::InvalidFace(other)),
        }
    }
}

impl std::str::FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Face::try_from(letter),
            (Some(letter), Some(_)) => Err(CubeError::InvalidFace(letter)),
            (None, _) => Err(CubeError::InvalidFace(' ')),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
