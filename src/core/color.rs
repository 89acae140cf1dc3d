//! Sticker colors.
//!
//! The engine only knows six symbolic colors and their one-letter codes.
//! Mapping a color to something drawable is the renderer's business.

use serde::{Deserialize, Serialize};

use super::error::CubeError;

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Blue,
    Green,
    Red,
    Orange,
}

impl Color {
    /// All colors, in letter-code order `W Y B G R O`.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Orange,
    ];

    /// Single-letter code.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }

    /// Lowercase English name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Orange => "orange",
        }
    }
}

impl TryFrom<char> for Color {
    type Error = CubeError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        match letter {
            'W' => Ok(Color::White),
            'Y' => Ok(Color::Yellow),
            'B' => Ok(Color::Blue),
            'G' => Ok(Color::Green),
            'R' => Ok(Color::Red),
            'O' => Ok(Color::Orange),
            other => Err(CubeError::InvalidColor(other)),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
