//! The 54-slot facelet array and its addressing scheme.
//!
//! ## Layout
//!
//! Six contiguous blocks of nine, in face order `U R F D L B`. Inside a
//! block, positions 1-9 run row-major as the face is seen in the
//! standard unfolded net:
//!
//! ```text
//!              U1 U2 U3
//!              U4 U5 U6
//!              U7 U8 U9
//!    L1 L2 L3  F1 F2 F3  R1 R2 R3  B1 B2 B3
//!    L4 L5 L6  F4 F5 F6  R4 R5 R6  B4 B5 B6
//!    L7 L8 L9  F7 F8 F9  R7 R8 R9  B7 B8 B9
//!              D1 D2 D3
//!              D4 D5 D6
//!              D7 D8 D9
//! ```
//!
//! `index(face, position)` is the only mapping from (face, position) to a
//! slot. Move tables, grids and the sticker accessor all go through it.
//!
//! ```
//! use rubik_engine::core::{index, Face};
//!
//! assert_eq!(index(Face::U, 1).unwrap(), 0);
//! assert_eq!(index(Face::F, 5).unwrap(), 22);
//! assert_eq!(index(Face::B, 9).unwrap(), 53);
//! assert!(index(Face::R, 0).is_err());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::color::Color;
use super::error::{CubeError, CubeResult};
use super::face::{Face, FACE_ORDER};

/// Number of facelets on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

/// Facelets per face.
pub const FACE_SIZE: usize = 9;

/// Slot of a facelet without range checking.
///
/// `position` must be in `1..=9`. Used to build the const move tables.
#[must_use]
pub(crate) const fn slot(face: Face, position: u8) -> usize {
    face.block() * FACE_SIZE + (position as usize - 1)
}

/// Map a face and 1-based position to a slot in the facelet array.
///
/// Bijective over `FACE_ORDER x 1..=9` onto `0..54`.
pub fn index(face: Face, position: u8) -> CubeResult<usize> {
    if !(1..=9).contains(&position) {
        return Err(CubeError::InvalidPosition(position));
    }
    Ok(slot(face, position))
}

/// Inverse of [`index`]: the face and 1-based position of a slot.
#[must_use]
pub fn locate(slot: usize) -> Option<(Face, u8)> {
    if slot >= FACELET_COUNT {
        return None;
    }
    let face = FACE_ORDER[slot / FACE_SIZE];
    Some((face, (slot % FACE_SIZE) as u8 + 1))
}

/// Color of every face on the solved cube.
#[must_use]
pub const fn solved_color(face: Face) -> Color {
    match face {
        Face::U => Color::Yellow,
        Face::D => Color::White,
        Face::F => Color::Blue,
        Face::B => Color::Green,
        Face::L => Color::Orange,
        Face::R => Color::Red,
    }
}

const fn solved_array() -> [Color; FACELET_COUNT] {
    let mut colors = [Color::White; FACELET_COUNT];
    let mut i = 0;
    while i < FACELET_COUNT {
        colors[i] = solved_color(FACE_ORDER[i / FACE_SIZE]);
        i += 1;
    }
    colors
}

/// The solved cube. Every move table is defined relative to this layout.
pub const SOLVED: Facelets = Facelets(solved_array());

/// A full cube surface: 54 colors in canonical slot order.
///
/// Only constructed through validation ([`Facelets::from_slice`],
/// [`FromStr`](std::str::FromStr)) or by permuting an existing array, so
/// every value holds exactly nine stickers of each color.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelets([Color; FACELET_COUNT]);

impl Facelets {
    /// The solved cube.
    #[must_use]
    pub const fn solved() -> Self {
        SOLVED
    }

    /// Build from a slice of colors, checking length and color counts.
    pub fn from_slice(colors: &[Color]) -> CubeResult<Self> {
        if colors.len() != FACELET_COUNT {
            return Err(CubeError::FaceletCount {
                expected: FACELET_COUNT,
                found: colors.len(),
            });
        }

        let mut counts: FxHashMap<Color, usize> = FxHashMap::default();
        for &color in colors {
            *counts.entry(color).or_insert(0) += 1;
        }
        for color in Color::ALL {
            let count = counts.get(&color).copied().unwrap_or(0);
            if count != FACE_SIZE {
                return Err(CubeError::ColorCount { color, count });
            }
        }

        let mut array = [Color::White; FACELET_COUNT];
        array.copy_from_slice(colors);
        Ok(Self(array))
    }

    /// Wrap an array produced by permuting a valid array.
    pub(crate) const fn from_permuted(colors: [Color; FACELET_COUNT]) -> Self {
        Self(colors)
    }

    /// Raw colors in slot order.
    #[must_use]
    pub fn as_array(&self) -> &[Color; FACELET_COUNT] {
        &self.0
    }

    /// Copy out the colors as a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Color> {
        self.0.to_vec()
    }

    /// Color at a face and 1-based position.
    pub fn at(&self, face: Face, position: u8) -> CubeResult<Color> {
        Ok(self.0[index(face, position)?])
    }

    /// One face as a 3x3 grid, rows top to bottom.
    #[must_use]
    pub fn face_grid(&self, face: Face) -> [[Color; 3]; 3] {
        let mut grid = [[Color::White; 3]; 3];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.0[slot(face, (row * 3 + col) as u8 + 1)];
            }
        }
        grid
    }

    /// Check if this is exactly the solved array.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == SOLVED
    }

    /// The 54 color letters in slot order.
    #[must_use]
    pub fn to_letters(&self) -> String {
        self.0.iter().map(|c| c.letter()).collect()
    }

    /// Render the unfolded net (see the module docs for the layout).
    #[must_use]
    pub fn net(&self) -> String {
        let row = |face: Face, r: usize| -> String {
            self.face_grid(face)[r]
                .iter()
                .map(|c| c.letter().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };

        let mut out = String::new();
        for r in 0..3 {
            out.push_str(&format!("      {}\n", row(Face::U, r)));
        }
        for r in 0..3 {
            let middle: Vec<String> = [Face::L, Face::F, Face::R, Face::B]
                .iter()
                .map(|&f| row(f, r))
                .collect();
            out.push_str(&middle.join(" "));
            out.push('\n');
        }
        for r in 0..3 {
            out.push_str(&format!("      {}\n", row(Face::D, r)));
        }
        out
    }
}

impl Default for Facelets {
    fn default() -> Self {
        SOLVED
    }
}

impl std::ops::Index<usize> for Facelets {
    type Output = Color;

    fn index(&self, slot: usize) -> &Color {
        &self.0[slot]
    }
}

impl std::str::FromStr for Facelets {
    type Err = CubeError;

    /// Parse 54 color letters in slot order.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let colors = s
            .trim()
            .chars()
            .map(Color::try_from)
            .collect::<CubeResult<Vec<_>>>()?;
        Self::from_slice(&colors)
    }
}

impl std::fmt::Display for Facelets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_letters())
    }
}

impl std::fmt::Debug for Facelets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Facelets({})", self.to_letters())
    }
}

// Serialized as the letter string; serde has no impls for [T; 54].
impl Serialize for Facelets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_letters())
    }
}

impl<'de> Deserialize<'de> for Facelets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let letters = String::deserialize(deserializer)?;
        letters.parse().map_err(serde::de::Error::custom)
    }
}
