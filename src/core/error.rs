//! Error type for contract violations at the engine boundary.
//!
//! Malformed move tokens are not errors (they are dropped and logged).
//! Everything here indicates a caller passing something the cube model
//! cannot represent.

use thiserror::Error;

use super::color::Color;

/// Errors surfaced by the facelet model and the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// Face letter outside `U R F D L B`.
    #[error("invalid face {0:?}, expected one of U R F D L B")]
    InvalidFace(char),

    /// Facelet position outside `1..=9`.
    #[error("invalid facelet position {0}, expected 1..=9")]
    InvalidPosition(u8),

    /// Token that is not a face letter with an optional `'` or `2`.
    #[error("invalid move token {0:?}")]
    InvalidMove(String),

    /// Color letter outside `W Y B G R O`.
    #[error("invalid color {0:?}, expected one of W Y B G R O")]
    InvalidColor(char),

    /// Facelet array with the wrong number of entries.
    #[error("expected {expected} facelets, found {found}")]
    FaceletCount { expected: usize, found: usize },

    /// A color appears a number of times no real cube can produce.
    #[error("color {color:?} appears {count} times, expected 9")]
    ColorCount { color: Color, count: usize },

    /// Snapshot could not be encoded or decoded.
    #[error("snapshot codec error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for CubeError {
    fn from(err: bincode::Error) -> Self {
        CubeError::Snapshot(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type CubeResult<T> = Result<T, CubeError>;
