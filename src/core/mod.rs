//! Facelet model: colors, faces, the 54-slot array, addressing, RNG,
//! configuration and errors.
//!
//! Everything above this module refers to stickers through [`index`].

pub mod color;
pub mod config;
pub mod error;
pub mod face;
pub mod facelets;
pub mod rng;

pub use color::Color;
pub use config::{EngineConfig, DEFAULT_SCRAMBLE_LENGTH};
pub use error::{CubeError, CubeResult};
pub use face::{Face, FACE_ORDER};
pub use facelets::{index, locate, solved_color, Facelets, FACELET_COUNT, FACE_SIZE, SOLVED};
pub use rng::{CubeRng, CubeRngState};
