//! Engine configuration.
//!
//! Callers configure an engine at construction by providing:
//! - a scramble seed (fresh per engine unless pinned with `with_seed`)
//! - a default scramble length
//! - an optional starting position: a facelet array and/or a move sequence

use serde::{Deserialize, Serialize};

use super::facelets::Facelets;

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Configuration for a [`CubeEngine`](crate::engine::CubeEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the scramble RNG. Drawn from the thread RNG by default.
    /// Same seed produces the same scrambles.
    pub seed: u64,

    /// Moves generated by `scramble_default`.
    pub scramble_length: usize,

    /// Array the history is replayed onto. `None` means solved.
    pub initial_facelets: Option<Facelets>,

    /// Moves applied right after construction.
    pub initial_sequence: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: rand::random(),
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            initial_facelets: None,
            initial_sequence: None,
        }
    }
}

impl EngineConfig {
    /// Use a custom scramble seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Use a seed drawn from the thread RNG.
    #[must_use]
    pub fn with_entropy_seed(mut self) -> Self {
        self.seed = rand::random();
        self
    }

    /// Use a custom default scramble length.
    #[must_use]
    pub fn with_scramble_length(mut self, length: usize) -> Self {
        self.scramble_length = length;
        self
    }

    /// Start from a custom facelet array instead of the solved cube.
    #[must_use]
    pub fn with_initial_facelets(mut self, facelets: Facelets) -> Self {
        self.initial_facelets = Some(facelets);
        self
    }

    /// Apply a move sequence right after construction.
    #[must_use]
    pub fn with_initial_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.initial_sequence = Some(sequence.into());
        self
    }
}
