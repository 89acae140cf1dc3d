//! Serializable engine snapshots for external session holders.
//!
//! The engine performs no I/O. A holder that needs a cube to outlive one
//! request takes a [`CubeSnapshot`], stores the bytes wherever it likes,
//! and rebuilds the engine later with
//! [`CubeEngine::from_snapshot`](super::CubeEngine::from_snapshot).
//!
//! The current array is not stored; it is replayed from `initial` and
//! `history` on restore.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{CubeResult, CubeRngState, Facelets};
use crate::moves::Move;

/// Everything needed to rebuild a [`CubeEngine`](super::CubeEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSnapshot {
    /// Array the history is replayed onto.
    pub initial: Facelets,
    /// Moves applied so far, oldest first.
    pub history: Vector<Move>,
    /// Scramble RNG position.
    pub rng: CubeRngState,
    /// Default scramble length.
    pub scramble_length: usize,
}

impl CubeSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> CubeResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`CubeSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> CubeResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
