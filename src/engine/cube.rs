//! The cube engine: move history plus the state derived from it.
//!
//! ## State Model
//!
//! An engine owns an initial facelet array (solved unless configured
//! otherwise) and an append-only move history. The current state is
//! always `initial` with every history move applied in order. It is
//! cached and updated on each mutation; [`CubeEngine::replay`] recomputes
//! it from scratch.
//!
//! ## Example
//!
//! ```
//! use rubik_engine::{Color, CubeEngine, Face};
//!
//! let mut cube = CubeEngine::new();
//! cube.apply_move_sequence("R");
//! assert_eq!(cube.sticker_at(Face::U, 3).unwrap(), Color::Blue);
//!
//! cube.apply_move_sequence("R'");
//! assert!(cube.is_solved());
//! assert_eq!(cube.history_tokens(), ["R", "R'"]);
//! ```

use im::Vector;

use crate::core::{Color, CubeResult, CubeRng, EngineConfig, Face, Facelets, SOLVED};
use crate::moves::{apply_move, apply_moves, format_sequence, parse_sequence, Move};

use super::scramble::random_moves;
use super::snapshot::CubeSnapshot;

/// A single cube session.
///
/// Mutation goes through `&mut self`, so one owner serializes all
/// changes. Reads are idempotent between mutations.
#[derive(Clone, Debug)]
pub struct CubeEngine {
    initial: Facelets,
    history: Vector<Move>,
    current: Facelets,
    rng: CubeRng,
    scramble_length: usize,
}

impl Default for CubeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeEngine {
    /// A solved cube with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// A solved cube with `sequence` applied.
    #[must_use]
    pub fn with_sequence(sequence: &str) -> Self {
        Self::with_config(EngineConfig::default().with_initial_sequence(sequence))
    }

    /// Start from a custom facelet array.
    #[must_use]
    pub fn from_facelets(facelets: Facelets) -> Self {
        Self::with_config(EngineConfig::default().with_initial_facelets(facelets))
    }

    /// Build an engine from a full configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let initial = config.initial_facelets.unwrap_or(SOLVED);
        let mut engine = Self {
            initial,
            history: Vector::new(),
            current: initial,
            rng: CubeRng::new(config.seed),
            scramble_length: config.scramble_length,
        };
        if let Some(sequence) = config.initial_sequence.as_deref() {
            engine.apply_move_sequence(sequence);
        }
        engine
    }

    // === Mutations ===

    /// Parse `sequence` and append its moves to the history.
    ///
    /// Malformed tokens are dropped (see [`parse_sequence`]). Returns the
    /// number of moves appended.
    pub fn apply_move_sequence(&mut self, sequence: &str) -> usize {
        let parsed = parse_sequence(sequence);
        for &mv in &parsed.moves {
            self.push_move(mv);
        }
        parsed.moves.len()
    }

    /// Append already-parsed moves to the history.
    pub fn apply_moves(&mut self, moves: &[Move]) {
        for &mv in moves {
            self.push_move(mv);
        }
    }

    fn push_move(&mut self, mv: Move) {
        log::trace!("applying {}", mv);
        self.current = apply_move(&self.current, mv);
        self.history.push_back(mv);
    }

    /// Empty the history and return to the initial array.
    pub fn reset(&mut self) {
        log::debug!("resetting cube after {} move(s)", self.history.len());
        self.history.clear();
        self.current = self.initial;
    }

    /// Reset, then apply `length` random moves.
    ///
    /// The moves go through the same parse-and-append path as any
    /// caller-supplied sequence, so the history holds exactly `length`
    /// moves afterwards.
    pub fn scramble(&mut self, length: usize) {
        self.reset();
        let sequence = format_sequence(&random_moves(&mut self.rng, length));
        log::debug!(
            "scrambling with {} move(s) from seed {}: {}",
            length,
            self.rng.seed(),
            sequence
        );
        self.apply_move_sequence(&sequence);
    }

    /// Scramble with the configured default length.
    pub fn scramble_default(&mut self) {
        self.scramble(self.scramble_length);
    }

    // === Queries ===

    /// The current facelet array.
    #[must_use]
    pub fn current_state(&self) -> Facelets {
        self.current
    }

    /// The array the history is replayed onto.
    #[must_use]
    pub fn initial_state(&self) -> Facelets {
        self.initial
    }

    /// Check if the current array equals the solved array, slot by slot.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.current == SOLVED
    }

    /// Moves applied so far, oldest first.
    ///
    /// The returned vector shares structure with the engine's history but
    /// is an independent value; changing it never touches the engine.
    #[must_use]
    pub fn move_history(&self) -> Vector<Move> {
        self.history.clone()
    }

    /// History as notation tokens.
    #[must_use]
    pub fn history_tokens(&self) -> Vec<String> {
        self.history.iter().map(Move::to_string).collect()
    }

    /// Number of moves in the history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Color currently at a face and 1-based position.
    pub fn sticker_at(&self, face: Face, position: u8) -> CubeResult<Color> {
        self.current.at(face, position)
    }

    /// Default scramble length for `scramble_default`.
    #[must_use]
    pub fn scramble_length(&self) -> usize {
        self.scramble_length
    }

    /// Recompute the current array from the initial array and history.
    #[must_use]
    pub fn replay(&self) -> Facelets {
        let moves: Vec<Move> = self.history.iter().copied().collect();
        apply_moves(&self.initial, &moves)
    }

    /// Check if the cached array matches a full replay.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.replay() == self.current
    }

    // === Snapshots ===

    /// Capture everything needed to rebuild this engine.
    #[must_use]
    pub fn snapshot(&self) -> CubeSnapshot {
        CubeSnapshot {
            initial: self.initial,
            history: self.history.clone(),
            rng: self.rng.state(),
            scramble_length: self.scramble_length,
        }
    }

    /// Rebuild an engine by replaying a snapshot's history.
    #[must_use]
    pub fn from_snapshot(snapshot: &CubeSnapshot) -> Self {
        let mut engine = Self {
            initial: snapshot.initial,
            history: snapshot.history.clone(),
            current: snapshot.initial,
            rng: CubeRng::from_state(&snapshot.rng),
            scramble_length: snapshot.scramble_length,
        };
        engine.current = engine.replay();
        engine
    }
}
