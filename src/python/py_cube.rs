//! Cube engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{index, CubeError, EngineConfig, Face, Facelets};
use crate::engine::{CubeEngine, CubeSnapshot};

fn to_py_err(err: CubeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_face(face: &str) -> PyResult<Face> {
    face.parse::<Face>().map_err(to_py_err)
}

/// Slot of a face letter and 1-based position in the 54-letter state.
#[pyfunction]
pub fn facelet_index(face: &str, position: u8) -> PyResult<usize> {
    index(parse_face(face)?, position).map_err(to_py_err)
}

/// Python wrapper for CubeEngine.
#[pyclass(name = "Cube")]
#[derive(Clone, Debug)]
pub struct PyCube(pub CubeEngine);

#[pymethods]
impl PyCube {
    /// Create a cube, optionally from a 54-letter state and/or a move sequence.
    #[new]
    #[pyo3(signature = (moves=None, seed=None, facelets=None))]
    fn new(moves: Option<&str>, seed: Option<u64>, facelets: Option<&str>) -> PyResult<Self> {
        let mut config = EngineConfig::default();
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        if let Some(letters) = facelets {
            let facelets: Facelets = letters.parse().map_err(to_py_err)?;
            config = config.with_initial_facelets(facelets);
        }
        if let Some(moves) = moves {
            config = config.with_initial_sequence(moves);
        }
        Ok(Self(CubeEngine::with_config(config)))
    }

    /// Restore a cube from `to_bytes` output.
    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        let snapshot = CubeSnapshot::from_bytes(bytes).map_err(to_py_err)?;
        Ok(Self(CubeEngine::from_snapshot(&snapshot)))
    }

    /// Apply a move sequence. Returns the number of moves applied.
    fn apply(&mut self, moves: &str) -> usize {
        self.0.apply_move_sequence(moves)
    }

    /// Clear history and return to the starting state.
    fn reset(&mut self) {
        self.0.reset();
    }

    /// Reset and apply `length` random moves (default length if omitted).
    #[pyo3(signature = (length=None))]
    fn scramble(&mut self, length: Option<usize>) {
        match length {
            Some(n) => self.0.scramble(n),
            None => self.0.scramble_default(),
        }
    }

    /// Current state as 54 color letters.
    fn state(&self) -> String {
        self.0.current_state().to_letters()
    }

    /// Check if the cube is solved.
    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    /// Moves applied so far.
    fn history(&self) -> Vec<String> {
        self.0.history_tokens()
    }

    /// Color letter at a face letter and 1-based position.
    fn sticker(&self, face: &str, position: u8) -> PyResult<String> {
        let color = self.0.sticker_at(parse_face(face)?, position).map_err(to_py_err)?;
        Ok(color.letter().to_string())
    }

    /// Unfolded net, one face row per line.
    fn net(&self) -> String {
        self.0.current_state().net()
    }

    /// Encode the cube for storage.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.0.snapshot().to_bytes().map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn __len__(&self) -> usize {
        self.0.history_len()
    }

    fn __repr__(&self) -> String {
        format!(
            "Cube(moves={}, solved={})",
            self.0.history_len(),
            self.0.is_solved()
        )
    }
}
