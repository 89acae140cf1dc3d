//! Python bindings for the cube engine.
//!
//! # Quick Start
//!
//! ```python
//! import rubik_engine as rubik
//!
//! cube = rubik.Cube("R U R' U'", seed=7)
//! cube.apply("F2")
//! print(cube.sticker("U", 3))
//!
//! cube.scramble(25)
//! assert len(cube.history()) == 25
//! ```

use pyo3::prelude::*;

mod py_cube;

pub use py_cube::*;

/// rubik_engine: a 3x3x3 Rubik's Cube move engine.
#[pymodule]
fn rubik_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCube>()?;
    m.add_function(wrap_pyfunction!(facelet_index, m)?)?;
    Ok(())
}
