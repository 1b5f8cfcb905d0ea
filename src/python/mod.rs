//! Python bindings for the Pente engine.
//!
//! # Quick Start
//!
//! ```python
//! import pente
//!
//! game = pente.Pente(size=9, seed=42)
//! game.step(4, 4)
//!
//! # Rollout value of every legal move for the player to move
//! values = game.get_values(rollouts_per_action=50)
//! row, col = game.legal_moves()[values.argmax()]
//!
//! # Random self-play record
//! history = game.play_random_game(seed=7)
//! final, _ = history[-1]
//! print(final.winner())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::PenteError;

mod py_pente;

pub use py_pente::*;

impl From<PenteError> for PyErr {
    fn from(err: PenteError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// pente: a Pente engine with Monte-Carlo rollout evaluation.
#[pymodule]
fn pente(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPente>()?;
    Ok(())
}
