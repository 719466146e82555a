//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::cards::Card;

/// Python wrapper for Card.
///
/// A read-only copy; re-read `MemoryGame.cards()` after each move.
#[pyclass(name = "Card", frozen)]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Unique card id.
    #[getter]
    fn id(&self) -> u32 {
        self.0.id().raw()
    }

    /// Face content key.
    #[getter]
    fn content(&self) -> &str {
        self.0.content()
    }

    #[getter]
    fn is_face_up(&self) -> bool {
        self.0.is_face_up()
    }

    #[getter]
    fn is_matched(&self) -> bool {
        self.0.is_matched()
    }

    fn __repr__(&self) -> String {
        format!(
            "Card(id={}, content={:?}, face_up={}, matched={})",
            self.0.id().raw(),
            self.0.content(),
            self.0.is_face_up(),
            self.0.is_matched()
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id().raw())
    }
}
