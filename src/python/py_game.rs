//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{CardId, GameConfig};
use crate::engine::MemoryGame;

use super::py_core::PyCard;

/// Python wrapper for MemoryGame.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    game: MemoryGame,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - number_of_pairs: Pairs to deal (defaults to one per content key)
    /// - contents: Content key per pair (defaults to the six flowers)
    /// - seed: Shuffle seed (random when omitted)
    #[new]
    #[pyo3(signature = (number_of_pairs = None, contents = None, seed = None))]
    fn new(
        number_of_pairs: Option<usize>,
        contents: Option<Vec<String>>,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let mut config = contents.map_or_else(GameConfig::default, GameConfig::new);
        if let Some(count) = number_of_pairs {
            config = config.with_pairs(count);
        }
        config.seed = seed;

        let game =
            MemoryGame::from_config(&config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { game })
    }

    /// Cards in layout order.
    fn cards(&self) -> Vec<PyCard> {
        self.game.cards().iter().cloned().map(PyCard).collect()
    }

    /// Pick the card with the given id. Unknown or face-up cards are ignored.
    fn choose(&mut self, id: u32) {
        self.game.choose(CardId::new(id));
    }

    /// Reset and reshuffle.
    fn restart(&mut self) {
        self.game.restart();
    }

    /// Matched pairs so far.
    fn match_progress(&self) -> f64 {
        self.game.match_progress()
    }

    /// Have all pairs been matched?
    fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    #[getter]
    fn number_of_pairs(&self) -> usize {
        self.game.number_of_pairs()
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(pairs={}, matched={})",
            self.game.number_of_pairs(),
            self.game.matched_pairs()
        )
    }
}
