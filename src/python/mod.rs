//! Python bindings for the flower-pairs engine.
//!
//! Lets a Python presentation layer drive a game.
//!
//! # Quick Start
//!
//! ```python
//! import flower_pairs as fp
//!
//! game = fp.MemoryGame(number_of_pairs=6, seed=42)
//!
//! for card in game.cards():
//!     print(card.id, card.content, card.is_face_up)
//!
//! game.choose(0)
//! game.choose(1)
//! print(game.match_progress())  # 1.0
//!
//! game.restart()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// flower_pairs: a memory-matching card game engine.
#[pymodule]
fn flower_pairs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PyMemoryGame>()?;

    Ok(())
}
