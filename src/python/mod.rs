//! Python bindings for board-guide.
//!
//! # Quick Start
//!
//! ```python
//! import json
//! import board_guide
//!
//! guide = board_guide.Guide()
//!
//! view = json.loads(guide.interpret_json(result_json))
//! rules = guide.classify(30)
//! ```

use pyo3::prelude::*;

mod py_guide;

pub use py_guide::*;

/// board-guide: movement views and square rules for a speed-die board game.
#[pymodule]
fn board_guide(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGuide>()?;

    Ok(())
}
