//! Python bindings for the Easy21 environment.
//!
//! # Quick Start
//!
//! ```python
//! import easy21
//!
//! env = easy21.Easy21(seed=42)
//! obs = env.reset()
//! obs, reward, done = env.step(1)  # hit
//! if not done:
//!     obs, reward, done = env.step(0)  # stick
//! ```

use pyo3::prelude::*;

mod py_env;

pub use py_env::*;

/// easy21: the Easy21 card game as an RL environment.
#[pymodule]
fn easy21(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEasy21>()?;
    Ok(())
}
