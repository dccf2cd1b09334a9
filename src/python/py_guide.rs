//! Guide bindings for Python.
//!
//! Views and rule bundles cross the boundary as JSON strings; the caller
//! decodes them with `json.loads`.

use pyo3::prelude::*;

use crate::catalog::SquareCatalog;
use crate::core::{GuideConfig, SquareId};
use crate::error::GuideError;
use crate::guide::Guide;

fn to_py_err(err: GuideError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", err))
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| to_py_err(e.into()))
}

/// Python wrapper for Guide.
#[pyclass(name = "Guide")]
#[derive(Clone, Debug)]
pub struct PyGuide {
    inner: Guide,
}

#[pymethods]
impl PyGuide {
    /// Create a guide.
    ///
    /// # Arguments
    /// - catalog_json: Board dataset; the classic board when omitted
    /// - config_json: Guide configuration; defaults when omitted
    #[new]
    #[pyo3(signature = (catalog_json = None, config_json = None))]
    fn new(catalog_json: Option<&str>, config_json: Option<&str>) -> PyResult<Self> {
        let catalog = match catalog_json {
            Some(json) => SquareCatalog::from_json(json).map_err(to_py_err)?,
            None => SquareCatalog::standard(),
        };
        let config = match config_json {
            Some(json) => GuideConfig::from_json(json).map_err(to_py_err)?,
            None => GuideConfig::default(),
        };
        Ok(Self {
            inner: Guide::new(catalog).with_config(config),
        })
    }

    /// Interpret an engine movement result (JSON, `null` for none).
    ///
    /// Returns the view as JSON.
    fn interpret_json(&self, result_json: &str) -> PyResult<String> {
        let view = self.inner.interpret_json(result_json).map_err(to_py_err)?;
        to_json(&view)
    }

    /// Rules for the square at `square_id` as JSON, or None.
    fn classify(&self, square_id: u32) -> PyResult<Option<String>> {
        match self.inner.rules_for(SquareId::new(square_id)).map_err(to_py_err)? {
            Some(rules) => to_json(rules).map(Some),
            None => Ok(None),
        }
    }

    /// Number of squares on the board.
    fn __len__(&self) -> usize {
        self.inner.catalog().len()
    }

    fn __repr__(&self) -> String {
        format!("Guide(squares={})", self.inner.catalog().len())
    }
}
