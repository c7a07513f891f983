use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser plumbing around the picker. The picker itself
/// never fails; these only decide whether the surface can be set up.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("local storage unavailable")]
    NoStorage,
    #[error("element '{0}' is not mounted")]
    MissingElement(&'static str),
    #[error("{op} failed: {message}")]
    Js { op: &'static str, message: String },
}

impl DomError {
    pub fn js(op: &'static str, value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Js { op, message }
    }
}
