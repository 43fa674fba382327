use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures in the browser-facing wiring. The simulation itself never fails.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("no global window available")]
    NoWindow,
    #[error("no document attached to the window")]
    NoDocument,
    #[error("canvas element `{0}` not found")]
    CanvasNotFound(String),
    #[error("element `{0}` is not a canvas")]
    NotACanvas(String),
    #[error("2d rendering context unavailable")]
    ContextUnavailable,
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> JsValue {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Error::new(&err.to_string()).into()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            JsValue::from_str(&err.to_string())
        }
    }
}
