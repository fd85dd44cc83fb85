use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that abort a mount. Everything optional degrades instead.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window available")]
    MissingWindow,
    #[error("no document available")]
    MissingDocument,
    #[error("{0} context unavailable")]
    ContextUnavailable(&'static str),
    #[error("dom error: {0}")]
    Dom(String),
}

impl MountError {
    pub fn dom(value: JsValue) -> Self {
        MountError::Dom(format!("{value:?}"))
    }
}

impl From<MountError> for JsValue {
    fn from(e: MountError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}
