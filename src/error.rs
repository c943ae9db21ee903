//! DOM Errors

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

pub type DomResult<T> = Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("window has no document")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingElement(String),
    #[error("element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(js_message(&value))
    }
}

/// Best effort text for a thrown JS value
pub fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
