//! Bootstrap Modal Bindings
//!
//! Thin bridge to `bootstrap.Modal` loaded by the page template.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::error::{DomError, DomResult};

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Modal`
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &Modal);

    #[wasm_bindgen(method)]
    fn hide(this: &Modal);
}

/// A modal element with its Bootstrap instance
pub struct ModalHandle {
    inner: Modal,
}

impl ModalHandle {
    pub fn for_element(element: &Element) -> DomResult<Self> {
        Modal::get_or_create_instance(element)
            .map(|inner| Self { inner })
            .map_err(DomError::from)
    }

    pub fn show(&self) {
        self.inner.show();
    }

    pub fn hide(&self) {
        self.inner.hide();
    }
}
