//! DOM Glue
//!
//! Lookups and small mutations on the server-rendered admin pages.

mod bootstrap;
mod listeners;
mod ui;

pub use listeners::{Listener, Listeners};
pub use ui::DomUi;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::error::{DomError, DomResult};

/// Bootstrap's utility class for `display: none`
pub const HIDDEN_CLASS: &str = "d-none";

/// Element by id, cast to the expected type
pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> DomResult<T> {
    doc.get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| DomError::WrongElement {
            id: id.to_string(),
            expected: std::any::type_name::<T>().rsplit("::").next().unwrap_or("element"),
        })
}

/// All elements matching a selector, in document order
pub fn query_all(doc: &Document, selector: &str) -> DomResult<Vec<Element>> {
    let nodes = doc.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect())
}

/// `data-<name>` attribute
pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
}

/// Numeric id from a `data-id` attribute or an input value
pub fn parse_id(raw: Option<String>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// Value of an input, textarea or select
pub fn field_value(doc: &Document, id: &str) -> DomResult<String> {
    let el: Element = by_id(doc, id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        Ok(input.value())
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        Ok(area.value())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        Ok(select.value())
    } else {
        Err(DomError::WrongElement { id: id.to_string(), expected: "form field" })
    }
}

pub fn set_field_value(doc: &Document, id: &str, value: &str) -> DomResult<()> {
    let el: Element = by_id(doc, id)?;
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
    } else {
        return Err(DomError::WrongElement { id: id.to_string(), expected: "form field" });
    }
    Ok(())
}

/// Toggle Bootstrap's `d-none`
pub fn set_hidden(el: &Element, hidden: bool) -> DomResult<()> {
    let classes = el.class_list();
    if hidden {
        classes.add_1(HIDDEN_CLASS)?;
    } else {
        classes.remove_1(HIDDEN_CLASS)?;
    }
    Ok(())
}
