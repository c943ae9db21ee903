//! DOM backed [`Ui`]

use menu_workflow::{ErrorRegion, MenuItem, Modal, Ui};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlImageElement, HtmlInputElement, Window};

use super::bootstrap::ModalHandle;
use super::{by_id, set_field_value, set_hidden};
use crate::error::DomResult;

pub struct DomUi {
    window: Window,
    document: Document,
}

impl DomUi {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn region_id(region: ErrorRegion) -> &'static str {
        match region {
            ErrorRegion::Login => "login-error",
            ErrorRegion::AddItem => "addErrorAlert",
            ErrorRegion::EditItem => "editErrorAlert",
        }
    }

    fn modal_id(modal: Modal) -> &'static str {
        match modal {
            Modal::AddItem => "addMenuItemModal",
            Modal::EditItem => "editMenuItemModal",
            Modal::ConfirmDelete => "confirmDeleteModal",
        }
    }

    fn modal(&self, modal: Modal) -> DomResult<ModalHandle> {
        let el: Element = by_id(&self.document, Self::modal_id(modal))?;
        ModalHandle::for_element(&el)
    }

    fn write_edit_form(&self, item: &MenuItem) -> DomResult<()> {
        let doc = &self.document;
        set_field_value(doc, "editItemId", &item.menu_item_id.to_string())?;
        set_field_value(doc, "editName", &item.name)?;
        set_field_value(doc, "editDescription", item.description.as_deref().unwrap_or(""))?;
        set_field_value(doc, "editPrice", &item.price.to_string())?;
        set_field_value(doc, "editCategory", &item.category_id.to_string())?;
        by_id::<HtmlInputElement>(doc, "editIsAvailable")?.set_checked(item.is_available);

        // A previously picked file must not ride along with the next update
        let form: HtmlFormElement = by_id(doc, "editMenuItemForm")?;
        if let Some(file_input) = form.query_selector("input[type=file]")? {
            if let Some(input) = file_input.dyn_ref::<HtmlInputElement>() {
                input.set_value("");
            }
        }

        let container: Element = by_id(doc, "currentImageContainer")?;
        match item.image_url.as_deref().filter(|url| !url.is_empty()) {
            Some(url) => {
                by_id::<HtmlImageElement>(doc, "currentImage")?.set_src(url);
                set_hidden(&container, false)
            }
            None => set_hidden(&container, true),
        }
    }

    fn write_delete_target(&self, id: i64, name: &str) -> DomResult<()> {
        set_field_value(&self.document, "deleteItemId", &id.to_string())?;
        by_id::<Element>(&self.document, "deleteItemName")?.set_text_content(Some(name));
        Ok(())
    }
}

/// UI calls are fire-and-forget; a broken page is only worth a console line
fn report(what: &str, result: DomResult<()>) {
    if let Err(e) = result {
        log::warn!("{} failed: {}", what, e);
    }
}

impl Ui for DomUi {
    fn show_error(&self, region: ErrorRegion, message: &str) {
        report(
            "show error",
            by_id::<Element>(&self.document, Self::region_id(region)).and_then(|el| {
                el.set_text_content(Some(message));
                set_hidden(&el, false)
            }),
        );
    }

    fn hide_error(&self, region: ErrorRegion) {
        report(
            "hide error",
            by_id::<Element>(&self.document, Self::region_id(region)).and_then(|el| set_hidden(&el, true)),
        );
    }

    fn alert(&self, message: &str) {
        report("alert", self.window.alert_with_message(message).map_err(Into::into));
    }

    fn reload(&self) {
        report("reload", self.window.location().reload().map_err(Into::into));
    }

    fn navigate(&self, path: &str) {
        report("navigate", self.window.location().set_href(path).map_err(Into::into));
    }

    fn open_modal(&self, modal: Modal) {
        report("open modal", self.modal(modal).map(|m| m.show()));
    }

    fn close_modal(&self, modal: Modal) {
        report("close modal", self.modal(modal).map(|m| m.hide()));
    }

    fn reset_add_form(&self) {
        report(
            "reset add form",
            by_id::<HtmlFormElement>(&self.document, "addMenuItemForm").map(|form| form.reset()),
        );
    }

    fn fill_edit_form(&self, item: &MenuItem) {
        report("fill edit form", self.write_edit_form(item));
    }

    fn set_delete_target(&self, id: i64, name: &str) {
        report("set delete target", self.write_delete_target(id, name));
    }
}
