//! Menu Management Page
//!
//! Binds the filter, the add/edit modals and the per-row action buttons.
//! Elements the template leaves out are skipped with a warning, so partial
//! pages (e.g. a read-only view without the add modal) still work.

use std::rc::Rc;

use leptos::task::spawn_local;
use menu_workflow::{CategoryFilter, MenuItemForm};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, File, FormData, HtmlElement, HtmlFormElement, HtmlInputElement};

use super::PageContext;
use crate::api::FileAttachment;
use crate::dom::{by_id, data_attr, field_value, parse_id, query_all, Listener, Listeners};
use crate::error::{DomError, DomResult};

// ========================
// Binding
// ========================

/// The modal's save button and the form's own `submit` (Enter in a field).
/// Cancelling the click stops it from also submitting the form.
const ADD_TRIGGERS: [(&str, &str); 2] = [("addItemBtn", "click"), ("addMenuItemForm", "submit")];
const EDIT_TRIGGERS: [(&str, &str); 2] = [("updateItemBtn", "click"), ("editMenuItemForm", "submit")];

pub fn bind(ctx: Rc<PageContext>) -> DomResult<Listeners> {
    let mut listeners = Listeners::default();

    on_id(&ctx, &mut listeners, "addMenuItemButton", "click", |ctx, _| {
        ctx.menu().open_add();
    })?;

    on_id(&ctx, &mut listeners, "filterButton", "click", |ctx, _| apply_filter(ctx))?;
    on_id(&ctx, &mut listeners, "categoryFilter", "change", |ctx, _| apply_filter(ctx))?;

    for (id, event) in ADD_TRIGGERS {
        on_id(&ctx, &mut listeners, id, event, submit_add)?;
    }
    for (id, event) in EDIT_TRIGGERS {
        on_id(&ctx, &mut listeners, id, event, submit_edit)?;
    }

    on_id(&ctx, &mut listeners, "confirmDeleteBtn", "click", |ctx, _| {
        let id = parse_id(field_value(&ctx.document, "deleteItemId").ok());
        match id {
            Some(id) => spawn_local(async move {
                let _ = ctx.menu().confirm_delete(id).await;
            }),
            None => log::error!("Confirm delete without a target id"),
        }
    })?;

    on_each(&ctx, &mut listeners, ".edit-btn", |ctx, el| {
        if let Some(id) = parse_id(data_attr(&el, "id")) {
            spawn_local(async move {
                let _ = ctx.menu().load_for_edit(id).await;
            });
        }
    })?;

    on_each(&ctx, &mut listeners, ".toggle-btn", |ctx, el| {
        if let Some(id) = parse_id(data_attr(&el, "id")) {
            spawn_local(async move {
                let _ = ctx.menu().toggle(id).await;
            });
        }
    })?;

    on_each(&ctx, &mut listeners, ".delete-btn", |ctx, el| {
        if let Some(id) = parse_id(data_attr(&el, "id")) {
            let name = data_attr(&el, "name").unwrap_or_default();
            ctx.menu().request_delete(id, &name);
        }
    })?;

    log::debug!("Menu management page bound ({} listeners)", listeners.len());
    Ok(listeners)
}

fn submit_add(ctx: Rc<PageContext>, ev: Event) {
    ev.prevent_default();
    match read_add_form(&ctx) {
        Ok((form, image)) => spawn_local(async move {
            let _ = ctx.menu().create(form, image).await;
        }),
        Err(e) => log::error!("Reading add form: {}", e),
    }
}

fn submit_edit(ctx: Rc<PageContext>, ev: Event) {
    ev.prevent_default();
    match read_edit_form(&ctx) {
        Ok((id, form, image)) => spawn_local(async move {
            let _ = ctx.menu().update(id, form, image).await;
        }),
        Err(e) => log::error!("Reading edit form: {}", e),
    }
}

/// Listen on `#id` if the page has it
fn on_id(
    ctx: &Rc<PageContext>,
    listeners: &mut Listeners,
    id: &str,
    event: &'static str,
    handler: impl Fn(Rc<PageContext>, Event) + 'static,
) -> DomResult<()> {
    let Some(target) = ctx.document.get_element_by_id(id) else {
        log::warn!("#{} not found, handler not bound", id);
        return Ok(());
    };
    let ctx = ctx.clone();
    listeners.push(Listener::new(&target, event, move |ev| handler(ctx.clone(), ev))?);
    Ok(())
}

/// Click handler on every element matching `selector`; the handler gets the
/// element the listener sits on, not the inner icon that was clicked
fn on_each(
    ctx: &Rc<PageContext>,
    listeners: &mut Listeners,
    selector: &str,
    handler: impl Fn(Rc<PageContext>, Element) + Clone + 'static,
) -> DomResult<()> {
    for el in query_all(&ctx.document, selector)? {
        let ctx = ctx.clone();
        let handler = handler.clone();
        let target: &EventTarget = &el;
        listeners.push(Listener::new(target, "click", move |ev: Event| {
            if let Some(el) = ev.current_target().and_then(|t| t.dyn_into::<Element>().ok()) {
                handler(ctx.clone(), el);
            }
        })?);
    }
    Ok(())
}

// ========================
// Filter
// ========================

fn apply_filter(ctx: Rc<PageContext>) {
    let value = match field_value(&ctx.document, "categoryFilter") {
        Ok(v) => v,
        Err(e) => {
            log::warn!("Category filter unreadable: {}", e);
            return;
        }
    };
    let filter = CategoryFilter::from_select(&value);

    let rows = match query_all(&ctx.document, ".menu-item") {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("Menu rows unreadable: {}", e);
            return;
        }
    };
    let mut shown = 0;
    for row in &rows {
        let visible = filter.shows(data_attr(row, "category").as_deref());
        if let Some(row) = row.dyn_ref::<HtmlElement>() {
            if let Err(e) = row.style().set_property("display", row_display(visible)) {
                log::warn!("Menu row display not set: {}", DomError::from(e));
            }
        }
        shown += usize::from(visible);
    }
    log::debug!("Filter {:?}: {} of {} items shown", filter, shown, rows.len());
}

fn row_display(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        "none"
    }
}

// ========================
// Form readers
// ========================

fn read_add_form(ctx: &PageContext) -> DomResult<(MenuItemForm, Option<FileAttachment>)> {
    let form: HtmlFormElement = by_id(&ctx.document, "addMenuItemForm")?;
    let data = FormData::new_with_form(&form)?;
    let text = |name: &str| data.get(name).as_string().unwrap_or_default();

    let fields = MenuItemForm {
        name: text("name"),
        description: text("description"),
        price: text("price"),
        category_id: text("category_id"),
        // Unchecked checkboxes are absent from FormData
        is_available: data.has("is_available"),
    };
    Ok((fields, picked_file(&data)))
}

fn read_edit_form(ctx: &PageContext) -> DomResult<(i64, MenuItemForm, Option<FileAttachment>)> {
    let doc = &ctx.document;
    let id = parse_id(field_value(doc, "editItemId").ok())
        .ok_or_else(|| DomError::MissingElement("editItemId".into()))?;

    let fields = MenuItemForm {
        name: field_value(doc, "editName")?,
        description: field_value(doc, "editDescription")?,
        price: field_value(doc, "editPrice")?,
        category_id: field_value(doc, "editCategory")?,
        is_available: by_id::<HtmlInputElement>(doc, "editIsAvailable")?.checked(),
    };

    let form: HtmlFormElement = by_id(doc, "editMenuItemForm")?;
    let data = FormData::new_with_form(&form)?;
    Ok((id, fields, picked_file(&data)))
}

/// The `image` file input, if anything was picked
fn picked_file(data: &FormData) -> Option<FileAttachment> {
    data.get("image").dyn_into::<File>().ok().map(FileAttachment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_forms_bind_native_submit() {
        assert!(ADD_TRIGGERS.contains(&("addMenuItemForm", "submit")));
        assert!(ADD_TRIGGERS.contains(&("addItemBtn", "click")));
        assert!(EDIT_TRIGGERS.contains(&("editMenuItemForm", "submit")));
        assert!(EDIT_TRIGGERS.contains(&("updateItemBtn", "click")));
    }

    #[test]
    fn test_hidden_rows_use_display_none() {
        assert_eq!(row_display(true), "");
        assert_eq!(row_display(false), "none");
    }
}
