//! UI Surface
//!
//! Everything a workflow is allowed to do to the page.

use crate::models::MenuItem;

/// Inline error elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRegion {
    Login,
    AddItem,
    EditItem,
}

/// Bootstrap modals on the menu page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    AddItem,
    EditItem,
    ConfirmDelete,
}

pub trait Ui {
    /// Put `message` in the region and make it visible
    fn show_error(&self, region: ErrorRegion, message: &str);
    fn hide_error(&self, region: ErrorRegion);
    /// Blocking confirmation dialog
    fn alert(&self, message: &str);
    fn reload(&self);
    fn navigate(&self, path: &str);
    fn open_modal(&self, modal: Modal);
    fn close_modal(&self, modal: Modal);
    fn reset_add_form(&self);
    /// Copy a freshly fetched item into the edit form, including the current
    /// image preview
    fn fill_edit_form(&self, item: &MenuItem);
    /// Name the item the confirm-delete modal is about
    fn set_delete_target(&self, id: i64, name: &str);
}
