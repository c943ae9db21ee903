//! Menu Item Workflow
//!
//! Create / edit / update / toggle / delete. Every operation follows the same
//! shape: validate locally, call the API, show the failure inline or in a
//! dialog, or confirm and reload the page. The page is the only cache, so a
//! reload is how every success is reconciled.

use crate::client::ApiClient;
use crate::error::{RequestError, WorkflowError, WorkflowResult};
use crate::form::MenuItemForm;
use crate::models::{MenuItem, MenuItemDraft};
use crate::token::TokenStore;
use crate::transport::{Attachment, Transport};
use crate::ui::{ErrorRegion, Modal, Ui};

const ADD_FAILED: &str = "Failed to add menu item";
const UPDATE_FAILED: &str = "Failed to update menu item";
const LOAD_FAILED: &str = "Failed to load menu item details";
const TOGGLE_FAILED: &str = "Failed to update availability";
const DELETE_FAILED: &str = "Failed to delete menu item";

const ADDED: &str = "Menu item added successfully!";
const UPDATED: &str = "Menu item updated successfully!";
const TOGGLED: &str = "Availability updated successfully!";
const DELETED: &str = "Menu item deleted successfully!";

pub struct MenuItemWorkflow<'a, T, S, U> {
    client: &'a ApiClient<T, S>,
    ui: &'a U,
}

impl<'a, T: Transport, S: TokenStore, U: Ui> MenuItemWorkflow<'a, T, S, U> {
    pub fn new(client: &'a ApiClient<T, S>, ui: &'a U) -> Self {
        Self { client, ui }
    }

    /// Clear the add form and open its modal
    pub fn open_add(&self) {
        self.ui.reset_add_form();
        self.ui.hide_error(ErrorRegion::AddItem);
        self.ui.open_modal(Modal::AddItem);
    }

    pub async fn create(&self, form: MenuItemForm, image: Option<T::Attachment>) -> WorkflowResult<MenuItem> {
        let region = ErrorRegion::AddItem;
        self.ui.hide_error(region);
        let draft = self.validated(region, form)?;

        let created = self
            .client
            .create_menu_item(&draft)
            .await
            .map_err(|e| self.inline_failure(region, e, ADD_FAILED))?;
        log::info!("Created menu item {}", created.menu_item_id);

        self.upload_if_attached(created.menu_item_id, image).await;
        self.finish(Some(Modal::AddItem), ADDED);
        Ok(created)
    }

    /// Fetch the item into the edit form and open the edit modal
    pub async fn load_for_edit(&self, id: i64) -> WorkflowResult<MenuItem> {
        let item = self
            .client
            .get_menu_item(id)
            .await
            .map_err(|e| self.dialog_failure(e, LOAD_FAILED))?;

        self.ui.hide_error(ErrorRegion::EditItem);
        self.ui.fill_edit_form(&item);
        self.ui.open_modal(Modal::EditItem);
        Ok(item)
    }

    pub async fn update(&self, id: i64, form: MenuItemForm, image: Option<T::Attachment>) -> WorkflowResult<()> {
        let region = ErrorRegion::EditItem;
        self.ui.hide_error(region);
        let draft = self.validated(region, form)?;

        self.client
            .update_menu_item(id, &draft)
            .await
            .map_err(|e| self.inline_failure(region, e, UPDATE_FAILED))?;
        log::info!("Updated menu item {}", id);

        self.upload_if_attached(id, image).await;
        self.finish(Some(Modal::EditItem), UPDATED);
        Ok(())
    }

    pub async fn toggle(&self, id: i64) -> WorkflowResult<()> {
        self.client
            .toggle_availability(id)
            .await
            .map_err(|e| self.dialog_failure(e, TOGGLE_FAILED))?;
        log::info!("Toggled availability of menu item {}", id);

        self.finish(None, TOGGLED);
        Ok(())
    }

    /// First half of a delete: name the target and ask for confirmation.
    /// Nothing is sent until [`Self::confirm_delete`].
    pub fn request_delete(&self, id: i64, name: &str) {
        self.ui.set_delete_target(id, name);
        self.ui.open_modal(Modal::ConfirmDelete);
    }

    pub async fn confirm_delete(&self, id: i64) -> WorkflowResult<()> {
        self.client
            .delete_menu_item(id)
            .await
            .map_err(|e| self.dialog_failure(e, DELETE_FAILED))?;
        log::info!("Deleted menu item {}", id);

        self.finish(Some(Modal::ConfirmDelete), DELETED);
        Ok(())
    }

    // ========================
    // Shared steps
    // ========================

    fn validated(&self, region: ErrorRegion, form: MenuItemForm) -> WorkflowResult<MenuItemDraft> {
        form.into_draft().map_err(|e| {
            self.ui.show_error(region, &e.to_string());
            WorkflowError::Validation(e)
        })
    }

    /// Secondary upload. Runs only after the primary call succeeded and never
    /// undoes it.
    async fn upload_if_attached(&self, id: i64, image: Option<T::Attachment>) {
        let Some(file) = image.filter(|f| f.size() > 0) else {
            return;
        };
        match self.client.upload_image(id, file).await {
            Ok(()) => log::info!("Uploaded image for menu item {}", id),
            Err(e) => log::error!("Image upload for menu item {} failed: {}", id, e),
        }
    }

    fn finish(&self, modal: Option<Modal>, message: &str) {
        if let Some(modal) = modal {
            self.ui.close_modal(modal);
        }
        self.ui.alert(message);
        self.ui.reload();
    }

    fn inline_failure(&self, region: ErrorRegion, err: RequestError, fallback: &str) -> WorkflowError {
        log::error!("{}: {}", fallback, err);
        self.ui.show_error(region, &err.user_message(fallback));
        WorkflowError::Request(err)
    }

    fn dialog_failure(&self, err: RequestError, fallback: &str) -> WorkflowError {
        log::error!("{}: {}", fallback, err);
        self.ui.alert(&format!("Error: {}", err.user_message(fallback)));
        WorkflowError::Request(err)
    }
}
