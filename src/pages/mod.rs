//! Page Binders
//!
//! One binder per admin page; each attaches its handlers to the
//! server-rendered markup and returns the owning [`Listeners`].

pub mod login;
pub mod menu;

use menu_workflow::{ApiClient, MenuItemWorkflow, SessionFlow};
use web_sys::{Document, Window};

use crate::api::{Client, FetchTransport, LocalStorageTokens};
use crate::config::PageConfig;
use crate::dom::DomUi;

/// Shared by every handler of a page
pub struct PageContext {
    pub document: Document,
    pub client: Client,
    pub ui: DomUi,
    pub config: PageConfig,
}

impl PageContext {
    pub fn new(window: Window, document: Document, config: PageConfig) -> Self {
        let client = ApiClient::with_prefix(
            FetchTransport,
            LocalStorageTokens::new(&config.token_key),
            &config.api_prefix,
        );
        Self {
            ui: DomUi::new(window, document.clone()),
            document,
            client,
            config,
        }
    }

    pub fn session(&self) -> SessionFlow<'_, FetchTransport, LocalStorageTokens, DomUi> {
        SessionFlow::new(&self.client, &self.ui, &self.config.dashboard_path)
    }

    pub fn menu(&self) -> MenuItemWorkflow<'_, FetchTransport, LocalStorageTokens, DomUi> {
        MenuItemWorkflow::new(&self.client, &self.ui)
    }
}
