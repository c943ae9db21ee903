//! Menu Workflow
//!
//! Browser-independent core of the menu admin panel: data models, local
//! validation, the REST client and the session / menu-item workflows that
//! drive a [`Ui`].
//!
//! The wasm frontend supplies a `fetch` based [`Transport`], a localStorage
//! [`TokenStore`] and a DOM backed [`Ui`]; tests supply recording doubles.

mod client;
mod error;
mod filter;
mod form;
mod models;
mod session;
mod token;
mod transport;
mod ui;
mod menu_items;

#[cfg(test)]
mod testing;

pub use client::{ApiClient, DEFAULT_API_PREFIX};
pub use error::{RequestError, ValidationError, WorkflowError, WorkflowResult};
pub use filter::CategoryFilter;
pub use form::{LoginForm, MenuItemForm};
pub use models::{Credentials, LoginResponse, MenuItem, MenuItemDraft};
pub use session::{SessionFlow, DEFAULT_DASHBOARD_PATH};
pub use token::{MemoryTokenStore, TokenStore};
pub use transport::{ApiRequest, ApiResponse, Attachment, Body, Method, Transport};
pub use ui::{ErrorRegion, Modal, Ui};
pub use menu_items::MenuItemWorkflow;
