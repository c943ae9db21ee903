//! Browser API Bindings
//!
//! `fetch` transport and localStorage token store behind the workflow traits.

mod fetch;
mod storage;

pub use fetch::{FetchTransport, FileAttachment};
pub use storage::LocalStorageTokens;

use menu_workflow::ApiClient;

/// The client every page handler talks through
pub type Client = ApiClient<FetchTransport, LocalStorageTokens>;
