//! Test Doubles
//!
//! Scripted transport and a UI that records what the workflows did to it.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;

use crate::error::RequestError;
use crate::models::MenuItem;
use crate::transport::{ApiRequest, ApiResponse, Attachment, Transport};
use crate::ui::{ErrorRegion, Modal, Ui};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeFile {
    pub name: String,
    pub size: u64,
}

impl FakeFile {
    pub fn new(name: &str, size: u64) -> Self {
        Self { name: name.to_string(), size }
    }
}

impl Attachment for FakeFile {
    fn size(&self) -> u64 {
        self.size
    }
}

/// Answers requests from a queue and keeps every request it saw
#[derive(Default)]
pub struct MockTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, RequestError>>>,
    sent: RefCell<Vec<ApiRequest<FakeFile>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(RequestError::Network(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest<FakeFile>> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    type Attachment = FakeFile;

    async fn send(&self, request: ApiRequest<FakeFile>) -> Result<ApiResponse, RequestError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Network("no scripted reply".into())))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    ShowError(ErrorRegion, String),
    HideError(ErrorRegion),
    Alert(String),
    Reload,
    Navigate(String),
    OpenModal(Modal),
    CloseModal(Modal),
    ResetAddForm,
    FillEditForm(i64),
    SetDeleteTarget(i64, String),
}

#[derive(Default)]
pub struct RecordingUi {
    events: RefCell<Vec<UiEvent>>,
}

impl RecordingUi {
    pub fn events(&self) -> Vec<UiEvent> {
        self.events.borrow().clone()
    }

    pub fn last(&self) -> Option<UiEvent> {
        self.events.borrow().last().cloned()
    }

    /// Last `n` events, oldest first
    pub fn tail(&self, n: usize) -> Vec<UiEvent> {
        let events = self.events.borrow();
        events[events.len().saturating_sub(n)..].to_vec()
    }

    pub fn reloaded(&self) -> bool {
        self.events.borrow().contains(&UiEvent::Reload)
    }

    pub fn navigated(&self) -> bool {
        self.events.borrow().iter().any(|e| matches!(e, UiEvent::Navigate(_)))
    }

    fn push(&self, event: UiEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl Ui for RecordingUi {
    fn show_error(&self, region: ErrorRegion, message: &str) {
        self.push(UiEvent::ShowError(region, message.to_string()));
    }

    fn hide_error(&self, region: ErrorRegion) {
        self.push(UiEvent::HideError(region));
    }

    fn alert(&self, message: &str) {
        self.push(UiEvent::Alert(message.to_string()));
    }

    fn reload(&self) {
        self.push(UiEvent::Reload);
    }

    fn navigate(&self, path: &str) {
        self.push(UiEvent::Navigate(path.to_string()));
    }

    fn open_modal(&self, modal: Modal) {
        self.push(UiEvent::OpenModal(modal));
    }

    fn close_modal(&self, modal: Modal) {
        self.push(UiEvent::CloseModal(modal));
    }

    fn reset_add_form(&self) {
        self.push(UiEvent::ResetAddForm);
    }

    fn fill_edit_form(&self, item: &MenuItem) {
        self.push(UiEvent::FillEditForm(item.menu_item_id));
    }

    fn set_delete_target(&self, id: i64, name: &str) {
        self.push(UiEvent::SetDeleteTarget(id, name.to_string()));
    }
}
