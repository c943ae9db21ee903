//! Page Bootstrap
//!
//! Reads the page config, installs logging and binds the handlers of the
//! page the template declared.

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::{PageConfig, PageKind};
use crate::dom::Listeners;
use crate::error::{DomError, DomResult};
use crate::logger;
use crate::pages::{self, PageContext};

/// Owns every listener bound for the current page. Dropping it detaches them.
pub struct PageHandle {
    _listeners: Listeners,
}

impl PageHandle {
    /// Keep the bindings for the rest of the page's life; the next
    /// navigation or reload tears everything down anyway
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

/// Run once per page load
pub fn init(window: &Window) -> DomResult<PageHandle> {
    let document = window.document().ok_or(DomError::NoDocument)?;
    let body = document
        .body()
        .ok_or_else(|| DomError::MissingElement("body".into()))?;

    let config = PageConfig::from_body(&body);
    logger::init(config.log_level);

    let page = config.page.unwrap_or_else(|| detect(&document));
    let ctx = Rc::new(PageContext::new(window.clone(), document, config));

    let listeners = match page {
        PageKind::Login => pages::login::bind(ctx)?,
        PageKind::MenuManagement => pages::menu::bind(ctx)?,
        PageKind::Other => Listeners::default(),
    };
    if listeners.is_empty() {
        log::debug!("Nothing to bind on this page");
    } else {
        log::info!("Page {:?} ready, {} handlers bound", page, listeners.len());
    }

    Ok(PageHandle { _listeners: listeners })
}

/// Templates that predate `data-page`: only the login form is recognisable
fn detect(document: &Document) -> PageKind {
    if document.get_element_by_id("login-form").is_some() {
        PageKind::Login
    } else {
        PageKind::Other
    }
}
