//! Login Page
//!
//! Binds `#login-form`.

use std::rc::Rc;

use leptos::task::spawn_local;
use menu_workflow::LoginForm;
use web_sys::{Event, HtmlFormElement};

use super::PageContext;
use crate::dom::{by_id, field_value, Listener, Listeners};
use crate::error::DomResult;

pub fn bind(ctx: Rc<PageContext>) -> DomResult<Listeners> {
    let form: HtmlFormElement = by_id(&ctx.document, "login-form")?;
    let mut listeners = Listeners::default();

    listeners.push(Listener::new(&form, "submit", move |ev: Event| {
        ev.prevent_default();
        let form = LoginForm {
            username: field_value(&ctx.document, "username").unwrap_or_default(),
            password: field_value(&ctx.document, "password").unwrap_or_default(),
        };
        let ctx = ctx.clone();
        spawn_local(async move {
            // Errors are already on the form
            let _ = ctx.session().submit(form).await;
        });
    })?);

    log::debug!("Login form bound");
    Ok(listeners)
}
