//! Session Flow
//!
//! Login form submission: one JSON POST, token mirroring, redirect.

use crate::client::ApiClient;
use crate::error::{WorkflowError, WorkflowResult};
use crate::form::LoginForm;
use crate::token::TokenStore;
use crate::transport::Transport;
use crate::ui::{ErrorRegion, Ui};

pub const DEFAULT_DASHBOARD_PATH: &str = "/dashboard";

const SIGNING_IN: &str = "Signing in...";
const LOGIN_FAILED: &str = "Login failed";

pub struct SessionFlow<'a, T, S, U> {
    client: &'a ApiClient<T, S>,
    ui: &'a U,
    dashboard_path: &'a str,
}

impl<'a, T: Transport, S: TokenStore, U: Ui> SessionFlow<'a, T, S, U> {
    pub fn new(client: &'a ApiClient<T, S>, ui: &'a U, dashboard_path: &'a str) -> Self {
        Self { client, ui, dashboard_path }
    }

    /// Submit the login form. Navigates to the dashboard iff the server
    /// accepted the credentials; otherwise the error stays on the form.
    pub async fn submit(&self, form: LoginForm) -> WorkflowResult<()> {
        let credentials = match form.into_credentials() {
            Ok(c) => c,
            Err(e) => {
                self.ui.show_error(ErrorRegion::Login, &e.to_string());
                return Err(e.into());
            }
        };

        log::info!("Attempting login for user: {}", credentials.username);
        self.ui.show_error(ErrorRegion::Login, SIGNING_IN);

        match self.client.login(&credentials).await {
            Ok(resp) => {
                match resp.access_token.as_deref() {
                    Some(token) if !token.is_empty() => self.client.tokens().save(token),
                    // Cookie-only session; a token from an earlier login must not leak into it
                    _ => self.client.tokens().clear(),
                }
                log::info!("Login successful");
                self.ui.navigate(self.dashboard_path);
                Ok(())
            }
            Err(e) => {
                log::error!("Login error: {}", e);
                self.ui.show_error(ErrorRegion::Login, &e.user_message(LOGIN_FAILED));
                Err(WorkflowError::Request(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockTransport, RecordingUi, UiEvent};
    use crate::token::MemoryTokenStore;
    use crate::transport::{Body, Method};
    use crate::error::{RequestError, ValidationError};

    fn form(username: &str, password: &str) -> LoginForm {
        LoginForm { username: username.into(), password: password.into() }
    }

    #[tokio::test]
    async fn test_login_success_stores_token_and_navigates() {
        let transport = MockTransport::new().respond(200, r#"{"access_token":"jwt-1","token_type":"bearer"}"#);
        let client = ApiClient::new(transport, MemoryTokenStore::default());
        let ui = RecordingUi::default();

        SessionFlow::new(&client, &ui, DEFAULT_DASHBOARD_PATH)
            .submit(form("manager", "secret"))
            .await
            .unwrap();

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/api/v1/auth/login/json");
        assert_eq!(sent[0].body, Body::Json(r#"{"username":"manager","password":"secret"}"#.into()));
        assert_eq!(client.tokens().load().as_deref(), Some("jwt-1"));
        assert_eq!(ui.last(), Some(UiEvent::Navigate("/dashboard".into())));
    }

    #[tokio::test]
    async fn test_login_without_token_clears_stale_one() {
        let transport = MockTransport::new().respond(200, r#"{"token_type":"bearer"}"#);
        let client = ApiClient::new(transport, MemoryTokenStore::with_token("old"));
        let ui = RecordingUi::default();

        SessionFlow::new(&client, &ui, "/admin").submit(form("manager", "secret")).await.unwrap();

        assert_eq!(client.tokens().load(), None);
        assert_eq!(ui.last(), Some(UiEvent::Navigate("/admin".into())));
    }

    #[tokio::test]
    async fn test_login_failure_shows_detail_without_navigating() {
        let transport = MockTransport::new().respond(401, r#"{"detail":"Incorrect username or password"}"#);
        let client = ApiClient::new(transport, MemoryTokenStore::default());
        let ui = RecordingUi::default();

        let err = SessionFlow::new(&client, &ui, DEFAULT_DASHBOARD_PATH)
            .submit(form("manager", "wrong"))
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Request(RequestError::Status { status: 401, .. })));
        assert_eq!(
            ui.last(),
            Some(UiEvent::ShowError(ErrorRegion::Login, "Incorrect username or password".into()))
        );
        assert!(!ui.navigated());
    }

    #[tokio::test]
    async fn test_login_network_failure_handled_like_status() {
        let transport = MockTransport::new().fail("Failed to fetch");
        let client = ApiClient::new(transport, MemoryTokenStore::default());
        let ui = RecordingUi::default();

        let result = SessionFlow::new(&client, &ui, DEFAULT_DASHBOARD_PATH)
            .submit(form("manager", "secret"))
            .await;

        assert!(result.is_err());
        assert_eq!(ui.last(), Some(UiEvent::ShowError(ErrorRegion::Login, "Failed to fetch".into())));
        assert!(!ui.navigated());
    }

    #[tokio::test]
    async fn test_login_non_json_error_falls_back() {
        let transport = MockTransport::new().respond(502, "Bad Gateway");
        let client = ApiClient::new(transport, MemoryTokenStore::default());
        let ui = RecordingUi::default();

        let _ = SessionFlow::new(&client, &ui, DEFAULT_DASHBOARD_PATH)
            .submit(form("manager", "secret"))
            .await;

        assert_eq!(ui.last(), Some(UiEvent::ShowError(ErrorRegion::Login, LOGIN_FAILED.into())));
    }

    #[tokio::test]
    async fn test_blank_credentials_issue_no_request() {
        let client = ApiClient::new(MockTransport::new(), MemoryTokenStore::default());
        let ui = RecordingUi::default();

        let err = SessionFlow::new(&client, &ui, DEFAULT_DASHBOARD_PATH)
            .submit(form("", "secret"))
            .await
            .unwrap_err();

        assert_eq!(err, WorkflowError::Validation(ValidationError::MissingCredentials));
        assert!(client.transport().requests().is_empty());
    }
}
