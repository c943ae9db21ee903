//! REST Client
//!
//! Typed bindings to the restaurant API endpoints used by the admin panel.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::RequestError;
use crate::models::{Credentials, LoginResponse, MenuItem, MenuItemDraft};
use crate::token::TokenStore;
use crate::transport::{ApiRequest, ApiResponse, Body, Method, Transport};

/// Default API mount point
pub const DEFAULT_API_PREFIX: &str = "/api/v1";

/// Multipart field name expected by the upload endpoint
const IMAGE_FIELD: &str = "image";

pub struct ApiClient<T, S> {
    transport: T,
    tokens: S,
    prefix: String,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: S) -> Self {
        Self::with_prefix(transport, tokens, DEFAULT_API_PREFIX)
    }

    pub fn with_prefix(transport: T, tokens: S, prefix: &str) -> Self {
        Self {
            transport,
            tokens,
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========================
    // Auth
    // ========================

    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, RequestError> {
        let resp = self.send(Method::Post, "/auth/login/json", json_body(credentials)?).await?;
        decode(&resp)
    }

    // ========================
    // Menu Items
    // ========================

    pub async fn create_menu_item(&self, draft: &MenuItemDraft) -> Result<MenuItem, RequestError> {
        let resp = self.send(Method::Post, "/menu-items/", json_body(draft)?).await?;
        decode(&resp)
    }

    pub async fn get_menu_item(&self, id: i64) -> Result<MenuItem, RequestError> {
        let resp = self.send(Method::Get, &format!("/menu-items/{}", id), Body::Empty).await?;
        decode(&resp)
    }

    /// The updated item is returned when the body decodes; an empty or
    /// unexpected body is not an error.
    pub async fn update_menu_item(&self, id: i64, draft: &MenuItemDraft) -> Result<Option<MenuItem>, RequestError> {
        let resp = self.send(Method::Put, &format!("/menu-items/{}", id), json_body(draft)?).await?;
        Ok(serde_json::from_str(&resp.body).ok())
    }

    pub async fn toggle_availability(&self, id: i64) -> Result<(), RequestError> {
        self.send(Method::Put, &format!("/menu-items/{}/toggle-availability", id), Body::Empty).await?;
        Ok(())
    }

    pub async fn delete_menu_item(&self, id: i64) -> Result<(), RequestError> {
        self.send(Method::Delete, &format!("/menu-items/{}", id), Body::Empty).await?;
        Ok(())
    }

    pub async fn upload_image(&self, id: i64, file: T::Attachment) -> Result<(), RequestError> {
        let body = Body::Multipart { field: IMAGE_FIELD, file };
        self.send(Method::Post, &format!("/menu-items/{}/upload-image", id), body).await?;
        Ok(())
    }

    // ========================
    // Plumbing
    // ========================

    /// Issue one request; non-OK statuses become [`RequestError::Status`].
    async fn send(&self, method: Method, path: &str, body: Body<T::Attachment>) -> Result<ApiResponse, RequestError> {
        let request = ApiRequest {
            method,
            path: format!("{}{}", self.prefix, path),
            body,
            bearer: self.tokens.load(),
        };
        log::debug!("{} {}", method.as_str(), request.path);

        let resp = self.transport.send(request).await?;
        if resp.is_ok() {
            Ok(resp)
        } else {
            log::warn!("{} {}{} -> {}", method.as_str(), self.prefix, path, resp.status);
            Err(RequestError::from_status(resp.status, &resp.body))
        }
    }
}

fn json_body<A, B: Serialize>(payload: &B) -> Result<Body<A>, RequestError> {
    serde_json::to_string(payload)
        .map(Body::Json)
        .map_err(|e| RequestError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(resp: &ApiResponse) -> Result<R, RequestError> {
    serde_json::from_str(&resp.body).map_err(|e| RequestError::Decode(e.to_string()))
}
