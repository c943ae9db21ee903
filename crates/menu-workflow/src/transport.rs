//! HTTP Transport Seam
//!
//! Requests are described as plain data and handed to a [`Transport`]. The
//! browser build sends them with `fetch`; tests script the responses.

use async_trait::async_trait;

use crate::error::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A file picked in a form's `<input type="file">`
pub trait Attachment {
    /// Size in bytes; zero means nothing was really selected
    fn size(&self) -> u64;
}

/// Request payload
#[derive(Debug, Clone, PartialEq)]
pub enum Body<A> {
    Empty,
    /// Serialized JSON text
    Json(String),
    /// Single-file multipart form
    Multipart { field: &'static str, file: A },
}

/// One outgoing API call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<A> {
    pub method: Method,
    /// Absolute path including the API prefix
    pub path: String,
    pub body: Body<A>,
    /// Sent as `Authorization: Bearer <token>` when present
    pub bearer: Option<String>,
}

/// Status and raw body text of a completed call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests. Every call carries browser cookies; implementations must
/// not retry.
#[async_trait(?Send)]
pub trait Transport {
    type Attachment: Attachment;

    /// `Err` only for transport-level failures; non-OK statuses are returned
    /// as responses.
    async fn send(&self, request: ApiRequest<Self::Attachment>) -> Result<ApiResponse, RequestError>;
}
