//! Fetch Transport
//!
//! Sends [`ApiRequest`]s with `window.fetch`, always with
//! `credentials: "include"` so the session cookie goes along.

use async_trait::async_trait;
use menu_workflow::{ApiRequest, ApiResponse, Attachment, Body, RequestError, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestCredentials, RequestInit, Response};

use crate::error::js_message;

/// A file picked in an `<input type="file">`
#[derive(Debug, Clone)]
pub struct FileAttachment(pub File);

impl Attachment for FileAttachment {
    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FetchTransport;

fn network(err: JsValue) -> RequestError {
    RequestError::Network(js_message(&err))
}

impl FetchTransport {
    fn build(&self, request: ApiRequest<FileAttachment>) -> Result<Request, JsValue> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        init.set_credentials(RequestCredentials::Include);

        let headers = Headers::new()?;
        if let Some(token) = request.bearer.as_deref() {
            headers.set("Authorization", &format!("Bearer {}", token))?;
        }

        match request.body {
            Body::Empty => {}
            Body::Json(json) => {
                headers.set("Content-Type", "application/json")?;
                init.set_body(&JsValue::from_str(&json));
            }
            Body::Multipart { field, file } => {
                // The browser sets the multipart boundary header itself
                let form = FormData::new()?;
                form.append_with_blob_and_filename(field, &file.0, &file.0.name())?;
                init.set_body(&form);
            }
        }
        init.set_headers(&headers);

        Request::new_with_str_and_init(&request.path, &init)
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    type Attachment = FileAttachment;

    async fn send(&self, request: ApiRequest<FileAttachment>) -> Result<ApiResponse, RequestError> {
        let window = web_sys::window().ok_or_else(|| RequestError::Network("no window".into()))?;
        let request = self.build(request).map_err(network)?;

        let resp: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(network)?;

        // Error bodies are often not JSON; keep whatever text there is
        let body = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };

        Ok(ApiResponse::new(resp.status(), body))
    }
}
