//! JSON-over-HTTP client for the inventory console.
//!
//! Wraps a pluggable [`Transport`] with the conventions the inventory API
//! expects: paths are resolved against a base URL, structured bodies are sent
//! as JSON, non-2xx responses become [`FetchError::HttpError`] carrying the
//! status and raw body text, and successful responses are parsed as JSON only
//! when the server says they are JSON.
//!
//! # Example
//!
//! ```rust,ignore
//! use inventory_data::{FetchClient, FetchOptions, ReqwestTransport};
//!
//! let client = FetchClient::new(ReqwestTransport::new())
//!     .with_base_url("https://inventory.example.com");
//!
//! // List
//! let products = client.fetch_json("/products", FetchOptions::get()).await?;
//!
//! // Create
//! let body = serde_json::json!({"sku": "A1", "name": "Widget", "price": 9.99, "stock": 10});
//! let created = client
//!     .fetch_json("/products", FetchOptions::post(&body)?)
//!     .await?;
//! ```

mod error;
mod request;
mod response;
mod transport;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub use error::FetchError;
pub use request::{Method, Request};
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};

/// Method and optional JSON body for [`FetchClient::fetch_json`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOptions {
    pub method: Method,
    pub body: Option<Value>,
}

impl FetchOptions {
    pub fn new(method: Method) -> Self {
        Self { method, body: None }
    }

    pub fn get() -> Self {
        Self::new(Method::Get)
    }

    pub fn delete() -> Self {
        Self::new(Method::Delete)
    }

    pub fn post<T: Serialize + ?Sized>(body: &T) -> Result<Self, FetchError> {
        Self::new(Method::Post).with_json(body)
    }

    pub fn put<T: Serialize + ?Sized>(body: &T) -> Result<Self, FetchError> {
        Self::new(Method::Put).with_json(body)
    }

    /// Attach a structured body, serialized to JSON when sent.
    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, FetchError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// HTTP client for the inventory API.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new client on top of a transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn resolve_url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) if !is_absolute(path) => {
                format!("{}{}", base.trim_end_matches('/'), path)
            }
            _ => path.to_string(),
        }
    }

    /// Issue a request and return the parsed JSON body, if any.
    ///
    /// Non-2xx statuses fail with [`FetchError::HttpError`] before any
    /// attempt to parse the body. A successful response without a JSON
    /// content type yields `None`.
    pub async fn fetch_json(
        &self,
        path: &str,
        options: FetchOptions,
    ) -> Result<Option<Value>, FetchError> {
        let mut request = Request::new(options.method, self.resolve_url(path)).headers(
            self.default_headers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        if let Some(body) = &options.body {
            request = request.json(body)?;
        }

        debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self.transport.send(request).await?;
        debug!(status = response.status, "received response");

        response.error_for_status()?.json_if_present()
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, FetchOptions, Method, Response, Transport};
}
