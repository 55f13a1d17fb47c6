//! In-memory transport for tests.
//!
//! Responses are registered per method and path. When several responses are
//! queued for the same route they are served in order and the last one keeps
//! being served afterwards.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::{FetchError, Method, Request, Response, Transport};

#[derive(Debug, Default)]
struct MockState {
    routes: HashMap<(Method, String), VecDeque<Response>>,
    requests: Vec<Request>,
}

/// Scripted transport that records every request it sees.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queue a response for `method path`.
    pub fn on(&self, method: Method, path: &str, response: Response) -> &Self {
        self.lock()
            .routes
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
        self
    }

    /// Queue a JSON response.
    pub fn on_json(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
        self.on(method, path, json_response(status, &body))
    }

    /// All requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<Request> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Requests matching `method path`.
    pub fn requests_to(&self, method: Method, path: &str) -> Vec<Request> {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method() == method && url_path(r.url()) == path)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let mut state = self.lock();
        let key = (request.method(), url_path(request.url()).to_string());
        state.requests.push(request);

        let queue = state.routes.get_mut(&key).ok_or_else(|| {
            FetchError::RequestError(format!("no mock registered for {} {}", key.0, key.1))
        })?;
        let response = if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        };
        response.ok_or_else(|| {
            FetchError::RequestError(format!("no mock response left for {} {}", key.0, key.1))
        })
    }
}

/// Build a response with an `application/json` body.
pub fn json_response(status: u16, body: &Value) -> Response {
    let headers = HashMap::from([("Content-Type".to_string(), "application/json".to_string())]);
    Response::new(status, headers, body.to_string().into_bytes())
}

/// Build a plain text response.
pub fn text_response(status: u16, body: &str) -> Response {
    let headers = HashMap::from([("Content-Type".to_string(), "text/plain".to_string())]);
    Response::new(status, headers, body.as_bytes().to_vec())
}

/// Build a response with no body and no content type.
pub fn empty_response(status: u16) -> Response {
    Response::new(status, HashMap::new(), Vec::new())
}

/// Path component of an absolute URL, or the input when it has no scheme.
fn url_path(url: &str) -> &str {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            rest.find('/').map(|i| &rest[i..]).unwrap_or("/")
        }
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_path() {
        assert_eq!(url_path("http://mock.test/products/7"), "/products/7");
        assert_eq!(url_path("https://mock.test"), "/");
        assert_eq!(url_path("/orders"), "/orders");
    }
}
