/*
[INPUT]:  Requests from ConsoleClient and scripted replies from tests
[OUTPUT]: Recorded requests and canned responses or failures
[POS]:    HTTP layer - fake transport for exercising endpoint wrappers offline
[UPDATE]: When Transport gains new behavior that tests need to observe
*/

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::http::transport::{HttpRequest, HttpResponse, Transport};
use crate::http::{ConsoleError, Result};

#[derive(Debug, Clone)]
enum MockReply {
    Response(HttpResponse),
    Failure(String),
}

/// Recording transport for tests
///
/// Replies are served in the order they were pushed. When the queue is
/// empty every call answers `200 {"success": true, "message": "ok"}`.
#[derive(Debug, Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<MockReply>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response
    pub fn push_response(&self, response: HttpResponse) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(MockReply::Response(response));
    }

    /// Queue a JSON response with the given status
    pub fn push_json(&self, status: u16, body: Value) {
        self.push_response(HttpResponse::json(status, &body));
    }

    /// Queue a network-level failure
    pub fn push_failure(&self, message: impl Into<String>) {
        self.replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(MockReply::Failure(message.into()));
    }

    /// All requests seen so far, oldest first
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        let reply = self
            .replies
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();

        match reply {
            Some(MockReply::Response(response)) => Ok(response),
            Some(MockReply::Failure(message)) => Err(ConsoleError::Connection(message)),
            None => Ok(HttpResponse::json(
                200,
                &json!({ "success": true, "message": "ok" }),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    #[tokio::test]
    async fn test_replies_in_order_then_default() {
        let transport = MockTransport::new();
        transport.push_json(201, json!({ "success": true }));
        transport.push_failure("connection reset");

        let first = transport
            .execute(HttpRequest::new(Method::GET, "/a"))
            .await
            .unwrap();
        assert_eq!(first.status, 201);

        let second = transport.execute(HttpRequest::new(Method::GET, "/b")).await;
        assert!(matches!(second, Err(ConsoleError::Connection(_))));

        let third = transport
            .execute(HttpRequest::new(Method::GET, "/c"))
            .await
            .unwrap();
        assert_eq!(third.status, 200);

        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/a", "/b", "/c"]);
        assert_eq!(transport.call_count(), 3);
    }
}
