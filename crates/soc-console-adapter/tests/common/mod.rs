/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for soc-console-adapter tests

use std::sync::Arc;

use serde_json::{Value, json};
use soc_console_adapter::{ConsoleClient, MockTransport};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock access token for testing
#[allow(dead_code)]
pub fn mock_access_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// Client wired to a recording transport
#[allow(dead_code)]
pub fn recording_client() -> (Arc<MockTransport>, ConsoleClient) {
    let transport = Arc::new(MockTransport::new());
    let client = ConsoleClient::with_transport(transport.clone());
    (transport, client)
}

/// Successful envelope with `payload` fields merged in
#[allow(dead_code)]
pub fn envelope(payload: Value) -> Value {
    let mut body = json!({ "success": true, "message": "ok" });
    if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), payload) {
        target.extend(fields);
    }
    body
}
