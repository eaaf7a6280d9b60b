/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for HTTP client
[POS]:    Integration tests - client construction and wire behavior
[UPDATE]: When client configuration or transport behavior changes
*/

mod common;

use std::time::Duration;

use common::{envelope, mock_access_token, setup_mock_server};
use serde_json::json;
use soc_console_adapter::{ClientConfig, ConsoleClient, ConsoleError, Credentials};
use tokio_test::assert_ok;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let _client = assert_ok!(ConsoleClient::new());
}

#[test]
fn test_client_with_config() {
    let config = ClientConfig {
        base_url: "https://console.example.com/api".to_string(),
        timeout: Duration::from_secs(5),
        ..ClientConfig::default()
    };
    let _client = assert_ok!(ConsoleClient::with_config(config));
}

#[test]
fn test_client_rejects_bad_base_url() {
    let result = ConsoleClient::with_base_url("::not-a-url::");
    assert!(matches!(result, Err(ConsoleError::UrlParse(_))));
}

#[test]
fn test_client_credentials_roundtrip() {
    let mut client = assert_ok!(ConsoleClient::new());
    let credentials = Credentials::bearer(mock_access_token());

    client.set_credentials(credentials.clone());
    let stored = client.credentials().expect("credentials should be set");

    assert_eq!(stored, &credentials);
}

#[tokio::test]
async fn test_bearer_token_reaches_the_wire() {
    let server = setup_mock_server().await;
    let token = mock_access_token();
    Mock::given(method("GET"))
        .and(path("/connectors"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "connectors": []
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = assert_ok!(ConsoleClient::with_base_url(&server.uri()));
    client.set_credentials(Credentials::bearer(token));

    let response = assert_ok!(client.get_connectors().await);
    assert!(response.data.connectors.is_empty());
}

#[tokio::test]
async fn test_base_path_prefix_is_kept() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/api/graylog/metrics"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "metrics": []
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(ConsoleClient::with_base_url(&format!("{}/api", server.uri())));

    let response = assert_ok!(client.get_metrics().await);
    assert!(response.success);
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/graylog/streams"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(ConsoleClient::with_base_url(&server.uri()));
    let err = client.get_streams().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "API error (status 503): upstream unavailable");
    // `expect(1)` is verified when the server drops
}

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/connectors"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Unauthorized"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = assert_ok!(ConsoleClient::with_base_url(&server.uri()));
    let err = client.get_connectors().await.unwrap_err();

    assert!(err.is_auth_error());
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    // port 9 (discard) is never served in test environments
    let client = assert_ok!(ConsoleClient::with_config(ClientConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(2),
        connect_timeout: Duration::from_secs(1),
        user_agent: None,
    }));

    let err = client.get_license().await.unwrap_err();
    assert!(matches!(err, ConsoleError::Http(_)));
}
