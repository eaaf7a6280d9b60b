/*
[INPUT]:  Connector identifiers, configuration payloads and upload forms
[OUTPUT]: Connector list and verification envelopes
[POS]:    HTTP layer - data-connector configuration endpoints
[UPDATE]: When adding new connector endpoints or changing payload shape
*/

use std::fmt::Display;

use crate::http::{ConsoleClient, Result};
use crate::types::{
    ConnectorRequestPayload, ConnectorResponse, ConnectorsResponse, UploadForm,
    VerifyConnectorResponse,
};

impl ConsoleClient {
    /// List all connectors
    ///
    /// GET /connectors
    pub async fn get_connectors(&self) -> Result<ConnectorsResponse> {
        self.send_json(self.get("/connectors")).await
    }

    /// Fetch one connector
    ///
    /// GET /connectors/{connector_id}
    pub async fn get_connector(&self, connector_id: impl Display) -> Result<ConnectorResponse> {
        self.send_json(self.get(format!("/connectors/{connector_id}")))
            .await
    }

    /// Ask the backend to test a connector against its remote service
    ///
    /// POST /connectors/verify/{connector_id}
    pub async fn verify_connector(
        &self,
        connector_id: impl Display,
    ) -> Result<VerifyConnectorResponse> {
        self.send_json(self.post(format!("/connectors/verify/{connector_id}")))
            .await
    }

    /// Configure a connector for the first time
    ///
    /// POST /connectors/{connector_id}
    pub async fn configure_connector(
        &self,
        connector_id: impl Display,
        payload: &ConnectorRequestPayload,
    ) -> Result<ConnectorsResponse> {
        let request = self
            .post(format!("/connectors/{connector_id}"))
            .json(payload)?;
        self.send_json(request).await
    }

    /// Update an already configured connector
    ///
    /// PUT /connectors/{connector_id}
    pub async fn update_connector(
        &self,
        connector_id: impl Display,
        payload: &ConnectorRequestPayload,
    ) -> Result<ConnectorsResponse> {
        let request = self
            .put(format!("/connectors/{connector_id}"))
            .json(payload)?;
        self.send_json(request).await
    }

    /// Upload a connector configuration file
    ///
    /// POST /connectors/upload (multipart/form-data)
    pub async fn upload_connector_file(&self, form: UploadForm) -> Result<ConnectorsResponse> {
        let request = self.post("/connectors/upload").multipart(form);
        self.send_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::ConsoleClient;
    use crate::types::{ConnectorRequestPayload, UploadForm};
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string_contains, header_regex, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> ConsoleClient {
        ConsoleClient::with_base_url(&server.uri()).expect("client init")
    }

    fn connectors_body() -> serde_json::Value {
        json!({
            "success": true,
            "message": "Connectors fetched successfully",
            "connectors": [
                {
                    "id": 1,
                    "connector_name": "Wazuh-Indexer",
                    "connector_type": "4.4.1",
                    "connector_url": "https://wazuh-indexer.local:9200",
                    "connector_username": "admin",
                    "connector_api_key": null,
                    "connector_configured": true,
                    "connector_accepts_username_password": true
                },
                {
                    "id": 6,
                    "connector_name": "Velociraptor",
                    "connector_accepts_file": true
                }
            ]
        })
    }

    #[tokio::test]
    async fn test_get_connectors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/connectors"))
            .respond_with(ResponseTemplate::new(200).set_body_json(connectors_body()))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .get_connectors()
            .await
            .expect("get_connectors failed");

        let connectors = response.data.connectors;
        assert_eq!(connectors.len(), 2);
        assert_eq!(connectors[0].connector_name, "Wazuh-Indexer");
        assert_eq!(connectors[0].connector_api_key, None);
        assert_eq!(connectors[1].connector_accepts_file, Some(true));
    }

    #[tokio::test]
    async fn test_get_connector_by_numeric_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/connectors/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Connector fetched successfully",
                "connector": { "id": 3, "connector_name": "Graylog" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server).get_connector(3).await.expect("get_connector failed");

        assert_eq!(
            response.data.connector.map(|connector| connector.connector_name),
            Some("Graylog".to_string())
        );
    }

    #[tokio::test]
    async fn test_verify_connector() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connectors/verify/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Verification successful",
                "connectionSuccessful": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .verify_connector("2")
            .await
            .expect("verify_connector failed");

        assert_eq!(response.data.get("connectionSuccessful"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_configure_connector_posts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connectors/abc"))
            .and(body_json(json!({
                "connector_url": "https://wazuh-manager.local:55000",
                "connector_username": "wazuh-wui",
                "connector_password": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(connectors_body()))
            .expect(1)
            .mount(&server)
            .await;

        let payload = ConnectorRequestPayload {
            connector_url: "https://wazuh-manager.local:55000".to_string(),
            connector_username: Some("wazuh-wui".to_string()),
            connector_password: Some("secret".to_string()),
            connector_api_key: None,
        };
        let response = client(&server)
            .configure_connector("abc", &payload)
            .await
            .expect("configure_connector failed");

        assert!(response.success);
    }

    #[tokio::test]
    async fn test_update_connector_puts_payload() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/connectors/4"))
            .and(body_json(json!({
                "connector_url": "https://shuffle.local",
                "connector_api_key": "api-key"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Connector updated successfully",
                "connector": { "id": 4, "connector_name": "Shuffle" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let payload = ConnectorRequestPayload {
            connector_url: "https://shuffle.local".to_string(),
            connector_api_key: Some("api-key".to_string()),
            ..ConnectorRequestPayload::default()
        };
        let response = client(&server)
            .update_connector(4, &payload)
            .await
            .expect("update_connector failed");

        assert_eq!(response.message, "Connector updated successfully");
        assert_eq!(response.data.connector.map(|connector| connector.id), Some(4));
    }

    #[tokio::test]
    async fn test_upload_connector_file_is_multipart() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/connectors/upload"))
            .and(header_regex("content-type", "^multipart/form-data; boundary="))
            .and(body_string_contains("velociraptor.yaml"))
            .and(body_string_contains("Client:"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "File uploaded successfully"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let form = UploadForm::new().file(
            "file",
            "velociraptor.yaml",
            Some("application/x-yaml"),
            b"Client:\n  server_urls: []\n".to_vec(),
        );
        let response = client(&server)
            .upload_connector_file(form)
            .await
            .expect("upload_connector_file failed");

        assert!(response.success);
        assert!(response.data.connectors.is_empty());
    }

    #[tokio::test]
    async fn test_missing_connectors_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/connectors"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "detail": "No connectors found"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let err = client(&server).get_connectors().await.unwrap_err();

        assert!(err.is_not_found());
    }
}
