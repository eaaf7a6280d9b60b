/*
[INPUT]:  Caller-supplied payloads and serde requirements
[OUTPUT]: Typed Rust request structs and multipart forms
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Product id used when requesting a trial key
pub const TRIAL_PRODUCT_ID: u64 = 24355;
/// Notes attached to trial keys
pub const TRIAL_KEY_NOTES: &str = "Test Key";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectorRequestPayload {
    pub connector_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_api_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPayload {
    pub email: String,
    pub feature_id: i64,
    pub cancel_url: String,
    pub success_url: String,
}

/// Caller-facing input for the trial key request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLicensePayload {
    pub name: String,
    pub email: String,
    pub company_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceLicenseRequest {
    pub license_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrieveLicenseRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLicenseRequest {
    pub product_id: u64,
    pub notes: String,
    pub new_customer: bool,
    pub name: String,
    pub email: String,
    pub company_name: String,
}

impl From<NewLicensePayload> for CreateLicenseRequest {
    fn from(payload: NewLicensePayload) -> Self {
        Self {
            product_id: TRIAL_PRODUCT_ID,
            notes: TRIAL_KEY_NOTES.to_string(),
            new_customer: true,
            name: payload.name,
            email: payload.email,
            company_name: payload.company_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteIndexRequest {
    pub index_name: String,
}

// ### Multipart

/// One field of a multipart upload
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: Option<String>,
        bytes: Vec<u8>,
    },
}

impl FormPart {
    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

/// Multipart form forwarded to the backend untouched
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadForm {
    parts: Vec<FormPart>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a text field
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Add a file field from memory
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: Option<&str>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.map(str::to_string),
            bytes: bytes.into(),
        });
        self
    }

    /// Read `path` and add it as a file field named `name`
    pub async fn with_file_from_path(
        self,
        name: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let content_type = content_type_for(path);
        Ok(self.file(name, file_name, content_type, bytes))
    }

    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    pub fn into_parts(self) -> Vec<FormPart> {
        self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

fn content_type_for(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Some("application/x-yaml"),
        Some("json") => Some("application/json"),
        Some("txt") => Some("text/plain"),
        _ => None,
    }
}
