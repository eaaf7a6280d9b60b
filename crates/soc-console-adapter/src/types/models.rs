/*
[INPUT]:  Backend JSON shapes and serde requirements
[OUTPUT]: Typed Rust structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::InputState;

/// Fields the backend sent that have no typed counterpart
pub type ExtraFields = Map<String, Value>;

// ### License

/// Verified license details; the backend shape is passed through as-is
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct License {
    #[serde(flatten)]
    pub fields: ExtraFields,
}

impl License {
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionFeature {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

// ### Connectors

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub id: i64,
    pub connector_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_supports: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_configured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_accepts_username_password: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_accepts_api_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_accepts_file: Option<bool>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

// ### Log aggregation

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputMetric {
    pub metric: String,
    pub value: f64,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndexData {
    #[serde(default)]
    pub indices: Vec<IndexInfo>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub index_name: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A log input, either running on a node or merely configured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraylogInput {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<InputState>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stream {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
