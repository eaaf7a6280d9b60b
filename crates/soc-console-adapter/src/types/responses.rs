/*
[INPUT]:  Backend JSON shapes and serde requirements
[OUTPUT]: Response envelopes and per-endpoint payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::InputState;
use super::models::{
    CheckoutSession, Connector, GraylogInput, IndexData, License, Message, Stream,
    SubscriptionFeature, ThroughputMetric,
};

/// Common `success`/`message` wrapper returned by every endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BaseResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

/// Envelope with endpoint-specific fields flattened next to `success`/`message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

// ### License payloads
//
// Payload fields are absent when the backend answers `success: false`.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LicenseKeyData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SubscriptionFeaturesData {
    #[serde(default)]
    pub features: Vec<SubscriptionFeature>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LicenseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LicenseFeaturesData {
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckoutSessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<CheckoutSession>,
}

pub type LicenseKeyResponse = ApiResponse<LicenseKeyData>;
pub type SubscriptionFeaturesResponse = ApiResponse<SubscriptionFeaturesData>;
pub type VerifyLicenseResponse = ApiResponse<LicenseData>;
pub type LicenseFeaturesResponse = ApiResponse<LicenseFeaturesData>;
pub type CheckoutSessionResponse = ApiResponse<CheckoutSessionData>;

// ### Connector payloads

/// Connector list; configure/update may answer with a single `connector`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectorsData {
    #[serde(default)]
    pub connectors: Vec<Connector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Connector>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConnectorData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector: Option<Connector>,
}

pub type ConnectorsResponse = ApiResponse<ConnectorsData>;
pub type ConnectorResponse = ApiResponse<ConnectorData>;
/// Verification results vary per connector type
pub type VerifyConnectorResponse = ApiResponse<Map<String, Value>>;

// ### Log aggregation payloads

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MessagesData {
    #[serde(default)]
    pub graylog_messages: Vec<Message>,
    #[serde(default)]
    pub total_messages: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsData {
    #[serde(default)]
    pub metrics: Vec<ThroughputMetric>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicesData {
    #[serde(
        rename = "indexData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub index_data: Option<IndexData>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputsData {
    #[serde(default)]
    pub inputs: Vec<GraylogInput>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputStateData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<InputState>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamsData {
    #[serde(default)]
    pub streams: Vec<Stream>,
}

pub type MessagesResponse = ApiResponse<MessagesData>;
pub type MetricsResponse = ApiResponse<MetricsData>;
pub type IndicesResponse = ApiResponse<IndicesData>;
pub type InputsResponse = ApiResponse<InputsData>;
pub type InputStateResponse = ApiResponse<InputStateData>;
pub type StreamsResponse = ApiResponse<StreamsData>;
