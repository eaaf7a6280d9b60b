/*
[INPUT]:  Page numbers, index names, input and stream identifiers
[OUTPUT]: Messages, metrics, indices, inputs and streams envelopes
[POS]:    HTTP layer - log-aggregation proxy endpoints
[UPDATE]: When adding new log-aggregation endpoints or changing query parameters
*/

use crate::http::{ConsoleClient, Result};
use crate::types::{
    BaseResponse, DeleteIndexRequest, IndicesResponse, InputStateResponse, InputsResponse,
    MessagesResponse, MetricsResponse, StreamsResponse,
};

/// Page requested when the caller passes none (or zero)
const FIRST_PAGE: u32 = 1;

impl ConsoleClient {
    /// Fetch one page of log messages
    ///
    /// GET /graylog/messages?page_number={page}
    pub async fn get_messages(&self, page: Option<u32>) -> Result<MessagesResponse> {
        let page_number = page.filter(|page| *page != 0).unwrap_or(FIRST_PAGE);
        let request = self
            .get("/graylog/messages")
            .query("page_number", page_number);
        self.send_json(request).await
    }

    /// Fetch throughput metrics
    ///
    /// GET /graylog/metrics
    pub async fn get_metrics(&self) -> Result<MetricsResponse> {
        self.send_json(self.get("/graylog/metrics")).await
    }

    /// Fetch index data
    ///
    /// GET /graylog/indices
    pub async fn get_indices(&self) -> Result<IndicesResponse> {
        self.send_json(self.get("/graylog/indices")).await
    }

    /// Delete an index
    ///
    /// DELETE /graylog/index with body {"index_name": ...}
    pub async fn delete_index(&self, index_name: &str) -> Result<BaseResponse> {
        let body = DeleteIndexRequest {
            index_name: index_name.to_string(),
        };
        let request = self.delete("/graylog/index").json(&body)?;
        self.send_json(request).await
    }

    /// List inputs currently running on the cluster
    ///
    /// GET /graylog/inputs/running
    pub async fn get_inputs_running(&self) -> Result<InputsResponse> {
        self.send_json(self.get("/graylog/inputs/running")).await
    }

    /// List configured inputs
    ///
    /// GET /graylog/inputs/configured
    pub async fn get_inputs_configured(&self) -> Result<InputsResponse> {
        self.send_json(self.get("/graylog/inputs/configured"))
            .await
    }

    /// Start an input
    ///
    /// PUT /graylog/inputs/{input_id}/start
    pub async fn start_input(&self, input_id: &str) -> Result<BaseResponse> {
        self.send_json(self.put(format!("/graylog/inputs/{input_id}/start")))
            .await
    }

    /// Stop an input
    ///
    /// DELETE /graylog/inputs/{input_id}/stop
    pub async fn stop_input(&self, input_id: &str) -> Result<BaseResponse> {
        self.send_json(self.delete(format!("/graylog/inputs/{input_id}/stop")))
            .await
    }

    /// Fetch the runtime state of one input
    ///
    /// GET /graylog/inputs/{input_id}/state
    pub async fn get_input_state(&self, input_id: &str) -> Result<InputStateResponse> {
        self.send_json(self.get(format!("/graylog/inputs/{input_id}/state")))
            .await
    }

    /// List streams
    ///
    /// GET /graylog/streams
    pub async fn get_streams(&self) -> Result<StreamsResponse> {
        self.send_json(self.get("/graylog/streams")).await
    }

    /// Pause a stream
    ///
    /// POST /graylog/streams/{stream_id}/pause
    pub async fn stop_stream(&self, stream_id: &str) -> Result<BaseResponse> {
        self.send_json(self.post(format!("/graylog/streams/{stream_id}/pause")))
            .await
    }

    /// Resume a stream
    ///
    /// POST /graylog/streams/{stream_id}/resume
    pub async fn start_stream(&self, stream_id: &str) -> Result<BaseResponse> {
        self.send_json(self.post(format!("/graylog/streams/{stream_id}/resume")))
            .await
    }
}
