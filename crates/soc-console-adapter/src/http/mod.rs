/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod connectors;
pub mod error;
pub mod graylog;
pub mod license;
pub mod mock;
pub mod transport;

pub use error::{ConsoleError, Result};
pub use mock::MockTransport;
pub use transport::{HttpRequest, HttpResponse, RequestBody, ReqwestTransport, Transport};

pub use client::{ClientConfig, ConsoleClient, Credentials};
