/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public SOC console adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    ConsoleClient,
    ConsoleError,
    Credentials,
    HttpRequest,
    HttpResponse,
    MockTransport,
    RequestBody,
    ReqwestTransport,
    Result,
    Transport,
};

// Re-export all types
pub use types::*;
