//! Request payloads and route paths of the DigiGuard backends.
//!
//! This module performs no I/O: callers bring their own HTTP client and
//! feed the reply body to [`crate::interpreter::interpret`].

pub mod request;
pub mod routes;

pub use request::{
    AnalyzeRequest, GlossaryPayload, IMAGE_FIELD_CANDIDATES, NGROK_SKIP_HEADER, PayloadError,
    TranslatorPayload, analysis_headers, is_probe_rejection,
};
pub use routes::{Endpoint, Method, encode_component};
