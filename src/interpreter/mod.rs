//! Interpretation of analysis-endpoint replies.
//!
//! The analysis backend is inconsistent: replies may be JSON with the answer
//! under one of several field names, JSON with an `error` field, or plain
//! text with a `score: <word>` phrase embedded in it. [`interpret`] turns any
//! of these into a stable [`AnalysisReply`](crate::models::AnalysisReply).
//!
//! # Error Handling Strategy
//!
//! - **Typed failures**: [`InterpretError`] distinguishes an empty body, an
//!   explicit backend error and a reply with no displayable text. Callers
//!   convert all three into one chat message (see [`crate::chat`]).
//! - **Malformed JSON is not a failure**: the body is used as text instead.
//! - **No retries**: retrying the network call is the caller's concern.

pub mod embedded;
pub mod error;
pub mod fields;
pub mod reply;
pub mod risk;

pub use error::InterpretError;
pub use reply::interpret;
pub use risk::{bucket_numeric, classify, classify_signal, normalize_word};
