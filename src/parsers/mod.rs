//! Lenient loaders for the JSON collections served by the DigiGuard backend
//!
//! # Error Handling Strategy
//!
//! This module follows a **graceful degradation** approach:
//!
//! - **Individual record failures**: Malformed array elements are logged with `tracing::warn!`
//!   and skipped, so one bad row does not hide the rest of the glossary.
//!
//! - **Catastrophic failure detection**: If >50% of elements fail to decode, the loader returns
//!   an error. A file that is not JSON, not an array, or larger than 10MB is rejected outright.
//!
//! - **Field tolerance**: Ids accept numbers or numeric strings, timestamps accept epoch
//!   milliseconds or RFC 3339, and both backend and frontend field names are understood
//!   (see [`deserializers`]).
//!
//! - **Error propagation**: Uses `anyhow::Result` with context. Callers report the error and
//!   do not match on its type.

pub mod collection;
pub mod deserializers;

pub use collection::{load_glossary, load_pages, load_translations};
