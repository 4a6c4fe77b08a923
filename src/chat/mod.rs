//! Chat front-end logic around the interpreter.
//!
//! # Error Handling Strategy
//!
//! Failures never escape a chat exchange. Empty or unusable replies, HTTP
//! errors and network failures all become the same bot message; they only
//! differ in what gets logged and in the [`ServerStatus`] they leave behind.

pub mod conversation;
pub mod status;

pub use conversation::{
    ChatMessage, Conversation, HttpReply, IMAGE_ONLY_PROMPT, NO_VALID_REPLY_MESSAGE, Sender,
};
pub use status::{ProbeOutcome, ServerStatus, TransportError};
