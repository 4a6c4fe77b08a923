use serde::Serialize;
use tracing::{debug, warn};

use super::status::{ServerStatus, TransportError};
use crate::interpreter::interpret;
use crate::models::RiskLevel;

/// Shown for every failed exchange, whatever went wrong
pub const NO_VALID_REPLY_MESSAGE: &str =
    "Mi dispiace, non ho ricevuto una risposta valida dal server.";
/// Prompt sent when the user attaches an image without typing anything
pub const IMAGE_ONLY_PROMPT: &str = "Analizza questa immagine";
/// Transcript text for an image-only user message
pub const IMAGE_ONLY_USER_TEXT: &str = "Immagine caricata";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

impl ChatMessage {
    fn user(text: String, image_name: Option<String>) -> Self {
        Self { sender: Sender::User, text, image_name, score: None, risk_level: None }
    }

    fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
            image_name: None,
            score: None,
            risk_level: None,
        }
    }
}

/// HTTP answer from the analysis endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Chat transcript plus the last known server status
///
/// Every exchange ends in exactly one bot message: the interpreted reply,
/// or [`NO_VALID_REPLY_MESSAGE`]. Failure kinds only affect logging and
/// the server status.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    status: ServerStatus,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn status(&self) -> ServerStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ServerStatus) {
        self.status = status;
    }

    /// Record the user's message; returns the prompt to send, if any
    ///
    /// Blank text is only sendable with an image attached.
    pub fn submit(&mut self, text: &str, image_name: Option<&str>) -> Option<String> {
        let text = text.trim();
        if text.is_empty() && image_name.is_none() {
            return None;
        }

        let shown = if text.is_empty() { IMAGE_ONLY_USER_TEXT } else { text };
        self.messages.push(ChatMessage::user(shown.to_string(), image_name.map(str::to_string)));

        let prompt = if text.is_empty() { IMAGE_ONLY_PROMPT } else { text };
        Some(prompt.to_string())
    }

    /// Turn the outcome of one request into a bot message
    pub fn receive(&mut self, outcome: Result<HttpReply, TransportError>) -> &ChatMessage {
        let message = match outcome {
            Err(e) => {
                warn!(error = %e, "Analysis request failed at the network layer");
                self.status = ServerStatus::Offline;
                ChatMessage::bot(NO_VALID_REPLY_MESSAGE)
            }
            Ok(reply) if !reply.is_success() => {
                warn!(
                    status = reply.status,
                    body = %reply.body,
                    "Analysis endpoint returned HTTP error"
                );
                self.status = ServerStatus::Online;
                ChatMessage::bot(NO_VALID_REPLY_MESSAGE)
            }
            Ok(reply) => {
                self.status = ServerStatus::Online;
                match interpret(&reply.body) {
                    Ok(analysis) => {
                        debug!(risk = %analysis.risk_level, "Analysis reply interpreted");
                        ChatMessage {
                            score: analysis.score,
                            risk_level: Some(analysis.risk_level),
                            ..ChatMessage::bot(analysis.text)
                        }
                    }
                    Err(e) => {
                        warn!(error = %e, "Analysis reply not usable");
                        ChatMessage::bot(NO_VALID_REPLY_MESSAGE)
                    }
                }
            }
        };

        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}
