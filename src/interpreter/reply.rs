use serde_json::Value;
use tracing::{debug, warn};

use super::embedded::{find_embedded_score, strip_score_phrases};
use super::error::InterpretError;
use super::fields::{backend_error, extract_text, score_signal};
use super::risk::classify_signal;
use crate::models::AnalysisReply;

/// Interpret a raw analysis-endpoint body into text plus a risk level
///
/// Steps:
/// 1. Blank body fails with [`InterpretError::EmptyResponse`]
/// 2. JSON bodies: a set `error` field fails with [`InterpretError::BackendError`],
///    otherwise text and score come from the reply fields. Non-JSON bodies
///    are used as text directly.
/// 3. Without a score so far, a `score: <word>` phrase in the text supplies
///    one. Once a score is known, such phrases are stripped from the text.
/// 4. Blank text fails with [`InterpretError::EmptyContent`]
///
/// Pure: the same body always yields the same result.
///
/// # Examples
///
/// ```
/// use digiguard::interpreter::interpret;
/// use digiguard::models::RiskLevel;
///
/// let reply = interpret(r#"{"response":"Attenzione, possibile phishing.","score":"0.85"}"#)?;
/// assert_eq!(reply.text, "Attenzione, possibile phishing.");
/// assert_eq!(reply.risk_level, RiskLevel::Danger);
/// # Ok::<(), digiguard::interpreter::InterpretError>(())
/// ```
pub fn interpret(raw_body: &str) -> Result<AnalysisReply, InterpretError> {
    let trimmed = raw_body.trim();
    if trimmed.is_empty() {
        return Err(InterpretError::EmptyResponse);
    }

    let parsed_json = serde_json::from_str::<Value>(raw_body).ok();

    let (mut text, mut score) = match &parsed_json {
        Some(value) => {
            if let Some(message) = backend_error(value) {
                warn!(error = %message, "Analysis endpoint returned an error field");
                return Err(InterpretError::BackendError(message));
            }
            (extract_text(value), score_signal(value))
        }
        None => {
            debug!(len = raw_body.len(), "Reply is not JSON, using body as text");
            (trimmed.to_string(), None)
        }
    };

    if score.is_none() {
        score = find_embedded_score(&text);
        if let Some(found) = &score {
            debug!(score = %found, "Score found inside reply text");
        }
    }

    if score.is_some() {
        text = strip_score_phrases(&text);
    }

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(InterpretError::EmptyContent);
    }

    let risk_level = classify_signal(score.as_deref());
    debug!(%risk_level, score = ?score, "Interpreted analysis reply");

    Ok(AnalysisReply { raw_body: raw_body.to_string(), parsed_json, text, risk_level, score })
}
