use serde_json::Value;

/// Field carrying the answer text in well-formed replies
pub const PRIMARY_TEXT_FIELD: &str = "response";

/// Fields tried in order when `response` is missing or blank
pub const FALLBACK_TEXT_FIELDS: [&str; 6] =
    ["message", "content", "answer", "text", "result", "output"];

/// Field carrying the risk score
///
/// Other verdict-like fields (`scam_level`, `confidence`) are ignored.
pub const SCORE_FIELD: &str = "score";

const ERROR_FIELD: &str = "error";

/// Error message if the reply carries a set `error` field
///
/// Null, `false`, zero and empty strings do not count as set.
pub fn backend_error(value: &Value) -> Option<String> {
    match value.get(ERROR_FIELD)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        other if is_truthy(other) => Some(other.to_string()),
        _ => None,
    }
}

/// Raw score signal from the `score` field, trimmed and lower-cased
pub fn score_signal(value: &Value) -> Option<String> {
    match value.get(SCORE_FIELD)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
        }
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string().to_lowercase()),
    }
}

/// Human-readable text of a parsed reply
///
/// Takes `response`, then the first non-blank fallback field, then the
/// whole value pretty-printed so that a non-empty object never yields
/// empty text.
/// A top-level string is its own text, without JSON quotes.
pub fn extract_text(value: &Value) -> String {
    match value {
        Value::Object(_) => std::iter::once(PRIMARY_TEXT_FIELD)
            .chain(FALLBACK_TEXT_FIELDS)
            .find_map(|field| non_blank_str(value.get(field)?))
            .map(str::to_string)
            .unwrap_or_else(|| pretty(value)),
        Value::String(s) => s.trim().to_string(),
        other => pretty(other),
    }
}

fn non_blank_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
