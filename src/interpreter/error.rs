use thiserror::Error;

/// Ways an analysis reply can fail to yield a displayable message
///
/// Malformed JSON is not an error: a body that does not parse is
/// treated as plain text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpretError {
    #[error("empty response from analysis endpoint")]
    EmptyResponse,

    #[error("analysis endpoint reported an error: {0}")]
    BackendError(String),

    #[error("reply contained no displayable text")]
    EmptyContent,
}
