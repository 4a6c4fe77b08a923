use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// Network-level failure of a request to the analysis service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("server unreachable: {0}")]
    Unreachable(String),
}

/// Result of the health-check ping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered, with any status code
    Responded { status: u16, elapsed: Duration },
    Failed(TransportError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServerStatus {
    #[default]
    Checking,
    Online,
    Offline,
}

impl ServerStatus {
    /// Any HTTP answer means the server is up, even 4xx/5xx; only a
    /// timeout or a connection failure means it is asleep
    pub fn from_probe(probe: &ProbeOutcome) -> Self {
        match probe {
            ProbeOutcome::Responded { status, elapsed } => {
                info!(status, elapsed_ms = elapsed.as_millis() as u64, "Analysis server responded");
                ServerStatus::Online
            }
            ProbeOutcome::Failed(TransportError::Timeout(after)) => {
                info!(after_ms = after.as_millis() as u64, "Analysis server timed out");
                ServerStatus::Offline
            }
            ProbeOutcome::Failed(TransportError::Unreachable(reason)) => {
                info!(%reason, "Analysis server unreachable");
                ServerStatus::Offline
            }
        }
    }
}
