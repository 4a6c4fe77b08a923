use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized classification of how dangerous an analyzed message is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Safe,
    Warning,
    Danger,
    /// No score signal anywhere in the reply
    Unknown,
}

impl RiskLevel {
    /// Traffic-light color used by the chat widget
    pub fn color(self) -> Option<&'static str> {
        match self {
            RiskLevel::Safe => Some("green"),
            RiskLevel::Warning => Some("yellow"),
            RiskLevel::Danger => Some("red"),
            RiskLevel::Unknown => None,
        }
    }

    /// Badge text shown next to a bot message
    pub fn label(self) -> Option<&'static str> {
        match self {
            RiskLevel::Safe => Some("✓ SICURO"),
            RiskLevel::Warning => Some("⚠ ATTENZIONE"),
            RiskLevel::Danger => Some("✗ RISCHIOSO"),
            RiskLevel::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        self != RiskLevel::Unknown
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RiskLevel::Safe => "safe",
            RiskLevel::Warning => "warning",
            RiskLevel::Danger => "danger",
            RiskLevel::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Result of interpreting one analysis-endpoint reply
///
/// Built fresh per network call and consumed immediately by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReply {
    pub raw_body: String,
    /// Present iff `raw_body` was valid JSON
    pub parsed_json: Option<Value>,
    pub text: String,
    pub risk_level: RiskLevel,
    /// Raw score signal, trimmed and lower-cased
    pub score: Option<String>,
}

impl AnalysisReply {
    /// The `{text, score?}` shape handed to the rendering layer
    pub fn to_output(&self) -> AnalyzeOutput {
        AnalyzeOutput {
            text: self.text.clone(),
            score: self.score.clone(),
            risk_level: self.risk_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeOutput {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    pub risk_level: RiskLevel,
}
