use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};

/// Generational translator word pair
///
/// Accepts both the backend names (`oldWord`, `newWord`, `descriptionWord`)
/// and the frontend names (`boomerWord`, `slangWord`, `description`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationEntry {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_id")]
    pub id: i64,
    #[serde(alias = "oldWord")]
    pub boomer_word: String,
    #[serde(alias = "newWord")]
    pub slang_word: String,
    #[serde(default, alias = "descriptionWord", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TranslationEntry {
    pub fn new(id: i64, boomer_word: impl Into<String>, slang_word: impl Into<String>) -> Self {
        Self {
            id,
            boomer_word: boomer_word.into(),
            slang_word: slang_word.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `(source, target)` words for the given direction
    pub fn oriented(&self, direction: Direction) -> (&str, &str) {
        match direction {
            Direction::BoomerToSlang => (&self.boomer_word, &self.slang_word),
            Direction::SlangToBoomer => (&self.slang_word, &self.boomer_word),
        }
    }
}

/// Which side of a pair the user typed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    #[default]
    BoomerToSlang,
    SlangToBoomer,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "boomer-to-slang" => Ok(Direction::BoomerToSlang),
            "slang-to-boomer" => Ok(Direction::SlangToBoomer),
            _ => Err(anyhow!(
                "Unknown direction: '{}' (valid: boomer-to-slang, slang-to-boomer)",
                s
            )),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::BoomerToSlang => f.write_str("boomer-to-slang"),
            Direction::SlangToBoomer => f.write_str("slang-to-boomer"),
        }
    }
}
