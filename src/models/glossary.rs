use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::parsers::deserializers::deserialize_optional_timestamp;

/// Category assigned to glossary records that arrive without one
pub const DEFAULT_CATEGORY: &str = "Generale";

/// Anti-fraud glossary term
///
/// Deserialization is lenient: the backend has shipped glossary rows under
/// translator-style names too, so each field falls back through its aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawGlossaryRecord")]
pub struct GlossaryEntry {
    pub id: i64,
    pub term: String,
    pub definition: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GlossaryEntry {
    pub fn new(
        id: i64,
        term: impl Into<String>,
        definition: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            term: term.into(),
            definition: definition.into(),
            category: category.into(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Wire shape of a glossary row before normalization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGlossaryRecord {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_id")]
    id: i64,
    #[serde(default)]
    term: Option<String>,
    #[serde(default)]
    boomer_word: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    slang_word: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    updated_at: Option<DateTime<Utc>>,
}

impl From<RawGlossaryRecord> for GlossaryEntry {
    fn from(raw: RawGlossaryRecord) -> Self {
        let term = first_non_empty([raw.term, raw.boomer_word, raw.name]).unwrap_or_default();
        let definition =
            first_non_empty([raw.definition, raw.description, raw.slang_word]).unwrap_or_default();
        let category =
            first_non_empty([raw.category]).unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Self {
            id: raw.id,
            term,
            definition,
            category,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates.into_iter().flatten().find(|s| !s.is_empty())
}
