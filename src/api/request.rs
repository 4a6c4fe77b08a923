use serde::Serialize;
use thiserror::Error;

use crate::models::DEFAULT_CATEGORY;

/// Multipart field names tried in order when uploading an image
pub const IMAGE_FIELD_CANDIDATES: [&str; 5] = ["image", "file", "image_file", "photo", "upload"];

/// Header the ngrok tunnel needs to skip its browser interstitial
pub const NGROK_SKIP_HEADER: (&str, &str) = ("ngrok-skip-browser-warning", "true");

const PROBE_REJECTION_MARKERS: [&str; 3] = ["errore", "error", "nessun"];

/// JSON body of `POST /analyze`, also the text part of `/analyze-image`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub message_text: &'a str,
}

impl<'a> AnalyzeRequest<'a> {
    pub fn new(message_text: &'a str) -> Self {
        Self { message_text }
    }

    /// Minimal request used by the health check
    pub fn ping() -> Self {
        Self { message_text: "ping" }
    }
}

/// Admin form payload rejected before sending
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("required field '{0}' is blank")]
    MissingField(&'static str),
}

/// Body of `Glossary/Add` and `Glossary/Update/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlossaryPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub term: &'a str,
    pub definition: &'a str,
    pub category: &'a str,
}

impl<'a> GlossaryPayload<'a> {
    /// A blank category becomes [`DEFAULT_CATEGORY`]
    pub fn new(term: &'a str, definition: &'a str, category: Option<&'a str>) -> Self {
        let category =
            category.map(str::trim).filter(|c| !c.is_empty()).unwrap_or(DEFAULT_CATEGORY);
        Self { id: None, term, definition, category }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Term and definition must not be blank
    pub fn validate(&self) -> Result<(), PayloadError> {
        require("term", self.term)?;
        require("definition", self.definition)
    }
}

/// Body of `Translator/Add` and `Translator/Update/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatorPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub boomer_word: &'a str,
    pub slang_word: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl<'a> TranslatorPayload<'a> {
    pub fn new(boomer_word: &'a str, slang_word: &'a str, description: Option<&'a str>) -> Self {
        Self { id: None, boomer_word, slang_word, description }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Both words must not be blank; the description is optional
    pub fn validate(&self) -> Result<(), PayloadError> {
        require("boomerWord", self.boomer_word)?;
        require("slangWord", self.slang_word)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), PayloadError> {
    if value.trim().is_empty() { Err(PayloadError::MissingField(field)) } else { Ok(()) }
}

/// Whether a reply to an image upload means the field name was wrong
///
/// The next candidate in [`IMAGE_FIELD_CANDIDATES`] should be tried when
/// the body is empty or mentions an error.
pub fn is_probe_rejection(body: &str) -> bool {
    let body = body.trim();
    if body.is_empty() {
        return true;
    }
    let lowered = body.to_lowercase();
    PROBE_REJECTION_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Extra headers the analysis base URL requires
pub fn analysis_headers(analyze_base: &str) -> Vec<(&'static str, &'static str)> {
    if analyze_base.contains("ngrok") { vec![NGROK_SKIP_HEADER] } else { Vec::new() }
}
