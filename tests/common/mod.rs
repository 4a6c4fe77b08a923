//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const SAMPLE_GLOSSARY: &str = r#"[
    {"id": 1, "term": "Phishing",
     "definition": "Email che imitano la banca per rubare credenziali", "category": "Email"},
    {"id": 2, "term": "Pharma scam",
     "definition": "Farmaci falsi venduti online", "category": "Web"},
    {"id": 3, "term": "Smishing", "definition": "Phishing via SMS", "category": "SMS"},
    {"id": 4, "term": "Vishing", "definition": "Truffa telefonica", "category": "Telefono"},
    {"id": 5, "term": "Spoofing", "definition": "Mittente falsificato", "category": "Email"}
]"#;

pub const SAMPLE_TRANSLATIONS: &str = r#"[
    {"id": 1, "oldWord": "Fantastico", "newWord": "Top",
     "descriptionWord": "Qualcosa di molto bello"},
    {"id": 2, "oldWord": "Amico", "newWord": "Bro"},
    {"id": 3, "oldWord": "Imbarazzante", "newWord": "Cringe"}
]"#;

pub const SAMPLE_PAGES: &str = r#"[
    {"id": 1, "title": "Guida SPID", "keywords": ["spid", "identità digitale"],
     "route": "/guida-spid", "category": "Guide"},
    {"id": 2, "title": "Guida PEC", "keywords": ["posta certificata"],
     "route": "/guida-pec", "category": "Guide"},
    {"id": 3, "title": "Anti-Frode", "keywords": ["truffa", "phishing"],
     "route": "/antifrode", "category": "Sicurezza"}
]"#;

/// Builder for temporary DigiGuard data directories
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write an arbitrary file into the data directory
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content)
            .unwrap_or_else(|e| panic!("Failed to write {name}: {e}"));
        self
    }

    pub fn with_glossary(self, content: &str) -> Self {
        self.with_file("glossary.json", content)
    }

    /// Add glossary records programmatically
    pub fn with_glossary_records(self, records: &[GlossaryRecordBuilder]) -> Self {
        let content = format!(
            "[{}]",
            records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join(",")
        );
        self.with_glossary(&content)
    }

    pub fn with_translations(self, content: &str) -> Self {
        self.with_file("translations.json", content)
    }

    pub fn with_pages(self, content: &str) -> Self {
        self.with_file("pages.json", content)
    }

    /// Data directory with all three sample collections
    pub fn with_samples(self) -> Self {
        self.with_glossary(SAMPLE_GLOSSARY)
            .with_translations(SAMPLE_TRANSLATIONS)
            .with_pages(SAMPLE_PAGES)
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for glossary records in backend wire format
pub struct GlossaryRecordBuilder {
    id: i64,
    term: String,
    definition: String,
    category: Option<String>,
}

impl GlossaryRecordBuilder {
    pub fn new(id: i64, term: &str) -> Self {
        Self {
            id,
            term: term.to_string(),
            definition: format!("Definizione di {term}"),
            category: None,
        }
    }

    pub fn definition(mut self, definition: &str) -> Self {
        self.definition = definition.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let mut record = serde_json::json!({
            "id": self.id,
            "term": self.term,
            "definition": self.definition,
        });
        if let Some(category) = &self.category {
            record["category"] = serde_json::Value::String(category.clone());
        }
        record.to_string()
    }
}
