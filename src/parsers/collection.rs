use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::models::{GlossaryEntry, SearchPage, TranslationEntry};
use crate::utils::safe_open_file;

/// Load the glossary, as returned by `Glossary/GetAll`
pub fn load_glossary(path: &Path) -> Result<Vec<GlossaryEntry>> {
    load_collection(path, "glossary")
}

/// Load the translator word pairs, as returned by `Translator/GetAll`
pub fn load_translations(path: &Path) -> Result<Vec<TranslationEntry>> {
    load_collection(path, "translations")
}

/// Load the site search pages, as returned by `Search/GetAllPages`
pub fn load_pages(path: &Path) -> Result<Vec<SearchPage>> {
    load_collection(path, "pages")
}

/// Decode a JSON array element by element
/// Gracefully handles malformed elements by logging and skipping them
/// Returns an error if more than 50% of elements fail to decode
fn load_collection<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<Vec<T>> {
    let file = safe_open_file(path)?;

    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {kind} file as JSON: {}", path.display()))?;

    let Value::Array(elements) = value else {
        bail!("Expected a JSON array in {kind} file: {}", path.display());
    };

    let total = elements.len();
    let mut entries = Vec::with_capacity(total);
    let mut skipped_count = 0;

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<T>(element) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(
                    file = %path.display(),
                    element = index,
                    error = %e,
                    "Skipping malformed {kind} record"
                );
                skipped_count += 1;
            }
        }
    }

    // Check if failure rate is too high
    if total > 0 {
        let failure_rate = (skipped_count as f64) / (total as f64);
        if failure_rate > 0.5 {
            bail!(
                "Too many malformed records in {}: {} of {} failed ({:.1}%)",
                path.display(),
                skipped_count,
                total,
                failure_rate * 100.0
            );
        }
    }

    if skipped_count > 0 {
        info!(
            file = %path.display(),
            loaded = entries.len(),
            skipped = skipped_count,
            "Loaded {kind} with skipped records"
        );
    }

    Ok(entries)
}
