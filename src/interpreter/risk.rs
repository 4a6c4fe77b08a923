//! Score vocabulary: maps a raw score signal to a [`RiskLevel`].
//!
//! Classification runs in two pure steps joined by [`classify`]:
//! word normalization first, numeric bucketing second. A signal that is
//! present but matches neither maps to [`RiskLevel::Warning`].

use std::sync::LazyLock;

use regex::Regex;

use crate::models::RiskLevel;

const SAFE_WORDS: [&str; 4] = ["green", "verde", "safe", "sicuro"];
const WARNING_WORDS: [&str; 4] = ["yellow", "giallo", "warning", "attenzione"];
const DANGER_WORDS: [&str; 5] = ["red", "rosso", "danger", "pericolo", "rischioso"];

/// Upper bound (exclusive) of the safe numeric band
pub const SAFE_BELOW: f64 = 0.4;
/// Upper bound (exclusive) of the warning numeric band
pub const WARNING_BELOW: f64 = 0.7;

// Leading decimal number, the way a lenient float parser reads "0.85 (alto)"
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").expect("valid number pattern")
});

/// Map a color or risk word (any case) to its level
pub fn normalize_word(word: &str) -> Option<RiskLevel> {
    let word = word.trim().to_lowercase();
    let word = word.as_str();

    if SAFE_WORDS.contains(&word) {
        Some(RiskLevel::Safe)
    } else if WARNING_WORDS.contains(&word) {
        Some(RiskLevel::Warning)
    } else if DANGER_WORDS.contains(&word) {
        Some(RiskLevel::Danger)
    } else {
        None
    }
}

/// Bucket a numeric score: `[0, 0.4)` safe, `[0.4, 0.7)` warning, `>= 0.7` danger
///
/// Negative and non-finite values have no bucket.
pub fn bucket_numeric(value: f64) -> Option<RiskLevel> {
    if !value.is_finite() || value < 0.0 {
        None
    } else if value < SAFE_BELOW {
        Some(RiskLevel::Safe)
    } else if value < WARNING_BELOW {
        Some(RiskLevel::Warning)
    } else {
        Some(RiskLevel::Danger)
    }
}

/// Read the leading number of a score string, if any
pub fn parse_leading_number(score: &str) -> Option<f64> {
    LEADING_NUMBER.find(score.trim()).and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Classify a score signal that is known to be present
pub fn classify(score: &str) -> RiskLevel {
    normalize_word(score)
        .or_else(|| parse_leading_number(score).and_then(bucket_numeric))
        .unwrap_or(RiskLevel::Warning)
}

/// Classify an optional score signal; no signal means [`RiskLevel::Unknown`]
pub fn classify_signal(score: Option<&str>) -> RiskLevel {
    score.map(classify).unwrap_or(RiskLevel::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word_vocabulary() {
        for word in ["green", "verde", "safe", "sicuro"] {
            assert_eq!(normalize_word(word), Some(RiskLevel::Safe), "{}", word);
        }
        for word in ["yellow", "giallo", "warning", "attenzione"] {
            assert_eq!(normalize_word(word), Some(RiskLevel::Warning), "{}", word);
        }
        for word in ["red", "rosso", "danger", "pericolo", "rischioso"] {
            assert_eq!(normalize_word(word), Some(RiskLevel::Danger), "{}", word);
        }
    }

    #[test]
    fn test_normalize_word_case_insensitive() {
        assert_eq!(normalize_word("GREEN"), Some(RiskLevel::Safe));
        assert_eq!(normalize_word("  Rosso "), Some(RiskLevel::Danger));
        assert_eq!(normalize_word("blue"), None);
    }

    #[test]
    fn test_bucket_numeric_boundaries() {
        assert_eq!(bucket_numeric(0.0), Some(RiskLevel::Safe));
        assert_eq!(bucket_numeric(0.39), Some(RiskLevel::Safe));
        assert_eq!(bucket_numeric(0.4), Some(RiskLevel::Warning));
        assert_eq!(bucket_numeric(0.69), Some(RiskLevel::Warning));
        assert_eq!(bucket_numeric(0.7), Some(RiskLevel::Danger));
        assert_eq!(bucket_numeric(1.0), Some(RiskLevel::Danger));
        assert_eq!(bucket_numeric(42.0), Some(RiskLevel::Danger));
    }

    #[test]
    fn test_bucket_numeric_out_of_range() {
        assert_eq!(bucket_numeric(-0.1), None);
        assert_eq!(bucket_numeric(f64::NAN), None);
        assert_eq!(bucket_numeric(f64::INFINITY), None);
    }

    #[test]
    fn test_parse_leading_number() {
        assert_eq!(parse_leading_number("0.85"), Some(0.85));
        assert_eq!(parse_leading_number(" 0.5 (medio)"), Some(0.5));
        assert_eq!(parse_leading_number(".3"), Some(0.3));
        assert_eq!(parse_leading_number("7e-1"), Some(0.7));
        assert_eq!(parse_leading_number("alto"), None);
        assert_eq!(parse_leading_number("nan"), None);
    }

    #[test]
    fn test_classify_dispatch() {
        assert_eq!(classify("verde"), RiskLevel::Safe);
        assert_eq!(classify("0.2"), RiskLevel::Safe);
        assert_eq!(classify("0.85"), RiskLevel::Danger);
        // Present but unmapped stays conservative
        assert_eq!(classify("blue"), RiskLevel::Warning);
        assert_eq!(classify("-3"), RiskLevel::Warning);
    }

    #[test]
    fn test_classify_signal_absent() {
        assert_eq!(classify_signal(None), RiskLevel::Unknown);
        assert_eq!(classify_signal(Some("red")), RiskLevel::Danger);
    }
}
