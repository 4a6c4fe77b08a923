use std::sync::LazyLock;

use regex::Regex;

// "score" then optional spaces, a colon, optional spaces and a run of letters
static SCORE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)score\s*:\s*([a-zA-Z]+)").expect("valid score pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// First `score: <word>` in the text, lower-cased
pub fn find_embedded_score(text: &str) -> Option<String> {
    SCORE_PHRASE.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str().to_lowercase())
}

/// Remove every `score: <word>` phrase and collapse whitespace runs
pub fn strip_score_phrases(text: &str) -> String {
    let stripped = SCORE_PHRASE.replace_all(text, "");
    WHITESPACE_RUN.replace_all(stripped.trim(), " ").into_owned()
}
