/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::path::Path;

use assert_cmd::Command;
use common::{DataDirBuilder, GlossaryRecordBuilder};
use predicates::prelude::*;

const DANGER_REPLY: &str = r#"{"response":"Attenzione, possibile phishing.","score":"0.85"}"#;

/// Binary pointed at the given data directory, with a clean logging setup
fn digiguard(data_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_digiguard"));
    cmd.env("DIGIGUARD_DATA_DIR", data_dir)
        .env_remove("DIGIGUARD_LOG")
        .env_remove("DIGIGUARD_SUGGESTION_LIMIT")
        .env_remove("DIGIGUARD_API_BASE")
        .env_remove("DIGIGUARD_ANALYZE_BASE")
        .env_remove("DIGIGUARD_HEALTH_TIMEOUT_MS");
    cmd
}

#[test]
fn test_cli_stats_command_with_data() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("DigiGuard Data Statistics"))
        .stdout(predicate::str::contains("Glossary terms: 5"))
        .stdout(predicate::str::contains("Categories: 4"))
        .stdout(predicate::str::contains("Translator pairs: 3"))
        .stdout(predicate::str::contains("Search pages: 3"));
}

#[test]
fn test_cli_stats_command_empty_directory() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Glossary terms: (missing"))
        .stdout(predicate::str::contains("Search pages: (missing"));
}

#[test]
fn test_cli_no_command_shows_help_message() {
    let data_dir = DataDirBuilder::new().build();
    digiguard(data_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    let data_dir = DataDirBuilder::new().build();
    digiguard(data_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Anti-fraud reply interpreter"))
        .stdout(predicate::str::contains("interpret"))
        .stdout(predicate::str::contains("suggest"));
}

#[test]
fn test_cli_version_flag() {
    let data_dir = DataDirBuilder::new().build();
    digiguard(data_dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_interpret_from_stdin() {
    let data_dir = DataDirBuilder::new().build();
    digiguard(data_dir.path())
        .arg("interpret")
        .write_stdin(DANGER_REPLY)
        .assert()
        .success()
        .stdout(predicate::str::contains("✗ RISCHIOSO"))
        .stdout(predicate::str::contains("Attenzione, possibile phishing."));
}

#[test]
fn test_cli_interpret_from_file_with_embedded_score() {
    let data_dir =
        DataDirBuilder::new().with_file("reply.txt", "Ciao! score: verde tutto ok").build();

    digiguard(data_dir.path())
        .arg("interpret")
        .arg(data_dir.path().join("reply.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ SICURO"))
        .stdout(predicate::str::contains("Ciao! tutto ok"));
}

#[test]
fn test_cli_interpret_json_output() {
    let data_dir = DataDirBuilder::new().build();
    digiguard(data_dir.path())
        .args(["interpret", "--json"])
        .write_stdin(DANGER_REPLY)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""score": "0.85""#))
        .stdout(predicate::str::contains(r#""risk_level": "danger""#));
}

#[test]
fn test_cli_interpret_empty_reply_shows_fallback() {
    let data_dir = DataDirBuilder::new().build();
    digiguard(data_dir.path())
        .arg("interpret")
        .write_stdin("   ")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mi dispiace, non ho ricevuto una risposta valida"));
}

#[test]
fn test_cli_interpret_json_backend_error_fails() {
    let data_dir = DataDirBuilder::new().build();
    digiguard(data_dir.path())
        .args(["interpret", "--json"])
        .write_stdin(r#"{"error":"modello non disponibile"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("modello non disponibile"));
}

#[test]
fn test_cli_glossary_query() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["glossary", "--query", "ph"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phishing [Email]"))
        .stdout(predicate::str::contains("Pharma scam [Web]"))
        .stdout(predicate::str::contains("2 of 5 terms"));
}

#[test]
fn test_cli_glossary_query_definitions() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["glossary", "--query", "ph", "--definitions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Smishing [SMS]"))
        .stdout(predicate::str::contains("3 of 5 terms"));
}

#[test]
fn test_cli_glossary_category() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["glossary", "--category", "Email"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Phishing [Email]"))
        .stdout(predicate::str::contains("Spoofing [Email]"))
        .stdout(predicate::str::contains("2 of 5 terms"));
}

#[test]
fn test_cli_glossary_missing_file() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .arg("glossary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open data file"));
}

#[test]
fn test_cli_translate_word_both_directions() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["translate", "--word", "fantastico"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fantastico → Top"))
        .stdout(predicate::str::contains("Qualcosa di molto bello"));

    digiguard(data_dir.path())
        .args(["translate", "--word", "CRINGE", "--direction", "slang-to-boomer"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cringe → Imbarazzante"));
}

#[test]
fn test_cli_translate_unknown_word() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["translate", "--word", "boh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nessuna traduzione trovata per \"boh\""));
}

#[test]
fn test_cli_translate_invalid_direction() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["translate", "--word", "Top", "--direction", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown direction"));
}

#[test]
fn test_cli_suggest_glossary() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["suggest", "glossary", "--query", "ph"])
        .assert()
        .success()
        .stdout("Phishing\nPharma scam\n");
}

#[test]
fn test_cli_suggest_limit_and_short_query() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["suggest", "glossary", "--query", "ing", "--limit", "2"])
        .assert()
        .success()
        .stdout("Phishing\nSmishing\n");

    digiguard(data_dir.path())
        .args(["suggest", "translations", "--query", "o"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_suggest_limit_from_environment() {
    let data_dir = DataDirBuilder::new()
        .with_glossary_records(&[
            GlossaryRecordBuilder::new(1, "Truffa romantica"),
            GlossaryRecordBuilder::new(2, "Truffa del pacco"),
            GlossaryRecordBuilder::new(3, "Truffa del CEO"),
        ])
        .build();

    digiguard(data_dir.path())
        .env("DIGIGUARD_SUGGESTION_LIMIT", "1")
        .args(["suggest", "glossary", "--query", "truffa"])
        .assert()
        .success()
        .stdout("Truffa romantica\n");
}

#[test]
fn test_cli_invalid_setting_fails() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .env("DIGIGUARD_SUGGESTION_LIMIT", "many")
        .args(["suggest", "glossary", "--query", "ph"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DIGIGUARD_SUGGESTION_LIMIT"));
}

#[test]
fn test_cli_categories() {
    let data_dir = DataDirBuilder::new()
        .with_glossary_records(&[
            GlossaryRecordBuilder::new(1, "Phishing").category("Email"),
            GlossaryRecordBuilder::new(2, "Vishing").category("Telefono"),
            GlossaryRecordBuilder::new(3, "Spoofing").category("Email"),
            GlossaryRecordBuilder::new(4, "Malware"),
        ])
        .build();

    digiguard(data_dir.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("Email\nTelefono\nGenerale\n");
}

#[test]
fn test_cli_pages() {
    let data_dir = DataDirBuilder::new().with_samples().build();

    digiguard(data_dir.path())
        .args(["pages", "--query", "spid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Guida SPID  /guida-spid"));

    digiguard(data_dir.path())
        .args(["pages", "--query", "pe"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_endpoints_defaults() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .arg("endpoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content API: http://localhost:5147/api"))
        .stdout(predicate::str::contains("Analysis API: /api"))
        .stdout(predicate::str::contains("Health check timeout: 5000 ms"))
        .stdout(predicate::str::contains("http://localhost:5147/api/Glossary/GetAll"))
        .stdout(predicate::str::contains("POST   /api/analyze-image"))
        .stdout(predicate::str::contains("ngrok-skip-browser-warning").not());
}

#[test]
fn test_cli_endpoints_follow_environment() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .env("DIGIGUARD_API_BASE", "https://digiguard.example/api/")
        .env("DIGIGUARD_ANALYZE_BASE", "https://demo.ngrok-free.dev")
        .env("DIGIGUARD_HEALTH_TIMEOUT_MS", "1500")
        .arg("endpoints")
        .assert()
        .success()
        .stdout(predicate::str::contains("Health check timeout: 1500 ms"))
        .stdout(predicate::str::contains("POST   https://digiguard.example/api/Translator/Add"))
        .stdout(predicate::str::contains("POST   https://demo.ngrok-free.dev/analyze"))
        .stdout(predicate::str::contains("Analysis header: ngrok-skip-browser-warning: true"));
}

#[test]
fn test_cli_request_glossary_add() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .args(["request", "glossary", "--term", "Phishing", "--definition", "Truffa via email"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POST   http://localhost:5147/api/Glossary/Add"))
        .stdout(predicate::str::contains(r#""term": "Phishing""#))
        .stdout(predicate::str::contains(r#""category": "Generale""#))
        .stdout(predicate::str::contains(r#""id""#).not());
}

#[test]
fn test_cli_request_glossary_blank_term_fails() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .args(["request", "glossary", "--term", "  ", "--definition", "Truffa via email"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid glossary term"))
        .stderr(predicate::str::contains("required field 'term'"));
}

#[test]
fn test_cli_request_translation_update() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .args(["request", "translation", "--boomer-word", "Amico", "--slang-word", "Bro"])
        .args(["--id", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PUT    http://localhost:5147/api/Translator/Update/3"))
        .stdout(predicate::str::contains(r#""id": 3"#))
        .stdout(predicate::str::contains(r#""boomerWord": "Amico""#))
        .stdout(predicate::str::contains(r#""slangWord": "Bro""#));
}

#[test]
fn test_cli_request_analyze_and_search() {
    let data_dir = DataDirBuilder::new().build();

    digiguard(data_dir.path())
        .args(["request", "analyze", "--text", "Hai vinto un premio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("POST   /api/analyze"))
        .stdout(predicate::str::contains(r#""message_text": "Hai vinto un premio""#));

    digiguard(data_dir.path())
        .args(["request", "search", "--query", "guida spid"])
        .assert()
        .success()
        .stdout("GET    http://localhost:5147/api/Search/Search/guida%20spid\n");
}
