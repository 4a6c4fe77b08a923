//! DigiGuard - anti-fraud reply interpretation and search-as-you-type matching
//!
//! This library holds the client-side logic of the DigiGuard site. It supports:
//!
//! - Interpreting replies of the fraud-analysis endpoint into text plus a risk level
//! - Filtering and autocompleting the glossary, the generational translator and site pages
//! - Debounced search sessions driven by explicit timestamps
//! - Turning analysis outcomes into chat messages and server status
//! - Loading backend JSON collections leniently from disk
//!
//! # Example
//!
//! ```
//! use digiguard::{RiskLevel, interpret};
//!
//! let reply = interpret(r#"{"response":"Attenzione, possibile phishing.","score":"0.85"}"#)?;
//! assert_eq!(reply.text, "Attenzione, possibile phishing.");
//! assert_eq!(reply.risk_level, RiskLevel::Danger);
//! # Ok::<(), digiguard::InterpretError>(())
//! ```

pub mod api;
pub mod chat;
pub mod cli;
pub mod debounce;
pub mod filters;
pub mod interpreter;
pub mod models;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use debounce::SearchSession;
pub use filters::{filter, suggest};
pub use interpreter::{InterpretError, interpret};
pub use models::{AnalysisReply, GlossaryEntry, RiskLevel, SearchPage, TranslationEntry};
pub use parsers::{load_glossary, load_pages, load_translations};
pub use utils::paths::format_path_with_tilde;
