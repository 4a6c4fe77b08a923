//! Data models shared by the interpreter, the matcher and the CLI.
//!
//! - [`AnalysisReply`] / [`RiskLevel`] - Interpreted analysis-endpoint replies
//! - [`GlossaryEntry`] - Anti-fraud glossary terms
//! - [`TranslationEntry`] - Boomer/slang word pairs
//! - [`SearchPage`] - Site pages for the global search bar
//! - [`SearchIndexRecord`] - Derived suggestion candidates
//!
//! Backend records are decoded leniently: ids may arrive as strings and field
//! names differ between endpoints. The custom deserializers live in
//! `parsers::deserializers`.

pub mod glossary;
pub mod page;
pub mod reply;
pub mod search;
pub mod translation;

pub use glossary::{DEFAULT_CATEGORY, GlossaryEntry};
pub use page::SearchPage;
pub use reply::{AnalysisReply, AnalyzeOutput, RiskLevel};
pub use search::SearchIndexRecord;
pub use translation::{Direction, TranslationEntry};
