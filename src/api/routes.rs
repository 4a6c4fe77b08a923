use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Everything except the characters encodeURIComponent leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.pad(name)
    }
}

/// Backend routes used by the site
///
/// Glossary, translator and search routes live under the content API base;
/// `Analyze` and `AnalyzeImage` live under the analysis service base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint<'a> {
    GlossaryAll,
    GlossaryById(i64),
    GlossaryByWord(&'a str),
    GlossaryAdd,
    GlossaryUpdate(i64),
    GlossaryDelete(i64),
    TranslatorAll,
    TranslatorById(i64),
    TranslatorByWord(&'a str),
    TranslatorAdd,
    TranslatorUpdate(i64),
    TranslatorDelete(i64),
    Search(&'a str),
    SearchAllPages,
    Analyze,
    AnalyzeImage,
}

/// Percent-encodes a single path segment the way `encodeURIComponent` does
pub fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT_ENCODE_SET).to_string()
}

impl Endpoint<'_> {
    /// Path relative to the endpoint's base URL, without a leading slash
    ///
    /// # Examples
    ///
    /// ```
    /// use digiguard::api::Endpoint;
    ///
    /// assert_eq!(
    ///     Endpoint::GlossaryByWord("posta certificata").path(),
    ///     "Glossary/GetByWord/posta%20certificata"
    /// );
    /// assert_eq!(Endpoint::TranslatorDelete(7).path(), "Translator/Delete/7");
    /// ```
    pub fn path(&self) -> String {
        match self {
            Endpoint::GlossaryAll => "Glossary/GetAll".to_string(),
            Endpoint::GlossaryById(id) => format!("Glossary/GetById/{id}"),
            Endpoint::GlossaryByWord(word) => {
                format!("Glossary/GetByWord/{}", encode_component(word))
            }
            Endpoint::GlossaryAdd => "Glossary/Add".to_string(),
            Endpoint::GlossaryUpdate(id) => format!("Glossary/Update/{id}"),
            Endpoint::GlossaryDelete(id) => format!("Glossary/Delete/{id}"),
            Endpoint::TranslatorAll => "Translator/GetAll".to_string(),
            Endpoint::TranslatorById(id) => format!("Translator/GetById/{id}"),
            Endpoint::TranslatorByWord(word) => {
                format!("Translator/GetByWord/{}", encode_component(word))
            }
            Endpoint::TranslatorAdd => "Translator/Add".to_string(),
            Endpoint::TranslatorUpdate(id) => format!("Translator/Update/{id}"),
            Endpoint::TranslatorDelete(id) => format!("Translator/Delete/{id}"),
            Endpoint::Search(query) => format!("Search/Search/{}", encode_component(query)),
            Endpoint::SearchAllPages => "Search/GetAllPages".to_string(),
            Endpoint::Analyze => "analyze".to_string(),
            Endpoint::AnalyzeImage => "analyze-image".to_string(),
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::GlossaryAdd
            | Endpoint::TranslatorAdd
            | Endpoint::Analyze
            | Endpoint::AnalyzeImage => Method::Post,
            Endpoint::GlossaryUpdate(_) | Endpoint::TranslatorUpdate(_) => Method::Put,
            Endpoint::GlossaryDelete(_) | Endpoint::TranslatorDelete(_) => Method::Delete,
            _ => Method::Get,
        }
    }

    pub fn is_analysis(&self) -> bool {
        matches!(self, Endpoint::Analyze | Endpoint::AnalyzeImage)
    }

    /// Full URL below `api_base` or `analyze_base`, whichever the route belongs to
    pub fn url(&self, api_base: &str, analyze_base: &str) -> String {
        let base = if self.is_analysis() { analyze_base } else { api_base };
        format!("{}/{}", base.trim_end_matches('/'), self.path())
    }
}
