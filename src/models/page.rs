use serde::{Deserialize, Serialize};

/// Site page record used by the global search bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_id")]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub route: String,
    #[serde(default)]
    pub category: String,
}
