use serde::{Deserialize, Serialize};

/// A service offering. The `*_key` fields are translation keys resolved
/// through the locale dictionaries at render time; they must never hold
/// already-rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub id: String,
    pub title_key: String,
    pub desc_key: String,
    pub detailed_desc_key: String,
    pub icon: String,
    pub color: String,
    pub hover_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
