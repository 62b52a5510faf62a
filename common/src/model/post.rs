use serde::{Deserialize, Serialize};

/// Blog entry. `slug` is the externally addressable key used by permalink
/// lookup; duplicates resolve to the first match in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub id: String,
    pub slug: String,
    pub title: String,
    pub author: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    pub summary: String,
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
