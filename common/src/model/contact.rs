use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub phone: String,
    pub email: String,
    pub address: String,
    pub hours: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_embed_url: Option<String>,
}
