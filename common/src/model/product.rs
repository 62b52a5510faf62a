use serde::{Deserialize, Serialize};

/// Catalog entry. `category` is a free-form tag used by the client-side
/// filter, not a closed enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image: String,
    #[serde(default)]
    pub features: Vec<String>,
}
