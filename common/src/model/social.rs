use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub whatsapp: String,
    pub facebook: String,
    pub instagram: String,
    pub email: String,
}
