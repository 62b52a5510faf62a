use serde::{Deserialize, Serialize};

/// Editable "about" section. The four stat strings (`experience`,
/// `customers`, `projects`, `warranty`) predate the narrative fields and are
/// still rendered by the stats strip, so they stay part of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub subtitle: String,
    pub establishment_and_experience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approach: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_image: Option<String>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    pub experience: String,
    pub customers: String,
    pub projects: String,
    pub warranty: String,
}

/// A certification or license shown on the about page. Certificates created
/// in the dashboard arrive without an `id`; the store assigns one whenever
/// the about section is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}
