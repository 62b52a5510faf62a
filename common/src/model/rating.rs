use serde::{Deserialize, Serialize};

/// Aggregate rating shown in the hero area. Edited directly in the
/// dashboard; it is an editorial value, not derived from the testimonial
/// list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageRatingData {
    pub value: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
}
