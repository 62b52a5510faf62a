use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a lead came from. Serialized with the display names the dashboard
/// and older persisted snapshots use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadSource {
    #[serde(rename = "Contact Form")]
    ContactForm,
    ChatBot,
    Manual,
    #[serde(rename = "Service Request Form")]
    ServiceRequestForm,
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LeadSource::ContactForm => "Contact Form",
            LeadSource::ChatBot => "ChatBot",
            LeadSource::Manual => "Manual",
            LeadSource::ServiceRequestForm => "Service Request Form",
        };
        f.write_str(name)
    }
}

/// A captured prospective-customer inquiry. Append-only: `id` and
/// `timestamp` are assigned by the content store at creation and never by
/// callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub source: LeadSource,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_area: Option<String>,
}

/// Lead data as submitted by the public forms, the chatbot capture, or the
/// dashboard's manual entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub source: LeadSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub residential_area: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_round_trips_display_names() {
        let json = serde_json::to_string(&LeadSource::ServiceRequestForm).unwrap();
        assert_eq!(json, "\"Service Request Form\"");
        let back: LeadSource = serde_json::from_str("\"Contact Form\"").unwrap();
        assert_eq!(back, LeadSource::ContactForm);
    }
}
