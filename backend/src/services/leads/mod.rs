//! Lead intake. Both public forms (contact and new-service-request) and
//! the dashboard's manual entry post here; the chatbot capture path calls
//! `add::submit_lead` directly so every lead flows through the same
//! pipeline: store locally first, then forward and notify out of band.

pub(crate) mod add;
mod notify;

use actix_web::web::{post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/leads";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", post().to(add::process))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::model::content::ContentDocument;

    use crate::config::Config;
    use crate::content::slots::SlotStore;
    use crate::content::state::ContentState;

    fn offline_config() -> Config {
        let mut config = Config::from_env();
        // No outbound calls from tests.
        config.lead_webhook_url = String::new();
        config.chat_endpoint = String::new();
        config
    }

    #[actix_web::test]
    async fn submitted_leads_are_stored_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        let content = ContentState::load(slots);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(content.clone()))
                .app_data(web::Data::new(offline_config()))
                .app_data(web::Data::new(reqwest::Client::new()))
                .service(super::configure_routes()),
        )
        .await;

        for name in ["ראשון", "שני"] {
            let req = test::TestRequest::post()
                .uri("/api/leads")
                .set_json(serde_json::json!({
                    "name": name,
                    "phone": "054-9740791",
                    "source": "Contact Form",
                    "message": "המזגן לא מקרר"
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }

        let doc: ContentDocument = content.snapshot().await;
        assert_eq!(doc.leads.len(), 2);
        assert_eq!(doc.leads[0].name, "שני");
        assert_eq!(doc.leads[1].name, "ראשון");
        assert!(!doc.leads[0].id.is_empty());
        assert!(!doc.leads[0].timestamp.is_empty());
    }
}
