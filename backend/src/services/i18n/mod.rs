//! Locale service: the persisted locale choice, the toggle, and the
//! dictionaries themselves. The reported `dir` value (`rtl`/`ltr`) is what
//! the client applies to the document element after every change.

mod current;
pub mod state;
mod table;
mod toggle;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/i18n";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(current::process))
        .route("/toggle", post().to(toggle::process))
        .route("/{locale}/table", get().to(table::process))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use crate::content::slots::SlotStore;
    use crate::services::i18n::state::LanguageState;

    #[actix_web::test]
    async fn locale_toggle_reports_the_new_direction() {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(LanguageState::load(slots)))
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/i18n").to_request();
        let info: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info["language"], "he");
        assert_eq!(info["dir"], "rtl");

        let req = test::TestRequest::post().uri("/api/i18n/toggle").to_request();
        let info: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info["language"], "en");
        assert_eq!(info["dir"], "ltr");
    }

    #[actix_web::test]
    async fn dictionaries_are_served_per_locale() {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(LanguageState::load(slots)))
                .service(super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/i18n/en/table").to_request();
        let table: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(table["nav.home"], "Home");

        let req = test::TestRequest::get().uri("/api/i18n/xx/table").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
