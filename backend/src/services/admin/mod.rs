//! # Admin Session Module
//!
//! The dashboard's credential gate: a plain-text credential pair and a
//! persisted boolean, which is all the dashboard actually relies on; route
//! protection itself happens in the client.
//!
//! ## Registered Routes:
//!
//! *   **`POST /login`**: case-sensitive check against the stored pair.
//! *   **`POST /logout`**: drops the session marker.
//! *   **`PUT /credentials`**: unconditional overwrite of the pair; the
//!     open session stays valid.
//! *   **`GET /session`**: the dashboard's session probe.

mod credentials;
mod login;
mod logout;
mod session;
pub mod state;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/admin";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/login", post().to(login::process))
        .route("/logout", post().to(logout::process))
        .route("/credentials", put().to(credentials::process))
        .route("/session", get().to(session::process))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};

    use crate::content::slots::SlotStore;
    use crate::services::admin::state::AdminState;

    async fn login_status(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        username: &str,
        password: &str,
    ) -> actix_web::http::StatusCode {
        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(serde_json::json!({"username": username, "password": password}))
            .to_request();
        test::call_service(app, req).await.status()
    }

    #[actix_web::test]
    async fn login_flow_over_http() {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        let state = AdminState::load(slots);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .service(super::configure_routes()),
        )
        .await;

        assert_eq!(
            login_status(&app, "admin", "wrong").await,
            actix_web::http::StatusCode::UNAUTHORIZED
        );
        assert!(!state.is_authenticated().await);

        assert!(login_status(&app, "admin", "admin123").await.is_success());
        assert!(state.is_authenticated().await);

        let req = test::TestRequest::get().uri("/api/admin/session").to_request();
        let session: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(session["authenticated"], true);
        assert_eq!(session["username"], "admin");

        let req = test::TestRequest::put()
            .uri("/api/admin/credentials")
            .set_json(serde_json::json!({"username": "x", "password": "y"}))
            .to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        // Rotating credentials does not end the open session.
        assert!(state.is_authenticated().await);

        let req = test::TestRequest::post().uri("/api/admin/logout").to_request();
        assert!(test::call_service(&app, req).await.status().is_success());
        assert!(!state.is_authenticated().await);

        assert_eq!(
            login_status(&app, "admin", "admin123").await,
            actix_web::http::StatusCode::UNAUTHORIZED
        );
        assert!(login_status(&app, "x", "y").await.is_success());
    }
}
