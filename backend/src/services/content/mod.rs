//! # Content Service Module
//!
//! HTTP surface of the content store. Every marketing page reads the full
//! document through `GET /api/content`; the admin dashboard writes through
//! the section-addressed mutation routes. Sections are named with the same
//! camelCase keys the persisted document uses (`hero`, `services`,
//! `averageRating`, ...).
//!
//! ## Registered Routes:
//!
//! *   **`GET ""`**: full document snapshot.
//! *   **`GET /posts/{slug}`**: blog permalink resolution; a missing slug
//!     is a 404, never an error propagated into the page.
//! *   **`GET /faqs/grouped`**: FAQs grouped by category, with the
//!     uncategorized bucket named in the active locale.
//! *   **`GET /products/categories`**: distinct catalog filter tags.
//! *   **`PUT /{section}`**: wholesale replacement of a singleton section.
//! *   **`POST /{section}`**: append a new list item; the store assigns
//!     and returns its id.
//! *   **`PUT /{section}/{id}`**: shallow patch of one list item; an
//!     unknown id is a silent no-op.
//! *   **`DELETE /{section}/{id}`**: remove one list item (leads
//!     included); an unknown id is a silent no-op.

mod add_item;
mod delete_item;
mod faqs;
mod get;
mod posts;
mod products;
mod update_item;
mod update_section;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/content";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(get::process))
        .route("/posts/{slug}", get().to(posts::process))
        .route("/faqs/grouped", get().to(faqs::process))
        .route("/products/categories", get().to(products::process))
        .route("/{section}", put().to(update_section::process))
        .route("/{section}", post().to(add_item::process))
        .route("/{section}/{id}", put().to(update_item::process))
        .route("/{section}/{id}", delete().to(delete_item::process))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::model::content::ContentDocument;

    use crate::content::slots::SlotStore;
    use crate::content::state::ContentState;
    use crate::services::i18n::state::LanguageState;

    async fn spawn_app() -> (
        tempfile::TempDir,
        impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let slots = SlotStore::open(dir.path().join("slots.sqlite")).unwrap();
        let content = ContentState::load(slots.clone());
        let language = LanguageState::load(slots);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(content))
                .app_data(web::Data::new(language))
                .service(super::configure_routes()),
        )
        .await;
        (dir, app)
    }

    #[actix_web::test]
    async fn full_document_is_served() {
        let (_dir, app) = spawn_app().await;
        let req = test::TestRequest::get().uri("/api/content").to_request();
        let doc: ContentDocument = test::call_and_read_body_json(&app, req).await;
        assert_eq!(doc, ContentDocument::default());
    }

    #[actix_web::test]
    async fn list_item_lifecycle_over_http() {
        let (_dir, app) = spawn_app().await;

        let req = test::TestRequest::post()
            .uri("/api/content/faqs")
            .set_json(serde_json::json!({
                "question": "האם יש אחריות?",
                "answer": "כן",
                "category": "כללי"
            }))
            .to_request();
        let created: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/content/faqs/{id}"))
            .set_json(serde_json::json!({"answer": "כן, 12 חודשים"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::get().uri("/api/content").to_request();
        let doc: ContentDocument = test::call_and_read_body_json(&app, req).await;
        let faq = doc.faqs.iter().find(|f| f.id == id).unwrap();
        assert_eq!(faq.answer, "כן, 12 חודשים");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/content/faqs/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::get().uri("/api/content").to_request();
        let doc: ContentDocument = test::call_and_read_body_json(&app, req).await;
        assert!(doc.faqs.iter().all(|f| f.id != id));
    }

    #[actix_web::test]
    async fn unknown_sections_are_rejected() {
        let (_dir, app) = spawn_app().await;
        let req = test::TestRequest::put()
            .uri("/api/content/leads")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/content/leads")
            .set_json(serde_json::json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn permalink_misses_render_not_found() {
        let (_dir, app) = spawn_app().await;
        let req = test::TestRequest::get()
            .uri("/api/content/posts/first-blog-post")
            .to_request();
        let post: common::model::post::Post = test::call_and_read_body_json(&app, req).await;
        assert_eq!(post.id, "1");

        let req = test::TestRequest::get()
            .uri("/api/content/posts/missing")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn grouped_faqs_use_localized_default_bucket() {
        let (_dir, app) = spawn_app().await;
        let req = test::TestRequest::post()
            .uri("/api/content/faqs")
            .set_json(serde_json::json!({"question": "בלי קטגוריה", "answer": "x"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::get()
            .uri("/api/content/faqs/grouped")
            .to_request();
        let groups: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        let default_group = groups
            .iter()
            .find(|g| g["category"] == "כללי")
            .expect("default bucket present");
        let items = default_group["items"].as_array().unwrap();
        assert!(items.iter().any(|i| i["question"] == "בלי קטגוריה"));
    }
}
