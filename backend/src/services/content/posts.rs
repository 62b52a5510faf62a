use actix_web::{web, HttpResponse, Responder};

use crate::content::state::ContentState;

/// Blog permalink lookup. Slugs are not guaranteed unique; the first match
/// in list order wins, and a miss is the not-found page, not a failure.
pub(crate) async fn process(
    state: web::Data<ContentState>,
    slug: web::Path<String>,
) -> impl Responder {
    let doc = state.snapshot().await;
    match doc.find_post_by_slug(&slug) {
        Some(post) => HttpResponse::Ok().json(post),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "post not found" })),
    }
}
