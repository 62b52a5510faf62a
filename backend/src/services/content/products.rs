use actix_web::{web, HttpResponse, Responder};

use crate::content::state::ContentState;

/// Distinct product category tags feeding the catalog filter.
pub(crate) async fn process(state: web::Data<ContentState>) -> impl Responder {
    let doc = state.snapshot().await;
    HttpResponse::Ok().json(doc.product_categories())
}
