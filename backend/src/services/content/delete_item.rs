use actix_web::{web, HttpResponse, Responder};
use common::model::patch::DeletableSection;

use crate::content::state::ContentState;

pub(crate) async fn process(
    state: web::Data<ContentState>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (section, id) = path.into_inner();
    match DeletableSection::parse(&section) {
        Some(section) => {
            let deleted = state.delete_item(section, &id).await;
            HttpResponse::Ok().json(serde_json::json!({ "deleted": deleted }))
        }
        None => HttpResponse::BadRequest().body(format!("unknown list section: {section}")),
    }
}
