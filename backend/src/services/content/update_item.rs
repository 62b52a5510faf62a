use actix_web::{web, HttpResponse, Responder};
use common::model::patch::{ListSection, SectionPatch};
use serde_json::Value;

use crate::content::state::ContentState;

pub(crate) async fn process(
    state: web::Data<ContentState>,
    path: web::Path<(String, String)>,
    payload: web::Json<Value>,
) -> impl Responder {
    let (section, id) = path.into_inner();
    match update_item(&state, &section, &id, payload.into_inner()).await {
        // An unknown id is not an error: the list is simply left unchanged.
        Ok(updated) => HttpResponse::Ok().json(serde_json::json!({ "updated": updated })),
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

async fn update_item(
    state: &ContentState,
    section: &str,
    id: &str,
    payload: Value,
) -> Result<bool, String> {
    let section =
        ListSection::parse(section).ok_or_else(|| format!("unknown list section: {section}"))?;
    let patch = SectionPatch::from_section(section, payload)?;
    Ok(state.update_item(id, patch).await)
}
