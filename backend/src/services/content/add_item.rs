use actix_web::{web, HttpResponse, Responder};
use common::model::patch::{ListSection, SectionItem};
use serde_json::Value;

use crate::content::state::ContentState;

pub(crate) async fn process(
    state: web::Data<ContentState>,
    section: web::Path<String>,
    payload: web::Json<Value>,
) -> impl Responder {
    match add_item(&state, &section, payload.into_inner()).await {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

async fn add_item(state: &ContentState, section: &str, payload: Value) -> Result<String, String> {
    let section =
        ListSection::parse(section).ok_or_else(|| format!("unknown list section: {section}"))?;
    let item = SectionItem::from_section(section, payload)?;
    Ok(state.add_item(item).await)
}
