use actix_web::{web, HttpResponse, Responder};
use common::model::patch::SingletonUpdate;
use serde_json::Value;

use crate::content::state::ContentState;

pub(crate) async fn process(
    state: web::Data<ContentState>,
    section: web::Path<String>,
    payload: web::Json<Value>,
) -> impl Responder {
    match update_section(&state, &section, payload.into_inner()).await {
        Ok(()) => HttpResponse::Ok().body("Section updated"),
        Err(e) => HttpResponse::BadRequest().body(e),
    }
}

async fn update_section(
    state: &ContentState,
    section: &str,
    payload: Value,
) -> Result<(), String> {
    let update = SingletonUpdate::from_section(section, payload)?;
    state.update_singleton(update).await;
    Ok(())
}
