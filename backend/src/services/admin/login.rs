use actix_web::{web, HttpResponse, Responder};
use common::requests::LoginRequest;

use crate::services::admin::state::AdminState;

pub(crate) async fn process(
    state: web::Data<AdminState>,
    payload: web::Json<LoginRequest>,
) -> impl Responder {
    if state.login(&payload.username, &payload.password).await {
        HttpResponse::Ok().json(serde_json::json!({ "authenticated": true }))
    } else {
        HttpResponse::Unauthorized().json(serde_json::json!({ "authenticated": false }))
    }
}
