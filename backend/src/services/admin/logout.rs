use actix_web::{web, HttpResponse, Responder};

use crate::services::admin::state::AdminState;

pub(crate) async fn process(state: web::Data<AdminState>) -> impl Responder {
    state.logout().await;
    HttpResponse::Ok().json(serde_json::json!({ "authenticated": false }))
}
