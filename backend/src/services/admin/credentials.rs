use actix_web::{web, HttpResponse, Responder};
use common::requests::CredentialsUpdate;

use crate::services::admin::state::AdminState;

pub(crate) async fn process(
    state: web::Data<AdminState>,
    payload: web::Json<CredentialsUpdate>,
) -> impl Responder {
    let payload = payload.into_inner();
    state
        .update_credentials(payload.username, payload.password)
        .await;
    HttpResponse::Ok().body("Credentials updated")
}
