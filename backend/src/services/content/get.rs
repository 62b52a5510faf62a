use actix_web::{web, HttpResponse, Responder};

use crate::content::state::ContentState;

pub(crate) async fn process(state: web::Data<ContentState>) -> impl Responder {
    HttpResponse::Ok().json(state.snapshot().await)
}
