use actix_web::{web, HttpResponse, Responder};

use crate::services::i18n::state::LanguageState;

pub(crate) async fn process(state: web::Data<LanguageState>) -> impl Responder {
    let language = state.current().await;
    HttpResponse::Ok().json(serde_json::json!({
        "language": language.code(),
        "dir": language.dir(),
    }))
}
