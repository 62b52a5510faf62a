use actix_web::{web, HttpResponse, Responder};
use common::i18n::{self, Language};

pub(crate) async fn process(locale: web::Path<String>) -> impl Responder {
    match Language::from_code(&locale) {
        Some(language) => HttpResponse::Ok().json(i18n::table(language)),
        None => HttpResponse::NotFound().body(format!("unknown locale: {locale}")),
    }
}
