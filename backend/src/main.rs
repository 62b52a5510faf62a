mod config;
mod content;
mod services;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;

use crate::config::Config;
use crate::content::slots::SlotStore;
use crate::content::state::ContentState;
use crate::services::admin::state::AdminState;
use crate::services::i18n::state::LanguageState;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded single-page shell. Unknown paths fall back to
/// `index.html` so client-side routes (`/about`, `/blog/:slug`,
/// `/admin/dashboard`, ...) resolve after a hard refresh.
async fn serve_shell(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let slots = SlotStore::open(&config.db_path).map_err(std::io::Error::other)?;
    let content_state = ContentState::load(slots.clone());
    let admin_state = AdminState::load(slots.clone());
    let language_state = LanguageState::load(slots);
    let http_client = reqwest::Client::new();

    let bind = (config.host.clone(), config.port);
    info!("Server running at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(content_state.clone()))
            .app_data(web::Data::new(admin_state.clone()))
            .app_data(web::Data::new(language_state.clone()))
            .app_data(web::Data::new(http_client.clone()))
            .service(services::content::configure_routes())
            .service(services::leads::configure_routes())
            .service(services::chat::configure_routes())
            .service(services::admin::configure_routes())
            .service(services::i18n::configure_routes())
            .default_service(web::route().to(serve_shell))
    })
    .bind(bind)?
    .run()
    .await
}
