//! # Chat Service Module
//!
//! Turn-based responder behind the site's chat widget. The client posts
//! the whole transcript on every exchange; the reply comes from the chat
//! completion endpoint when one is configured, otherwise from the canned
//! keyword responder. Every exchange is also scanned for purchase intent
//! and contact details, and a matching exchange opportunistically files a
//! CRM lead through the regular lead pipeline.

pub(crate) mod capture;
mod quick_replies;
mod respond;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/chat";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/message", post().to(respond::process))
        .route("/quick-replies", get().to(quick_replies::process))
}
