use actix_web::{HttpResponse, Responder};

/// Canned conversation starters shown under the chat input.
const QUICK_REPLIES: [&str; 5] = [
    "מחירון שירותים",
    "זמני הגעה",
    "שירות חירום",
    "אחריות",
    "אזורי שירות",
];

pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(QUICK_REPLIES)
}
