use actix_web::{web, HttpResponse, Responder};
use common::i18n;
use common::model::faq::FAQItem;
use serde::Serialize;

use crate::content::state::ContentState;
use crate::services::i18n::state::LanguageState;

#[derive(Serialize)]
struct FaqGroup {
    category: String,
    items: Vec<FAQItem>,
}

/// FAQs grouped by category in first-appearance order. Uncategorized items
/// fall into a bucket named in the active locale.
pub(crate) async fn process(
    state: web::Data<ContentState>,
    language: web::Data<LanguageState>,
) -> impl Responder {
    let lang = language.current().await;
    let default_category = i18n::translate_or(lang, "faq.defaultCategory", "כללי");
    let doc = state.snapshot().await;
    let groups: Vec<FaqGroup> = doc
        .grouped_faqs(default_category)
        .into_iter()
        .map(|(category, items)| FaqGroup { category, items })
        .collect();
    HttpResponse::Ok().json(groups)
}
