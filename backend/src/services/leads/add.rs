use actix_web::{web, HttpResponse, Responder};
use common::model::lead::{Lead, NewLead};

use crate::config::Config;
use crate::content::state::ContentState;
use crate::services::leads::notify;

pub(crate) async fn process(
    state: web::Data<ContentState>,
    config: web::Data<Config>,
    client: web::Data<reqwest::Client>,
    payload: web::Json<NewLead>,
) -> impl Responder {
    let lead = submit_lead(&state, &config, &client, payload.into_inner()).await;
    HttpResponse::Ok().json(lead)
}

/// Stores the lead (id and timestamp assigned by the store, newest first)
/// and fires the out-of-band side effects. The local record is complete
/// before any network call is issued, and nothing that fails afterwards
/// rolls it back.
pub(crate) async fn submit_lead(
    state: &ContentState,
    config: &Config,
    client: &reqwest::Client,
    new_lead: NewLead,
) -> Lead {
    let lead = state.add_lead(new_lead).await;
    notify::dispatch(config, client, &lead);
    lead
}
