use common::model::lead::Lead;
use log::{error, info, warn};

use crate::config::Config;

/// Out-of-band lead side effects: forward to the CRM webhook and log the
/// email/WhatsApp notifications that a real integration would send. Every
/// path here is attempted exactly once; failures are logged and swallowed.
pub(crate) fn dispatch(config: &Config, client: &reqwest::Client, lead: &Lead) {
    forward_to_webhook(config, client, lead);
    log_email_notification(config, lead);
    log_whatsapp_notification(config, lead);
}

fn forward_to_webhook(config: &Config, client: &reqwest::Client, lead: &Lead) {
    if config.lead_webhook_url.is_empty() {
        return;
    }
    let url = config.lead_webhook_url.clone();
    let client = client.clone();
    let lead = lead.clone();
    tokio::spawn(async move {
        match client.post(&url).json(&lead).send().await {
            Ok(response) if response.status().is_success() => {
                info!("lead {} forwarded to webhook", lead.id);
            }
            Ok(response) => {
                warn!("lead webhook answered {} for lead {}", response.status(), lead.id);
            }
            Err(e) => error!("lead webhook call failed for lead {}: {e}", lead.id),
        }
    });
}

fn log_email_notification(config: &Config, lead: &Lead) {
    let subject = format!("New Lead: {} ({})", lead.name, lead.source);
    info!(
        "[MOCK EMAIL NOTIFICATION] to: {}, subject: {}\n\
         A new lead has been received:\n\
         Name: {}\n\
         Phone: {}\n\
         Email: {}\n\
         Residential Area: {}\n\
         Message: {}\n\
         Source: {}\n\
         Timestamp: {}",
        config.admin_email,
        subject,
        lead.name,
        lead.phone,
        lead.email.as_deref().unwrap_or("N/A"),
        lead.residential_area.as_deref().unwrap_or("N/A"),
        lead.message.as_deref().unwrap_or("N/A"),
        lead.source,
        lead.timestamp,
    );
}

fn log_whatsapp_notification(config: &Config, lead: &Lead) {
    info!(
        "[MOCK WHATSAPP NOTIFICATION] to: {} (via API), message: New Lead: Name: {}, Phone: {}, Source: {}. Message: {}. Area: {}",
        config.admin_whatsapp,
        lead.name,
        lead.phone,
        lead.source,
        lead.message.as_deref().unwrap_or("N/A"),
        lead.residential_area.as_deref().unwrap_or("N/A"),
    );
}
