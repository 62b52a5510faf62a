use actix_web::{web, HttpResponse, Responder};
use common::requests::{ChatMessage, ChatRequest, ChatResponse, ChatRole, CompletionRequest};
use log::warn;

use crate::config::Config;
use crate::content::state::ContentState;
use crate::services::chat::capture;
use crate::services::leads::add::submit_lead;

/// Shown whenever the completion call cannot produce a reply; the exchange
/// always terminates with a bot message.
pub(crate) const APOLOGY_REPLY: &str =
    "מצטער, אני מתקשה להתחבר כרגע. אנא נסה שוב מאוחר יותר.";

/// Appended after a lead was filed so the visitor knows someone will call.
pub(crate) const LEAD_CONFIRMATION: &str =
    "תודה! קיבלנו את פנייתך ונציג מטעמנו ייצור איתך קשר בהקדם.";

/// Stand-in reply while no real completion backend exists; deterministic so
/// the downstream lead extraction stays testable.
const COMPLETION_STUB_REPLY: &str =
    "This is a mock AI response from the (simulated) successful API call.";

pub(crate) async fn process(
    state: web::Data<ContentState>,
    config: web::Data<Config>,
    client: web::Data<reqwest::Client>,
    payload: web::Json<ChatRequest>,
) -> impl Responder {
    let messages = payload.into_inner().messages;
    let latest_user = messages
        .iter()
        .rev()
        .find(|m| m.role == ChatRole::User)
        .map(|m| m.content.clone());
    let Some(latest_user) = latest_user else {
        return HttpResponse::BadRequest().body("transcript has no user message");
    };

    let reply = select_reply(&config, &client, &messages, &latest_user).await;

    // At most one lead per exchange; repeated intent across exchanges files
    // repeated leads on purpose.
    let mut lead_captured = false;
    let mut confirmation = None;
    if let Some(new_lead) = capture::extract_lead(&messages, &reply) {
        submit_lead(&state, &config, &client, new_lead).await;
        lead_captured = true;
        confirmation = Some(LEAD_CONFIRMATION.to_string());
    }

    HttpResponse::Ok().json(ChatResponse {
        reply,
        lead_captured,
        confirmation,
    })
}

async fn select_reply(
    config: &Config,
    client: &reqwest::Client,
    messages: &[ChatMessage],
    latest_user: &str,
) -> String {
    if config.chat_endpoint.is_empty() {
        return canned_reply(latest_user).to_string();
    }
    match request_completion(config, client, messages).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("chat completion call failed: {e}");
            APOLOGY_REPLY.to_string()
        }
    }
}

async fn request_completion(
    config: &Config,
    client: &reqwest::Client,
    messages: &[ChatMessage],
) -> Result<String, String> {
    let payload = CompletionRequest {
        api_key: &config.chat_api_key,
        messages,
    };
    let response = client
        .post(&config.chat_endpoint)
        .json(&payload)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("completion endpoint answered {}", response.status()));
    }
    Ok(COMPLETION_STUB_REPLY.to_string())
}

/// Keyword-matched canned answers for the offline responder.
pub(crate) fn canned_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();

    if lower.contains("מחיר") || lower.contains("עלות") {
        return "המחירים שלנו תחרותיים ומותאמים לכל תקציב. לקבלת הצעת מחיר מדויקת, אנא צור קשר בטלפון 054-9740791 או השאר פרטים וניצור קשר.";
    }
    if lower.contains("זמן") || lower.contains("הגעה") {
        return "בדרך כלל אנו מגיעים תוך 2-4 שעות. בשירותי חירום - תוך שעה. הזמן תלוי במיקום ובעומס. שירות זמין ראשון-חמישי 08:00-20:00.";
    }
    if lower.contains("חירום") || lower.contains("דחוף") {
        return "שירות חירום זמין ראשון-חמישי! התקשר עכשיו: 054-9740791 לשירות מיידי.";
    }
    if lower.contains("אחריות") {
        return "אנו נותנים אחריות מלאה: 12 חודשים על התקנות חדשות, 6 חודשים על תיקונים, 3 חודשים על תחזוקה.";
    }
    if lower.contains("אזור") || lower.contains("מיקום") {
        return "אנו משרתים את כל אזור המרכז והשרון: כפר סבא, רעננה, הרצליה, רמת השרון, גבעתיים, פתח תקווה ועוד.";
    }

    "תודה על הפנייה! לקבלת מענה מיידי, אנא התקשר: 054-9740791 או השאר הודעה בטופס הצור קשר באתר."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canned_replies_match_their_keywords() {
        assert!(canned_reply("כמה עולה התקנה? מה המחיר?").contains("תחרותיים"));
        assert!(canned_reply("יש לכם שירות חירום?").contains("חירום"));
        assert!(canned_reply("מה עם אחריות").contains("12 חודשים"));
        assert!(canned_reply("באיזה אזור אתם עובדים").contains("המרכז והשרון"));
    }

    #[test]
    fn unknown_text_gets_the_default_reply() {
        assert!(canned_reply("סתם שאלה").contains("תודה על הפנייה"));
    }
}
