//! Opportunistic lead extraction from chat exchanges.
//!
//! After every exchange the latest user message and the bot reply are
//! checked for purchase/contact intent; when intent is present a lead is
//! synthesized from whatever contact details can be pulled out of the
//! conversation. Detection is deliberately not deduplicated: a visitor who
//! keeps asking for a quote files a lead each time.

use common::model::lead::{LeadSource, NewLead};
use common::requests::{ChatMessage, ChatRole};
use once_cell::sync::Lazy;
use regex::Regex;

/// Bilingual intent markers checked against both sides of the exchange.
const LEAD_KEYWORDS: [&str; 7] = [
    "quote",
    "contact me",
    "call me",
    "הצעת מחיר",
    "צור קשר",
    "חזור אליי",
    "דבר איתי",
];

const MESSAGE_LIMIT: usize = 500;
const RECENT_USER_MESSAGES: usize = 3;

// ASCII word boundaries: Hebrew letters around a number must not suppress
// the match, so the Unicode-aware \b is the wrong tool here.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)\b[0-9]{2,4}-?[0-9]{7}\b|\b[0-9]{10}\b").unwrap()
});
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i-u)\b[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}\b").unwrap()
});

/// Scans the exchange and synthesizes a chatbot lead when intent is
/// signaled. Contact details come from the latest user message first, then
/// from the preceding user messages; `"N/A"` stands in for anything still
/// missing.
pub(crate) fn extract_lead(messages: &[ChatMessage], reply: &str) -> Option<NewLead> {
    let latest_index = messages.iter().rposition(|m| m.role == ChatRole::User)?;
    let latest_user = &messages[latest_index].content;

    let user_lower = latest_user.to_lowercase();
    let reply_lower = reply.to_lowercase();
    let intent = LEAD_KEYWORDS
        .iter()
        .any(|keyword| user_lower.contains(keyword) || reply_lower.contains(keyword));
    if !intent {
        return None;
    }

    let mut phone = first_match(&PHONE_RE, latest_user);
    let mut email = first_match(&EMAIL_RE, latest_user);

    if phone.is_none() || email.is_none() {
        let recent: Vec<&str> = messages[..latest_index]
            .iter()
            .filter(|m| m.role == ChatRole::User)
            .map(|m| m.content.as_str())
            .collect();
        let start = recent.len().saturating_sub(RECENT_USER_MESSAGES);
        let recent = recent[start..].join(" ");
        if phone.is_none() {
            phone = first_match(&PHONE_RE, &recent);
        }
        if email.is_none() {
            email = first_match(&EMAIL_RE, &recent);
        }
    }

    let message = format!("User interaction: \"{latest_user}\". Bot response: \"{reply}\".");
    Some(NewLead {
        name: "ChatBot Lead".to_string(),
        phone: phone.unwrap_or_else(|| "N/A".to_string()),
        email: Some(email.unwrap_or_else(|| "N/A".to_string())),
        message: Some(truncate_chars(message, MESSAGE_LIMIT)),
        source: LeadSource::ChatBot,
        residential_area: Some("Unknown".to_string()),
    })
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_string())
}

fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((index, _)) => text[..index].to_string(),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(content: &str) -> ChatMessage {
        ChatMessage {
            role: ChatRole::User,
            content: content.to_string(),
        }
    }

    fn assistant(content: &str) -> ChatMessage {
        ChatMessage {
            role: ChatRole::Assistant,
            content: content.to_string(),
        }
    }

    #[test]
    fn hebrew_quote_request_yields_phone_and_chatbot_source() {
        let messages = vec![user("אני רוצה הצעת מחיר, תתקשרו אליי ל054-1234567")];
        let lead = extract_lead(&messages, "בשמחה!").unwrap();
        assert_eq!(lead.phone, "054-1234567");
        assert_eq!(lead.source, LeadSource::ChatBot);
        assert_eq!(lead.name, "ChatBot Lead");
        assert_eq!(lead.email.as_deref(), Some("N/A"));
        assert_eq!(lead.residential_area.as_deref(), Some("Unknown"));
    }

    #[test]
    fn no_intent_means_no_lead() {
        let messages = vec![user("מתי אתם פתוחים? 054-1234567")];
        assert!(extract_lead(&messages, "ראשון עד חמישי").is_none());
    }

    #[test]
    fn intent_in_the_bot_reply_also_triggers() {
        let messages = vec![user("אשמח לעוד פרטים")];
        let lead = extract_lead(&messages, "אשלח לך הצעת מחיר מסודרת").unwrap();
        assert_eq!(lead.phone, "N/A");
    }

    #[test]
    fn contact_details_are_pulled_from_recent_messages() {
        let messages = vec![
            user("הטלפון שלי הוא 0521234567 והמייל yossi@example.com"),
            assistant("רשמתי, תודה"),
            user("אפשר הצעת מחיר?"),
        ];
        let lead = extract_lead(&messages, "בטח").unwrap();
        assert_eq!(lead.phone, "0521234567");
        assert_eq!(lead.email.as_deref(), Some("yossi@example.com"));
    }

    #[test]
    fn only_the_last_three_user_messages_are_scanned() {
        let messages = vec![
            user("המספר שלי 054-7654321"),
            user("אחת"),
            user("שתיים"),
            user("שלוש"),
            user("צור קשר בבקשה"),
        ];
        let lead = extract_lead(&messages, "כמובן").unwrap();
        assert_eq!(lead.phone, "N/A");
    }

    #[test]
    fn english_keywords_work_too() {
        let messages = vec![user("Please call me at 0549740791")];
        let lead = extract_lead(&messages, "Sure!").unwrap();
        assert_eq!(lead.phone, "0549740791");
    }

    #[test]
    fn lead_message_is_capped_at_five_hundred_chars() {
        let long = "א".repeat(600);
        let messages = vec![user(&format!("{long} הצעת מחיר"))];
        let lead = extract_lead(&messages, "בסדר").unwrap();
        assert_eq!(lead.message.unwrap().chars().count(), 500);
    }
}
