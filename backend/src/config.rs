use std::env;

/// Runtime settings, read once at startup. Every value has a working
/// default so a bare `cargo run` serves the site locally.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the sqlite file backing the durable key-value slots.
    pub db_path: String,
    /// Endpoint leads are forwarded to after being stored locally.
    pub lead_webhook_url: String,
    /// Chat completion endpoint. Empty means "answer with the canned
    /// keyword responder" instead of calling out.
    pub chat_endpoint: String,
    pub chat_api_key: String,
    /// Recipients of the mock lead notifications (logged, never sent).
    pub admin_email: String,
    pub admin_whatsapp: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            host: env_or("CARMEL_HOST", "127.0.0.1"),
            port: env::var("CARMEL_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            db_path: env_or("CARMEL_DB", "carmel.sqlite"),
            lead_webhook_url: env_or(
                "CARMEL_LEAD_WEBHOOK_URL",
                "https://script.google.com/macros/s/MOCK_DEPLOYMENT_ID/exec",
            ),
            chat_endpoint: env_or("CARMEL_CHAT_ENDPOINT", ""),
            chat_api_key: env_or("CARMEL_CHAT_API_KEY", "YOUR_API_KEY"),
            admin_email: env_or("CARMEL_ADMIN_EMAIL", "yaron@example.com"),
            admin_whatsapp: env_or("CARMEL_ADMIN_WHATSAPP", "+972500000000"),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
