//! Telegram Bot API message sender.
//!
//! Implements `MessageSender` from `sessionping-core` against the
//! `sendMessage` method. Transport failures are logged and reported as
//! an unsuccessful delivery, never as an error.

use sessionping_core::delivery::MessageSender;
use serde_json::json;
use tracing::warn;

/// Sends messages through the Telegram Bot API.
pub struct TelegramSender {
    api_base: String,
    token: String,
    http: reqwest::Client,
}

impl TelegramSender {
    /// Create a sender against the given API base (usually
    /// `https://api.telegram.org`; overridable for proxies and tests).
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sessionping/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self {
            api_base: api_base.into(),
            token: token.into(),
            http,
        }
    }
}

impl MessageSender for TelegramSender {
    async fn send(&self, chat_id: i64, text: &str) -> bool {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        let body = json!({
            "chat_id": chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        match self.http.post(&url).json(&body).send().await {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    warn!(chat_id, status = %response.status(), "sendMessage rejected");
                }
                ok
            }
            Err(e) => {
                warn!(chat_id, error = %e, "sendMessage transport failure");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_api_reports_failure_without_panicking() {
        // Port 9 (discard) is not listening; the send must come back false.
        let sender = TelegramSender::new("http://127.0.0.1:9", "test-token");
        assert!(!sender.send(42, "hello").await);
    }
}
