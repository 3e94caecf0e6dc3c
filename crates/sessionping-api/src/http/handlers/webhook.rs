//! POST /webhook - inbound Telegram updates.
//!
//! The endpoint always acknowledges `200 OK`, whatever the payload shape
//! or internal outcome: a non-2xx answer would make Telegram re-deliver
//! the update and storm us with retries. Failures are logged only.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::{debug, error};

use sessionping_core::command::CommandEvent;

use crate::state::AppState;

/// Display name used when the update carries none.
const DEFAULT_FIRST_NAME: &str = "there";

/// Subset of the Telegram `Update` payload we care about. Parsed
/// leniently: every level is optional and unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
struct TelegramMessage {
    chat: Option<TelegramChat>,
    text: Option<String>,
    from: Option<TelegramUser>,
}

#[derive(Debug, Deserialize)]
struct TelegramChat {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct TelegramUser {
    first_name: Option<String>,
}

impl TelegramUpdate {
    /// Normalize the provider payload into a `CommandEvent`.
    fn into_event(self) -> CommandEvent {
        let message = self.message;
        let chat_id = message.as_ref().and_then(|m| m.chat.as_ref()).map(|c| c.id);
        let text = message
            .as_ref()
            .and_then(|m| m.text.as_deref())
            .unwrap_or("")
            .trim()
            .to_string();
        let first_name = message
            .and_then(|m| m.from)
            .and_then(|u| u.first_name)
            .unwrap_or_else(|| DEFAULT_FIRST_NAME.to_string());

        CommandEvent {
            chat_id,
            text,
            first_name,
        }
    }
}

/// Receive one Telegram update and dispatch it to the command router.
pub async fn receive_update(State(state): State<AppState>, body: Bytes) -> (StatusCode, &'static str) {
    match serde_json::from_slice::<TelegramUpdate>(&body) {
        Ok(update) => {
            let event = update.into_event();
            if let Err(e) = state.command_router.handle(&event).await {
                error!(error = %e, "webhook command handling failed");
            }
        }
        Err(e) => {
            debug!(error = %e, "ignoring unparsable webhook payload");
        }
    }

    (StatusCode::OK, "OK")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_event_full_update() {
        let update: TelegramUpdate = serde_json::from_str(
            r#"{
                "update_id": 1,
                "message": {
                    "message_id": 2,
                    "chat": {"id": 42, "type": "private"},
                    "from": {"id": 7, "first_name": "Ada"},
                    "text": "  /start  "
                }
            }"#,
        )
        .unwrap();

        let event = update.into_event();
        assert_eq!(event.chat_id, Some(42));
        assert_eq!(event.text, "/start");
        assert_eq!(event.first_name, "Ada");
    }

    #[test]
    fn test_into_event_defaults() {
        let update: TelegramUpdate = serde_json::from_str(r#"{"update_id": 1}"#).unwrap();

        let event = update.into_event();
        assert_eq!(event.chat_id, None);
        assert_eq!(event.text, "");
        assert_eq!(event.first_name, "there");
    }

    #[test]
    fn test_into_event_missing_first_name() {
        let update: TelegramUpdate = serde_json::from_str(
            r#"{"message": {"chat": {"id": 5}, "text": "/status", "from": {"id": 7}}}"#,
        )
        .unwrap();

        let event = update.into_event();
        assert_eq!(event.chat_id, Some(5));
        assert_eq!(event.first_name, "there");
    }
}
