//! Notification relay: key validation, destination resolution, delivery.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use sessionping_types::error::RelayError;

use crate::delivery::MessageSender;
use crate::directory::KeyDirectory;
use crate::storage::KvStore;

/// Project label used when the caller supplies none.
const UNKNOWN_PROJECT: &str = "Unknown project";

/// Body of a `POST /notify` request.
///
/// `key` is optional at the serde level so its absence surfaces as
/// `MissingKey` rather than a generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyRequest {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of a relay attempt that passed validation.
///
/// Relay-level success and delivery success are orthogonal: a validated
/// request is "handled" even when the downstream send reports failure.
#[derive(Debug, Clone, Copy)]
pub struct RelayOutcome {
    pub delivered: bool,
}

/// Forwards external "session completed" events to the key's chat.
pub struct NotificationRelay<S: KvStore, M: MessageSender> {
    directory: KeyDirectory<S>,
    sender: M,
}

impl<S: KvStore, M: MessageSender> NotificationRelay<S, M> {
    /// Create a relay over the given directory and sender.
    pub fn new(directory: KeyDirectory<S>, sender: M) -> Self {
        Self { directory, sender }
    }

    /// Validate the request and deliver the notification.
    ///
    /// Validation order (first failing check wins): key present and
    /// non-empty, then key resolvable. Once validated, the message is
    /// used verbatim when supplied, otherwise a default is synthesized
    /// from the project label and the current time. One delivery
    /// attempt; the outcome is reported, never raised.
    pub async fn relay(&self, request: &NotifyRequest) -> Result<RelayOutcome, RelayError> {
        let key = match request.key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(RelayError::MissingKey),
        };

        let record = self
            .directory
            .resolve(key)
            .await?
            .ok_or(RelayError::InvalidKey)?;

        let text = match &request.message {
            Some(message) => message.clone(),
            None => default_message(request.project.as_deref()),
        };

        let delivered = self.sender.send(record.chat_id, &text).await;
        info!(chat_id = record.chat_id, delivered, "relayed notification");
        Ok(RelayOutcome { delivered })
    }
}

/// Default notification text: project label plus a human-readable
/// timestamp of the current moment.
fn default_message(project: Option<&str>) -> String {
    let project = project.unwrap_or(UNKNOWN_PROJECT);
    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    format!("✅ *{project}* session completed\n{now}")
}
