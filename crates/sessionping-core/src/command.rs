//! Chat command router.
//!
//! Interprets normalized inbound chat commands and drives the key
//! directory plus message delivery. Stateless per event: the directory's
//! current content is the only state consulted.

use sessionping_types::error::StoreError;
use sessionping_types::key::InstallKey;
use tracing::{debug, warn};

use crate::delivery::MessageSender;
use crate::directory::KeyDirectory;
use crate::storage::KvStore;

/// Raw content base for the plugin install script.
const REPO_RAW_URL: &str = "https://raw.githubusercontent.com/sessionping/sessionping/main";

/// The closed set of recognized chat commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Revoke,
    Status,
    Help,
    /// Anything else: handled as an explicit no-op, no reply.
    Unrecognized,
}

impl Command {
    /// Parse a command from message text.
    ///
    /// Matches the first whitespace-delimited token, with an optional
    /// `@botname` suffix stripped (Telegram appends it in group chats).
    pub fn parse(text: &str) -> Self {
        let token = text.trim().split_whitespace().next().unwrap_or("");
        let token = token.split('@').next().unwrap_or(token);
        match token {
            "/start" => Command::Start,
            "/revoke" => Command::Revoke,
            "/status" => Command::Status,
            "/help" => Command::Help,
            _ => Command::Unrecognized,
        }
    }
}

/// A normalized inbound chat event, as extracted by the webhook boundary.
#[derive(Debug, Clone)]
pub struct CommandEvent {
    /// Absent when the provider payload carried no chat (e.g. channel
    /// post edits); the router then acknowledges without acting.
    pub chat_id: Option<i64>,
    /// Trimmed message text.
    pub text: String,
    /// Display name, defaulted to "there" upstream when absent.
    pub first_name: String,
}

/// Routes inbound commands to directory operations and chat replies.
///
/// Every recognized command renders a reply via the `MessageSender`
/// before returning. Delivery failure never changes the router's own
/// success: the transport must be acknowledged regardless, so failures
/// are only logged here.
pub struct CommandRouter<S: KvStore, M: MessageSender> {
    directory: KeyDirectory<S>,
    sender: M,
}

impl<S: KvStore, M: MessageSender> CommandRouter<S, M> {
    /// Create a router over the given directory and sender.
    pub fn new(directory: KeyDirectory<S>, sender: M) -> Self {
        Self { directory, sender }
    }

    /// Handle one inbound event.
    ///
    /// Returns Ok("handled") for every event shape, including events
    /// without a chat id and unrecognized text. Only store failures
    /// propagate.
    pub async fn handle(&self, event: &CommandEvent) -> Result<(), StoreError> {
        let Some(chat_id) = event.chat_id else {
            debug!("inbound event without chat id, ignoring");
            return Ok(());
        };

        match Command::parse(&event.text) {
            Command::Start => self.handle_start(chat_id, &event.first_name).await,
            Command::Revoke => self.handle_revoke(chat_id, &event.first_name).await,
            Command::Status => self.handle_status(chat_id).await,
            Command::Help => {
                self.reply(chat_id, help_text()).await;
                Ok(())
            }
            Command::Unrecognized => {
                debug!(chat_id, "unrecognized message text, ignoring");
                Ok(())
            }
        }
    }

    async fn handle_start(&self, chat_id: i64, first_name: &str) -> Result<(), StoreError> {
        let reply = match self.directory.find_by_owner(chat_id).await? {
            Some(existing) => start_existing_text(&existing.key),
            None => {
                let key = self.directory.issue(chat_id, Some(first_name)).await?;
                start_fresh_text(&key)
            }
        };
        self.reply(chat_id, &reply).await;
        Ok(())
    }

    async fn handle_revoke(&self, chat_id: i64, first_name: &str) -> Result<(), StoreError> {
        let key = self.directory.revoke(chat_id, Some(first_name)).await?;
        self.reply(chat_id, &revoke_text(&key)).await;
        Ok(())
    }

    async fn handle_status(&self, chat_id: i64) -> Result<(), StoreError> {
        let reply = if self.directory.find_by_owner(chat_id).await?.is_some() {
            STATUS_ACTIVE
        } else {
            STATUS_MISSING
        };
        self.reply(chat_id, reply).await;
        Ok(())
    }

    async fn reply(&self, chat_id: i64, text: &str) {
        if !self.sender.send(chat_id, text).await {
            warn!(chat_id, "failed to deliver command reply");
        }
    }
}

/// Build the one-liner that installs the plugin with the given key.
pub fn build_install_command(key: &InstallKey) -> String {
    format!("curl -fsSL {REPO_RAW_URL}/scripts/install.sh | bash -s -- {key}")
}

fn start_fresh_text(key: &InstallKey) -> String {
    format!(
        "*Welcome to SessionPing!*\n\n\
         *Run this command to install:*\n```bash\n{}\n```\n\n\
         Restart your editor afterwards and you'll be notified when sessions complete.",
        build_install_command(key)
    )
}

fn start_existing_text(key: &InstallKey) -> String {
    format!(
        "You already have an active install key.\n\n\
         *Run this command to install:*\n```bash\n{}\n```",
        build_install_command(key)
    )
}

fn revoke_text(key: &InstallKey) -> String {
    format!(
        "Your old key has been revoked.\n\n\
         *Run this command to reinstall:*\n```bash\n{}\n```\n\n\
         Your old plugin will stop working.",
        build_install_command(key)
    )
}

const STATUS_ACTIVE: &str = "You have an active install key.\n\n\
    If you've installed the plugin, you should receive notifications when sessions complete.";

const STATUS_MISSING: &str = "You don't have an install key yet. Send /start to get one.";

fn help_text() -> &'static str {
    "*SessionPing Notifications*\n\n\
     Commands:\n\
     /start - Get installation command\n\
     /revoke - Generate new key (invalidates old one)\n\
     /status - Check installation status\n\
     /help - Show this message\n\n\
     *How it works:*\n\
     1. Run the install command from /start\n\
     2. Restart your editor\n\
     3. Get notified when sessions complete!"
}
