//! Application state wiring the services together.
//!
//! The command router and the notification relay are generic over the
//! store and sender ports; AppState pins them to the concrete infra
//! implementations (SQLite store, Telegram sender).

use std::sync::Arc;

use sessionping_core::command::CommandRouter;
use sessionping_core::directory::KeyDirectory;
use sessionping_core::relay::NotificationRelay;
use sessionping_infra::sqlite::{DatabasePool, SqliteKvStore};
use sessionping_infra::telegram::TelegramSender;
use sessionping_types::config::Config;

/// Concrete type aliases for the service generics pinned to infra.
pub type ConcreteCommandRouter = CommandRouter<SqliteKvStore, TelegramSender>;
pub type ConcreteNotificationRelay = NotificationRelay<SqliteKvStore, TelegramSender>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub command_router: Arc<ConcreteCommandRouter>,
    pub relay: Arc<ConcreteNotificationRelay>,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: connect to the database, run
    /// migrations, wire the router and relay.
    pub async fn init(config: &Config) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let db_pool = DatabasePool::new(&config.database_url).await?;

        let command_router = CommandRouter::new(
            KeyDirectory::new(SqliteKvStore::new(db_pool.clone())),
            TelegramSender::new(&config.telegram_api, &config.bot_token),
        );
        let relay = NotificationRelay::new(
            KeyDirectory::new(SqliteKvStore::new(db_pool.clone())),
            TelegramSender::new(&config.telegram_api, &config.bot_token),
        );

        Ok(Self {
            command_router: Arc::new(command_router),
            relay: Arc::new(relay),
            db_pool,
        })
    }
}
