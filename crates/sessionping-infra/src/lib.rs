//! Infrastructure implementations for SessionPing.
//!
//! Implements the ports defined in `sessionping-core`: the SQLite-backed
//! install-key store and the Telegram Bot API message sender.

pub mod sqlite;
pub mod telegram;
