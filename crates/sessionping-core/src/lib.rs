//! Business logic and port trait definitions for SessionPing.
//!
//! This crate defines the "ports" (the `KvStore` and `MessageSender`
//! traits) that the infrastructure layer implements, plus the three
//! components built on them: the install-key directory, the chat command
//! router, and the notification relay. It depends only on
//! `sessionping-types` -- never on `sessionping-infra` or any IO crate.

pub mod command;
pub mod delivery;
pub mod directory;
pub mod relay;
pub mod storage;

#[cfg(test)]
pub(crate) mod testing;
