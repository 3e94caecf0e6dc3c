//! Shared domain types for SessionPing.
//!
//! This crate contains the core domain types used across the SessionPing
//! relay: InstallKey, OwnerRecord, configuration, and their associated
//! error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod error;
pub mod key;
