//! HTTP request handlers.

pub mod notify;
pub mod webhook;
