//! HTTP surface: router, error mapping, request handlers.

pub mod error;
pub mod handlers;
pub mod router;
