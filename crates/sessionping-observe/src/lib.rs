//! Observability setup for the SessionPing relay.

pub mod tracing_setup;
