use thiserror::Error;

/// Errors from the durable key-value store (used by trait definitions
/// in sessionping-core).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from validating a notify request.
///
/// Delivery failure is deliberately absent: a failed send is surfaced as
/// `delivered: false`, never as an error. Validation failures are the
/// caller's fault; store failures are ours.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Malformed(String),

    #[error("Missing key")]
    MissingKey,

    #[error("Invalid key")]
    InvalidKey,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {message}")]
    InvalidVar { var: &'static str, message: String },
}
