//! Error types for fermata-gateway

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Precondition violations at the request boundary
///
/// These are caller bugs, not policy decisions: a request that cannot
/// even be assembled never reaches the evaluator.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No target path was supplied
    #[error("request path is required")]
    MissingPath,

    /// No operation was supplied
    #[error("request operation is required")]
    MissingOperation,

    /// Method string maps to no storage operation
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// A subject was supplied but is empty
    #[error("subject must not be empty")]
    EmptySubject,
}
