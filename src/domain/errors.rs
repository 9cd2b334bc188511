//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Transport failure: connection refused, timeout, TLS.
    #[error("{0}")]
    Http(String),

    /// The service answered but refused the request (`success: false` or a non-OK status).
    /// The message is shown to the user verbatim.
    #[error("{0}")]
    Api(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Report storage error: {0}")]
    Report(String),

    #[error("UI error: {0}")]
    Ui(String),
}
