//! Error types for the analysis client

use thiserror::Error;

/// Failure kinds for one analysis submission. Every variant carries the
/// user-visible message; none is retried automatically.
#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    /// Input rejected before any network activity.
    #[error("{0}")]
    Validation(String),

    /// No response was obtained (network unreachable, DNS failure, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The service responded with a failure status. The message is the
    /// service's own `detail` text when present.
    #[error("{0}")]
    Request(String),

    /// The service reported success but the body did not match the contract.
    #[error("Unexpected response from analysis service: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
