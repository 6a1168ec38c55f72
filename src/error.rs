/// Error types shared across the application
///
/// Submission failures are unified into a single `Error` status by the
/// lead form; the variants here only exist so the cause can be logged.
use thiserror::Error;

/// Why a lead form submission did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status
    #[error("endpoint rejected submission with HTTP {status}")]
    Rejected { status: u16 },

    /// No response within the configured deadline
    #[error("submission timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Connection, DNS or body transfer failure
    #[error("network error: {0}")]
    Network(String),
}

/// Input gating failures, reported before a submission is allowed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("email address is not valid")]
    InvalidEmail,

    #[error("phone number is not valid")]
    InvalidPhone,
}

/// The embedded content table could not be used
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("site content has no {0}")]
    Empty(&'static str),
}

/// Configuration could not be loaded or applied
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}
