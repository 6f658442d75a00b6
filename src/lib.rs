//! urlhash: concurrent URL fetcher and content fingerprinter
//!
//! This crate fetches a list of URLs with a bounded pool of workers and
//! reports an MD5 fingerprint of each response body, or the reason the
//! fetch failed. Every target yields exactly one outcome.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod target;

use thiserror::Error;

/// Main error type for urlhash operations
///
/// Per-target fetch failures are not represented here; they are reported as
/// [`pipeline::FailureOutcome`] values.
#[derive(Debug, Error)]
pub enum UrlHashError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Outcome channel closed after {received} of {expected} outcomes")]
    PipelineClosed { expected: usize, received: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Reasons a single fetch can fail
///
/// The `Display` text of each variant is the cause printed next to the
/// target on the output line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection could not be established or was interrupted
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its status was not 200 OK
    #[error("{0}")]
    Status(reqwest::StatusCode),

    /// Status was OK but the body could not be read completely
    #[error("{0}")]
    Body(String),

    /// The target could not be turned into a request URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Result type alias for urlhash operations
pub type Result<T> = std::result::Result<T, UrlHashError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use output::{LineWriter, OutcomeSink};
pub use pipeline::{
    run, Collector, Dispatcher, Fetch, Fingerprint, HttpFetcher, Outcome, RunSummary,
};
pub use target::Target;
