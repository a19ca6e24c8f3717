//! Unified error types for linkfeed
//!
//! This module defines error types for each layer:
//! - `EmbedError`: Embed provider client errors
//! - `FeedError`: Feed controller errors
//! - `ParseError`: Terminal command parsing errors
//! - `ConfigError`: Environment configuration errors

use thiserror::Error;

use crate::domain::entities::PostId;

/// Embed provider client errors
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Provider error: {message}")]
    Provider {
        status: Option<u16>,
        message: String,
    },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized - invalid API key")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Fetch task failed: {0}")]
    Task(String),
}

/// Feed controller errors
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Failed to fetch preview for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: EmbedError,
    },
}

/// Parse error for terminal commands
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
