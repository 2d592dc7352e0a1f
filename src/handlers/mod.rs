//! Command handlers module
//!
//! This module contains handlers for what the user submits, including:
//! - Slash command parsing
//! - Hostname resolution timing (ping)

pub mod command;
pub mod ping;

use std::fmt;
use thiserror::Error;

/// What a submitted line is
#[derive(Debug, Clone, PartialEq)]
pub enum CommandMode {
    /// Plain text to analyse
    Analyze,
    /// Application command (`/` prefix)
    Command,
}

impl fmt::Display for CommandMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandMode::Analyze => write!(f, "TEXT"),
            CommandMode::Command => write!(f, "CMD"),
        }
    }
}

/// Split a submitted line into its mode and payload.
///
/// A single leading `/` marks a command; `//` escapes it, so `//etc` is
/// analysed as the text `/etc`. Text is passed through untrimmed.
pub fn detect_mode(line: &str) -> (CommandMode, String) {
    if let Some(escaped) = line.strip_prefix("//") {
        (CommandMode::Analyze, format!("/{}", escaped))
    } else if let Some(stripped) = line.strip_prefix('/') {
        (CommandMode::Command, stripped.trim().to_string())
    } else {
        (CommandMode::Analyze, line.to_string())
    }
}

/// Result type for handlers
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Error types that can occur during command handling
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Command parsing errors
    #[error("{0}")]
    Parse(String),

    /// Hostname could not be resolved
    #[error("Could not resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: std::io::Error,
    },

    /// Resolver answered without any address
    #[error("No address found for {0}")]
    NoAddress(String),
}
