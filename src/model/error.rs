//! Error types for chatdeck.
//!
//! UI state transitions never fail: an empty submit is a silent no-op and
//! selections only ever come from the directory's own entries. The errors
//! below cover startup only (configuration, sample data, logging, terminal).
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from startup and the event loop
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`DataError`] - Sample data file read/parse/validation failures
//!   - [`LoggingError`] - Tracing subscriber initialization failures
//!   - `std::io::Error` - Terminal/TUI failures

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::{ConversationId, MessageId};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All of these are fatal: they surface before the terminal enters raw mode
/// or while restoring it, and `main` reports them on stderr.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Data file could not be loaded.
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Tracing subscriber could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error (crossterm/ratatui layer).
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading directory and message data.
#[derive(Debug, Error)]
pub enum DataError {
    /// The requested data file does not exist.
    ///
    /// Unlike the config file, a data file is only read when explicitly
    /// requested, so a missing one is an error rather than a fallback.
    #[error("Data file not found: {path}")]
    FileNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// The data file exists but could not be read.
    #[error("Failed to read data file at {path}: {source}")]
    Read {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON or has the wrong shape.
    #[error("Invalid JSON in data file {path}: {source}")]
    Parse {
        /// The file with invalid contents.
        path: PathBuf,
        /// Parser error with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// Two directory entries share an id.
    #[error("Duplicate conversation id {0}")]
    DuplicateConversation(ConversationId),

    /// Two seed messages share an id.
    #[error("Duplicate message id {0}")]
    DuplicateMessage(MessageId),

    /// A seed message uses the largest possible id, leaving none for the
    /// messages sent afterwards.
    #[error("Message id {0} leaves no room for new messages")]
    MessageIdOverflow(MessageId),
}
