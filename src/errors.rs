/*!
 * Error types for the duospeak application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when validating the application configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A speaker has no voice identifier bound to it
    #[error("Voice identifier for speaker {0} is empty")]
    EmptyVoice(char),

    /// A voice identifier would corrupt the attribute it is inserted into
    #[error("Voice identifier '{0}' contains a double quote")]
    QuoteInVoice(String),

    /// The document language tag has an unknown primary subtag
    #[error("Unknown language tag: {0}")]
    UnknownLanguage(String),
}

/// Errors that can occur when writing to the system clipboard
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// No usable clipboard utility was found on the PATH
    #[error("No clipboard utility found (tried wl-copy, xclip, xsel, pbcopy)")]
    NoBackend,

    /// The clipboard command could not be started
    #[error("Failed to start clipboard command '{command}': {source}")]
    Spawn {
        /// Command that was attempted
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Piping text into the clipboard command failed
    #[error("Failed to write to clipboard command '{command}': {source}")]
    Write {
        /// Command that was running
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The clipboard command ran but reported failure
    #[error("Clipboard command '{command}' exited with {status}")]
    NonZeroExit {
        /// Command that was running
        command: String,
        /// Exit status of the command
        status: std::process::ExitStatus,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the clipboard integration
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
