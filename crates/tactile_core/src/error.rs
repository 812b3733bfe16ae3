//! Input configuration error types

use thiserror::Error;

/// Errors surfaced by the tactile crates.
///
/// The runtime input path never fails: malformed or out-of-order driver
/// events are absorbed as no-ops. Only configuration validation is
/// fallible.
#[derive(Error, Debug)]
pub enum InputError {
    /// A configuration value is out of its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for tactile operations
pub type Result<T> = std::result::Result<T, InputError>;
