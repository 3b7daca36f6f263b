//! Error types for the VIN Decoder MCP Server
//!
//! This module defines the error hierarchy for all operations in the server.

use thiserror::Error;

/// Main error type for the VIN Decoder MCP Server
#[derive(Error, Debug)]
pub enum VinMcpError {
    /// VIN decode errors
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of a single VIN decode.
///
/// Every variant ends up in the `error` field of a failure envelope; none of
/// them is fatal to the server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// VIN argument missing, empty, or of the wrong type
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Network failure, connection refused, DNS failure, timeout
    #[error("API request failed: {message}")]
    Transport { message: String },

    /// Upstream answered outside the 2xx range
    #[error("API request failed: upstream returned HTTP status {status}")]
    UpstreamStatus { status: u16 },

    /// Body is not JSON or lacks the `Results` list
    #[error("Failed to parse upstream response: {message}")]
    MalformedResponse { message: String },

    /// Upstream answered with an empty `Results` list
    #[error("No information found for the provided VIN")]
    NoResults,
}

impl DecodeError {
    /// Error for a missing or empty VIN
    pub fn vin_required() -> Self {
        DecodeError::InvalidInput {
            message: "VIN number is required".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Result type alias for VIN Decoder MCP operations
pub type Result<T> = std::result::Result<T, VinMcpError>;
