//! Error types for onchain-query

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// RPC-related errors
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// ABI-related errors
    #[error("ABI error: {0}")]
    Abi(#[from] AbiError),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// RPC-specific errors
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("eth_call to {to} failed: {reason}")]
    CallFailed { to: String, reason: String },

    #[error("eth_getLogs failed: {0}")]
    FilterLogs(String),

    #[error("eth_blockNumber failed: {0}")]
    BlockNumber(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// ABI-related errors
#[derive(Error, Debug)]
pub enum AbiError {
    #[error("Function not found in ABI: {0}")]
    FunctionNotFound(String),

    #[error("Event not found in ABI: {0}")]
    EventNotFound(String),

    #[error("Function '{function}' expects {expected} arguments, got {got}")]
    ArgumentCount {
        function: String,
        expected: usize,
        got: usize,
    },

    #[error("Failed to encode call to {function}: {reason}")]
    EncodeError { function: String, reason: String },

    #[error("Failed to decode output of {function}: {reason}")]
    DecodeError { function: String, reason: String },

    #[error("Failed to decode log: {0}")]
    LogDecode(String),

    #[error("Unexpected return type from {function}: expected {expected}")]
    TypeMismatch {
        function: String,
        expected: &'static str,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid address format: {0}")]
    InvalidAddress(String),

    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid timeout: {0}s (must be at least 1)")]
    InvalidTimeout(u64),

    #[error("Invalid block window: {0} (must be at least 1)")]
    InvalidBlockWindow(u64),

    #[error("Invalid block range: from {from} is after to {to}")]
    InvalidBlockRange { from: u64, to: u64 },

    #[error("Config file parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
