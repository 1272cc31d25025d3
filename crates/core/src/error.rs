//! Error types for bm-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use std::fmt;

use thiserror::Error;

/// Result type alias for bm-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Phase of a bucket pair in which a run was aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Listing the source bucket
    Enumerate,
    /// Issuing server-side copies into the destination bucket
    Copy,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Enumerate => f.write_str("enumerate"),
            Phase::Copy => f.write_str("copy"),
        }
    }
}

/// Error types for bm-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file cannot be opened, parsed or validated
    #[error("Configuration error: {0}")]
    ConfigRead(String),

    /// Credentials or region cannot be resolved
    #[error("Client initialization failed: {0}")]
    ClientInit(String),

    /// A list-page call failed for a bucket
    #[error("Failed to list objects in bucket '{bucket}': {source}")]
    List {
        bucket: String,
        #[source]
        source: Box<Error>,
    },

    /// A copy call failed for an object
    #[error("Failed to copy '{reference}' into bucket '{destination}': {source}")]
    Copy {
        reference: String,
        destination: String,
        #[source]
        source: Box<Error>,
    },

    /// A run stopped at the first failing bucket pair
    #[error(
        "Pair {index} ({source_bucket} -> {destination}) aborted during {phase}: {source}"
    )]
    Aborted {
        index: usize,
        source_bucket: String,
        destination: String,
        phase: Phase,
        #[source]
        source: Box<Error>,
    },

    /// The storage service answered with something the driver cannot use
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication or permission failure
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Bucket or object not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network or service error
    #[error("Network error: {0}")]
    Network(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Get the appropriate exit code for this error
    ///
    /// Wrapping errors report the code of their underlying cause.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ConfigRead(_) | Error::Yaml(_) => 2, // ConfigError
            Error::Network(_) | Error::InvalidResponse(_) => 3, // NetworkError
            Error::ClientInit(_) | Error::Auth(_) => 4, // AuthError
            Error::NotFound(_) => 5,                    // NotFound
            Error::List { source, .. }
            | Error::Copy { source, .. }
            | Error::Aborted { source, .. } => source.exit_code(),
            Error::Io(_) => 1, // GeneralError
        }
    }

    /// Walk through wrapping errors down to the storage-level cause
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::List { source, .. }
            | Error::Copy { source, .. }
            | Error::Aborted { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
