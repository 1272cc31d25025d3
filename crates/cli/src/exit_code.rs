//! Exit code definitions for the bucket-mirror CLI
//!
//! Scripts rely on these values; changing one is a breaking change.

/// Exit codes for the bucket-mirror application.
///
/// These codes follow a consistent convention to allow scripts and automation
/// to handle different failure scenarios appropriately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every bucket pair completed
    Success = 0,

    /// General/unspecified error
    GeneralError = 1,

    /// Configuration file missing or invalid, or bad arguments
    ConfigError = 2,

    /// Network or service error while listing or copying
    NetworkError = 3,

    /// Credentials could not be resolved, or access was denied
    AuthError = 4,

    /// Bucket or object does not exist
    NotFound = 5,
}

impl ExitCode {
    /// Convert exit code to i32 for use with std::process::exit
    #[inline]
    pub const fn as_i32(self) -> i32 {
        self as i32
    }

    /// Create exit code from i32 value
    ///
    /// Returns None if the value doesn't correspond to a known exit code.
    pub const fn from_i32(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::GeneralError),
            2 => Some(Self::ConfigError),
            3 => Some(Self::NetworkError),
            4 => Some(Self::AuthError),
            5 => Some(Self::NotFound),
            _ => None,
        }
    }

    /// Exit code for a failed run
    pub fn from_error(error: &bm_core::Error) -> Self {
        Self::from_i32(error.exit_code()).unwrap_or(Self::GeneralError)
    }
}
