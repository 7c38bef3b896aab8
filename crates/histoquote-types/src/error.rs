//! Error types for histoquote.

use thiserror::Error;

/// Result type alias for histoquote operations.
pub type Result<T> = std::result::Result<T, HistoquoteError>;

/// Errors that can occur while downloading and decoding quote data.
#[derive(Error, Debug)]
pub enum HistoquoteError {
    /// A request parameter is outside its allowed set.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Retrieving or decoding a remote document failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A packed timestamp could not be decoded.
    #[error(transparent)]
    Timestamp(#[from] TimestampError),

    /// A page download task panicked or was cancelled by the runtime.
    #[error("Page task failed: {0}")]
    Task(String),
}

/// Error for request parameters outside their fixed allowed sets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Unknown history duration.
    #[error("Duration must be one of {allowed:?}, got '{value}'")]
    Duration {
        /// The rejected value.
        value: String,
        /// The accepted values.
        allowed: Vec<&'static str>,
    },

    /// Unknown sampling period.
    #[error("Period must be one of {allowed:?}, got '{value}'")]
    Period {
        /// The rejected value.
        value: String,
        /// The accepted values.
        allowed: Vec<&'static str>,
    },

    /// Search query is empty once trimmed.
    #[error("Missing query value")]
    EmptyQuery,

    /// Start date does not match the `dd/mm/yyyy` layout.
    #[error("Invalid start date '{0}', expected dd/mm/yyyy")]
    StartDate(String),
}

/// Errors from a single document retrieval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The retrieval could not complete (connection, DNS, timeout, body read).
    #[error("Transport error for {target}: {reason}")]
    Transport {
        /// The target being fetched.
        target: String,
        /// Underlying failure description.
        reason: String,
    },

    /// The remote answered with a non-success status.
    #[error("Status code error: {status} for {target}")]
    Status {
        /// The target being fetched.
        target: String,
        /// HTTP status code.
        status: u16,
    },

    /// The payload could not be decoded as the expected format.
    #[error("Decode error for {target}: {reason}")]
    Decode {
        /// The target being fetched.
        target: String,
        /// Underlying failure description.
        reason: String,
    },
}

impl FetchError {
    /// Returns the target the failed retrieval was aimed at.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Transport { target, .. }
            | Self::Status { target, .. }
            | Self::Decode { target, .. } => target,
        }
    }

    /// Returns the HTTP status code for [`FetchError::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors decoding a packed `YYMMDDmmmm` timestamp.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The value is negative, so its decimal form contains a non-digit.
    #[error("Packed timestamp {0} is negative")]
    Negative(i64),

    /// The value does not have exactly ten decimal digits.
    #[error("Packed timestamp {value} has {digits} digits, expected 10")]
    Width {
        /// The rejected value.
        value: i64,
        /// Its decimal digit count.
        digits: usize,
    },
}
