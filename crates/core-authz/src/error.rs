//! Error types for core-authz
//!
//! Errors cover construction and configuration only. Evaluation itself
//! never errors: denials are [`crate::Verdict`]s, not `Err` values.

use alloc::string::String;
use core::fmt;

/// Result type alias for policy operations
pub type Result<T> = core::result::Result<T, PolicyError>;

/// Errors that can occur while constructing paths or rule sets
#[derive(Debug)]
pub enum PolicyError {
    /// Object path has no segments
    EmptyPath,

    /// Object path contains an empty segment
    EmptySegment {
        /// Zero-based index of the offending segment
        index: usize,
    },

    /// A segment supplied out-of-band contains the path separator
    SegmentContainsSeparator {
        /// Zero-based index of the offending segment
        index: usize,
    },

    /// Raw path exceeds maximum length (DoS prevention)
    PathTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual path length
        length: usize,
    },

    /// A class rule has an empty content-type allowlist
    EmptyAllowlist {
        /// Resource class the rule applies to
        class: String,
    },

    /// Content-type allowlist entry exceeds maximum length (DoS prevention)
    ContentTypeTooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual entry length
        length: usize,
    },

    /// Allowlist exceeds maximum entry count (DoS prevention)
    TooManyContentTypes {
        /// Maximum allowed entries
        max: usize,
        /// Attempted number of entries
        attempted: usize,
    },

    /// Invalid rule configuration
    InvalidRule(String),

    /// TOML parsing error
    TomlError(toml::de::Error),

    /// Serialization error
    SerializationError(String),
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "Object path must have at least one segment"),
            Self::EmptySegment { index } => {
                write!(f, "Object path segment {} is empty", index)
            }
            Self::SegmentContainsSeparator { index } => {
                write!(f, "Object path segment {} contains '/'", index)
            }
            Self::PathTooLong { max, length } => write!(
                f,
                "Object path exceeds maximum {} characters (length: {})",
                max, length
            ),
            Self::EmptyAllowlist { class } => write!(
                f,
                "Rule for class '{}' has an empty content-type allowlist",
                class
            ),
            Self::ContentTypeTooLong { max, length } => write!(
                f,
                "Content type exceeds maximum {} characters (length: {})",
                max, length
            ),
            Self::TooManyContentTypes { max, attempted } => write!(
                f,
                "Allowlist exceeds maximum {} content types (attempted: {})",
                max, attempted
            ),
            Self::InvalidRule(msg) => write!(f, "Invalid rule: {}", msg),
            Self::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            Self::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl From<toml::de::Error> for PolicyError {
    fn from(err: toml::de::Error) -> Self {
        Self::TomlError(err)
    }
}

impl core::error::Error for PolicyError {}
