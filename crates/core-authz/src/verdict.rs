//! Evaluation outcome types
//!
//! A verdict is the engine's only output: allow, or deny with a
//! machine-readable reason code. Denials are ordinary values, never
//! errors; the calling layer translates a deny into an access-denied
//! response.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Why a request was denied
///
/// Rules evaluate their conjuncts short-circuit, left to right; the
/// first failing conjunct determines the reason. Ordering matters only
/// for diagnostics, never for the boolean outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DenyReason {
    /// Path matched no known resource-class pattern
    Unmatched,
    /// Operation requires a signed-in identity and none was presented
    NotAuthenticated,
    /// Authenticated identity does not match the path-derived owner
    NotOwner,
    /// Operation requires the admin claim and it is absent or false
    NotAdmin,
    /// Declared content type is not in the class allowlist
    ContentTypeRejected,
    /// Declared size exceeds the class limit
    SizeExceeded,
    /// A write was evaluated without an object descriptor
    MissingDescriptor,
}

impl DenyReason {
    /// Stable machine-readable reason code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unmatched => "unmatched",
            Self::NotAuthenticated => "not-authenticated",
            Self::NotOwner => "not-owner",
            Self::NotAdmin => "not-admin",
            Self::ContentTypeRejected => "content-type-rejected",
            Self::SizeExceeded => "size-exceeded",
            Self::MissingDescriptor => "missing-descriptor",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The engine's decision for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    /// The request is permitted
    Allow,
    /// The request is refused, with the first failing check as reason
    Deny(DenyReason),
}

impl Verdict {
    /// Whether the request is permitted
    #[must_use]
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The deny reason, if any
    #[must_use]
    pub const fn deny_reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allow => None,
            Self::Deny(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => f.write_str("allow"),
            Self::Deny(reason) => write!(f, "deny ({})", reason),
        }
    }
}
