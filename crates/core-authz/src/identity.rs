//! Request identity, operation, and declared object metadata
//!
//! These are the immutable inputs of one evaluation. The identity is
//! supplied pre-authenticated by an external identity provider; this
//! crate never verifies credentials, it only reads the descriptor.

use crate::ADMIN_CLAIM;
use alloc::collections::BTreeMap;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// A single claim value attached to an identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    /// Boolean capability flag (e.g. the admin claim)
    Bool(bool),
    /// Free-form string claim
    Text(String),
}

/// An authenticated (or anonymous) requester
///
/// Uses `BTreeMap` for claims to keep serialization deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    subject_id: String,
    anonymous: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    claims: BTreeMap<String, ClaimValue>,
}

impl Identity {
    /// An unauthenticated requester with no subject and no claims
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            subject_id: String::new(),
            anonymous: true,
            claims: BTreeMap::new(),
        }
    }

    /// An authenticated requester with the given subject ID
    #[must_use]
    pub fn user(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            anonymous: false,
            claims: BTreeMap::new(),
        }
    }

    /// An authenticated requester carrying the admin capability claim
    #[must_use]
    pub fn admin(subject_id: impl Into<String>) -> Self {
        Self::user(subject_id).with_claim(ADMIN_CLAIM, ClaimValue::Bool(true))
    }

    /// Attach a claim to this identity
    #[must_use]
    pub fn with_claim(mut self, name: impl Into<String>, value: ClaimValue) -> Self {
        self.claims.insert(name.into(), value);
        self
    }

    /// Get the subject ID (empty for anonymous identities)
    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Whether this identity is unauthenticated
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    /// Look up a claim by name
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&ClaimValue> {
        self.claims.get(name)
    }
}

/// The kind of storage operation being evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Retrieve stored bytes
    Read,
    /// Store new bytes (requires a declared [`ObjectDescriptor`])
    Write,
}

impl Operation {
    /// Whether this operation is a write
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}

/// Caller-declared metadata accompanying a write
///
/// The engine trusts the declared values at decision time; no byte
/// inspection is performed. A client can lie about both fields, and the
/// verdict will reflect the lie. This is a documented trust boundary,
/// preserved rather than silently hardened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    content_type: String,
    size_bytes: u64,
}

impl ObjectDescriptor {
    /// Create a descriptor from declared values
    #[must_use]
    pub fn new(content_type: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            content_type: content_type.into(),
            size_bytes,
        }
    }

    /// Get the declared content type
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Get the declared size in bytes
    #[must_use]
    pub const fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}
