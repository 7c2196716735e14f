// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Fermata Team

//! # core-authz
//!
//! Pure authorization policy engine for the Fermata hierarchical object
//! store, with zero dependencies on transport, storage, or identity
//! issuance layers.
//!
//! For every read or write attempted against the store, the engine
//! answers one question: allow or deny, given the requester's identity,
//! the target object path, and (for writes) the declared content type
//! and byte size. The answer is a [`Verdict`] carrying a machine-readable
//! [`DenyReason`] on denial.
//!
//! Evaluation is a pure, total function of its inputs: no clock, no I/O,
//! no shared mutable state. The only shared data is the immutable
//! [`RuleSet`], built once and read-only thereafter, so concurrent
//! evaluation needs no coordination.
//!
//! ## Security
//!
//! - Strict limits on untrusted inputs to prevent algorithmic DoS:
//!   - `MAX_PATH_LENGTH` = 256
//!   - `MAX_CONTENT_TYPES_PER_CLASS` = 32
//!   - `MAX_CONTENT_TYPE_LENGTH` = 128
//! - Malformed-but-well-typed input never panics; it degrades to a
//!   `Deny` verdict with reason `Unmatched`.

#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

pub mod classify;
pub mod error;
pub mod evaluator;
pub mod identity;
pub mod path;
pub mod rules;
pub mod validators;
pub mod verdict;

pub use classify::{classify, ResourceClass};
/// Re-export commonly used types
pub use error::{PolicyError, Result};
pub use evaluator::{Authorizer, PolicyEvaluator};
pub use identity::{ClaimValue, Identity, ObjectDescriptor, Operation};
pub use path::ObjectPath;
pub use rules::{ClassRule, ReadPolicy, RuleSet, WritePolicy};
pub use verdict::{DenyReason, Verdict};

/// Maximum length in bytes for a raw object path (DoS mitigation)
pub const MAX_PATH_LENGTH: usize = 256;

/// Maximum number of entries in a content-type allowlist (DoS mitigation)
pub const MAX_CONTENT_TYPES_PER_CLASS: usize = 32;

/// Maximum length for a declared content type (DoS mitigation)
pub const MAX_CONTENT_TYPE_LENGTH: usize = 128;

/// Default upload ceiling for avatar objects: exactly 5 MiB.
///
/// The boundary is inclusive: a declared size of exactly this many bytes
/// is allowed, one byte more is denied.
pub const AVATAR_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Claim name carrying the boolean admin capability flag
pub const ADMIN_CLAIM: &str = "admin";
