// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Fermata Team

//! # fermata-core
//!
//! Authorization policy engine for the Fermata hierarchical object
//! store: avatars, practice recordings, firmware images.
//!
//! For every read or write attempted against the store, the engine
//! answers a single question: allow or deny, given the requester's
//! identity, the target path, and (for writes) the declared content
//! type and size. A false "allow" is a data-exposure incident, so the
//! decision procedure is deterministic, total over its input space, and
//! free of side effects.
//!
//! ## Quick Start
//!
//! ```
//! use fermata_core::authz::{Identity, ObjectDescriptor, Operation, PolicyEvaluator};
//!
//! let evaluator = PolicyEvaluator::default();
//!
//! // Anyone may fetch published firmware
//! let verdict = evaluator.evaluate_raw(
//!     &Identity::anonymous(),
//!     Operation::Read,
//!     "firmware/2/2.1.7/image.bin",
//!     None,
//! );
//! assert!(verdict.is_allowed());
//!
//! // Avatar uploads are gated on ownership, content type, and size
//! let upload = ObjectDescriptor::new("image/png", 70);
//! let verdict = evaluator.evaluate_raw(
//!     &Identity::user("user_owner"),
//!     Operation::Write,
//!     "avatars/user_owner/avatar.png",
//!     Some(&upload),
//! );
//! assert!(verdict.is_allowed());
//! ```
//!
//! ## Architecture
//!
//! This facade crate re-exports the following modules:
//!
//! - [`authz`] - the pure decision engine (from `core-authz`):
//!   classification, validators, rule set, evaluator
//! - [`gateway`] - the boundary adapter (from `fermata-gateway`):
//!   request assembly from raw call-site inputs
//!
//! Authentication, byte storage, and transport are external
//! collaborators; nothing in this workspace performs I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Pure decision engine: classification, rules, evaluation
pub use core_authz as authz;

/// Boundary adapter: request assembly and the gateway front door
pub use fermata_gateway as gateway;

pub use core_authz::{DenyReason, PolicyEvaluator, Verdict};
pub use fermata_gateway::ObjectGateway;
