// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Fermata Team

//! # fermata-gateway
//!
//! Boundary adapter between the outside call surface and the pure
//! `core-authz` engine. It owns everything the engine refuses to: raw
//! path strings, HTTP-style method names, optional subjects, and
//! partially declared upload metadata.
//!
//! The adapter assembles an immutable evaluation context per request
//! and hands it to the evaluator. Malformed paths normalize to the
//! deny/unmatched outcome; genuinely malformed *requests* (an
//! unsupported method, an empty subject) are precondition violations
//! reported as [`GatewayError`], not policy verdicts.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod gateway;
mod request;

pub use error::{GatewayError, Result};
pub use gateway::{AccessDecision, ObjectGateway};
pub use request::{operation_from_method, AccessRequest, AccessRequestBuilder};
