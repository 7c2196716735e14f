//! Policy evaluation orchestration
//!
//! Ties the pieces together: classify the path, look up the class rule,
//! enforce the write-descriptor requirement, and return the rule's
//! verdict unchanged. A synchronous pure computation: no retries, no
//! external calls, no I/O.

use crate::classify::{classify, ResourceClass};
use crate::identity::{Identity, ObjectDescriptor, Operation};
use crate::path::ObjectPath;
use crate::rules::RuleSet;
use crate::verdict::{DenyReason, Verdict};

/// Evaluates requests against an immutable rule set
///
/// Stateless and side-effect-free; one instance may be shared across
/// arbitrarily many threads without coordination.
///
/// ## Example
///
/// ```
/// use core_authz::{Identity, ObjectDescriptor, Operation, PolicyEvaluator};
///
/// let evaluator = PolicyEvaluator::default();
/// let owner = Identity::user("user_owner");
/// let upload = ObjectDescriptor::new("image/png", 70);
///
/// let verdict = evaluator.evaluate_raw(
///     &owner,
///     Operation::Write,
///     "avatars/user_owner/avatar.png",
///     Some(&upload),
/// );
/// assert!(verdict.is_allowed());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolicyEvaluator {
    rules: RuleSet,
}

impl PolicyEvaluator {
    /// Create an evaluator over the given rule set
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Get the rule set being evaluated
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate one request against one object path
    ///
    /// Order of checks:
    /// 1. classification; an unmatched path denies with `Unmatched`
    ///    regardless of identity or operation,
    /// 2. writes without a descriptor deny with `MissingDescriptor`,
    /// 3. the class rule decides.
    #[must_use]
    pub fn evaluate(
        &self,
        identity: &Identity,
        operation: Operation,
        path: &ObjectPath,
        descriptor: Option<&ObjectDescriptor>,
    ) -> Verdict {
        self.evaluate_classified(identity, operation, &classify(path), descriptor)
    }

    /// Evaluate a request whose path has already been classified
    #[must_use]
    pub fn evaluate_classified(
        &self,
        identity: &Identity,
        operation: Operation,
        class: &ResourceClass,
        descriptor: Option<&ObjectDescriptor>,
    ) -> Verdict {
        let Some(rule) = self.rules.rule_for(class) else {
            return Verdict::Deny(DenyReason::Unmatched);
        };

        if operation.is_write() && descriptor.is_none() {
            return Verdict::Deny(DenyReason::MissingDescriptor);
        }

        let owner_id = match class {
            ResourceClass::Avatar { owner_id } => Some(owner_id.as_str()),
            _ => None,
        };

        rule.evaluate(identity, operation, owner_id, descriptor)
    }

    /// Evaluate against a raw slash-delimited path string
    ///
    /// A string that fails to parse (empty, doubled separators, too
    /// long) cannot name a stored object; it is normalized to
    /// `Deny(Unmatched)` rather than surfaced as an error.
    #[must_use]
    pub fn evaluate_raw(
        &self,
        identity: &Identity,
        operation: Operation,
        raw_path: &str,
        descriptor: Option<&ObjectDescriptor>,
    ) -> Verdict {
        match ObjectPath::parse(raw_path) {
            Ok(path) => self.evaluate(identity, operation, &path, descriptor),
            Err(_) => Verdict::Deny(DenyReason::Unmatched),
        }
    }
}

/// Trait for types that can answer the boolean allow/deny question
/// (DIP - Dependency Inversion)
///
/// Callers that only need the boolean surface depend on this
/// abstraction, not on the concrete evaluator.
pub trait Authorizer {
    /// Check if access is allowed
    fn is_allowed(
        &self,
        identity: &Identity,
        operation: Operation,
        path: &ObjectPath,
        descriptor: Option<&ObjectDescriptor>,
    ) -> bool;
}

impl Authorizer for PolicyEvaluator {
    fn is_allowed(
        &self,
        identity: &Identity,
        operation: Operation,
        path: &ObjectPath,
        descriptor: Option<&ObjectDescriptor>,
    ) -> bool {
        self.evaluate(identity, operation, path, descriptor).is_allowed()
    }
}
