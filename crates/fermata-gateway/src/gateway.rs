//! Gateway orchestration
//!
//! Builds the engine's evaluation context out of an [`AccessRequest`]
//! and returns the verdict. The gateway adds no policy of its own;
//! every decision is the evaluator's.

use crate::request::AccessRequest;
use core_authz::{Identity, ObjectDescriptor, PolicyEvaluator, RuleSet, Verdict};
use serde::{Deserialize, Serialize};

/// Authorization front door for the object store
///
/// Holds one immutable [`PolicyEvaluator`]; a single gateway instance
/// serves arbitrarily many concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ObjectGateway {
    evaluator: PolicyEvaluator,
}

impl ObjectGateway {
    /// Create a gateway over an existing evaluator
    #[must_use]
    pub const fn new(evaluator: PolicyEvaluator) -> Self {
        Self { evaluator }
    }

    /// Create a gateway over a specific rule set
    #[must_use]
    pub const fn with_rules(rules: RuleSet) -> Self {
        Self {
            evaluator: PolicyEvaluator::new(rules),
        }
    }

    /// Get the underlying evaluator
    #[must_use]
    pub const fn evaluator(&self) -> &PolicyEvaluator {
        &self.evaluator
    }

    /// Authorize one request
    ///
    /// Identity assembly: no subject means anonymous; claims are
    /// attached verbatim from the request. The declared descriptor is
    /// only formed when *both* content type and size are present;
    /// partial metadata leaves a write to deny with
    /// `missing-descriptor`.
    #[must_use]
    pub fn authorize(&self, request: &AccessRequest) -> Verdict {
        let identity = match request.subject() {
            Some(subject) => {
                let mut identity = Identity::user(subject);
                for (name, value) in request.claims() {
                    identity = identity.with_claim(name.clone(), value.clone());
                }
                identity
            }
            None => Identity::anonymous(),
        };

        let descriptor = match (request.content_type(), request.size_bytes()) {
            (Some(content_type), Some(size_bytes)) => {
                Some(ObjectDescriptor::new(content_type, size_bytes))
            }
            _ => None,
        };

        self.evaluator.evaluate_raw(
            &identity,
            request.operation(),
            request.path(),
            descriptor.as_ref(),
        )
    }

    /// Authorize and summarize for transport
    #[must_use]
    pub fn decide(&self, request: &AccessRequest) -> AccessDecision {
        AccessDecision::from(self.authorize(request))
    }
}

/// Serializable summary of a verdict
///
/// Returned to callers that transport the decision rather than acting
/// on it in-process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether the request is permitted
    pub allowed: bool,
    /// Machine-readable reason code on denial, `None` on allow
    pub reason: Option<String>,
}

impl From<Verdict> for AccessDecision {
    fn from(verdict: Verdict) -> Self {
        Self {
            allowed: verdict.is_allowed(),
            reason: verdict.deny_reason().map(|r| r.as_str().to_string()),
        }
    }
}
