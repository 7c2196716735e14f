//! Reusable metadata predicates
//!
//! Small pure predicates shared by the per-class rules. Each one is a
//! total function over immutable inputs; composing them in a fixed
//! order is what a [`crate::ClassRule`] does.

use crate::identity::{ClaimValue, Identity, ObjectDescriptor};
use crate::ADMIN_CLAIM;
use alloc::collections::BTreeSet;
use alloc::string::String;

/// True iff the identity is not anonymous
#[must_use]
pub fn is_authenticated(identity: &Identity) -> bool {
    !identity.is_anonymous()
}

/// True iff the subject ID equals the path-derived owner segment
///
/// Exact string match: no normalization, no case folding. A mismatched
/// case is a deny.
#[must_use]
pub fn is_owner(identity: &Identity, owner_id: &str) -> bool {
    identity.subject_id() == owner_id
}

/// True iff the identity carries the boolean admin claim set to true
///
/// Anonymous identities are never admin, regardless of claims.
#[must_use]
pub fn is_admin(identity: &Identity) -> bool {
    !identity.is_anonymous()
        && matches!(identity.claim(ADMIN_CLAIM), Some(ClaimValue::Bool(true)))
}

/// True iff the declared content type is in the allowlist
///
/// Exact membership test. No wildcard or prefix matching: `text/plain`
/// fails an image allowlist even though both are well-formed types.
#[must_use]
pub fn content_type_allowed(descriptor: &ObjectDescriptor, allowlist: &BTreeSet<String>) -> bool {
    allowlist.contains(descriptor.content_type())
}

/// True iff the declared size is within the limit, inclusive
#[must_use]
pub fn size_within_limit(descriptor: &ObjectDescriptor, max_bytes: u64) -> bool {
    descriptor.size_bytes() <= max_bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_is_owner_exact_match_only() {
        let identity = Identity::user("user_owner");
        assert!(is_owner(&identity, "user_owner"));
        assert!(!is_owner(&identity, "User_Owner"));
        assert!(!is_owner(&identity, "user_owner "));
    }

    #[test]
    fn test_anonymous_never_admin() {
        // Even a forged bool claim on an anonymous identity is ignored
        let identity = Identity::anonymous().with_claim(ADMIN_CLAIM, ClaimValue::Bool(true));
        assert!(!is_admin(&identity));
    }

    #[test]
    fn test_admin_claim_must_be_boolean_true() {
        assert!(is_admin(&Identity::admin("ops")));
        assert!(!is_admin(&Identity::user("ops")));

        let false_claim = Identity::user("ops").with_claim(ADMIN_CLAIM, ClaimValue::Bool(false));
        assert!(!is_admin(&false_claim));

        // A string "true" is not the boolean capability flag
        let text_claim =
            Identity::user("ops").with_claim(ADMIN_CLAIM, ClaimValue::Text("true".to_string()));
        assert!(!is_admin(&text_claim));
    }

    #[test]
    fn test_content_type_exact_membership() {
        let allowlist: BTreeSet<String> = ["image/png", "image/jpeg"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        assert!(content_type_allowed(
            &ObjectDescriptor::new("image/png", 1),
            &allowlist
        ));
        assert!(!content_type_allowed(
            &ObjectDescriptor::new("image/PNG", 1),
            &allowlist
        ));
        assert!(!content_type_allowed(
            &ObjectDescriptor::new("image/", 1),
            &allowlist
        ));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let limit = 1024;
        assert!(size_within_limit(&ObjectDescriptor::new("x/y", 1023), limit));
        assert!(size_within_limit(&ObjectDescriptor::new("x/y", 1024), limit));
        assert!(!size_within_limit(&ObjectDescriptor::new("x/y", 1025), limit));
    }
}
