//! Integration tests for the gateway adapter
//!
//! End-to-end: raw request in, verdict out. Policy details are pinned
//! in core-authz's own suites; these tests focus on context assembly.

use core_authz::{ClaimValue, Operation};
use fermata_gateway::{AccessDecision, AccessRequestBuilder, ObjectGateway};

#[test]
fn test_owner_avatar_upload_allows() {
    let gateway = ObjectGateway::default();
    let request = AccessRequestBuilder::new()
        .path("avatars/user_owner/avatar.png")
        .method("PUT")
        .unwrap()
        .subject("user_owner")
        .content_type("image/png")
        .size_bytes(70)
        .build()
        .unwrap();

    assert!(gateway.authorize(&request).is_allowed());
}

#[test]
fn test_missing_subject_is_anonymous() {
    let gateway = ObjectGateway::default();

    // Anonymous read of a public class
    let public_read = AccessRequestBuilder::new()
        .path("firmware/2/2.1.7/image.bin")
        .operation(Operation::Read)
        .build()
        .unwrap();
    assert!(gateway.authorize(&public_read).is_allowed());

    // Anonymous read of an owner-gated class
    let gated_read = AccessRequestBuilder::new()
        .path("avatars/user_owner/avatar.png")
        .operation(Operation::Read)
        .build()
        .unwrap();
    let decision = gateway.decide(&gated_read);
    assert!(!decision.allowed);
    assert_eq!(decision.reason.as_deref(), Some("not-authenticated"));
}

#[test]
fn test_claims_flow_through_to_admin_check() {
    let gateway = ObjectGateway::default();

    let base = || {
        AccessRequestBuilder::new()
            .path("audio/practices/p_42/take1.mp3")
            .operation(Operation::Write)
            .subject("ops_user")
            .content_type("audio/mpeg")
            .size_bytes(1_000_000)
    };

    let without_claim = base().build().unwrap();
    let decision = gateway.decide(&without_claim);
    assert_eq!(decision.reason.as_deref(), Some("not-admin"));

    let with_claim = base()
        .claim("admin", ClaimValue::Bool(true))
        .build()
        .unwrap();
    assert!(gateway.authorize(&with_claim).is_allowed());
}

#[test]
fn test_partial_metadata_denies_missing_descriptor() {
    let gateway = ObjectGateway::default();

    // Content type declared, size absent: no descriptor is formed
    let request = AccessRequestBuilder::new()
        .path("avatars/user_owner/avatar.png")
        .operation(Operation::Write)
        .subject("user_owner")
        .content_type("image/png")
        .build()
        .unwrap();

    let decision = gateway.decide(&request);
    assert_eq!(decision.reason.as_deref(), Some("missing-descriptor"));
}

#[test]
fn test_unparseable_path_denies_unmatched() {
    let gateway = ObjectGateway::default();
    let request = AccessRequestBuilder::new()
        .path("/avatars/user_owner/avatar.png")
        .operation(Operation::Read)
        .subject("user_owner")
        .build()
        .unwrap();

    let decision = gateway.decide(&request);
    assert_eq!(decision.reason.as_deref(), Some("unmatched"));
}

#[test]
fn test_decision_from_verdict() {
    let gateway = ObjectGateway::default();
    let request = AccessRequestBuilder::new()
        .path("avatars/user_owner/avatar.png")
        .operation(Operation::Read)
        .subject("user_stranger")
        .build()
        .unwrap();

    assert_eq!(
        gateway.decide(&request),
        AccessDecision {
            allowed: false,
            reason: Some("not-owner".to_string()),
        }
    );
}
