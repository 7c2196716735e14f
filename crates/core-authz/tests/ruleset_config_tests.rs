//! Tests for forced validation during RuleSet deserialization
//!
//! Every rule set that reaches the evaluator must have passed
//! `validate()`, whether built in code or loaded from TOML.

use core_authz::{
    ClassRule, DenyReason, Identity, ObjectDescriptor, Operation, PolicyEvaluator, PolicyError,
    ReadPolicy, RuleSet, Verdict, WritePolicy, AVATAR_MAX_BYTES, MAX_CONTENT_TYPES_PER_CLASS,
};

const VALID_RULESET: &str = r#"
[avatar]
read = "owner-only"
write = "owner-only"
content-types = ["image/png", "image/jpeg"]
max-size-bytes = 5242880

[practice-audio]
read = "public"
write = "admin-only"
content-types = ["audio/mpeg"]

[firmware]
read = "public"
write = "admin-only"
content-types = ["application/octet-stream"]
"#;

#[test]
fn test_default_matches_contract_table() {
    let rules = RuleSet::default();

    assert_eq!(rules.avatar().read(), ReadPolicy::OwnerOnly);
    assert_eq!(rules.avatar().write(), WritePolicy::OwnerOnly);
    assert_eq!(rules.avatar().max_size_bytes(), Some(AVATAR_MAX_BYTES));
    assert!(rules.avatar().content_types().contains("image/png"));
    assert!(rules.avatar().content_types().contains("image/jpeg"));
    assert_eq!(rules.avatar().content_types().len(), 2);

    assert_eq!(rules.practice_audio().read(), ReadPolicy::Public);
    assert_eq!(rules.practice_audio().write(), WritePolicy::AdminOnly);
    assert_eq!(rules.practice_audio().max_size_bytes(), None);
    assert!(rules.practice_audio().content_types().contains("audio/mpeg"));

    assert_eq!(rules.firmware().read(), ReadPolicy::Public);
    assert_eq!(rules.firmware().write(), WritePolicy::AdminOnly);
    assert!(rules
        .firmware()
        .content_types()
        .contains("application/octet-stream"));
}

#[test]
fn test_from_toml_equals_default() {
    let rules = RuleSet::from_toml(VALID_RULESET).unwrap();
    assert_eq!(rules, RuleSet::default());
}

#[test]
fn test_toml_round_trip() {
    let rules = RuleSet::default();
    let toml = rules.to_toml().unwrap();
    let reloaded = RuleSet::from_toml(&toml).unwrap();
    assert_eq!(rules, reloaded);
}

#[test]
fn test_empty_allowlist_rejected() {
    let toml = VALID_RULESET.replace(
        r#"content-types = ["audio/mpeg"]"#,
        "content-types = []",
    );
    let result = RuleSet::from_toml(&toml);

    // The validation failure surfaces through serde's try_from as a
    // TOML error carrying our message
    let err = result.unwrap_err();
    match err {
        PolicyError::TomlError(e) => {
            assert!(
                e.to_string().contains("empty content-type allowlist"),
                "unexpected message: {}",
                e
            );
        }
        other => panic!("expected TomlError, got {:?}", other),
    }
}

#[test]
fn test_oversized_allowlist_rejected() {
    let entries: Vec<String> = (0..=MAX_CONTENT_TYPES_PER_CLASS)
        .map(|i| format!("\"application/x-{}\"", i))
        .collect();
    let toml = VALID_RULESET.replace(
        r#"content-types = ["application/octet-stream"]"#,
        &format!("content-types = [{}]", entries.join(", ")),
    );

    let err = RuleSet::from_toml(&toml).unwrap_err();
    match err {
        PolicyError::TomlError(e) => {
            assert!(e.to_string().contains("maximum"), "unexpected message: {}", e);
        }
        other => panic!("expected TomlError, got {:?}", other),
    }
}

#[test]
fn test_overlong_content_type_rejected() {
    let long_type = format!("application/{}", "x".repeat(200));
    let toml = VALID_RULESET.replace("application/octet-stream", &long_type);

    assert!(RuleSet::from_toml(&toml).is_err());
}

#[test]
fn test_missing_class_rejected() {
    let toml = r#"
[avatar]
read = "owner-only"
write = "owner-only"
content-types = ["image/png"]
"#;
    assert!(RuleSet::from_toml(toml).is_err());
}

#[test]
fn test_programmatic_rule_validation() {
    let rule = ClassRule::public_admin(Vec::<String>::new());
    assert!(matches!(
        rule.validate("firmware"),
        Err(PolicyError::EmptyAllowlist { .. })
    ));

    let rule = ClassRule::owner_gated(["image/png"], Some(AVATAR_MAX_BYTES));
    assert!(rule.validate("avatar").is_ok());
}

#[test]
fn test_loaded_ruleset_drives_evaluation() {
    // A deployment-specific override: avatars accept webp too
    let toml = VALID_RULESET.replace(
        r#"content-types = ["image/png", "image/jpeg"]"#,
        r#"content-types = ["image/png", "image/jpeg", "image/webp"]"#,
    );
    let evaluator = PolicyEvaluator::new(RuleSet::from_toml(&toml).unwrap());

    let owner = Identity::user("user_owner");
    let avatar = core_authz::ObjectPath::parse("avatars/user_owner/avatar.webp").unwrap();
    let webp = ObjectDescriptor::new("image/webp", 70);

    assert_eq!(
        evaluator.evaluate(&owner, Operation::Write, &avatar, Some(&webp)),
        Verdict::Allow
    );

    // The stock rule set still rejects it
    let stock = PolicyEvaluator::default();
    assert_eq!(
        stock.evaluate(&owner, Operation::Write, &avatar, Some(&webp)),
        Verdict::Deny(DenyReason::ContentTypeRejected)
    );
}
