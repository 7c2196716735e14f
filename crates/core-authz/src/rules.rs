//! Per-class policy rules and the rule set
//!
//! Each resource class is governed by one [`ClassRule`]: a read gate, a
//! write gate, a content-type allowlist, and an optional size ceiling.
//! The recurring public-read/admin-write shape is a template
//! constructor, so adding another public resource class is a one-line
//! change, not duplicated logic.
//!
//! The per-class thresholds are the externally observable contract of
//! the engine. A deployment that needs different values loads an
//! explicit TOML rule-set document instead of editing code; every
//! deserialized rule set is validated via the `try_from` pattern, so no
//! unvalidated configuration can reach the evaluator.

use crate::classify::ResourceClass;
use crate::error::{PolicyError, Result};
use crate::identity::{Identity, ObjectDescriptor, Operation};
use crate::validators;
use crate::verdict::{DenyReason, Verdict};
use crate::{AVATAR_MAX_BYTES, MAX_CONTENT_TYPES_PER_CLASS, MAX_CONTENT_TYPE_LENGTH};
use alloc::collections::BTreeSet;
use alloc::format;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Who may read objects of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadPolicy {
    /// Anyone, including anonymous requesters
    Public,
    /// Only the authenticated owner named in the path
    OwnerOnly,
}

/// Who may write objects of a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Only the authenticated owner named in the path
    OwnerOnly,
    /// Only identities carrying the admin claim
    AdminOnly,
}

/// Authorization policy for one resource class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClassRule {
    read: ReadPolicy,
    write: WritePolicy,
    content_types: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_size_bytes: Option<u64>,
}

impl ClassRule {
    /// Owner-gated template: reads and writes restricted to the
    /// authenticated owner named in the path
    #[must_use]
    pub fn owner_gated<I, S>(content_types: I, max_size_bytes: Option<u64>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            read: ReadPolicy::OwnerOnly,
            write: WritePolicy::OwnerOnly,
            content_types: content_types.into_iter().map(Into::into).collect(),
            max_size_bytes,
        }
    }

    /// Public-read/admin-write template
    #[must_use]
    pub fn public_admin<I, S>(content_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            read: ReadPolicy::Public,
            write: WritePolicy::AdminOnly,
            content_types: content_types.into_iter().map(Into::into).collect(),
            max_size_bytes: None,
        }
    }

    /// Get the read gate
    #[must_use]
    pub const fn read(&self) -> ReadPolicy {
        self.read
    }

    /// Get the write gate
    #[must_use]
    pub const fn write(&self) -> WritePolicy {
        self.write
    }

    /// Get the content-type allowlist
    #[must_use]
    pub const fn content_types(&self) -> &BTreeSet<String> {
        &self.content_types
    }

    /// Get the size ceiling, if the class has one
    #[must_use]
    pub const fn max_size_bytes(&self) -> Option<u64> {
        self.max_size_bytes
    }

    /// Evaluate this rule against a request
    ///
    /// Total over the class parameter space: every combination of
    /// inputs reaches an explicit verdict. Conjuncts run short-circuit,
    /// left to right: authentication, then ownership or admin, then
    /// content type, then size. The first failing conjunct picks the
    /// [`DenyReason`].
    ///
    /// `owner_id` is the path-derived owner for owner-gated classes and
    /// `None` for classes without an owner segment.
    #[must_use]
    pub fn evaluate(
        &self,
        identity: &Identity,
        operation: Operation,
        owner_id: Option<&str>,
        descriptor: Option<&ObjectDescriptor>,
    ) -> Verdict {
        match operation {
            Operation::Read => self.evaluate_read(identity, owner_id),
            Operation::Write => self.evaluate_write(identity, owner_id, descriptor),
        }
    }

    fn evaluate_read(&self, identity: &Identity, owner_id: Option<&str>) -> Verdict {
        match self.read {
            ReadPolicy::Public => Verdict::Allow,
            ReadPolicy::OwnerOnly => Self::owner_gate(identity, owner_id),
        }
    }

    fn evaluate_write(
        &self,
        identity: &Identity,
        owner_id: Option<&str>,
        descriptor: Option<&ObjectDescriptor>,
    ) -> Verdict {
        // The evaluator checks this before rule dispatch; kept here so
        // the rule stays total on its own.
        let Some(descriptor) = descriptor else {
            return Verdict::Deny(DenyReason::MissingDescriptor);
        };

        let principal_gate = match self.write {
            WritePolicy::OwnerOnly => Self::owner_gate(identity, owner_id),
            WritePolicy::AdminOnly => {
                if validators::is_admin(identity) {
                    Verdict::Allow
                } else {
                    Verdict::Deny(DenyReason::NotAdmin)
                }
            }
        };
        if !principal_gate.is_allowed() {
            return principal_gate;
        }

        if !validators::content_type_allowed(descriptor, &self.content_types) {
            return Verdict::Deny(DenyReason::ContentTypeRejected);
        }

        if let Some(max_bytes) = self.max_size_bytes {
            if !validators::size_within_limit(descriptor, max_bytes) {
                return Verdict::Deny(DenyReason::SizeExceeded);
            }
        }

        Verdict::Allow
    }

    fn owner_gate(identity: &Identity, owner_id: Option<&str>) -> Verdict {
        if !validators::is_authenticated(identity) {
            return Verdict::Deny(DenyReason::NotAuthenticated);
        }
        match owner_id {
            Some(owner) if validators::is_owner(identity, owner) => Verdict::Allow,
            _ => Verdict::Deny(DenyReason::NotOwner),
        }
    }

    /// Validate this rule's configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the allowlist is empty, oversized, or
    /// contains an empty or over-long entry.
    pub fn validate(&self, class: &str) -> Result<()> {
        if self.content_types.is_empty() {
            return Err(PolicyError::EmptyAllowlist {
                class: class.to_string(),
            });
        }

        if self.content_types.len() > MAX_CONTENT_TYPES_PER_CLASS {
            return Err(PolicyError::TooManyContentTypes {
                max: MAX_CONTENT_TYPES_PER_CLASS,
                attempted: self.content_types.len(),
            });
        }

        for content_type in &self.content_types {
            if content_type.is_empty() {
                return Err(PolicyError::InvalidRule(format!(
                    "class '{}' allowlist contains an empty content type",
                    class
                )));
            }
            if content_type.len() > MAX_CONTENT_TYPE_LENGTH {
                return Err(PolicyError::ContentTypeTooLong {
                    max: MAX_CONTENT_TYPE_LENGTH,
                    length: content_type.len(),
                });
            }
        }

        Ok(())
    }
}

/// The complete, immutable rule table: one rule per matched class
///
/// `Unmatched` carries no rule and always denies. Constructed once at
/// process start and read-only thereafter.
///
/// # Security
///
/// Fields are private to enforce validation through deserialization.
/// The `#[serde(try_from)]` attribute ensures every deserialized rule
/// set passes `validate()`, so malformed configuration cannot reach the
/// evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleSetRaw", rename_all = "kebab-case")]
pub struct RuleSet {
    avatar: ClassRule,
    practice_audio: ClassRule,
    firmware: ClassRule,
}

/// Raw rule set for deserialization (internal use only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RuleSetRaw {
    avatar: ClassRule,
    practice_audio: ClassRule,
    firmware: ClassRule,
}

impl TryFrom<RuleSetRaw> for RuleSet {
    type Error = PolicyError;

    fn try_from(raw: RuleSetRaw) -> Result<Self> {
        let rule_set = Self {
            avatar: raw.avatar,
            practice_audio: raw.practice_audio,
            firmware: raw.firmware,
        };
        rule_set.validate()?;
        Ok(rule_set)
    }
}

impl Default for RuleSet {
    /// The contract table:
    ///
    /// | class | read | write | content types | max size |
    /// |---|---|---|---|---|
    /// | avatar | owner-only | owner-only | image/png, image/jpeg | 5 MiB |
    /// | practice-audio | public | admin-only | audio/mpeg | none |
    /// | firmware | public | admin-only | application/octet-stream | none |
    fn default() -> Self {
        Self {
            avatar: ClassRule::owner_gated(["image/png", "image/jpeg"], Some(AVATAR_MAX_BYTES)),
            practice_audio: ClassRule::public_admin(["audio/mpeg"]),
            firmware: ClassRule::public_admin(["application/octet-stream"]),
        }
    }
}

impl RuleSet {
    /// Get the avatar rule
    #[must_use]
    pub const fn avatar(&self) -> &ClassRule {
        &self.avatar
    }

    /// Get the practice-audio rule
    #[must_use]
    pub const fn practice_audio(&self) -> &ClassRule {
        &self.practice_audio
    }

    /// Get the firmware rule
    #[must_use]
    pub const fn firmware(&self) -> &ClassRule {
        &self.firmware
    }

    /// Look up the rule for a class; `None` for `Unmatched`
    #[must_use]
    pub const fn rule_for(&self, class: &ResourceClass) -> Option<&ClassRule> {
        match class {
            ResourceClass::Avatar { .. } => Some(&self.avatar),
            ResourceClass::PracticeAudio { .. } => Some(&self.practice_audio),
            ResourceClass::Firmware { .. } => Some(&self.firmware),
            ResourceClass::Unmatched => None,
        }
    }

    /// Validate all class rules
    ///
    /// # Errors
    ///
    /// Returns the first failing class rule error (see
    /// [`ClassRule::validate`]).
    pub fn validate(&self) -> Result<()> {
        self.avatar.validate("avatar")?;
        self.practice_audio.validate("practice-audio")?;
        self.firmware.validate("firmware")?;
        Ok(())
    }

    /// Load a rule set from a TOML document
    ///
    /// Any change to the shipped thresholds is a breaking policy change
    /// and belongs in an explicit, versioned document, not in code.
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let rule_set: Self = toml::from_str(toml_str)?;
        Ok(rule_set)
    }

    /// Serialize this rule set to a TOML document
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::SerializationError` if serialization fails
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| PolicyError::SerializationError(e.to_string()))
    }
}
