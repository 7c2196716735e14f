//! Access request assembly
//!
//! An [`AccessRequest`] is the raw material of one authorization check,
//! collected from the call surface before any policy logic runs. The
//! builder enforces the boundary's own preconditions; policy questions
//! stay with the engine.

use crate::error::{GatewayError, Result};
use core_authz::{ClaimValue, Operation};
use std::collections::BTreeMap;

/// Map an HTTP-style method onto a storage operation
///
/// GET and HEAD are reads; PUT and POST are writes. Anything else is a
/// precondition violation, the object surface has no other verbs.
///
/// # Errors
///
/// Returns `GatewayError::UnsupportedMethod` for unknown methods.
pub fn operation_from_method(method: &str) -> Result<Operation> {
    match method.to_ascii_uppercase().as_str() {
        "GET" | "HEAD" => Ok(Operation::Read),
        "PUT" | "POST" => Ok(Operation::Write),
        _ => Err(GatewayError::UnsupportedMethod(method.to_string())),
    }
}

/// One authorization check's worth of raw inputs
#[derive(Debug, Clone)]
pub struct AccessRequest {
    path: String,
    operation: Operation,
    subject: Option<String>,
    claims: BTreeMap<String, ClaimValue>,
    content_type: Option<String>,
    size_bytes: Option<u64>,
}

impl AccessRequest {
    /// Start building a request
    #[must_use]
    pub fn builder() -> AccessRequestBuilder {
        AccessRequestBuilder::default()
    }

    /// Raw slash-delimited target path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Requested operation
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Authenticated subject, if any
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Claims attached by the identity provider
    #[must_use]
    pub const fn claims(&self) -> &BTreeMap<String, ClaimValue> {
        &self.claims
    }

    /// Declared content type, if any
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Declared size in bytes, if any
    #[must_use]
    pub const fn size_bytes(&self) -> Option<u64> {
        self.size_bytes
    }
}

/// Builder for [`AccessRequest`] with a fluent API
///
/// # Examples
///
/// ```
/// use fermata_gateway::AccessRequestBuilder;
/// use core_authz::Operation;
///
/// let request = AccessRequestBuilder::new()
///     .path("avatars/user_owner/avatar.png")
///     .operation(Operation::Write)
///     .subject("user_owner")
///     .content_type("image/png")
///     .size_bytes(70)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.subject(), Some("user_owner"));
/// ```
#[derive(Debug, Default)]
pub struct AccessRequestBuilder {
    path: Option<String>,
    operation: Option<Operation>,
    subject: Option<String>,
    claims: BTreeMap<String, ClaimValue>,
    content_type: Option<String>,
    size_bytes: Option<u64>,
}

impl AccessRequestBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target path
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the operation directly
    #[must_use]
    pub const fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Set the operation from an HTTP-style method string
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::UnsupportedMethod` for unknown methods.
    pub fn method(mut self, method: &str) -> Result<Self> {
        self.operation = Some(operation_from_method(method)?);
        Ok(self)
    }

    /// Set the authenticated subject
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Attach a claim from the identity provider
    #[must_use]
    pub fn claim(mut self, name: impl Into<String>, value: ClaimValue) -> Self {
        self.claims.insert(name.into(), value);
        self
    }

    /// Set the declared content type
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the declared size in bytes
    #[must_use]
    pub const fn size_bytes(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }

    /// Build the request, checking boundary preconditions
    ///
    /// # Errors
    ///
    /// Returns an error if the path or operation is missing, or if a
    /// subject was supplied but is empty.
    pub fn build(self) -> Result<AccessRequest> {
        let path = self.path.ok_or(GatewayError::MissingPath)?;
        let operation = self.operation.ok_or(GatewayError::MissingOperation)?;

        if let Some(subject) = &self.subject {
            if subject.is_empty() {
                return Err(GatewayError::EmptySubject);
            }
        }

        Ok(AccessRequest {
            path,
            operation,
            subject: self.subject,
            claims: self.claims,
            content_type: self.content_type,
            size_bytes: self.size_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(operation_from_method("GET").unwrap(), Operation::Read);
        assert_eq!(operation_from_method("head").unwrap(), Operation::Read);
        assert_eq!(operation_from_method("PUT").unwrap(), Operation::Write);
        assert_eq!(operation_from_method("post").unwrap(), Operation::Write);
        assert!(matches!(
            operation_from_method("DELETE"),
            Err(GatewayError::UnsupportedMethod(_))
        ));
    }

    #[test]
    fn test_build_requires_path_and_operation() {
        assert!(matches!(
            AccessRequestBuilder::new().operation(Operation::Read).build(),
            Err(GatewayError::MissingPath)
        ));
        assert!(matches!(
            AccessRequestBuilder::new().path("firmware/1/1.0/fw.bin").build(),
            Err(GatewayError::MissingOperation)
        ));
    }

    #[test]
    fn test_empty_subject_rejected() {
        let result = AccessRequestBuilder::new()
            .path("avatars/a/b.png")
            .operation(Operation::Read)
            .subject("")
            .build();
        assert!(matches!(result, Err(GatewayError::EmptySubject)));
    }

    #[test]
    fn test_builder_via_method() {
        let request = AccessRequestBuilder::new()
            .path("audio/practices/p1/take.mp3")
            .method("get")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.operation(), Operation::Read);
        assert_eq!(request.subject(), None);
    }
}
