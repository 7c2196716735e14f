//! Object path model
//!
//! An [`ObjectPath`] is an ordered, non-empty sequence of non-empty
//! segments. Segments never contain the separator `/`. Both invariants
//! are enforced at construction, so every `ObjectPath` handed to the
//! classifier is already well-formed; callers that receive raw strings
//! normalize a parse failure to the `Unmatched`/Deny outcome instead of
//! propagating it.
//!
//! ## Security
//!
//! Raw paths are untrusted input. Parsing is a single linear scan and
//! rejects paths longer than `MAX_PATH_LENGTH` before any allocation
//! proportional to segment count.

use crate::error::{PolicyError, Result};
use crate::MAX_PATH_LENGTH;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A parsed storage path, e.g. `avatars/user_owner/avatar.png`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectPath {
    segments: Vec<String>,
}

impl ObjectPath {
    /// Parse a slash-delimited path string
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty, exceeds
    /// `MAX_PATH_LENGTH`, or contains an empty segment (leading,
    /// trailing, or doubled separators).
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() > MAX_PATH_LENGTH {
            return Err(PolicyError::PathTooLong {
                max: MAX_PATH_LENGTH,
                length: raw.len(),
            });
        }

        if raw.is_empty() {
            return Err(PolicyError::EmptyPath);
        }

        let mut segments = Vec::new();
        for (index, segment) in raw.split('/').enumerate() {
            if segment.is_empty() {
                return Err(PolicyError::EmptySegment { index });
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Build a path from pre-split segments
    ///
    /// # Errors
    ///
    /// Returns an error if no segments are given, a segment is empty,
    /// a segment contains `/`, or the joined path would exceed
    /// `MAX_PATH_LENGTH`.
    pub fn from_segments<I, S>(segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        let mut joined_len = 0;

        for (index, segment) in segments.into_iter().enumerate() {
            let segment = segment.into();
            if segment.is_empty() {
                return Err(PolicyError::EmptySegment { index });
            }
            if segment.contains('/') {
                return Err(PolicyError::SegmentContainsSeparator { index });
            }
            // Account for the separator between segments
            joined_len += segment.len() + usize::from(index > 0);
            out.push(segment);
        }

        if out.is_empty() {
            return Err(PolicyError::EmptyPath);
        }

        if joined_len > MAX_PATH_LENGTH {
            return Err(PolicyError::PathTooLong {
                max: MAX_PATH_LENGTH,
                length: joined_len,
            });
        }

        Ok(Self { segments: out })
    }

    /// Get the path segments
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Get the number of segments
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for ObjectPath {
    type Error = PolicyError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl TryFrom<&str> for ObjectPath {
    type Error = PolicyError;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<ObjectPath> for String {
    fn from(path: ObjectPath) -> Self {
        path.segments.join("/")
    }
}
