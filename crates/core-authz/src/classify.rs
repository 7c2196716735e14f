//! Resource classification
//!
//! Maps an [`ObjectPath`] onto the closed set of resource classes the
//! store recognizes. Matching is literal-prefix plus fixed arity: each
//! class has a known segment count and a fixed leading literal, so no
//! wildcard or regex engine is involved.
//!
//! Classification is total and never fails. Anything that does not match
//! a known pattern (wrong literals, wrong arity, extra segments)
//! degrades to [`ResourceClass::Unmatched`], which the rule set then
//! denies.

use crate::path::ObjectPath;
use alloc::string::String;
use serde::{Deserialize, Serialize};

/// A named category of storage paths sharing one authorization policy
///
/// Each variant carries the parameters extracted from the path pattern
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceClass {
    /// `avatars/{ownerId}/{fileName}`
    Avatar {
        /// Owner segment of the path; compared against the requester's
        /// subject ID
        owner_id: String,
    },
    /// `audio/practices/{practiceId}/{fileName}`
    PracticeAudio {
        /// Practice session the recording belongs to
        practice_id: String,
        /// File name segment
        file_name: String,
    },
    /// `firmware/{versionMajor}/{versionFull}/{fileName}`
    Firmware {
        /// Major version segment
        version_major: String,
        /// Full version segment
        version_full: String,
        /// File name segment
        file_name: String,
    },
    /// Path matched no known pattern; always denied
    Unmatched,
}

impl ResourceClass {
    /// Stable class name used in configuration and diagnostics
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Avatar { .. } => "avatar",
            Self::PracticeAudio { .. } => "practice-audio",
            Self::Firmware { .. } => "firmware",
            Self::Unmatched => "unmatched",
        }
    }

    /// Whether this class is the always-deny fallback
    #[must_use]
    pub const fn is_unmatched(&self) -> bool {
        matches!(self, Self::Unmatched)
    }
}

/// Classify a storage path into a resource class
///
/// File names are opaque at this stage: no extension validation happens
/// here. The declared content type is the authority for object type; a
/// `.txt` avatar is rejected by the content-type allowlist, not by its
/// name.
#[must_use]
pub fn classify(path: &ObjectPath) -> ResourceClass {
    match path.segments() {
        [root, owner_id, _file] if root == "avatars" => ResourceClass::Avatar {
            owner_id: owner_id.clone(),
        },
        [root, group, practice_id, file_name] if root == "audio" && group == "practices" => {
            ResourceClass::PracticeAudio {
                practice_id: practice_id.clone(),
                file_name: file_name.clone(),
            }
        }
        [root, version_major, version_full, file_name] if root == "firmware" => {
            ResourceClass::Firmware {
                version_major: version_major.clone(),
                version_full: version_full.clone(),
                file_name: file_name.clone(),
            }
        }
        _ => ResourceClass::Unmatched,
    }
}
