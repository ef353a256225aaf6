//! Target platform selection.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A social media platform the post is written for.
///
/// Matching is exact and case-sensitive. Anything that is not one of the
/// known names is kept verbatim in [`Platform::Other`] and gets no
/// platform-specific guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
    Other(String),
}

impl Platform {
    /// Returns the wire name of the platform.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Instagram => "instagram",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Other(raw) => raw,
        }
    }

    /// Returns `true` for the platforms that have dedicated guidance.
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Platform {
    fn from(s: &str) -> Self {
        match s {
            "instagram" => Self::Instagram,
            "facebook" => Self::Facebook,
            "twitter" => Self::Twitter,
            "linkedin" => Self::Linkedin,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}
