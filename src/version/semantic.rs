//! `MAJOR.MINOR.PATCH` parsing, ordering, and formatting.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use super::errors::{VersionError, VersionResult};

/// A semantic version.
///
/// Field order matters: the derived `Ord` compares major, then minor,
/// then patch, which is exactly semver precedence for plain versions.
///
/// ## Example
///
/// ```
/// use card_collections::version::SemanticVersion;
///
/// let v: SemanticVersion = "1.2.0".parse().unwrap();
/// assert!(v > SemanticVersion::RELEASE);
/// assert_eq!(v.to_string(), "1.2.0");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    /// Major component.
    pub major: u32,
    /// Minor component.
    pub minor: u32,
    /// Patch component.
    pub patch: u32,
}

impl SemanticVersion {
    /// `0.0.0`.
    pub const ZERO: SemanticVersion = SemanticVersion::new(0, 0, 0);

    /// `1.0.0`. Versions below it are previews; a card at exactly this
    /// version without a playtesting marker is pre-testing.
    pub const RELEASE: SemanticVersion = SemanticVersion::new(1, 0, 0);

    /// Create a version from its components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a `MAJOR.MINOR.PATCH` string.
    ///
    /// Components must be decimal digits without signs, whitespace, or
    /// leading zeros. Pre-release and build suffixes are rejected.
    pub fn parse(input: &str) -> VersionResult<Self> {
        if input.is_empty() {
            return Err(VersionError::invalid(input, "empty string"));
        }

        let mut parts = input.split('.');
        let major = parse_component(input, parts.next())?;
        let minor = parse_component(input, parts.next())?;
        let patch = parse_component(input, parts.next())?;

        if parts.next().is_some() {
            return Err(VersionError::invalid(input, "more than three components"));
        }

        Ok(Self::new(major, minor, patch))
    }

    /// Whether this version is below `1.0.0`.
    #[must_use]
    pub fn is_preview(&self) -> bool {
        *self < Self::RELEASE
    }

    /// Next major version (`1.4.2` -> `2.0.0`).
    #[must_use]
    pub fn bump_major(self) -> Self {
        Self::new(self.major.saturating_add(1), 0, 0)
    }

    /// Next minor version (`1.4.2` -> `1.5.0`).
    #[must_use]
    pub fn bump_minor(self) -> Self {
        Self::new(self.major, self.minor.saturating_add(1), 0)
    }

    /// Next patch version (`1.4.2` -> `1.4.3`).
    #[must_use]
    pub fn bump_patch(self) -> Self {
        Self::new(self.major, self.minor, self.patch.saturating_add(1))
    }
}

fn parse_component(input: &str, part: Option<&str>) -> VersionResult<u32> {
    let part = part.ok_or_else(|| VersionError::invalid(input, "expected MAJOR.MINOR.PATCH"))?;

    if part.is_empty() {
        return Err(VersionError::invalid(input, "empty component"));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::invalid(input, "non-numeric component"));
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(VersionError::invalid(input, "leading zero in component"));
    }

    part.parse::<u32>()
        .map_err(|_| VersionError::invalid(input, "component out of range"))
}

/// Compare two version strings.
///
/// Fails on the first string that is not a valid version instead of
/// falling back to lexical order.
pub fn compare(a: &str, b: &str) -> VersionResult<Ordering> {
    let a = SemanticVersion::parse(a)?;
    let b = SemanticVersion::parse(b)?;
    Ok(a.cmp(&b))
}

impl FromStr for SemanticVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for SemanticVersion {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for SemanticVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SemanticVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl Visitor<'_> for VersionVisitor {
            type Value = SemanticVersion;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a MAJOR.MINOR.PATCH version string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                SemanticVersion::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(VersionVisitor)
    }
}
