//! Versioned review records.

use serde::{Deserialize, Serialize};

use crate::cards::{AttributeKey, AttributeValue, Attributes};
use crate::collection::Versioned;
use crate::version::SemanticVersion;

/// A playtest review of one card version.
///
/// Several reviewers may review the same version; the collection keeps the
/// first one seen as the group's latest and reports the rest through
/// `Group::latest_ties`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Number of the reviewed card.
    pub number: u32,

    /// Card version the review applies to.
    pub version: SemanticVersion,

    /// Who wrote the review.
    #[serde(default, alias = "userId", skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,

    /// Remaining record fields (ratings, comments).
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Review {
    /// Create an anonymous review.
    #[must_use]
    pub fn new(number: u32, version: SemanticVersion) -> Self {
        Self {
            number,
            version,
            reviewer: None,
            attributes: Attributes::default(),
        }
    }

    /// Set the reviewer (builder pattern).
    #[must_use]
    pub fn by(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewer = Some(reviewer.into());
        self
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attr(
        mut self,
        key: impl Into<AttributeKey>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }
}

impl Versioned for Review {
    type Key = u32;

    fn group_key(&self) -> u32 {
        self.number
    }

    fn version(&self) -> SemanticVersion {
        self.version
    }
}
