//! Collection build configuration.

use serde::{Deserialize, Serialize};

/// Ordering discipline for the `all` list and the derived partitions.
///
/// The choice never affects which records land in a partition, only the
/// order they are yielded in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOrdering {
    /// `all` keeps raw input order; partitions follow group-encounter order.
    #[default]
    Insertion,
    /// `all` is ascending by `(group key, version)`; partitions are
    /// ascending by group key. Records with equal keys keep input order.
    Sorted,
}

/// What to do when a group receives the same version twice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Later record silently wins the version slot. Both stay in `all`.
    Allow,
    /// Like `Allow`, but emits a warning for each duplicate.
    #[default]
    Warn,
    /// Fail construction.
    Reject,
}

/// Configuration for building a `VersionedCollection`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionConfig {
    /// Ordering discipline (default: insertion order).
    pub ordering: RecordOrdering,

    /// Duplicate `(group key, version)` handling (default: warn).
    pub duplicates: DuplicatePolicy,
}

impl CollectionConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ordering discipline.
    #[must_use]
    pub fn with_ordering(mut self, ordering: RecordOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Set the duplicate policy.
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Shorthand for sorted ordering.
    #[must_use]
    pub fn sorted(self) -> Self {
        self.with_ordering(RecordOrdering::Sorted)
    }

    /// Shorthand for rejecting duplicates.
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_duplicates(DuplicatePolicy::Reject)
    }
}
