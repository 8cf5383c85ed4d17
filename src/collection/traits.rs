//! Record and partition-rule traits.
//!
//! These traits are the seams between the generic collection core and the
//! concrete record types (cards, reviews). A record type says how it is
//! grouped and versioned; a partition rule says which extra partitions the
//! collection derives for it.

use std::fmt::Debug;
use std::hash::Hash;

use crate::version::SemanticVersion;

/// A record that belongs to a group and carries a version.
pub trait Versioned {
    /// Identifies "the same item" across versions (e.g. a card number).
    type Key: Copy + Eq + Hash + Ord + Debug;

    /// The group this record belongs to.
    fn group_key(&self) -> Self::Key;

    /// The record's version.
    fn version(&self) -> SemanticVersion;
}

/// Strategy for deriving the `draft` and `playtesting` partitions.
///
/// Both hooks default to "never", which yields a collection with only the
/// `latest` partition.
pub trait PartitionRule<R: Versioned> {
    /// Whether `record` is a draft candidate for its group.
    ///
    /// The group's draft is the highest-versioned candidate.
    fn is_draft(&self, _record: &R) -> bool {
        false
    }

    /// The playtesting version declared by a group's latest record.
    ///
    /// Only called on the finalized latest record of each group.
    fn playtesting_marker(&self, _latest: &R) -> Option<SemanticVersion> {
        None
    }
}

/// Rule for variants with no derived partitions beyond `latest`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoPartitions;

impl<R: Versioned> PartitionRule<R> for NoPartitions {}
