//! # card-collections
//!
//! Versioned card and review collections for a card design and
//! playtesting workflow.
//!
//! Card data arrives as a flat list of records, one per card version. This
//! crate turns such a list into a read-only index: every record, every
//! version of each card, each card's latest version, and the derived
//! `draft` and `playtesting` partitions the editors and the release
//! workflow read from.
//!
//! ## Design Principles
//!
//! 1. **One Generic Core**: `VersionedCollection<R>` works for any record
//!    implementing `Versioned`. Cards and reviews differ only in the
//!    `PartitionRule` used to build them.
//!
//! 2. **Build Once, Read Many**: collections are immutable after
//!    construction and rebuilt from scratch when the source query re-runs.
//!
//! 3. **Fail Fast**: malformed versions and records missing their key or
//!    version are errors, never silently skipped or coerced.
//!
//! ## Modules
//!
//! - `version`: `MAJOR.MINOR.PATCH` versions and comparison
//! - `collection`: the generic collection, its configuration and errors
//! - `cards`: card records, card partition rules, `CardCollection`
//! - `reviews`: review records, `ReviewCollection`

pub mod version;
pub mod collection;
pub mod cards;
pub mod reviews;

// Re-export commonly used types
pub use crate::version::{SemanticVersion, VersionError};

pub use crate::collection::{
    CollectionConfig, CollectionError, CollectionResult, DuplicatePolicy, Group,
    NoPartitions, PartitionRule, RecordOrdering, Records, Versioned, VersionedCollection,
};

pub use crate::cards::{
    AttributeKey, AttributeValue, Attributes, Card, CardCollection, CardRules, Note, NoteKind,
};

pub use crate::reviews::{Review, ReviewCollection};
