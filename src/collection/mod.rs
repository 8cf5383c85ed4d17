//! Versioned record collections.
//!
//! A `VersionedCollection` ingests an unordered list of records that each
//! carry a group key and a semantic version, and indexes them:
//!
//! - `all`: every record, in insertion or `(key, version)` order
//! - per group: latest record, all versions, version lookup
//! - `latest`: one record per group, the highest version
//! - `draft` / `playtesting`: derived by a `PartitionRule`
//!
//! ## Tie Rules
//!
//! A group's latest record is only replaced by a strictly greater version,
//! so the first record seen at the maximum version wins. Records repeating
//! that version are still reachable through `Group::latest_ties`.
//!
//! ## Ordering
//!
//! `RecordOrdering` picks the ordering discipline. It never changes which
//! records land in a partition.

pub mod config;
pub mod errors;
pub mod group;
pub mod ingest;
pub mod iter;
pub mod traits;
pub mod versioned;

pub use config::{CollectionConfig, DuplicatePolicy, RecordOrdering};
pub use errors::{CollectionError, CollectionResult};
pub use group::Group;
pub use ingest::parse_records;
pub use iter::Records;
pub use traits::{NoPartitions, PartitionRule, Versioned};
pub use versioned::VersionedCollection;
