//! Building collections from query output.
//!
//! Records usually arrive as a JSON array from a database find or a
//! spreadsheet read. Each element is decoded on its own so a bad record is
//! reported by position instead of failing the whole document opaquely.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::config::CollectionConfig;
use super::errors::{CollectionError, CollectionResult};
use super::traits::{PartitionRule, Versioned};
use super::versioned::VersionedCollection;

/// Decode a JSON array into records.
///
/// A record missing its group key or version, or carrying a malformed
/// version, fails with `CollectionError::Record` rather than being skipped.
pub fn parse_records<R: DeserializeOwned>(json: &str) -> CollectionResult<Vec<R>> {
    let values: Vec<Value> = serde_json::from_str(json)?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|source| CollectionError::Record { index, source })
        })
        .collect()
}

impl<R: Versioned + DeserializeOwned> VersionedCollection<R> {
    /// Decode a JSON array of records and build a collection from it.
    pub fn from_json<P>(json: &str, rule: &P, config: CollectionConfig) -> CollectionResult<Self>
    where
        P: PartitionRule<R> + ?Sized,
    {
        let records = parse_records(json)?;
        Self::build(records, rule, config)
    }
}
