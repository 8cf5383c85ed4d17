//! The versioned record collection.
//!
//! Construction is two passes over the input:
//!
//! 1. Every record is appended to storage and folded into its group:
//!    the group's version map (last write wins), its latest pointer
//!    (replaced only by a strictly greater version), and its draft pointer
//!    (replaced only by a strictly greater draft candidate).
//! 2. Each finalized group contributes its latest record and draft to the
//!    global partitions, then resolves the playtesting marker read off its
//!    latest record. The marker has to wait for pass 2 because the latest
//!    record of a group is only known once the whole input has been seen.

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use super::config::{CollectionConfig, DuplicatePolicy, RecordOrdering};
use super::errors::{CollectionError, CollectionResult};
use super::group::{Group, GroupEntry};
use super::iter::Records;
use super::traits::{PartitionRule, Versioned};

/// Read-only index over a list of versioned records.
///
/// Built once from a materialized record list and never mutated; rebuild
/// it when the underlying query is re-run.
///
/// ## Example
///
/// ```
/// use card_collections::cards::{Card, CardCollection};
/// use card_collections::version::SemanticVersion;
///
/// let v = |s: &str| -> SemanticVersion { s.parse().unwrap() };
/// let collection = CardCollection::from_cards(vec![
///     Card::new(1, v("1.0.0")),
///     Card::new(1, v("2.0.0")),
///     Card::new(2, v("1.0.0")),
/// ])
/// .unwrap();
///
/// assert_eq!(collection.len(), 3);
/// let latest: Vec<_> = collection.latest().map(|c| (c.number, c.version.to_string())).collect();
/// assert_eq!(latest, vec![(1, "2.0.0".to_string()), (2, "1.0.0".to_string())]);
/// ```
#[derive(Clone, Debug)]
pub struct VersionedCollection<R: Versioned> {
    /// Records in input order. Everything else stores positions into this.
    records: Vec<R>,

    /// Positions for the `all` partition, in the configured ordering.
    all: Vec<usize>,

    /// Groups in encounter order (or key order when sorted).
    groups: Vec<GroupEntry<R::Key>>,

    /// Group key -> index into `groups`.
    index: FxHashMap<R::Key, usize>,

    latest: Vec<usize>,
    draft: Vec<usize>,
    playtesting: Vec<usize>,

    config: CollectionConfig,
}

impl<R: Versioned> VersionedCollection<R> {
    /// Build a collection from records.
    ///
    /// `rule` decides the draft and playtesting partitions. Fails only when
    /// `config.duplicates` is `DuplicatePolicy::Reject` and a group repeats
    /// a version.
    pub fn build<I, P>(records: I, rule: &P, config: CollectionConfig) -> CollectionResult<Self>
    where
        I: IntoIterator<Item = R>,
        P: PartitionRule<R> + ?Sized,
    {
        let records: Vec<R> = records.into_iter().collect();
        let mut groups: Vec<GroupEntry<R::Key>> = Vec::new();
        let mut index: FxHashMap<R::Key, usize> = FxHashMap::default();

        for (pos, record) in records.iter().enumerate() {
            let key = record.group_key();
            let version = record.version();

            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(GroupEntry::new(key, pos));
                groups.len() - 1
            });
            let group = &mut groups[slot];

            group.all.push(pos);
            if group.by_version.insert(version, pos).is_some() {
                match config.duplicates {
                    DuplicatePolicy::Allow => {}
                    DuplicatePolicy::Warn => {
                        warn!(key = ?key, %version, "duplicate version; later record replaces earlier in version index");
                    }
                    DuplicatePolicy::Reject => {
                        return Err(CollectionError::DuplicateVersion {
                            key: format!("{:?}", key),
                            version: version.to_string(),
                        });
                    }
                }
            }

            if version > records[group.latest].version() {
                group.latest = pos;
            }

            if rule.is_draft(record)
                && group.draft.map_or(true, |draft| version > records[draft].version())
            {
                group.draft = Some(pos);
            }
        }

        let mut all: Vec<usize> = (0..records.len()).collect();

        if config.ordering == RecordOrdering::Sorted {
            // Stable sorts: equal (key, version) pairs keep input order.
            all.sort_by_key(|&pos| (records[pos].group_key(), records[pos].version()));
            for group in &mut groups {
                group.all.sort_by_key(|&pos| records[pos].version());
            }
            groups.sort_by_key(|group| group.key);
            index = groups
                .iter()
                .enumerate()
                .map(|(slot, group)| (group.key, slot))
                .collect();
        }

        let mut latest = Vec::with_capacity(groups.len());
        let mut draft = Vec::new();
        let mut playtesting = Vec::new();

        for group in &mut groups {
            latest.push(group.latest);

            if let Some(pos) = group.draft {
                draft.push(pos);
            }

            if let Some(marker) = rule.playtesting_marker(&records[group.latest]) {
                match group.by_version.get(&marker) {
                    Some(&pos) => {
                        group.playtesting = Some(pos);
                        playtesting.push(pos);
                    }
                    None => {
                        trace!(key = ?group.key, %marker, "playtesting version not present in group");
                    }
                }
            }
        }

        debug!(
            records = records.len(),
            groups = groups.len(),
            drafts = draft.len(),
            playtesting = playtesting.len(),
            ordering = ?config.ordering,
            "built versioned collection"
        );

        Ok(Self {
            records,
            all,
            groups,
            index,
            latest,
            draft,
            playtesting,
            config,
        })
    }

    /// Every input record, in the configured ordering.
    pub fn all(&self) -> Records<'_, R> {
        Records::new(&self.records, &self.all)
    }

    /// One record per group: its highest version.
    pub fn latest(&self) -> Records<'_, R> {
        Records::new(&self.records, &self.latest)
    }

    /// At most one record per group: its highest draft candidate.
    pub fn draft(&self) -> Records<'_, R> {
        Records::new(&self.records, &self.draft)
    }

    /// At most one record per group: the resolved playtesting version.
    pub fn playtesting(&self) -> Records<'_, R> {
        Records::new(&self.records, &self.playtesting)
    }

    /// Same as `latest()`.
    pub fn iter(&self) -> Records<'_, R> {
        self.latest()
    }

    /// Look up a group by key.
    #[must_use]
    pub fn get(&self, key: R::Key) -> Option<Group<'_, R>> {
        self.index
            .get(&key)
            .map(|&slot| Group::new(&self.records, &self.groups[slot]))
    }

    /// Check if a group key is present.
    #[must_use]
    pub fn contains(&self, key: R::Key) -> bool {
        self.index.contains_key(&key)
    }

    /// Iterate over groups in partition order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = Group<'_, R>> + '_ {
        self.groups
            .iter()
            .map(move |entry| Group::new(&self.records, entry))
    }

    /// Number of records (equals the input length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct group keys.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The configuration the collection was built with.
    #[must_use]
    pub fn config(&self) -> CollectionConfig {
        self.config
    }
}

impl<'a, R: Versioned> IntoIterator for &'a VersionedCollection<R> {
    type Item = &'a R;
    type IntoIter = Records<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.latest()
    }
}
