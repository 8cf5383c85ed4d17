//! Per-group index entries.
//!
//! A group is every version of one conceptual item (all versions of card
//! #12, all reviews of card #12). `GroupEntry` is the stored index; `Group`
//! is the borrowed view handed out by `VersionedCollection::get`.

use im::OrdMap;
use smallvec::SmallVec;

use super::iter::Records;
use super::traits::Versioned;
use crate::version::SemanticVersion;

/// Stored index for one group. Values are positions into record storage.
#[derive(Clone, Debug)]
pub(crate) struct GroupEntry<K> {
    pub(crate) key: K,
    pub(crate) latest: usize,
    pub(crate) all: SmallVec<[usize; 4]>,
    pub(crate) by_version: OrdMap<SemanticVersion, usize>,
    pub(crate) draft: Option<usize>,
    pub(crate) playtesting: Option<usize>,
}

impl<K> GroupEntry<K> {
    /// Start a group seeded with its first record.
    pub(crate) fn new(key: K, first: usize) -> Self {
        Self {
            key,
            latest: first,
            all: SmallVec::new(),
            by_version: OrdMap::new(),
            draft: None,
            playtesting: None,
        }
    }
}

/// Borrowed view of one group in a collection.
///
/// ## Example
///
/// ```
/// use card_collections::cards::{Card, CardCollection};
///
/// let cards = vec![
///     Card::new(7, "1.0.0".parse().unwrap()),
///     Card::new(7, "1.1.0".parse().unwrap()),
/// ];
/// let collection = CardCollection::from_cards(cards).unwrap();
///
/// let group = collection.get(7).unwrap();
/// assert_eq!(group.latest().version.to_string(), "1.1.0");
/// assert_eq!(group.all().count(), 2);
/// ```
pub struct Group<'a, R: Versioned> {
    records: &'a [R],
    entry: &'a GroupEntry<R::Key>,
}

impl<'a, R: Versioned> Group<'a, R> {
    pub(crate) fn new(records: &'a [R], entry: &'a GroupEntry<R::Key>) -> Self {
        Self { records, entry }
    }

    /// The group key.
    #[must_use]
    pub fn key(&self) -> R::Key {
        self.entry.key
    }

    /// Highest-versioned record in the group.
    #[must_use]
    pub fn latest(&self) -> &'a R {
        &self.records[self.entry.latest]
    }

    /// Every record in the group, including duplicates.
    pub fn all(&self) -> Records<'a, R> {
        Records::new(self.records, self.entry.all.as_slice())
    }

    /// Current draft, if any record in the group qualifies.
    #[must_use]
    pub fn draft(&self) -> Option<&'a R> {
        self.entry.draft.map(|pos| &self.records[pos])
    }

    /// Record named by the latest record's playtesting marker, if it exists.
    #[must_use]
    pub fn playtesting(&self) -> Option<&'a R> {
        self.entry.playtesting.map(|pos| &self.records[pos])
    }

    /// Record at an exact version.
    ///
    /// With duplicate versions this is the last one seen.
    #[must_use]
    pub fn version(&self, version: &SemanticVersion) -> Option<&'a R> {
        self.entry.by_version.get(version).map(|&pos| &self.records[pos])
    }

    /// Distinct versions in ascending order.
    pub fn versions(&self) -> impl Iterator<Item = SemanticVersion> + 'a {
        self.entry.by_version.keys().copied()
    }

    /// Every record whose version equals the latest version.
    ///
    /// Normally just the latest record; longer when the input repeats the
    /// maximum version. The first element is always `latest()`.
    pub fn latest_ties(&self) -> impl Iterator<Item = &'a R> + 'a {
        let top = self.latest().version();
        self.all().filter(move |record| record.version() == top)
    }

    /// Number of records in the group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entry.all.len()
    }

    /// Groups always hold at least one record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry.all.is_empty()
    }
}

impl<R: Versioned> Clone for Group<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Versioned> Copy for Group<'_, R> {}

impl<R: Versioned + std::fmt::Debug> std::fmt::Debug for Group<'_, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("key", &self.entry.key)
            .field("latest", self.latest())
            .field("len", &self.len())
            .finish()
    }
}
