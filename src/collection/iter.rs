//! Iterators over collection partitions.

use std::iter::FusedIterator;
use std::slice;

/// Iterator over records selected by a list of positions.
///
/// Every partition (`all`, `latest`, `draft`, `playtesting`, a group's
/// versions) is stored as positions into the collection's record storage;
/// this resolves them back to record references in partition order.
#[derive(Debug)]
pub struct Records<'a, R> {
    records: &'a [R],
    positions: slice::Iter<'a, usize>,
}

impl<'a, R> Records<'a, R> {
    pub(crate) fn new(records: &'a [R], positions: &'a [usize]) -> Self {
        Self {
            records,
            positions: positions.iter(),
        }
    }
}

impl<R> Clone for Records<'_, R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records,
            positions: self.positions.clone(),
        }
    }
}

impl<'a, R> Iterator for Records<'a, R> {
    type Item = &'a R;

    fn next(&mut self) -> Option<Self::Item> {
        let records = self.records;
        self.positions.next().map(|&pos| &records[pos])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<R> DoubleEndedIterator for Records<'_, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let records = self.records;
        self.positions.next_back().map(|&pos| &records[pos])
    }
}

impl<R> ExactSizeIterator for Records<'_, R> {}

impl<R> FusedIterator for Records<'_, R> {}
