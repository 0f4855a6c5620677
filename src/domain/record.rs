//! Record store primitives: ids, counters, collections and documents

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A persisted entity with an integer id assigned once at creation.
pub trait Record {
    fn id(&self) -> u64;
}

/// Persisted id source for one record type.
///
/// Serializes as a bare integer holding the *next* id to hand out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counter(u64);

impl Counter {
    pub const fn starting_at(first: u64) -> Self {
        Counter(first)
    }

    /// Return the current value, then advance.
    pub fn next_id(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }

    /// The id the next call to `next_id` will return
    pub fn peek(&self) -> u64 {
        self.0
    }

    /// Raise the counter so it is strictly above `max_id`. Never lowers it.
    pub fn ensure_above(&mut self, max_id: u64) {
        if self.0 <= max_id {
            self.0 = max_id + 1;
        }
    }
}

/// Ordered records of one type. Insertion order is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Collection {
            records: Vec::new(),
        }
    }
}

impl<R: Record> Collection<R> {
    /// Append a record and return a reference to it
    pub fn add(&mut self, record: R) -> &R {
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn find_by_id(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn find(&self, predicate: impl Fn(&R) -> bool) -> Option<&R> {
        self.records.iter().find(|r| predicate(r))
    }

    pub fn find_mut(&mut self, predicate: impl Fn(&R) -> bool) -> Option<&mut R> {
        self.records.iter_mut().find(|r| predicate(r))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest id in the collection, if any
    pub fn max_id(&self) -> Option<u64> {
        self.records.iter().map(Record::id).max()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }
}

impl<'a, R> IntoIterator for &'a Collection<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Root object persisted as one JSON file.
///
/// `Default` is the empty skeleton used for missing, empty or corrupted files.
pub trait Document: Serialize + DeserializeOwned + Default + Clone {
    /// Short name used in log messages
    const NAME: &'static str;

    /// Raise counters above the highest stored id of their collection.
    fn reconcile_counters(&mut self);
}

/// Raise `counter` above every id currently in `collection`.
pub fn reconcile<R: Record>(counter: &mut Counter, collection: &Collection<R>) {
    if let Some(max) = collection.max_id() {
        counter.ensure_above(max);
    }
}
