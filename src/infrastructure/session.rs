//! In-memory document paired with its store

use crate::domain::Document;
use crate::error::Result;
use crate::infrastructure::store::RecordStore;

/// A loaded document plus the store it persists to.
///
/// Mutations go through [`StoreSession::commit`], which applies them to a copy,
/// saves the copy, and only then adopts it. A failed save therefore leaves the
/// in-memory document at its last committed state.
#[derive(Debug)]
pub struct StoreSession<D: Document> {
    store: RecordStore<D>,
    document: D,
}

impl<D: Document> StoreSession<D> {
    /// Load the document once. Recovery from a damaged file is reported by the store.
    pub fn open(store: RecordStore<D>) -> Self {
        let document = store.load().document;
        StoreSession { store, document }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Validate and apply `mutation`, then persist the whole document.
    ///
    /// Returns the mutation's value only after the save succeeded.
    pub fn commit<T>(&mut self, mutation: impl FnOnce(&mut D) -> Result<T>) -> Result<T> {
        let mut pending = self.document.clone();
        let value = mutation(&mut pending)?;
        self.store.save(&pending)?;
        self.document = pending;
        Ok(value)
    }
}
