//! Generic ordered record collection with write-through persistence.

use tracing::debug;

use crate::models::Record;
use crate::store::{Store, StoreResult};

/// An ordered sequence of records persisted as a single keyed blob.
///
/// Insertion order is preserved: add appends, update replaces in place,
/// delete removes. Lookups are linear scans; nothing but the id is indexed.
/// Every mutation writes the whole collection back to its key before
/// returning.
pub(crate) struct Collection<T> {
    key: &'static str,
    records: Vec<T>,
}

impl<T: Record> Collection<T> {
    /// Load the collection stored under `key`; an absent key means empty.
    /// A malformed blob is a hard error rather than silent data loss.
    pub(crate) fn load(store: &Store, key: &'static str) -> StoreResult<Self> {
        let records = match store.load(key)? {
            Some(blob) => serde_json::from_str(&blob)?,
            None => Vec::new(),
        };
        Ok(Self { key, records })
    }

    /// Append a record. The record keeps the id it was created with.
    pub(crate) fn add(&mut self, store: &Store, record: T) -> StoreResult<T> {
        self.records.push(record.clone());
        self.persist(store)?;
        Ok(record)
    }

    /// Replace the record with `id` in place, preserving its position and id.
    /// Returns false without mutating when no record has that id.
    pub(crate) fn update(&mut self, store: &Store, id: &str, mut record: T) -> StoreResult<bool> {
        let Some(pos) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };
        record.set_id(id.to_string());
        self.records[pos] = record;
        self.persist(store)?;
        Ok(true)
    }

    /// Remove the record with `id`. Returns false when no record has that id.
    pub(crate) fn delete(&mut self, store: &Store, id: &str) -> StoreResult<bool> {
        let Some(pos) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(false);
        };
        self.records.remove(pos);
        self.persist(store)?;
        Ok(true)
    }

    /// Records in insertion order.
    pub(crate) fn list(&self) -> &[T] {
        &self.records
    }

    /// Find a record by id.
    pub(crate) fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Mutable access for in-place field updates; the caller must persist.
    pub(crate) fn records_mut(&mut self) -> &mut Vec<T> {
        &mut self.records
    }

    /// Write the whole collection back to its key.
    pub(crate) fn persist(&self, store: &Store) -> StoreResult<()> {
        let blob = serde_json::to_string(&self.records)?;
        store.save(self.key, &blob)?;
        debug!(key = self.key, records = self.records.len(), "persisted collection");
        Ok(())
    }
}
