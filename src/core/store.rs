//! In-memory record collection backing the list and detail views.

use crate::errors::{AppError, AppResult};
use crate::models::record::FarmRecord;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(1);

fn next_store_id() -> u64 {
    NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed)
}

/// Ordered collection of records, unique by id.
///
/// `revision` increments on every mutation so derived views know when to
/// recompute. `store_id` is unique per instance (clones included), so a
/// view never mistakes one store for another at the same revision.
#[derive(Debug)]
pub struct RecordStore<R> {
    records: Vec<R>,
    revision: u64,
    store_id: u64,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            revision: 0,
            store_id: next_store_id(),
        }
    }
}

impl<R: Clone> Clone for RecordStore<R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            revision: self.revision,
            store_id: next_store_id(),
        }
    }
}

impl<R: FarmRecord> RecordStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<R>) -> AppResult<Self> {
        let mut store = Self::new();
        for r in records {
            store.insert(r)?;
        }
        Ok(store)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn store_id(&self) -> u64 {
        self.store_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn insert(&mut self, record: R) -> AppResult<()> {
        if self.contains(record.id()) {
            return Err(AppError::DuplicateRecord(record.id().to_string()));
        }
        self.records.push(record);
        self.revision += 1;
        Ok(())
    }

    /// Replace the record with the same id, keeping its position.
    pub fn update(&mut self, record: R) -> AppResult<()> {
        let idx = self
            .position(record.id())
            .ok_or_else(|| AppError::RecordNotFound(record.id().to_string()))?;
        self.records[idx] = record;
        self.revision += 1;
        Ok(())
    }

    /// Remove exactly one record; the others keep their relative order.
    pub fn delete(&mut self, id: &str) -> AppResult<R> {
        let idx = self
            .position(id)
            .ok_or_else(|| AppError::RecordNotFound(id.to_string()))?;
        let removed = self.records.remove(idx);
        self.revision += 1;
        Ok(removed)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
