//! Mutex-guarded store handle for multi-threaded embedders.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::Clock;
use crate::models::{ExamRecord, RecordDraft, RecordPatch};
use crate::storage::KeyValueStore;

use super::RecordStore;

/// Cloneable, thread-safe wrapper around a [`RecordStore`].
///
/// Id and sequence generation read the list they are about to extend, so
/// concurrent callers must be serialized; this handle does that with a single
/// mutex. Methods return owned copies of the list, never the guard.
pub struct SharedRecordStore<S: KeyValueStore> {
    inner: Arc<Mutex<RecordStore<S>>>,
}

impl<S: KeyValueStore> Clone for SharedRecordStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> SharedRecordStore<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // A poisoned lock means a panic mid-mutation; the list itself is still
    // structurally sound, so recover the guard rather than propagate.
    fn lock(&self) -> MutexGuard<'_, RecordStore<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Vec<ExamRecord> {
        self.lock().snapshot().to_vec()
    }

    pub fn add(&self, record: ExamRecord) -> Vec<ExamRecord> {
        self.lock().add(record).to_vec()
    }

    pub fn create(&self, draft: RecordDraft, clock: &dyn Clock) -> ExamRecord {
        self.lock().create(draft, clock)
    }

    pub fn update(&self, id: &str, patch: &RecordPatch) -> Vec<ExamRecord> {
        self.lock().update(id, patch).to_vec()
    }

    pub fn remove(&self, id: &str) -> Vec<ExamRecord> {
        self.lock().remove(id).to_vec()
    }

    pub fn flush(&self) -> bool {
        self.lock().flush()
    }
}
