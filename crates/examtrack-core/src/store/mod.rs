//! The canonical record store.

mod seed;
mod shared;

pub use shared::SharedRecordStore;

use log::{debug, warn};

use crate::clock::{format_date, Clock};
use crate::models::{ExamRecord, RecordDraft, RecordPatch};
use crate::storage::KeyValueStore;

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Key the snapshot blob lives under.
    pub storage_key: String,
    /// Seed the built-in sample dataset when storage holds no snapshot.
    pub seed_when_empty: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: "patients".into(),
            seed_when_empty: true,
        }
    }
}

/// Owns the canonical, ordered list of exam records.
///
/// The store is the sole writer of the durable snapshot: every mutation
/// re-serializes the full list and writes it under the configured key. All
/// mutations take `&mut self`; embedders that share a store across threads
/// use [`SharedRecordStore`], since the id and sequence generation rules are
/// only correct under serialized access.
pub struct RecordStore<S: KeyValueStore> {
    records: Vec<ExamRecord>,
    storage: S,
    config: StoreConfig,
    dirty: bool,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Load the canonical list from storage, seeding the sample dataset when
    /// no snapshot exists.
    ///
    /// Stored records decode defensively (missing fields default, unknown
    /// fields are ignored); a blob that does not parse at all is treated as
    /// absent, with a warning logged.
    pub fn load(storage: S, config: StoreConfig) -> Self {
        let records = match storage.get(&config.storage_key) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<ExamRecord>>(&blob) {
                Ok(records) => records,
                Err(err) => {
                    warn!(
                        "event=snapshot_decode_failed key={} error={}",
                        config.storage_key, err
                    );
                    initial_records(&config)
                }
            },
            Ok(None) => initial_records(&config),
            Err(err) => {
                warn!(
                    "event=storage_unavailable op=load key={} error={}",
                    config.storage_key, err
                );
                initial_records(&config)
            }
        };

        Self {
            records,
            storage,
            config,
            dirty: false,
        }
    }

    /// Load with the default configuration.
    pub fn load_default(storage: S) -> Self {
        Self::load(storage, StoreConfig::default())
    }

    /// Read-only view of the canonical list.
    pub fn snapshot(&self) -> &[ExamRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Next record id: string form of the highest numeric id plus one, or
    /// `"1"` for an empty store. Non-numeric ids are skipped.
    pub fn next_id(&self) -> String {
        let max = self
            .records
            .iter()
            .filter_map(|record| record.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    /// Next sequence number for `date`: one more than the count of records
    /// already carrying that date.
    pub fn next_sequence(&self, date: &str) -> u32 {
        self.records.iter().filter(|r| r.date == date).count() as u32 + 1
    }

    /// Append a fully-formed record verbatim.
    ///
    /// The caller is trusted to have generated `id`, `sequence` and `date`
    /// (see [`next_id`](Self::next_id), [`next_sequence`](Self::next_sequence)
    /// and [`crate::clock::format_date`]); no uniqueness check is performed.
    pub fn add(&mut self, record: ExamRecord) -> &[ExamRecord] {
        debug!("event=record_add id={}", record.id);
        self.records.push(record);
        self.persist();
        &self.records
    }

    /// Admit a draft: generate `id`/`sequence`/`date`, uppercase the text
    /// fields, append, and return the created record.
    ///
    /// Validation is the caller's concern ([`RecordDraft::validate`] for the
    /// constrained entry mode); the store accepts any draft.
    pub fn create(&mut self, draft: RecordDraft, clock: &dyn Clock) -> ExamRecord {
        let date = format_date(clock.today());
        let record = ExamRecord {
            id: self.next_id(),
            sequence: self.next_sequence(&date),
            date,
            name: draft.name.to_uppercase(),
            exam: draft.exam.to_uppercase(),
            patient_number: draft.patient_number,
            location: draft.location,
            technician: draft.technician.to_uppercase(),
            city: draft.city,
        };
        self.add(record.clone());
        record
    }

    /// Merge `patch` into the record with this id; unknown id leaves the list
    /// unchanged. Persists either way.
    pub fn update(&mut self, id: &str, patch: &RecordPatch) -> &[ExamRecord] {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            patch.apply(record);
            debug!("event=record_update id={}", id);
        }
        self.persist();
        &self.records
    }

    /// Remove the record with this id (at most one, ids are unique); unknown
    /// id leaves the list unchanged. Persists either way.
    pub fn remove(&mut self, id: &str) -> &[ExamRecord] {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        if self.records.len() < before {
            debug!("event=record_remove id={}", id);
        }
        self.persist();
        &self.records
    }

    /// Whether the last snapshot write was deferred.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retry the snapshot write; `true` once storage holds the current list.
    ///
    /// Failure is absorbed: the store stays dirty and the next mutation (or
    /// the next `flush`) retries.
    pub fn flush(&mut self) -> bool {
        if !self.dirty {
            return true;
        }
        let blob = match serde_json::to_string(&self.records) {
            Ok(blob) => blob,
            Err(err) => {
                warn!("event=snapshot_encode_failed error={}", err);
                return false;
            }
        };
        match self.storage.set(&self.config.storage_key, &blob) {
            Ok(()) => {
                self.dirty = false;
                true
            }
            Err(err) => {
                warn!(
                    "event=snapshot_write_deferred key={} error={}",
                    self.config.storage_key, err
                );
                false
            }
        }
    }

    fn persist(&mut self) {
        self.dirty = true;
        self.flush();
    }

    /// The persistence collaborator.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

fn initial_records(config: &StoreConfig) -> Vec<ExamRecord> {
    if config.seed_when_empty {
        seed::sample_records()
    } else {
        Vec::new()
    }
}
