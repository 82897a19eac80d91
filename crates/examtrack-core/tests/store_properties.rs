//! Property tests for the record store invariants.

use std::collections::HashSet;

use chrono::NaiveDate;
use examtrack_core::clock::FixedClock;
use examtrack_core::models::{RecordDraft, RecordPatch};
use examtrack_core::storage::MemoryStore;
use examtrack_core::store::{RecordStore, StoreConfig};
use proptest::prelude::*;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2025, 1, 28).unwrap())
}

fn no_seed() -> StoreConfig {
    StoreConfig {
        seed_when_empty: false,
        ..StoreConfig::default()
    }
}

fn draft_strategy() -> impl Strategy<Value = RecordDraft> {
    (
        "[A-Z]{2,12}",
        "[A-Z]{2,12}",
        1u32..20,
        prop_oneof![
            Just("PRONTO SOCORRO".to_string()),
            Just("SUS".to_string()),
            Just("INTERNADO".to_string()),
            Just("PARTICULAR".to_string()),
            Just("ALTA".to_string()),
        ],
        "[A-Z]{2,8}",
        prop_oneof![
            Just("SANTA VITÓRIA DO PALMAR".to_string()),
            Just("CHUÍ".to_string()),
        ],
    )
        .prop_map(
            |(name, exam, patient_number, location, technician, city)| RecordDraft {
                name,
                exam,
                patient_number,
                location,
                technician,
                city,
            },
        )
}

fn populated_store(drafts: Vec<RecordDraft>) -> RecordStore<MemoryStore> {
    let mut store = RecordStore::load(MemoryStore::new(), no_seed());
    for draft in drafts {
        store.create(draft, &clock());
    }
    store
}

proptest! {
    #[test]
    fn prop_created_ids_are_unique(drafts in prop::collection::vec(draft_strategy(), 0..25)) {
        let store = populated_store(drafts);
        let ids: HashSet<&str> = store.snapshot().iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn prop_sequences_are_unique_within_a_date(
        drafts in prop::collection::vec(draft_strategy(), 0..25)
    ) {
        let store = populated_store(drafts);
        // A single clock date: every sequence must be distinct.
        let sequences: HashSet<u32> = store.snapshot().iter().map(|r| r.sequence).collect();
        prop_assert_eq!(sequences.len(), store.len());
    }

    #[test]
    fn prop_add_then_remove_is_identity(
        drafts in prop::collection::vec(draft_strategy(), 0..15),
        extra in draft_strategy()
    ) {
        let mut store = populated_store(drafts);
        let before = store.snapshot().to_vec();

        let created = store.create(extra, &clock());
        store.remove(&created.id);

        prop_assert_eq!(store.snapshot(), &before[..]);
    }

    #[test]
    fn prop_update_touches_only_the_named_fields(
        drafts in prop::collection::vec(draft_strategy(), 1..15),
        index in 0usize..15,
        new_location in prop::option::of("[A-Z]{2,10}"),
        new_city in prop::option::of("[A-Z]{2,10}"),
    ) {
        let mut store = populated_store(drafts);
        let index = index % store.len();
        let before = store.snapshot().to_vec();
        let id = before[index].id.clone();

        let patch = RecordPatch {
            location: new_location.clone(),
            city: new_city.clone(),
            ..RecordPatch::default()
        };
        let after = store.update(&id, &patch).to_vec();

        for (i, (old, new)) in before.iter().zip(after.iter()).enumerate() {
            if i != index {
                prop_assert_eq!(old, new);
                continue;
            }
            // Patched fields take the new value, everything else is retained.
            prop_assert_eq!(&new.location, new_location.as_ref().unwrap_or(&old.location));
            prop_assert_eq!(&new.city, new_city.as_ref().unwrap_or(&old.city));
            prop_assert_eq!(&new.id, &old.id);
            prop_assert_eq!(&new.name, &old.name);
            prop_assert_eq!(&new.exam, &old.exam);
            prop_assert_eq!(new.sequence, old.sequence);
            prop_assert_eq!(&new.date, &old.date);
            prop_assert_eq!(new.patient_number, old.patient_number);
            prop_assert_eq!(&new.technician, &old.technician);
        }
    }

    #[test]
    fn prop_persisted_blob_round_trips(
        drafts in prop::collection::vec(draft_strategy(), 0..15)
    ) {
        use examtrack_core::models::ExamRecord;
        use examtrack_core::storage::KeyValueStore;

        let store = populated_store(drafts);
        match store.storage().get("patients").unwrap() {
            Some(blob) => {
                let stored: Vec<ExamRecord> = serde_json::from_str(&blob).unwrap();
                prop_assert_eq!(&stored[..], store.snapshot());
            }
            // No mutation ever ran, so nothing was written.
            None => prop_assert!(store.is_empty()),
        }
    }
}
