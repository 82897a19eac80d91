//! Examtrack Core Library
//!
//! Record store and aggregation pipeline for a small clinic imaging-exam
//! dashboard.
//!
//! # Architecture
//!
//! ```text
//! Form input → RecordDraft → validate (constrained entry mode)
//!                  │
//!          ┌───────▼────────┐
//!          │  RecordStore   │  canonical ordered list
//!          │ add / create   │  every mutation re-serializes the
//!          │ update / remove│  full list into the KeyValueStore
//!          └───────┬────────┘
//!                  │ snapshot()
//!        ┌─────────┼──────────────────────┐
//!        ▼         ▼                      ▼
//!    breakdowns  body parts / trend   search / stats / export
//!    (plan, city, exam type,
//!     technician, city × exam)
//! ```
//!
//! # Core Principle
//!
//! The store is the only writer of the canonical list; everything downstream
//! is a pure function over a snapshot, recomputed on every read.
//!
//! # Modules
//!
//! - [`models`]: domain types (ExamRecord, RecordDraft, vocabularies)
//! - [`storage`]: key-value persistence collaborators (memory, SQLite, offline)
//! - [`store`]: the canonical record store
//! - [`clock`]: calendar collaborator for creation dates and the trend window
//! - [`report`]: aggregation functions behind every dashboard view

pub mod clock;
pub mod models;
pub mod report;
pub mod storage;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use models::{City, DraftError, ExamRecord, HealthPlan, RecordDraft, RecordPatch};
pub use storage::{KeyValueStore, MemoryStore, OfflineStore, SqliteStore, StorageError};
pub use store::{RecordStore, SharedRecordStore, StoreConfig};
