//! Entry-mode drafts for new records.

use thiserror::Error;

use super::{City, ExamRecord, HealthPlan};

/// Draft validation errors, matching the registration form's rules.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DraftError {
    #[error("patient name must have at least 2 characters")]
    NameTooShort,

    #[error("exam description must have at least 2 characters")]
    ExamTooShort,

    #[error("patient number must be at least 1")]
    PatientNumberOutOfRange,

    #[error("unknown health plan: {0}")]
    UnknownPlan(String),

    #[error("technician name must have at least 2 characters")]
    TechnicianTooShort,

    #[error("unknown city: {0}")]
    UnknownCity(String),
}

/// Caller-supplied fields for a new record.
///
/// The store fills in `id`, `sequence` and `date` at admission and uppercases
/// the text fields. `validate` enforces the constrained entry mode; the loose
/// mode skips it and hands the draft straight to the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordDraft {
    pub name: String,
    pub exam: String,
    pub patient_number: u32,
    pub location: String,
    pub technician: String,
    pub city: String,
}

impl RecordDraft {
    /// Draft for a follow-up exam of an already-registered patient.
    ///
    /// Copies the patient's `name`, `city` and current `location`; the caller
    /// fills in the new exam and technician. `patient_number` starts at the
    /// dialog's default.
    pub fn follow_up(record: &ExamRecord) -> Self {
        Self {
            name: record.name.clone(),
            exam: String::new(),
            patient_number: 2,
            location: record.location.clone(),
            technician: String::new(),
            city: record.city.clone(),
        }
    }

    /// Enforce the registration form's rules (the constrained entry mode).
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().chars().count() < 2 {
            return Err(DraftError::NameTooShort);
        }
        if self.exam.trim().chars().count() < 2 {
            return Err(DraftError::ExamTooShort);
        }
        if self.patient_number < 1 {
            return Err(DraftError::PatientNumberOutOfRange);
        }
        if HealthPlan::parse(&self.location).is_none() {
            return Err(DraftError::UnknownPlan(self.location.clone()));
        }
        if self.technician.trim().chars().count() < 2 {
            return Err(DraftError::TechnicianTooShort);
        }
        if City::parse(&self.city).is_none() {
            return Err(DraftError::UnknownCity(self.city.clone()));
        }
        Ok(())
    }
}
