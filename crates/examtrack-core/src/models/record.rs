//! Exam record model.

use serde::{Deserialize, Serialize};

/// One patient-exam entry.
///
/// Not a patient entity: the same person appears once per exam performed.
/// `location` and `city` stay stringly-typed because one entry mode accepts
/// free text while another constrains them to the fixed vocabularies (see
/// [`super::HealthPlan`] and [`super::City`]); stored snapshots may carry
/// either.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamRecord {
    /// Unique numeric id in string form, assigned at creation (max id + 1)
    pub id: String,
    /// Order-of-arrival rank within this record's creation date
    pub sequence: u32,
    /// Creation date, `DD/MM/YYYY`
    pub date: String,
    /// Patient name, uppercased
    pub name: String,
    /// Free-text exam description, uppercased; may name several body parts
    pub exam: String,
    /// Clinic-local ordering number for the day (distinct from `sequence`)
    pub patient_number: u32,
    /// Health-plan/admission category
    pub location: String,
    /// Technician who performed the exam, uppercased
    pub technician: String,
    /// Patient's city
    pub city: String,
}

/// Partial update over an [`ExamRecord`].
///
/// `Some` fields overwrite the record, `None` fields are retained. The id is
/// not patchable; it is the record's identity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordPatch {
    pub sequence: Option<u32>,
    pub date: Option<String>,
    pub name: Option<String>,
    pub exam: Option<String>,
    pub patient_number: Option<u32>,
    pub location: Option<String>,
    pub technician: Option<String>,
    pub city: Option<String>,
}

impl RecordPatch {
    /// Empty patch; combine with the `with_*` builders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the health-plan category.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Overwrite the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Merge this patch into `record`.
    pub fn apply(&self, record: &mut ExamRecord) {
        if let Some(sequence) = self.sequence {
            record.sequence = sequence;
        }
        if let Some(date) = &self.date {
            record.date = date.clone();
        }
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(exam) = &self.exam {
            record.exam = exam.clone();
        }
        if let Some(patient_number) = self.patient_number {
            record.patient_number = patient_number;
        }
        if let Some(location) = &self.location {
            record.location = location.clone();
        }
        if let Some(technician) = &self.technician {
            record.technician = technician.clone();
        }
        if let Some(city) = &self.city {
            record.city = city.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> ExamRecord {
        ExamRecord {
            id: "1".into(),
            sequence: 7,
            date: "27/01/2025".into(),
            name: "SANTA TERESA BRAGA PEREIRA DE AVILA".into(),
            exam: "TORAX AP, ARCO COSTAL DIREITO".into(),
            patient_number: 3,
            location: "PRONTO SOCORRO".into(),
            technician: "ZETI".into(),
            city: "SANTA VITÓRIA DO PALMAR".into(),
        }
    }

    #[test]
    fn test_wire_format_field_names() {
        let json = serde_json::to_string(&make_record()).unwrap();
        assert!(json.contains("\"patientNumber\":3"));
        assert!(json.contains("\"sequence\":7"));
        assert!(!json.contains("patient_number"));
    }

    #[test]
    fn test_round_trip() {
        let record = make_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: ExamRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_decode_tolerates_missing_and_unknown_fields() {
        // No city, legacy extra field: both must decode.
        let json = r#"{"id":"9","sequence":1,"date":"01/02/2025","name":"X",
                       "exam":"TORAX","patientNumber":2,"location":"SUS",
                       "technician":"T","legacyField":true}"#;
        let record: ExamRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.city, "");
        assert_eq!(record.patient_number, 2);
    }

    #[test]
    fn test_patch_overrides_only_named_fields() {
        let mut record = make_record();
        let patch = RecordPatch::new()
            .with_location("ALTA")
            .with_city("CHUÍ");
        patch.apply(&mut record);

        assert_eq!(record.location, "ALTA");
        assert_eq!(record.city, "CHUÍ");
        // Everything else untouched.
        assert_eq!(record.name, "SANTA TERESA BRAGA PEREIRA DE AVILA");
        assert_eq!(record.sequence, 7);
        assert_eq!(record.patient_number, 3);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let mut record = make_record();
        RecordPatch::new().apply(&mut record);
        assert_eq!(record, make_record());
    }
}
