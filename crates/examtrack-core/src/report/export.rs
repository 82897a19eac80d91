//! Snapshot export for hand-off to external tooling.

use crate::models::ExamRecord;

/// Column order of the CSV export, matching the dashboard table.
const CSV_HEADER: &str = "id,sequence,date,name,exam,patientNumber,location,technician,city";

/// Render a snapshot as CSV: header plus one line per record.
pub fn to_csv(records: &[ExamRecord]) -> String {
    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for record in records {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            escape_csv(&record.id),
            record.sequence,
            escape_csv(&record.date),
            escape_csv(&record.name),
            escape_csv(&record.exam),
            record.patient_number,
            escape_csv(&record.location),
            escape_csv(&record.technician),
            escape_csv(&record.city),
        ));
    }

    csv
}

/// Render a snapshot as pretty JSON (the persisted wire format, indented).
pub fn to_json(records: &[ExamRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
