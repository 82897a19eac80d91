//! Per-field breakdowns for the dashboard charts.

use serde::Serialize;

use super::{sort_descending, tally, CountEntry};
use crate::models::ExamRecord;

/// Number of exam types kept for the generic breakdown chart.
pub const EXAM_TYPE_LIMIT: usize = 10;

/// Number of exam types kept when selecting chart series.
pub const EXAM_SERIES_LIMIT: usize = 5;

/// Count of records per health-plan category, first-seen order.
pub fn plan_breakdown(records: &[ExamRecord]) -> Vec<CountEntry> {
    tally(records.iter().map(|r| r.location.as_str()))
}

/// Count of records per city, first-seen order.
pub fn city_breakdown(records: &[ExamRecord]) -> Vec<CountEntry> {
    tally(records.iter().map(|r| r.city.as_str()))
}

/// Count of exams per technician, busiest first, no truncation.
pub fn technician_breakdown(records: &[ExamRecord]) -> Vec<CountEntry> {
    let mut entries = tally(records.iter().map(|r| r.technician.as_str()));
    sort_descending(&mut entries);
    entries
}

/// The coarse classification token of an exam description: the first
/// space-delimited word of the text before the first comma.
///
/// `"TORAX AP, ARCO COSTAL DIREITO"` → `"TORAX"`; an empty description
/// yields an empty key.
pub fn exam_type_key(exam: &str) -> &str {
    exam.split(',')
        .next()
        .unwrap_or("")
        .split(' ')
        .next()
        .unwrap_or("")
}

/// Counts per exam-type key, most common first, truncated to `limit`.
/// Ties keep first-encountered order.
pub fn exam_type_breakdown(records: &[ExamRecord], limit: usize) -> Vec<CountEntry> {
    let mut entries = tally(records.iter().map(|r| exam_type_key(&r.exam)));
    sort_descending(&mut entries);
    entries.truncate(limit);
    entries
}

/// City × exam-type cross-tabulation: one row per city, one column per exam
/// type observed across the whole snapshot, zero-filled.
///
/// Charts stack only the most common types; pick those with
/// [`exam_type_breakdown`] and [`EXAM_SERIES_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityExamBreakdown {
    /// Column labels, first-seen order
    pub exam_types: Vec<String>,
    /// One row per city, counts aligned with `exam_types`
    pub rows: Vec<CityExamRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityExamRow {
    pub city: String,
    pub counts: Vec<u32>,
}

pub fn city_exam_breakdown(records: &[ExamRecord]) -> CityExamBreakdown {
    let mut exam_types: Vec<String> = Vec::new();
    for record in records {
        let key = exam_type_key(&record.exam);
        if !exam_types.iter().any(|t| t == key) {
            exam_types.push(key.to_string());
        }
    }

    let mut rows: Vec<CityExamRow> = Vec::new();
    for record in records {
        if !rows.iter().any(|row| row.city == record.city) {
            rows.push(CityExamRow {
                city: record.city.clone(),
                counts: vec![0; exam_types.len()],
            });
        }
    }

    for record in records {
        let key = exam_type_key(&record.exam);
        let column = exam_types.iter().position(|t| t == key);
        let row = rows.iter_mut().find(|row| row.city == record.city);
        if let (Some(column), Some(row)) = (column, row) {
            row.counts[column] += 1;
        }
    }

    CityExamBreakdown { exam_types, rows }
}
