//! Pre-aggregation filters: free-text search and tab selection.
//!
//! The table applies these before handing a subset to the breakdowns, so
//! both return owned lists that feed straight into the aggregation
//! functions.

use crate::models::ExamRecord;

/// Case-insensitive substring search across every text column of the table
/// (name, exam, location, technician, city). An empty term matches all.
pub fn search(records: &[ExamRecord], term: &str) -> Vec<ExamRecord> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&term)
                || r.exam.to_lowercase().contains(&term)
                || r.location.to_lowercase().contains(&term)
                || r.technician.to_lowercase().contains(&term)
                || r.city.to_lowercase().contains(&term)
        })
        .cloned()
        .collect()
}

/// Table tab selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabFilter {
    /// Every record
    All,
    /// Exact city match
    City(String),
    /// Exact health-plan match
    Plan(String),
}

impl TabFilter {
    pub fn matches(&self, record: &ExamRecord) -> bool {
        match self {
            TabFilter::All => true,
            TabFilter::City(city) => record.city == *city,
            TabFilter::Plan(plan) => record.location == *plan,
        }
    }
}

pub fn filter_by_tab(records: &[ExamRecord], tab: &TabFilter) -> Vec<ExamRecord> {
    records
        .iter()
        .filter(|r| tab.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ExamRecord> {
        vec![
            ExamRecord {
                name: "MARIA LAURA SANCHEZ CASTERAN".into(),
                exam: "TORAX PA/P".into(),
                location: "SUS".into(),
                technician: "ZETI".into(),
                city: "SANTA VITÓRIA DO PALMAR".into(),
                ..ExamRecord::default()
            },
            ExamRecord {
                name: "JUCIEL NIEVES PIZANE".into(),
                exam: "FACE".into(),
                location: "PRONTO SOCORRO".into(),
                technician: "RO".into(),
                city: "CHUÍ".into(),
                ..ExamRecord::default()
            },
        ]
    }

    #[test]
    fn test_empty_term_matches_all() {
        assert_eq!(search(&records(), "").len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_across_columns() {
        assert_eq!(search(&records(), "maria").len(), 1);
        assert_eq!(search(&records(), "face").len(), 1);
        assert_eq!(search(&records(), "socorro").len(), 1);
        assert_eq!(search(&records(), "zeti").len(), 1);
        assert_eq!(search(&records(), "chuí").len(), 1);
        assert_eq!(search(&records(), "nothing here").len(), 0);
    }

    #[test]
    fn test_tab_filters_match_exactly() {
        let records = records();
        assert_eq!(filter_by_tab(&records, &TabFilter::All).len(), 2);

        let chui = filter_by_tab(&records, &TabFilter::City("CHUÍ".into()));
        assert_eq!(chui.len(), 1);
        assert_eq!(chui[0].name, "JUCIEL NIEVES PIZANE");

        let sus = filter_by_tab(&records, &TabFilter::Plan("SUS".into()));
        assert_eq!(sus.len(), 1);

        // Substrings do not match tabs.
        assert!(filter_by_tab(&records, &TabFilter::Plan("SOCORRO".into())).is_empty());
    }
}
