//! Stat-card counters for the dashboard header.

use serde::Serialize;

use crate::models::{City, ExamRecord};

/// Headline counters shown above the charts.
///
/// The plan counters match on substring containment (seed data carries
/// misspellings like `PROTO SOCORRO`, which deliberately do not count); the
/// city counters match exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: u32,
    /// `location` mentions PRONTO SOCORRO
    pub emergency: u32,
    /// `location` mentions SUS
    pub sus: u32,
    /// `location` mentions INTERNADO
    pub inpatient: u32,
    /// Records from Santa Vitória do Palmar
    pub santa_vitoria: u32,
    /// Records from Chuí
    pub chui: u32,
}

pub fn dashboard_stats(records: &[ExamRecord]) -> DashboardStats {
    let mut stats = DashboardStats {
        total: records.len() as u32,
        ..DashboardStats::default()
    };
    for record in records {
        if record.location.contains("PRONTO SOCORRO") {
            stats.emergency += 1;
        }
        if record.location.contains("SUS") {
            stats.sus += 1;
        }
        if record.location.contains("INTERNADO") {
            stats.inpatient += 1;
        }
        if record.city == City::SantaVitoriaDoPalmar.label() {
            stats.santa_vitoria += 1;
        }
        if record.city == City::Chui.label() {
            stats.chui += 1;
        }
    }
    stats
}
