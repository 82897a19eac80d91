//! Fixed vocabularies used by selection controls.
//!
//! Records themselves store plain text (one entry mode is freeform), so these
//! enums exist for the constrained entry mode and for display labels, with
//! `parse` returning `None` for anything outside the known set.

/// Health-plan/admission category offered by the update dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthPlan {
    ProntoSocorro,
    Sus,
    Internado,
    Particular,
    Alta,
}

impl HealthPlan {
    pub const ALL: [HealthPlan; 5] = [
        HealthPlan::ProntoSocorro,
        HealthPlan::Sus,
        HealthPlan::Internado,
        HealthPlan::Particular,
        HealthPlan::Alta,
    ];

    /// The label stored on records.
    pub fn label(self) -> &'static str {
        match self {
            HealthPlan::ProntoSocorro => "PRONTO SOCORRO",
            HealthPlan::Sus => "SUS",
            HealthPlan::Internado => "INTERNADO",
            HealthPlan::Particular => "PARTICULAR",
            HealthPlan::Alta => "ALTA",
        }
    }

    /// Exact-label lookup; `None` for out-of-vocabulary text.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|plan| plan.label() == label)
    }
}

/// City served by the clinic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    SantaVitoriaDoPalmar,
    Chui,
}

impl City {
    pub const ALL: [City; 2] = [City::SantaVitoriaDoPalmar, City::Chui];

    /// The label stored on records.
    pub fn label(self) -> &'static str {
        match self {
            City::SantaVitoriaDoPalmar => "SANTA VITÓRIA DO PALMAR",
            City::Chui => "CHUÍ",
        }
    }

    /// Exact-label lookup; `None` for out-of-vocabulary text.
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|city| city.label() == label)
    }
}
