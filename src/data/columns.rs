// SPDX-License-Identifier: PMPL-1.0-or-later

//! Column names of the ward dataset.

pub const WARD: &str = "Ward";
pub const POPULATION: &str = "Population";
pub const DIABETES_CASES: &str = "Diabetes_Cases";
pub const HYPERTENSION_CASES: &str = "Hypertension_Cases";
pub const FLU_CASES: &str = "Flu_Cases";
pub const SANITATION_PCT: &str = "Access_to_Sanitation_Pct";
pub const AVG_INCOME_USD: &str = "Avg_Income_USD";
pub const NUM_CLINICS: &str = "Num_Clinics";
pub const AVG_AGE: &str = "Avg_Age";

pub const DIABETES_PER_1000: &str = "Diabetes_Prevalence_per_1000";
pub const HYPERTENSION_PER_1000: &str = "Hypertension_Prevalence_per_1000";
pub const FLU_PER_1000: &str = "Flu_Prevalence_per_1000";

/// Value constraint for a required column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Free text, unique per row.
    Label,
    /// Whole number ≥ 0.
    Count,
    /// Real number ≥ 0.
    NonNegative,
    /// Real number in 0..=100.
    Percent,
    /// Real number > 0.
    Positive,
}

/// Columns every input file must provide.
pub const REQUIRED: &[(&str, ColumnKind)] = &[
    (WARD, ColumnKind::Label),
    (POPULATION, ColumnKind::Count),
    (DIABETES_CASES, ColumnKind::Count),
    (HYPERTENSION_CASES, ColumnKind::Count),
    (FLU_CASES, ColumnKind::Count),
    (SANITATION_PCT, ColumnKind::Percent),
    (AVG_INCOME_USD, ColumnKind::NonNegative),
    (NUM_CLINICS, ColumnKind::Count),
    (AVG_AGE, ColumnKind::Positive),
];

/// `(derived column, case-count column)` pairs; each rate is per 1000
/// population.
pub const DERIVED: &[(&str, &str)] = &[
    (DIABETES_PER_1000, DIABETES_CASES),
    (HYPERTENSION_PER_1000, HYPERTENSION_CASES),
    (FLU_PER_1000, FLU_CASES),
];

pub fn kind_of(column: &str) -> Option<ColumnKind> {
    REQUIRED
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, kind)| *kind)
}
