//! Diagnostic thresholds. Every numeric cutoff the rules compare against is
//! defined here and nowhere else.

use serde::Serialize;

/// Elecsys Aβ42/40 ratio at or below this is amyloid positive.
pub const ELECSYS_AB42_40_MAX: f64 = 0.091;
/// Innotest Aβ42 (pg/mL) strictly below this is amyloid positive.
pub const INNOTEST_AB42_BELOW: f64 = 550.0;
/// Elecsys p-Tau/Aβ42 ratio strictly above this is tau positive.
pub const ELECSYS_PTAU_AB42_ABOVE: f64 = 0.02;
/// Innotest p-Tau181 (pg/mL) strictly above this is tau positive.
pub const INNOTEST_PTAU181_ABOVE: f64 = 60.0;
/// Innotest total tau (pg/mL) at or above this is neurodegeneration positive.
pub const INNOTEST_TTAU_MIN: f64 = 355.0;
/// Adjusted hippocampal volume (cm³) strictly below this is neurodegeneration positive.
pub const HIPPOCAMPAL_VOLUME_BELOW: f64 = 6.0;

pub const MMSE_SEVERE_MAX: i32 = 9;
pub const MMSE_MODERATE_MIN: i32 = 10;
pub const MMSE_MODERATE_MAX: i32 = 20;
pub const MMSE_MILD_MIN: i32 = 21;
pub const MMSE_MILD_MAX: i32 = 24;

/// MMSE window in which an independent continuum patient is MCI.
pub const MMSE_MCI_MIN: i32 = 21;
pub const MMSE_MCI_MAX: i32 = 26;
/// MMSE from which an independent continuum patient is asymptomatic.
pub const MMSE_ASYMPTOMATIC_MIN: i32 = 27;
/// MMSE from which a biomarker-negative patient with behaviour change is SCD.
pub const MMSE_SCD_MIN: i32 = 25;

/// FAQ score below which a patient counts as independent (fallback only).
pub const FAQ_INDEPENDENT_BELOW: i32 = 9;

/// One published threshold.
#[derive(Debug, Clone, Serialize)]
pub struct Cutoff {
    pub marker: &'static str,
    pub method: &'static str,
    pub reading: &'static str,
    pub condition: String,
    pub result: &'static str,
}

/// The threshold table, in rule evaluation order.
pub fn table() -> Vec<Cutoff> {
    vec![
        Cutoff {
            marker: "amyloid",
            method: "Elecsys",
            reading: "ab42_40_score",
            condition: format!("<= {ELECSYS_AB42_40_MAX}"),
            result: "AmyloidPositive",
        },
        Cutoff {
            marker: "amyloid",
            method: "Innotest",
            reading: "ab42_score",
            condition: format!("< {INNOTEST_AB42_BELOW}"),
            result: "AmyloidPositive",
        },
        Cutoff {
            marker: "tau",
            method: "Elecsys",
            reading: "ptau_ab42_score",
            condition: format!("> {ELECSYS_PTAU_AB42_ABOVE}"),
            result: "TauPositive",
        },
        Cutoff {
            marker: "tau",
            method: "Innotest",
            reading: "ptau181_score",
            condition: format!("> {INNOTEST_PTAU181_ABOVE}"),
            result: "TauPositive",
        },
        Cutoff {
            marker: "neurodegeneration",
            method: "Innotest",
            reading: "t_tau_score",
            condition: format!(">= {INNOTEST_TTAU_MIN}"),
            result: "NeurodegenerationPositive",
        },
        Cutoff {
            marker: "neurodegeneration",
            method: "any",
            reading: "hippocampal_vol",
            condition: format!("< {HIPPOCAMPAL_VOLUME_BELOW}"),
            result: "NeurodegenerationPositive",
        },
        Cutoff {
            marker: "severity",
            method: "MMSE",
            reading: "mmse_score",
            condition: format!("<= {MMSE_SEVERE_MAX}"),
            result: "Severe",
        },
        Cutoff {
            marker: "severity",
            method: "MMSE",
            reading: "mmse_score",
            condition: format!("{MMSE_MODERATE_MIN}-{MMSE_MODERATE_MAX}"),
            result: "Moderate",
        },
        Cutoff {
            marker: "severity",
            method: "MMSE",
            reading: "mmse_score",
            condition: format!("{MMSE_MILD_MIN}-{MMSE_MILD_MAX}"),
            result: "Mild",
        },
    ]
}
