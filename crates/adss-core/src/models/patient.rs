use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One patient encounter, as handed to the rule engine.
///
/// Built once per request and never mutated during evaluation. Every
/// reading is optional; an absent reading makes the rules that need it
/// inapplicable rather than false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientFacts {
    pub age: Option<i32>,
    /// Mini-Mental State Examination, 0–30.
    pub mmse_score: Option<i32>,
    pub moca_score: Option<i32>,
    /// Functional Activities Questionnaire, 0–30.
    pub faq_score: Option<i32>,
    pub ad8_score: Option<i32>,

    /// Assay method identifiers, e.g. "Elecsys" or "Innotest".
    pub imaging_methods: BTreeSet<String>,

    /// Aβ42/40 ratio (Elecsys).
    pub amyloid_ratio_42_40: Option<f64>,
    /// Aβ42 in pg/mL (Innotest).
    pub amyloid_42: Option<f64>,
    /// p-Tau/Aβ42 ratio (Elecsys).
    pub ptau_over_ab42: Option<f64>,
    /// p-Tau181 in pg/mL (Innotest).
    pub ptau_181: Option<f64>,
    /// Total tau in pg/mL (Innotest).
    pub t_tau: Option<f64>,
    /// Adjusted hippocampal volume in cm³.
    pub hippocampal_volume: Option<f64>,

    /// `Some(true)` independent, `Some(false)` not independent, `None` unknown.
    pub is_independent: Option<bool>,
    pub behavior_change: bool,
    pub has_other_diseases: bool,
}

impl PatientFacts {
    pub fn uses_method(&self, method: &str) -> bool {
        self.imaging_methods.contains(method)
    }
}
