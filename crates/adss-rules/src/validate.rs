use adss_core::models::patient::PatientFacts;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Sane domain for a numeric reading. Inclusive on both ends; `max: None`
/// leaves the range open above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl FieldRange {
    const fn closed(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    const fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value < self.min {
            return false;
        }
        self.max.is_none_or(|max| value <= max)
    }

    fn describe(&self) -> String {
        match self.max {
            Some(max) => format!("[{}, {}]", self.min, max),
            None => format!("[{}, ∞)", self.min),
        }
    }
}

pub const AGE: FieldRange = FieldRange::closed(0.0, 130.0);
pub const MMSE: FieldRange = FieldRange::closed(0.0, 30.0);
pub const MOCA: FieldRange = FieldRange::closed(0.0, 30.0);
pub const FAQ: FieldRange = FieldRange::closed(0.0, 30.0);
pub const AD8: FieldRange = FieldRange::closed(0.0, 8.0);
pub const RATIO: FieldRange = FieldRange::closed(0.0, 1.0);
pub const CONCENTRATION: FieldRange = FieldRange::at_least(0.0);
pub const HIPPOCAMPAL_VOLUME: FieldRange = FieldRange::closed(0.0, 20.0);

/// A reading outside its sane domain. Never clamped.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub expected_range: FieldRange,
    pub message: String,
}

/// Check every present reading against its range. Absent readings are fine.
pub fn validate(facts: &PatientFacts) -> Result<(), Vec<ValidationError>> {
    let int = |v: Option<i32>| v.map(f64::from);
    let checks: [(&str, Option<f64>, FieldRange); 11] = [
        ("age", int(facts.age), AGE),
        ("mmse_score", int(facts.mmse_score), MMSE),
        ("moca_score", int(facts.moca_score), MOCA),
        ("faq_score", int(facts.faq_score), FAQ),
        ("ad8_score", int(facts.ad8_score), AD8),
        ("ab42_40_score", facts.amyloid_ratio_42_40, RATIO),
        ("ab42_score", facts.amyloid_42, CONCENTRATION),
        ("ptau_ab42_score", facts.ptau_over_ab42, RATIO),
        ("ptau181_score", facts.ptau_181, CONCENTRATION),
        ("t_tau_score", facts.t_tau, CONCENTRATION),
        ("hippocampal_vol", facts.hippocampal_volume, HIPPOCAMPAL_VOLUME),
    ];

    let errors: Vec<ValidationError> = checks
        .into_iter()
        .filter_map(|(field, value, range)| {
            let value = value?;
            (!range.contains(value)).then(|| ValidationError {
                field: field.to_string(),
                value,
                expected_range: range,
                message: format!("{field} {value} is outside range {}", range.describe()),
            })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
