//! Fixed label vocabulary.
//!
//! Every label the rule engine can emit is a variant of one of these enums.
//! The serialized form is the variant name (e.g. `"AmyloidPositive"`), which
//! is also the class name the knowledge store resolves it to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|label| label.as_str() == s)
                    .ok_or_else(|| CoreError::UnknownLabel {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

label_enum! {
    /// Disease severity staged from the MMSE score.
    Severity, "severity" {
        Mild,
        Moderate,
        Severe,
    }
}

label_enum! {
    /// ATN biomarker status labels.
    ///
    /// `TauNegative` and `NeurodegenerationNegative` are part of the
    /// vocabulary but the current rule set never emits them.
    BiomarkerStatus, "biomarker status" {
        AmyloidPositive,
        AmyloidNegative,
        TauPositive,
        TauNegative,
        NeurodegenerationPositive,
        NeurodegenerationNegative,
    }
}

label_enum! {
    /// Diagnostic categories. Additive: a patient may carry several.
    Diagnosis, "diagnosis" {
        AlzheimersContinuum,
        MCI,
        ADDementia,
        NonADDementia,
        AsymptomaticAD,
        SubjectiveCognitiveDecline,
    }
}

label_enum! {
    /// Care activities recommended for a severity stage.
    Activity, "activity" {
        AuditoryStimulation,
        OlfactoryStimulation,
        TactileStimulation,
        VisualStimulation,
        ArtTherapy,
        MusicTherapy,
        FoldingLaundry,
        CognitiveTraining,
        PhysicalExercise,
        SocialActivity,
    }
}

label_enum! {
    /// Clinical follow-up actions for the care team.
    ClinicalAction, "clinical action" {
        NeurologistReferral,
        PharmacologicalTreatmentDiscussion,
        CaregiverSupport,
        AdvancedCarePlanning,
        HomeSafetyAssessment,
        PalliativeCareConsultation,
        CognitiveRehabilitation,
        BehavioralManagement,
    }
}

label_enum! {
    /// Reassessment interval.
    FollowUp, "follow-up" {
        ThreeMonths,
        SixMonths,
        TwelveMonths,
        Annual,
    }
}

label_enum! {
    /// Confidence in the biomarker picture, from how many ATN groups are positive.
    Confidence, "confidence" {
        Low,
        Medium,
        High,
    }
}

label_enum! {
    /// Reading of the ATN profile as a whole.
    BiomarkerInterpretation, "biomarker interpretation" {
        TypicalAlzheimers,
        AlzheimersPathologicChange,
        SuspectedNonAdPathology,
        Atypical,
    }
}

impl BiomarkerInterpretation {
    pub fn description(&self) -> &'static str {
        match self {
            BiomarkerInterpretation::TypicalAlzheimers => {
                "Typical Alzheimer's Disease biomarker profile"
            }
            BiomarkerInterpretation::AlzheimersPathologicChange => "Alzheimer's pathologic change",
            BiomarkerInterpretation::SuspectedNonAdPathology => "Suspected non-AD pathology",
            BiomarkerInterpretation::Atypical => {
                "Atypical biomarker profile - further investigation needed"
            }
        }
    }
}

label_enum! {
    /// Investigations to order before the next visit.
    RequiredTest, "required test" {
        AnnualCognitiveAssessment,
        AmyloidWorkup,
        TauWorkup,
        BasicMetabolicPanel,
        ThyroidFunction,
        VitaminB12Folate,
    }
}

/// Identifier of a diagnostic rule, reported in the rule trace.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RuleId {
    AmyloidContinuum,
    AdDementia,
    MciDueToAd,
    NonAdDementia,
    AsymptomaticAd,
    SubjectiveDecline,
}

impl RuleId {
    pub const ALL: &'static [RuleId] = &[
        RuleId::AmyloidContinuum,
        RuleId::AdDementia,
        RuleId::MciDueToAd,
        RuleId::NonAdDementia,
        RuleId::AsymptomaticAd,
        RuleId::SubjectiveDecline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::AmyloidContinuum => "amyloid_continuum",
            RuleId::AdDementia => "ad_dementia",
            RuleId::MciDueToAd => "mci_due_to_ad",
            RuleId::NonAdDementia => "non_ad_dementia",
            RuleId::AsymptomaticAd => "asymptomatic_ad",
            RuleId::SubjectiveDecline => "subjective_decline",
        }
    }

    /// The category this rule adds when it fires.
    pub fn concludes(&self) -> Diagnosis {
        match self {
            RuleId::AmyloidContinuum => Diagnosis::AlzheimersContinuum,
            RuleId::AdDementia => Diagnosis::ADDementia,
            RuleId::MciDueToAd => Diagnosis::MCI,
            RuleId::NonAdDementia => Diagnosis::NonADDementia,
            RuleId::AsymptomaticAd => Diagnosis::AsymptomaticAD,
            RuleId::SubjectiveDecline => Diagnosis::SubjectiveCognitiveDecline,
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
