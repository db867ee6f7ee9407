//! Care recommendations from severity and diagnosis.

use std::collections::BTreeSet;

use adss_core::models::labels::{
    Activity, ClinicalAction, Diagnosis, FollowUp, RequiredTest, Severity,
};
use adss_core::models::result::AtnProfile;

const AD_RELATED: [Diagnosis; 4] = [
    Diagnosis::AlzheimersContinuum,
    Diagnosis::MCI,
    Diagnosis::ADDementia,
    Diagnosis::AsymptomaticAD,
];

fn ad_related(diagnosis: &BTreeSet<Diagnosis>) -> bool {
    AD_RELATED.iter().any(|d| diagnosis.contains(d))
}

/// Exactly one activity bundle applies: Severe, then Moderate, then Mild or
/// an MCI diagnosis. Nothing else earns activities.
pub fn recommend(severity: Option<Severity>, diagnosis: &BTreeSet<Diagnosis>) -> BTreeSet<Activity> {
    let bundle: &[Activity] = match severity {
        Some(Severity::Severe) => &[
            Activity::AuditoryStimulation,
            Activity::OlfactoryStimulation,
            Activity::TactileStimulation,
            Activity::VisualStimulation,
        ],
        Some(Severity::Moderate) => &[
            Activity::ArtTherapy,
            Activity::MusicTherapy,
            Activity::FoldingLaundry,
        ],
        _ if severity == Some(Severity::Mild) || diagnosis.contains(&Diagnosis::MCI) => &[
            Activity::CognitiveTraining,
            Activity::PhysicalExercise,
            Activity::SocialActivity,
        ],
        _ => &[],
    };
    bundle.iter().copied().collect()
}

/// Clinical actions for the care team. A neurologist referral is always on
/// the list.
pub fn actions(
    severity: Option<Severity>,
    diagnosis: &BTreeSet<Diagnosis>,
) -> BTreeSet<ClinicalAction> {
    let mut actions = BTreeSet::from([ClinicalAction::NeurologistReferral]);

    if ad_related(diagnosis) {
        actions.insert(ClinicalAction::PharmacologicalTreatmentDiscussion);
        actions.insert(ClinicalAction::CaregiverSupport);
    }

    match severity {
        Some(Severity::Severe) => actions.extend([
            ClinicalAction::AdvancedCarePlanning,
            ClinicalAction::HomeSafetyAssessment,
            ClinicalAction::PalliativeCareConsultation,
        ]),
        Some(Severity::Moderate) => actions.extend([
            ClinicalAction::CognitiveRehabilitation,
            ClinicalAction::BehavioralManagement,
        ]),
        _ => {}
    }

    actions
}

pub fn follow_up(severity: Option<Severity>) -> FollowUp {
    match severity {
        Some(Severity::Severe) => FollowUp::ThreeMonths,
        Some(Severity::Moderate) => FollowUp::SixMonths,
        Some(Severity::Mild) => FollowUp::TwelveMonths,
        None => FollowUp::Annual,
    }
}

/// Baseline workup for every encounter. An Alzheimer's category without a
/// positive amyloid or tau group also gets the matching biomarker workup.
pub fn required_tests(diagnosis: &BTreeSet<Diagnosis>, profile: &AtnProfile) -> BTreeSet<RequiredTest> {
    let mut tests = BTreeSet::from([
        RequiredTest::AnnualCognitiveAssessment,
        RequiredTest::BasicMetabolicPanel,
        RequiredTest::ThyroidFunction,
        RequiredTest::VitaminB12Folate,
    ]);

    if ad_related(diagnosis) {
        if !profile.amyloid {
            tests.insert(RequiredTest::AmyloidWorkup);
        }
        if !profile.tau {
            tests.insert(RequiredTest::TauWorkup);
        }
    }

    tests
}
