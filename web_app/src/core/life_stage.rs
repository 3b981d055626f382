//! Life stage classification.
//!
//! Stages follow the AAHA canine life stage guidelines: the puppy stage ends
//! at the size category's maturity age, the remaining stages are cut at fixed
//! fractions of the category's average lifespan.

use super::breed::{self, LifespanRecord};
use derive_more::Display;
use serde::{Deserialize, Serialize};

const YOUNG_ADULT_UNTIL: f64 = 0.40;
const MATURE_ADULT_UNTIL: f64 = 0.75;
const SENIOR_UNTIL: f64 = 0.90;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeStage {
    #[display("puppy")]
    Puppy,
    #[display("young_adult")]
    YoungAdult,
    #[display("mature_adult")]
    MatureAdult,
    #[display("senior")]
    Senior,
    #[display("geriatric")]
    Geriatric,
}

impl LifeStage {
    pub const ALL: [LifeStage; 5] = [
        LifeStage::Puppy,
        LifeStage::YoungAdult,
        LifeStage::MatureAdult,
        LifeStage::Senior,
        LifeStage::Geriatric,
    ];

    pub fn is_senior_or_older(&self) -> bool {
        matches!(self, LifeStage::Senior | LifeStage::Geriatric)
    }

    pub fn info(&self) -> &'static LifeStageInfo {
        match self {
            LifeStage::Puppy => &PUPPY_INFO,
            LifeStage::YoungAdult => &YOUNG_ADULT_INFO,
            LifeStage::MatureAdult => &MATURE_ADULT_INFO,
            LifeStage::Senior => &SENIOR_INFO,
            LifeStage::Geriatric => &GERIATRIC_INFO,
        }
    }

    fn next(&self) -> Option<LifeStage> {
        match self {
            LifeStage::Puppy => Some(LifeStage::YoungAdult),
            LifeStage::YoungAdult => Some(LifeStage::MatureAdult),
            LifeStage::MatureAdult => Some(LifeStage::Senior),
            LifeStage::Senior => Some(LifeStage::Geriatric),
            LifeStage::Geriatric => None,
        }
    }
}

/// Display metadata for a life stage. Presentation data only.
#[derive(Debug, Serialize)]
pub struct LifeStageInfo {
    pub stage: LifeStage,
    pub display_name: &'static str,
    pub description: &'static str,
    pub vet_visit_frequency: &'static str,
    pub key_focus_areas: &'static [&'static str],
}

const PUPPY_INFO: LifeStageInfo = LifeStageInfo {
    stage: LifeStage::Puppy,
    display_name: "Puppy",
    description: "Rapid growth and development. Vaccination series, socialization and training set the foundation for adult health.",
    vet_visit_frequency: "every 3-4 weeks until the vaccine series is complete",
    key_focus_areas: &[
        "Complete the core vaccine series",
        "Regular deworming",
        "Growth-formula nutrition with frequent meals",
        "Socialization and basic training",
        "Spay/neuter timing discussion",
    ],
};

const YOUNG_ADULT_INFO: LifeStageInfo = LifeStageInfo {
    stage: LifeStage::YoungAdult,
    display_name: "Young Adult",
    description: "Fully grown and at peak energy. Habits formed now shape long-term health.",
    vet_visit_frequency: "annually",
    key_focus_areas: &[
        "Transition to adult food",
        "Maintain lean body condition",
        "Dental care routine",
        "Keep core boosters current",
        "Daily exercise and mental stimulation",
    ],
};

const MATURE_ADULT_INFO: LifeStageInfo = LifeStageInfo {
    stage: LifeStage::MatureAdult,
    display_name: "Mature Adult",
    description: "Stable adulthood. Early signs of age-related conditions may begin to show.",
    vet_visit_frequency: "annually",
    key_focus_areas: &[
        "Weight management",
        "Baseline bloodwork",
        "Dental cleanings",
        "Joint health and mobility",
        "Keep core boosters current",
    ],
};

const SENIOR_INFO: LifeStageInfo = LifeStageInfo {
    stage: LifeStage::Senior,
    display_name: "Senior",
    description: "Metabolism slows and chronic conditions become more common. Screening catches problems early.",
    vet_visit_frequency: "every 6 months",
    key_focus_areas: &[
        "Semi-annual wellness exams",
        "Bloodwork and urinalysis screening",
        "Senior diet and calorie adjustment",
        "Joint support and gentle exercise",
        "Discuss titer testing before revaccination",
    ],
};

const GERIATRIC_INFO: LifeStageInfo = LifeStageInfo {
    stage: LifeStage::Geriatric,
    display_name: "Geriatric",
    description: "Beyond the expected lifespan range for the breed size. Comfort and quality of life come first.",
    vet_visit_frequency: "every 3-6 months",
    key_focus_areas: &[
        "Quality of life monitoring",
        "Pain management",
        "Cognitive health",
        "Mobility aids and home adjustments",
        "Hydration and appetite tracking",
    ],
};

/// Age in months at which each stage after `Puppy` begins.
fn stage_thresholds(record: &LifespanRecord) -> [(LifeStage, f64); 4] {
    let avg_months = record.average_years * 12.0;
    [
        (LifeStage::YoungAdult, record.maturity_months),
        (LifeStage::MatureAdult, YOUNG_ADULT_UNTIL * avg_months),
        (LifeStage::Senior, MATURE_ADULT_UNTIL * avg_months),
        (LifeStage::Geriatric, SENIOR_UNTIL * avg_months),
    ]
}

pub fn classify(record: &LifespanRecord, age_months: f64) -> LifeStage {
    let mut stage = LifeStage::Puppy;
    for (next_stage, starts_at) in stage_thresholds(record) {
        if age_months < starts_at {
            break;
        }
        stage = next_stage;
    }
    stage
}

/// Life stage of a free-text breed at `age_months`, with its display bundle.
pub fn life_stage(breed: &str, age_months: f64) -> &'static LifeStageInfo {
    classify(breed::lifespan(breed), age_months).info()
}

/// Years left until each lifespan bound, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RemainingLifespan {
    pub min_years: f64,
    pub average_years: f64,
    pub max_years: f64,
}

pub fn remaining_lifespan(breed: &str, age_months: f64) -> RemainingLifespan {
    let record = breed::lifespan(breed);
    let age_years = age_months / 12.0;
    let left = |bound: f64| (bound - age_years).max(0.0);

    RemainingLifespan {
        min_years: left(record.min_years),
        average_years: left(record.average_years),
        max_years: left(record.max_years),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageTransition {
    pub next_stage: LifeStage,
    pub months_until: f64,
    pub at_age_months: f64,
}

/// The first stage threshold still ahead of `age_months`, `None` once geriatric.
pub fn next_transition(breed: &str, age_months: f64) -> Option<StageTransition> {
    let record = breed::lifespan(breed);
    let current = classify(record, age_months);
    let next_stage = current.next()?;

    stage_thresholds(record)
        .into_iter()
        .find(|(stage, _)| *stage == next_stage)
        .map(|(stage, at_age_months)| StageTransition {
            next_stage: stage,
            months_until: at_age_months - age_months,
            at_age_months,
        })
}
