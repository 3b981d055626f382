//! Advisory checks on logged vitals. Informational only; nothing here blocks
//! a vitals entry from being stored.

use derive_more::Display;
use serde::{Deserialize, Serialize};

pub const FECAL_SCORE_RANGE: std::ops::RangeInclusive<u8> = 1..=7;
const IDEAL_FECAL_SCORES: std::ops::RangeInclusive<u8> = 2..=3;
const NORMAL_CRT_SECONDS: f64 = 2.0;

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GumColor {
    #[default]
    #[display("pink")]
    Pink,
    #[display("pale")]
    Pale,
    #[display("white")]
    White,
    #[display("blue")]
    Blue,
    #[display("red")]
    Red,
    #[display("yellow")]
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Watch,
    Urgent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalsConcern {
    pub field: &'static str,
    pub severity: Severity,
    pub message: &'static str,
}

pub fn is_valid_fecal_score(score: u8) -> bool {
    FECAL_SCORE_RANGE.contains(&score)
}

fn fecal_concern(score: u8) -> Option<VitalsConcern> {
    if IDEAL_FECAL_SCORES.contains(&score) {
        return None;
    }

    let (severity, message) = match score {
        1 => (Severity::Watch, "very hard, dry stool; check hydration and fiber"),
        4 | 5 => (Severity::Watch, "soft stool; watch for diet changes or stress"),
        6 | 7 => (Severity::Urgent, "watery stool; contact your vet if it persists past a day"),
        _ => return None,
    };

    Some(VitalsConcern {
        field: "fecalScore",
        severity,
        message,
    })
}

fn gum_concern(color: GumColor) -> Option<VitalsConcern> {
    let (severity, message) = match color {
        GumColor::Pink => return None,
        GumColor::Pale => (Severity::Watch, "pale gums can indicate anemia or poor circulation"),
        GumColor::White => (Severity::Urgent, "white gums can indicate shock or blood loss"),
        GumColor::Blue => (Severity::Urgent, "blue gums indicate low oxygen; seek care now"),
        GumColor::Red => (Severity::Watch, "bright red gums can indicate heat stress or infection"),
        GumColor::Yellow => (Severity::Urgent, "yellow gums can indicate liver problems"),
    };

    Some(VitalsConcern {
        field: "gumColor",
        severity,
        message,
    })
}

fn crt_concern(seconds: f64) -> Option<VitalsConcern> {
    (seconds > NORMAL_CRT_SECONDS).then_some(VitalsConcern {
        field: "crtSeconds",
        severity: Severity::Urgent,
        message: "capillary refill slower than 2 seconds can indicate dehydration or shock",
    })
}

pub fn assess(
    fecal_score: Option<u8>,
    gum_color: Option<GumColor>,
    crt_seconds: Option<f64>,
) -> Vec<VitalsConcern> {
    [
        fecal_score.and_then(fecal_concern),
        gum_color.and_then(gum_concern),
        crt_seconds.and_then(crt_concern),
    ]
    .into_iter()
    .flatten()
    .collect()
}
