//! Growth curves per size category.
//!
//! Each curve is an ordered list of control points. Ages between two points
//! are linearly interpolated; ages at or past the last point keep the last
//! point's values.

use super::breed::{self, SizeCategory};
use serde::Serialize;

/// A growth curve control point, weights in grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlPoint {
    pub week: u32,
    pub min_grams: u32,
    pub ideal_grams: u32,
    pub max_grams: u32,
}

const fn cp(week: u32, min_grams: u32, ideal_grams: u32, max_grams: u32) -> ControlPoint {
    ControlPoint {
        week,
        min_grams,
        ideal_grams,
        max_grams,
    }
}

const TOY_CURVE: &[ControlPoint] = &[
    cp(0, 70, 100, 150),
    cp(4, 200, 280, 380),
    cp(8, 400, 500, 650),
    cp(12, 600, 800, 1000),
    cp(16, 800, 1100, 1400),
    cp(20, 1000, 1350, 1750),
    cp(26, 1200, 1600, 2100),
    cp(36, 1400, 2000, 3000),
    cp(52, 1500, 2500, 4000),
];

const SMALL_CURVE: &[ControlPoint] = &[
    cp(0, 100, 150, 220),
    cp(4, 350, 500, 700),
    cp(8, 800, 1100, 1500),
    cp(12, 1300, 1800, 2400),
    cp(16, 1900, 2600, 3400),
    cp(20, 2500, 3300, 4300),
    cp(26, 3200, 4200, 5500),
    cp(36, 3900, 5200, 6800),
    cp(52, 4500, 6000, 8000),
];

const MEDIUM_CURVE: &[ControlPoint] = &[
    cp(0, 200, 300, 400),
    cp(4, 800, 1100, 1500),
    cp(8, 1800, 2500, 3300),
    cp(12, 3000, 4100, 5300),
    cp(16, 4300, 5800, 7500),
    cp(20, 5600, 7500, 9600),
    cp(26, 7200, 9600, 12300),
    cp(36, 9000, 12000, 15500),
    cp(52, 10500, 14500, 19000),
    cp(65, 11000, 16000, 21000),
];

const LARGE_CURVE: &[ControlPoint] = &[
    cp(0, 350, 450, 600),
    cp(4, 1200, 1700, 2300),
    cp(8, 3000, 4200, 5500),
    cp(12, 5500, 7500, 9500),
    cp(16, 8000, 10500, 13500),
    cp(20, 10500, 13500, 17000),
    cp(26, 14000, 17500, 22000),
    cp(36, 18000, 22500, 28000),
    cp(52, 22000, 27500, 34000),
    cp(78, 25000, 31000, 40000),
];

const GIANT_CURVE: &[ControlPoint] = &[
    cp(0, 500, 650, 800),
    cp(4, 2000, 2700, 3500),
    cp(8, 5000, 6500, 8500),
    cp(12, 9000, 11500, 14500),
    cp(16, 13000, 16500, 20500),
    cp(20, 17000, 21500, 26500),
    cp(26, 22000, 28000, 34000),
    cp(36, 29000, 36000, 44000),
    cp(52, 36000, 45000, 55000),
    cp(78, 42000, 53000, 65000),
    cp(104, 45000, 58000, 72000),
];

pub fn curve(size: SizeCategory) -> &'static [ControlPoint] {
    match size {
        SizeCategory::Toy => TOY_CURVE,
        SizeCategory::Small => SMALL_CURVE,
        SizeCategory::Medium => MEDIUM_CURVE,
        SizeCategory::Large => LARGE_CURVE,
        SizeCategory::Giant => GIANT_CURVE,
    }
}

/// Target weight band in whole grams for a given age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetWeight {
    pub min: f64,
    pub ideal: f64,
    pub max: f64,
}

impl From<&ControlPoint> for TargetWeight {
    fn from(val: &ControlPoint) -> Self {
        TargetWeight {
            min: f64::from(val.min_grams),
            ideal: f64::from(val.ideal_grams),
            max: f64::from(val.max_grams),
        }
    }
}

fn lerp(lower: u32, upper: u32, t: f64) -> f64 {
    let lower = f64::from(lower);
    let upper = f64::from(upper);
    (lower + t * (upper - lower)).round()
}

/// Target weight for a size category's curve at `age_weeks`.
///
/// Returns `None` for negative ages. A NaN age yields a NaN band.
pub fn target_weight_for_size(size: SizeCategory, age_weeks: f64) -> Option<TargetWeight> {
    if age_weeks.is_nan() {
        return Some(TargetWeight {
            min: f64::NAN,
            ideal: f64::NAN,
            max: f64::NAN,
        });
    }
    if age_weeks < 0.0 {
        return None;
    }

    let points = curve(size);
    let last = points.last()?;
    if age_weeks >= f64::from(last.week) {
        return Some(last.into());
    }

    points.windows(2).find_map(|pair| {
        let (lower, upper) = (&pair[0], &pair[1]);
        let (lower_week, upper_week) = (f64::from(lower.week), f64::from(upper.week));

        if age_weeks < lower_week || age_weeks >= upper_week {
            return None;
        }

        let t = (age_weeks - lower_week) / (upper_week - lower_week);
        Some(TargetWeight {
            min: lerp(lower.min_grams, upper.min_grams, t),
            ideal: lerp(lower.ideal_grams, upper.ideal_grams, t),
            max: lerp(lower.max_grams, upper.max_grams, t),
        })
    })
}

/// Target weight for a free-text breed at `age_weeks`.
pub fn target_weight(breed: &str, age_weeks: f64) -> Option<TargetWeight> {
    target_weight_for_size(breed::size_category(breed), age_weeks)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthStatus {
    Below,
    Within,
    Above,
}

impl TargetWeight {
    pub fn classify(&self, weight_grams: f64) -> GrowthStatus {
        if weight_grams < self.min {
            GrowthStatus::Below
        } else if weight_grams > self.max {
            GrowthStatus::Above
        } else {
            GrowthStatus::Within
        }
    }
}
