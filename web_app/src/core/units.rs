//! Weight units and age helpers.
//!
//! Weights are stored in grams; every other unit is a display conversion.

use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

const GRAMS_PER_POUND: f64 = 453.592_37;
const GRAMS_PER_OUNCE: f64 = 28.349_523_125;
const DAYS_PER_MONTH: f64 = 30.436_875;

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    #[display("g")]
    Grams,
    #[display("kg")]
    Kilograms,
    #[display("lb")]
    Pounds,
    #[display("oz")]
    Ounces,
}

impl WeightUnit {
    fn grams_per_unit(&self) -> f64 {
        match self {
            WeightUnit::Grams => 1.0,
            WeightUnit::Kilograms => 1000.0,
            WeightUnit::Pounds => GRAMS_PER_POUND,
            WeightUnit::Ounces => GRAMS_PER_OUNCE,
        }
    }

    pub fn from_grams(&self, grams: f64) -> f64 {
        grams / self.grams_per_unit()
    }

    pub fn to_grams(&self, value: f64) -> f64 {
        value * self.grams_per_unit()
    }
}

/// Whole days between birth and `today`, zero for future birth dates
pub fn age_days(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    (today - birth_date).num_days().max(0)
}

pub fn age_weeks(birth_date: NaiveDate, today: NaiveDate) -> f64 {
    age_days(birth_date, today) as f64 / 7.0
}

pub fn age_months(birth_date: NaiveDate, today: NaiveDate) -> f64 {
    age_days(birth_date, today) as f64 / DAYS_PER_MONTH
}

/// Human readable age, e.g. "1 year 2 months" or "9 weeks"
pub fn fmt_age(birth_date: NaiveDate, today: NaiveDate) -> String {
    let days = age_days(birth_date, today);
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("{n} {unit}")
        } else {
            format!("{n} {unit}s")
        }
    };

    if days < 7 {
        return plural(days, "day");
    }
    if days < 16 * 7 {
        return plural(days / 7, "week");
    }

    let months = (days as f64 / DAYS_PER_MONTH).floor() as i64;
    let (years, months) = (months / 12, months % 12);
    match (years, months) {
        (0, m) => plural(m, "month"),
        (y, 0) => plural(y, "year"),
        (y, m) => format!("{} {}", plural(y, "year"), plural(m, "month")),
    }
}
