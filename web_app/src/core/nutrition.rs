//! Feeding calculator.
//!
//! Energy density comes from the label's guaranteed analysis using the
//! modified Atwater factors; daily need is RER scaled by an age multiplier.
//! Inputs are not validated: NaN in, NaN out. Out-of-range inputs only add
//! advisory warnings.

use crate::models::food::GuaranteedAnalysis;
use serde::Serialize;

const PROTEIN_KCAL_PER_G: f64 = 3.5;
const FAT_KCAL_PER_G: f64 = 8.5;
const NFE_KCAL_PER_G: f64 = 3.5;

const RER_FACTOR: f64 = 70.0;
const RER_EXPONENT: f64 = 0.75;

const LOW_KCAL_PER_KG: f64 = 3000.0;
const HIGH_KCAL_PER_KG: f64 = 5000.0;
// AAFCO minimums for growth, on a dry matter basis
const GROWTH_MIN_PROTEIN: f64 = 22.5;
const GROWTH_MIN_FAT: f64 = 8.5;
const ADULT_FROM_WEEKS: f64 = 52.0;

/// As-fed percentage restated on a dry matter basis.
///
/// `None` when moisture leaves no dry matter to compare against.
pub fn dry_matter(as_fed: f64, moisture: f64) -> Option<f64> {
    let dry = 100.0 - moisture;
    if dry > 0.0 {
        Some(as_fed / dry * 100.0)
    } else {
        None
    }
}

/// Metabolizable energy of a food in kcal per kg.
///
/// NFE is what is left of 100% after the other components; totals above 100%
/// leave no NFE instead of a negative one.
pub fn kcal_per_kg(analysis: &GuaranteedAnalysis) -> f64 {
    let nfe = 100.0 - analysis.total();
    let nfe = if nfe < 0.0 { 0.0 } else { nfe };

    // percent is grams per 100 g, so x10 gives per kg
    (PROTEIN_KCAL_PER_G * analysis.protein + FAT_KCAL_PER_G * analysis.fat + NFE_KCAL_PER_G * nfe)
        * 10.0
}

/// Resting energy requirement in kcal/day
pub fn resting_energy(weight_kg: f64) -> f64 {
    RER_FACTOR * weight_kg.powf(RER_EXPONENT)
}

pub fn age_multiplier(age_weeks: f64) -> f64 {
    if age_weeks < 16.0 {
        3.0
    } else if age_weeks < ADULT_FROM_WEEKS {
        2.0
    } else {
        1.6
    }
}

pub fn meals_per_day(age_weeks: f64) -> u32 {
    if age_weeks < 12.0 {
        4
    } else if age_weeks < 26.0 {
        3
    } else {
        2
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionResult {
    pub kcal_per_kg: f64,
    pub resting_energy: f64,
    pub age_multiplier: f64,
    pub daily_energy: f64,
    pub daily_grams: f64,
    pub meals_per_day: u32,
    pub grams_per_meal: f64,
    pub warnings: Vec<String>,
}

fn warnings(analysis: &GuaranteedAnalysis, kcal_per_kg: f64, weight_kg: f64, age_weeks: f64) -> Vec<String> {
    let mut warnings = vec![];

    let total = analysis.total();
    if total > 100.0 {
        warnings.push(format!(
            "guaranteed analysis adds up to {total:.1}%, check the label values"
        ));
    }

    if [
        analysis.protein,
        analysis.fat,
        analysis.fiber,
        analysis.moisture,
        analysis.ash,
    ]
    .iter()
    .any(|v| *v < 0.0)
    {
        warnings.push("guaranteed analysis has negative percentages".into());
    }

    if kcal_per_kg < LOW_KCAL_PER_KG {
        warnings.push(format!(
            "low calorie density ({kcal_per_kg:.0} kcal/kg), portions will be large"
        ));
    } else if kcal_per_kg > HIGH_KCAL_PER_KG {
        warnings.push(format!(
            "very high calorie density ({kcal_per_kg:.0} kcal/kg), measure portions carefully"
        ));
    }

    if age_weeks < ADULT_FROM_WEEKS {
        match (
            dry_matter(analysis.protein, analysis.moisture),
            dry_matter(analysis.fat, analysis.moisture),
        ) {
            (Some(protein), Some(fat)) => {
                if protein < GROWTH_MIN_PROTEIN {
                    warnings.push(format!(
                        "protein below {GROWTH_MIN_PROTEIN}% dry matter recommended for growth ({protein:.1}%)"
                    ));
                }
                if fat < GROWTH_MIN_FAT {
                    warnings.push(format!(
                        "fat below {GROWTH_MIN_FAT}% dry matter recommended for growth ({fat:.1}%)"
                    ));
                }
            }
            _ => warnings.push("moisture leaves no dry matter, check the label values".into()),
        }
    }

    if weight_kg <= 0.0 {
        warnings.push("weight must be greater than zero".into());
    }

    warnings
}

pub fn calculate_nutrition(
    analysis: &GuaranteedAnalysis,
    weight_kg: f64,
    age_weeks: f64,
) -> NutritionResult {
    let kcal_per_kg = kcal_per_kg(analysis);
    let resting_energy = resting_energy(weight_kg);
    let age_multiplier = age_multiplier(age_weeks);
    let daily_energy = resting_energy * age_multiplier;
    let daily_grams = daily_energy / kcal_per_kg * 1000.0;
    let meals_per_day = meals_per_day(age_weeks);

    NutritionResult {
        warnings: warnings(analysis, kcal_per_kg, weight_kg, age_weeks),
        kcal_per_kg,
        resting_energy,
        age_multiplier,
        daily_energy,
        daily_grams,
        meals_per_day,
        grams_per_meal: daily_grams / f64::from(meals_per_day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn puppy_food() -> GuaranteedAnalysis {
        GuaranteedAnalysis {
            protein: 28.0,
            fat: 15.0,
            fiber: 4.0,
            moisture: 10.0,
            ash: 7.0,
        }
    }

    #[test]
    fn test_kcal_per_kg_modified_atwater() {
        // NFE = 36%: (3.5*28 + 8.5*15 + 3.5*36) * 10
        assert!((kcal_per_kg(&puppy_food()) - 3515.0).abs() < 1e-9);
    }

    #[test]
    fn test_eight_week_puppy() {
        let result = calculate_nutrition(&puppy_food(), 0.5, 8.0);

        assert!((result.resting_energy - 41.62).abs() < 0.01);
        assert_eq!(result.age_multiplier, 3.0);
        assert!((result.daily_energy - 124.87).abs() < 0.01);
        assert!((result.daily_grams - 35.52).abs() < 0.01);
        assert_eq!(result.meals_per_day, 4);
        assert!((result.grams_per_meal - result.daily_grams / 4.0).abs() < 1e-9);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_multiplier_and_meals_step_down() {
        assert_eq!(age_multiplier(15.9), 3.0);
        assert_eq!(age_multiplier(16.0), 2.0);
        assert_eq!(age_multiplier(52.0), 1.6);
        assert_eq!(meals_per_day(11.0), 4);
        assert_eq!(meals_per_day(12.0), 3);
        assert_eq!(meals_per_day(30.0), 2);
    }

    #[test]
    fn test_implausible_totals_warn_and_clamp_nfe() {
        let analysis = GuaranteedAnalysis {
            protein: 60.0,
            fat: 30.0,
            fiber: 10.0,
            moisture: 10.0,
            ash: 5.0,
        };
        let result = calculate_nutrition(&analysis, 10.0, 80.0);

        assert!((result.kcal_per_kg - (3.5 * 60.0 + 8.5 * 30.0) * 10.0).abs() < 1e-9);
        assert!(result.warnings.iter().any(|w| w.contains("adds up to 115.0%")));
    }

    #[test]
    fn test_low_density_and_growth_warnings() {
        let analysis = GuaranteedAnalysis {
            protein: 4.0,
            fat: 1.5,
            fiber: 1.0,
            moisture: 78.0,
            ash: 2.0,
        };
        let result = calculate_nutrition(&analysis, 2.0, 10.0);

        assert!(result.warnings.iter().any(|w| w.starts_with("low calorie density")));
        assert!(result.warnings.iter().any(|w| w.starts_with("protein below")));
        assert!(result.warnings.iter().any(|w| w.starts_with("fat below")));
    }

    #[test]
    fn test_wet_food_is_compared_on_dry_matter() {
        // 8% protein at 78% moisture is about 36% on a dry matter basis
        let analysis = GuaranteedAnalysis {
            protein: 8.0,
            fat: 5.0,
            fiber: 1.0,
            moisture: 78.0,
            ash: 2.0,
        };
        let result = calculate_nutrition(&analysis, 2.0, 10.0);

        assert!(!result.warnings.iter().any(|w| w.starts_with("protein below")));
        assert!(!result.warnings.iter().any(|w| w.starts_with("fat below")));
        assert!((dry_matter(8.0, 78.0).unwrap() - 36.36).abs() < 0.01);
    }

    #[test]
    fn test_dry_matter_needs_dry_matter() {
        assert_eq!(dry_matter(10.0, 100.0), None);
        assert_eq!(dry_matter(10.0, 120.0), None);
        assert_eq!(dry_matter(25.0, 0.0), Some(25.0));

        let analysis = GuaranteedAnalysis {
            protein: 0.0,
            fat: 0.0,
            fiber: 0.0,
            moisture: 100.0,
            ash: 0.0,
        };
        let result = calculate_nutrition(&analysis, 2.0, 10.0);
        assert!(result.warnings.iter().any(|w| w.starts_with("moisture leaves no dry matter")));
    }

    #[test]
    fn test_nan_propagates() {
        let result = calculate_nutrition(&puppy_food(), f64::NAN, 8.0);
        assert!(result.resting_energy.is_nan());
        assert!(result.daily_grams.is_nan());
        assert!(result.grams_per_meal.is_nan());
    }
}
