use crate::core::{breed, life_stage};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct BreedReference {
    pub breed: &'static str,
    pub size_category: breed::SizeCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeReference {
    pub size_category: breed::SizeCategory,
    pub lifespan: &'static breed::LifespanRecord,
    pub adult_weight_kg: (f64, f64),
}

#[derive(Debug, Clone, Serialize)]
pub struct BreedTable {
    pub breeds: Vec<BreedReference>,
    pub sizes: Vec<SizeReference>,
    /// Category used for breeds missing from the table
    pub fallback: breed::SizeCategory,
}

pub fn breed_table() -> BreedTable {
    BreedTable {
        breeds: breed::BREED_SIZES
            .iter()
            .map(|&(breed, size_category)| BreedReference {
                breed,
                size_category,
            })
            .collect(),
        sizes: breed::SizeCategory::ALL
            .iter()
            .map(|size| SizeReference {
                size_category: *size,
                lifespan: size.lifespan(),
                adult_weight_kg: size.adult_weight_kg(),
            })
            .collect(),
        fallback: breed::SizeCategory::default(),
    }
}

pub fn life_stages() -> Vec<&'static life_stage::LifeStageInfo> {
    life_stage::LifeStage::ALL
        .iter()
        .map(|stage| stage.info())
        .collect()
}
