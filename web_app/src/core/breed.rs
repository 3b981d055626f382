//! Breed reference tables.
//!
//! Breeds are free text on the profile, so lookups lowercase and trim the
//! input before an exact match. Anything not listed is treated as
//! [`SizeCategory::Small`].

use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    #[display("toy")]
    Toy,
    #[default]
    #[display("small")]
    Small,
    #[display("medium")]
    Medium,
    #[display("large")]
    Large,
    #[display("giant")]
    Giant,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 5] = [
        SizeCategory::Toy,
        SizeCategory::Small,
        SizeCategory::Medium,
        SizeCategory::Large,
        SizeCategory::Giant,
    ];

    pub fn lifespan(&self) -> &'static LifespanRecord {
        match self {
            SizeCategory::Toy => &TOY_LIFESPAN,
            SizeCategory::Small => &SMALL_LIFESPAN,
            SizeCategory::Medium => &MEDIUM_LIFESPAN,
            SizeCategory::Large => &LARGE_LIFESPAN,
            SizeCategory::Giant => &GIANT_LIFESPAN,
        }
    }

    /// Expected adult weight range in kilograms
    pub fn adult_weight_kg(&self) -> (f64, f64) {
        match self {
            SizeCategory::Toy => (1.0, 4.5),
            SizeCategory::Small => (4.5, 10.0),
            SizeCategory::Medium => (10.0, 25.0),
            SizeCategory::Large => (25.0, 45.0),
            SizeCategory::Giant => (45.0, 90.0),
        }
    }
}

/// Lifespan figures for a size category, in years except `maturity_months`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LifespanRecord {
    pub average_years: f64,
    pub min_years: f64,
    pub max_years: f64,
    pub maturity_months: f64,
}

const TOY_LIFESPAN: LifespanRecord = LifespanRecord {
    average_years: 14.0,
    min_years: 12.0,
    max_years: 16.0,
    maturity_months: 10.0,
};

const SMALL_LIFESPAN: LifespanRecord = LifespanRecord {
    average_years: 13.0,
    min_years: 11.0,
    max_years: 15.0,
    maturity_months: 12.0,
};

const MEDIUM_LIFESPAN: LifespanRecord = LifespanRecord {
    average_years: 12.0,
    min_years: 10.0,
    max_years: 14.0,
    maturity_months: 15.0,
};

const LARGE_LIFESPAN: LifespanRecord = LifespanRecord {
    average_years: 11.0,
    min_years: 9.0,
    max_years: 13.0,
    maturity_months: 18.0,
};

const GIANT_LIFESPAN: LifespanRecord = LifespanRecord {
    average_years: 9.0,
    min_years: 7.0,
    max_years: 10.0,
    maturity_months: 24.0,
};

pub const BREED_SIZES: &[(&str, SizeCategory)] = &[
    // toy
    ("chihuahua", SizeCategory::Toy),
    ("yorkshire terrier", SizeCategory::Toy),
    ("pomeranian", SizeCategory::Toy),
    ("maltese", SizeCategory::Toy),
    ("toy poodle", SizeCategory::Toy),
    ("papillon", SizeCategory::Toy),
    ("shih tzu", SizeCategory::Toy),
    ("pekingese", SizeCategory::Toy),
    ("italian greyhound", SizeCategory::Toy),
    ("japanese chin", SizeCategory::Toy),
    ("affenpinscher", SizeCategory::Toy),
    ("havanese", SizeCategory::Toy),
    // small
    ("miniature poodle", SizeCategory::Small),
    ("dachshund", SizeCategory::Small),
    ("beagle", SizeCategory::Small),
    ("french bulldog", SizeCategory::Small),
    ("pug", SizeCategory::Small),
    ("boston terrier", SizeCategory::Small),
    ("cavalier king charles spaniel", SizeCategory::Small),
    ("miniature schnauzer", SizeCategory::Small),
    ("jack russell terrier", SizeCategory::Small),
    ("west highland white terrier", SizeCategory::Small),
    ("bichon frise", SizeCategory::Small),
    ("lhasa apso", SizeCategory::Small),
    ("scottish terrier", SizeCategory::Small),
    ("shetland sheepdog", SizeCategory::Small),
    ("corgi", SizeCategory::Small),
    ("pembroke welsh corgi", SizeCategory::Small),
    // medium
    ("border collie", SizeCategory::Medium),
    ("australian shepherd", SizeCategory::Medium),
    ("cocker spaniel", SizeCategory::Medium),
    ("english springer spaniel", SizeCategory::Medium),
    ("bulldog", SizeCategory::Medium),
    ("english bulldog", SizeCategory::Medium),
    ("siberian husky", SizeCategory::Medium),
    ("brittany", SizeCategory::Medium),
    ("basset hound", SizeCategory::Medium),
    ("shiba inu", SizeCategory::Medium),
    ("whippet", SizeCategory::Medium),
    ("staffordshire bull terrier", SizeCategory::Medium),
    ("american staffordshire terrier", SizeCategory::Medium),
    ("standard schnauzer", SizeCategory::Medium),
    ("samoyed", SizeCategory::Medium),
    // large
    ("labrador retriever", SizeCategory::Large),
    ("golden retriever", SizeCategory::Large),
    ("german shepherd", SizeCategory::Large),
    ("boxer", SizeCategory::Large),
    ("standard poodle", SizeCategory::Large),
    ("doberman pinscher", SizeCategory::Large),
    ("rottweiler", SizeCategory::Large),
    ("weimaraner", SizeCategory::Large),
    ("vizsla", SizeCategory::Large),
    ("rhodesian ridgeback", SizeCategory::Large),
    ("german shorthaired pointer", SizeCategory::Large),
    ("belgian malinois", SizeCategory::Large),
    ("alaskan malamute", SizeCategory::Large),
    ("collie", SizeCategory::Large),
    // giant
    ("great dane", SizeCategory::Giant),
    ("mastiff", SizeCategory::Giant),
    ("english mastiff", SizeCategory::Giant),
    ("saint bernard", SizeCategory::Giant),
    ("newfoundland", SizeCategory::Giant),
    ("bernese mountain dog", SizeCategory::Giant),
    ("great pyrenees", SizeCategory::Giant),
    ("irish wolfhound", SizeCategory::Giant),
    ("leonberger", SizeCategory::Giant),
    ("bullmastiff", SizeCategory::Giant),
    ("cane corso", SizeCategory::Giant),
];

/// Resolves a free-text breed to its size category, defaulting to small.
pub fn size_category(breed: &str) -> SizeCategory {
    let breed = breed.trim().to_lowercase();

    BREED_SIZES
        .iter()
        .find(|(name, _)| *name == breed)
        .map(|(_, size)| *size)
        .unwrap_or_default()
}

/// Lifespan record for a free-text breed
pub fn lifespan(breed: &str) -> &'static LifespanRecord {
    size_category(breed).lifespan()
}
