//! # Health Computation Core
//!
//! Pure, table-driven functions deriving everything the app displays from
//! stored rows: target weights, life stages, vaccine due dates, booster
//! plans, feeding amounts and schedule alert buckets. Nothing in here touches
//! the database or the clock; "today" is always passed in by the caller.
//!
//! ## Modules
//!
//! - [`breed`] - Breed to size category lookup and lifespan records
//! - [`growth`] - Growth curve control points and interpolation
//! - [`life_stage`] - Life stage classification and lifespan estimates
//! - [`vaccination`] - Puppy series schedule generation and merging
//! - [`booster`] - Adult booster projection from administered history
//! - [`nutrition`] - Energy requirement and feeding amount calculator
//! - [`alert`] - Alert status buckets for schedule entries
//! - [`vitals`] - Advisory checks for logged vital signs
//! - [`units`] - Weight unit conversions and age helpers

pub mod alert;
pub mod booster;
pub mod breed;
pub mod growth;
pub mod life_stage;
pub mod nutrition;
pub mod units;
pub mod vaccination;
pub mod vitals;
