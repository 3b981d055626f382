//! # API Module
//!
//! Use cases behind the HTTP handlers. Each function loads rows through
//! [`crate::repo::AppRepo`], runs the pure functions of [`crate::core`] on
//! them and returns a serializable view. Functions return `Ok(None)` or
//! `Ok(false)` when the profile does not exist or belongs to another owner.
//!
//! ## Modules
//!
//! - [`profile`] - Puppy profile CRUD with age summaries
//! - [`food`] - Food settings and the single default per food type
//! - [`schedule`] - Puppy series generation, merge and administration
//! - [`logs`] - Weight, vitals and feeding logs, today's feedings
//! - [`insights`] - Growth chart, booster plan, nutrition plan, life stage
//! - [`reference`] - Static breed and life stage tables
//! - [`export`] - JSON snapshot of a profile

pub mod export;
pub mod food;
pub mod insights;
pub mod logs;
pub mod profile;
pub mod reference;
pub mod schedule;
