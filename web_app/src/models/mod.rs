pub mod food;
pub mod puppy;
pub mod schedule;
