pub mod owner;
pub mod timezone;
