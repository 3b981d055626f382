pub mod errors;
pub mod food;
pub mod forms;
pub mod insights;
pub mod logs;
pub mod middleware;
pub mod puppy;
pub mod reference;
pub mod routes;
pub mod schedule;
pub mod utils;

use crate::repo;

pub struct AppState {
    pub repo: repo::ImplAppRepo,
}
