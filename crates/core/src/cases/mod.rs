//! Cases module - donation targets and their seed data.

mod cases_constants;
mod cases_model;

pub use cases_constants::default_cases;
pub use cases_model::{Case, CaseStatus};
