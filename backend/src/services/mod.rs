//! Business logic services

pub mod preparation;

pub use preparation::{PlanResponse, PreparationRequest, PreparationService};
