//! Ramadhan Prep Shared Library
//!
//! The plan-generation engine and its supporting types, shared by the
//! backend and the WASM bindings. Everything here is pure and synchronous:
//! one validated profile plus one pinned reference date in, one plan out.

pub mod activity;
pub mod date_math;
pub mod metabolic;
pub mod plan;
pub mod planners;
pub mod profile;
pub mod share;
pub mod urgency;
pub mod validation;

// Re-export the engine surface most callers need
pub use plan::{generate_plan, Category, DerivedMetrics, Plan, PlannerContext, Section, SectionContent};
pub use profile::{ActivityType, Gender, Goal, JobType, Profile, SleepDuration};
pub use urgency::Urgency;
