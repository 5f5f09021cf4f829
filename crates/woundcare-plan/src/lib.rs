//! woundcare-plan
//!
//! Care-plan generation: validates a patient assessment and assembles
//! the recommendation, follow-up, warning, and summary text blocks from
//! the knowledge tables and the fixed templates in this crate.

pub mod error;
pub mod generator;

pub use error::PlanError;
pub use generator::generate_care_plan;
