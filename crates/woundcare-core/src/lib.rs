//! woundcare-core
//!
//! Pure domain types for the wound-care guidance system. No I/O and no
//! reference data; this is the shared vocabulary used by the knowledge
//! tables, the chatbot, the care-plan generator, and the CLI.

pub mod error;
pub mod models;
