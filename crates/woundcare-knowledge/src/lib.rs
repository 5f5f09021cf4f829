//! woundcare-knowledge
//!
//! The immutable wound-care reference data: treatment advice by wound
//! type and stage, the FAQ table, category canned responses, greeting and
//! fallback strings, the assessment rubric, risk scales, and advanced
//! therapy summaries. Pure data: every table is `'static`, and tables
//! whose iteration order the chatbot's matching rules depend on are
//! ordered slices, never hash maps.

pub mod advice;
pub mod categories;
pub mod faq;
pub mod responses;
pub mod risk;
pub mod rubric;
pub mod therapies;
