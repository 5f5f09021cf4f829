//! woundcare-chat
//!
//! Rule-based chat over the wound-care knowledge tables: query
//! normalization, an ordered first-match-wins response resolver, and a
//! session bot that keeps the append-only turn history.

pub mod bot;
pub mod normalize;
pub mod picker;
pub mod resolver;

pub use bot::WoundCareBot;
