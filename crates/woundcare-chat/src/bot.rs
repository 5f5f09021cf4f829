//! Session chat bot.

use tracing::debug;

use woundcare_core::models::chat::ChatTurn;

use crate::normalize::normalize_query;
use crate::picker::{ResponsePicker, ThreadRngPicker};
use crate::resolver;

/// A single-session wound-care chat bot.
///
/// Owns the append-only turn history: every processed query appends the
/// raw user turn, then the assistant turn, in that order. Not
/// synchronized; callers sharing one instance serialize access
/// themselves. History is cleared only by [`WoundCareBot::clear_history`]
/// and never persisted.
pub struct WoundCareBot {
    history: Vec<ChatTurn>,
    picker: Box<dyn ResponsePicker + Send>,
}

impl WoundCareBot {
    pub fn new() -> Self {
        Self::with_picker(Box::new(ThreadRngPicker))
    }

    /// Build a bot with a custom canned-response picker.
    pub fn with_picker(picker: Box<dyn ResponsePicker + Send>) -> Self {
        WoundCareBot {
            history: Vec::new(),
            picker,
        }
    }

    /// Process one user utterance and return the response text.
    ///
    /// Infallible: queries nothing matches resolve to a default response.
    pub fn process_query(&mut self, raw: &str) -> String {
        self.history.push(ChatTurn::user(raw));

        let query = normalize_query(raw);
        let response = resolver::resolve(&query, self.picker.as_mut());
        debug!(query = %query, "resolved chat response");

        self.history.push(ChatTurn::assistant(response.clone()));
        response
    }

    /// The session's turns, oldest first.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Reset the session to an empty history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl Default for WoundCareBot {
    fn default() -> Self {
        Self::new()
    }
}
