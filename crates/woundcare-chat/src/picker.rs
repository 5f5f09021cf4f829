//! Canned-response selection.

use rand::Rng;

/// Picks which of a fixed set of canned responses to return.
///
/// The only nondeterminism in the chat path goes through this trait, so
/// tests inject a fixed picker to pin the selected string.
pub trait ResponsePicker {
    /// Pick an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG, uniform over the
/// response set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPicker;

impl ResponsePicker for ThreadRngPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picker that always returns the same index, clamped to the set size.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl ResponsePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
