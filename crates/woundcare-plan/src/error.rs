use thiserror::Error;

/// User-visible care-plan failures. The display strings are the exact
/// messages shown to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A required assessment field (wound type, location, age) is missing
    /// or blank.
    #[error(
        "Insufficient data. Please provide at least the wound type, location, and patient age."
    )]
    InsufficientData,

    /// Unexpected failure during plan assembly, reported generically.
    #[error("An error occurred while generating the care plan. Please try again.")]
    Generation,
}
