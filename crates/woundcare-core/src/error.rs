use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown wound type: {0}")]
    UnknownWoundType(String),

    #[error("unknown wound stage: {0}")]
    UnknownWoundStage(String),

    #[error("unknown exudate amount: {0}")]
    UnknownExudateAmount(String),

    #[error("unknown complication: {0}")]
    UnknownComplication(String),
}
