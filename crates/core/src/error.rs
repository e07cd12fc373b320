use thiserror::Error;

pub type PulseResult<T> = Result<T, PulseError>;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// A dataset handed to the reporting layer lacks one or more of the
    /// required numeric columns. Raised at calculator construction,
    /// never at query time.
    #[error("Dataset validation error: missing columns: {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
