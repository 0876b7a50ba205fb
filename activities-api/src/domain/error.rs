use thiserror::Error;

/// Errors that can occur during activity roster operations.
#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound(String),
    #[error("Student is already signed up")]
    AlreadySignedUp,
    #[error("Student is not signed up for this activity")]
    NotSignedUp,
    #[error("Activity is at full capacity")]
    CapacityExceeded,
    #[error("storage error: {0}")]
    Storage(String),
}

impl ActivityError {
    pub fn storage(err: impl ToString) -> Self {
        Self::Storage(err.to_string())
    }
}
