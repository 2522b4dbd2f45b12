//! Shared error types for the services crate.

use thiserror::Error;

use cfa_core::model::{Level, LevelError, ProfileError};
use storage::repository::StorageError;

/// Errors emitted by `StudyProfileTracker`.
///
/// Every variant except `Storage` is a validation failure that left the
/// profile untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrackerError {
    #[error(transparent)]
    InvalidLevel(#[from] LevelError),
    #[error("invalid target exam date {0:?}; expected YYYY-MM-DD")]
    InvalidTargetDate(String),
    #[error("study hours must be a finite, non-negative number (got {0})")]
    InvalidHours(f64),
    #[error("correct answers ({correct}) exceed questions answered ({answered})")]
    CorrectExceedsAnswered { correct: u32, answered: u32 },
    #[error("level {0} is already completed")]
    LevelAlreadyCompleted(Level),
    #[error("question {number} is out of range; only {available} available")]
    QuestionOutOfRange { number: usize, available: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TrackerError {
    /// True for input errors; false for storage failures.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, TrackerError::Storage(_))
    }
}

impl From<ProfileError> for TrackerError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::InvalidHours(hours) => Self::InvalidHours(hours),
            ProfileError::CorrectExceedsAnswered { correct, answered } => {
                Self::CorrectExceedsAnswered { correct, answered }
            }
            ProfileError::LevelAlreadyCompleted(level) => Self::LevelAlreadyCompleted(level),
            ProfileError::InvalidTargetDate(raw) => Self::InvalidTargetDate(raw),
            other => Self::Storage(StorageError::Corrupt(other.to_string())),
        }
    }
}
