use cfa_core::model::StudyProfile;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(String),

    /// The stored profile exists but cannot be decoded or breaks an invariant.
    #[error("corrupt profile: {0}")]
    Corrupt(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the single study profile of a store.
pub trait ProfileRepository: Send + Sync {
    /// Fetch the stored profile.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if a profile exists but cannot be read
    /// back, or `StorageError::Io` if the store is unreachable. `Ok(None)`
    /// means nothing has been saved yet.
    fn load_profile(&self) -> Result<Option<StudyProfile>, StorageError>;

    /// Persist the whole profile, replacing what was stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the profile cannot be stored.
    fn save_profile(&self, profile: &StudyProfile) -> Result<(), StorageError>;

    /// Move an unreadable stored profile aside so it is not overwritten.
    ///
    /// Returns where it went, if the backend keeps such copies.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the stored copy cannot be moved.
    fn quarantine(&self) -> Result<Option<PathBuf>, StorageError> {
        Ok(None)
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    profile: Arc<Mutex<Option<StudyProfile>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `profile`.
    #[must_use]
    pub fn with_profile(profile: StudyProfile) -> Self {
        Self {
            profile: Arc::new(Mutex::new(Some(profile))),
        }
    }

    /// Copy of what is currently stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the lock is poisoned.
    pub fn snapshot(&self) -> Result<Option<StudyProfile>, StorageError> {
        self.load_profile()
    }
}

impl ProfileRepository for InMemoryRepository {
    fn load_profile(&self) -> Result<Option<StudyProfile>, StorageError> {
        let guard = self
            .profile
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        Ok(guard.clone())
    }

    fn save_profile(&self, profile: &StudyProfile) -> Result<(), StorageError> {
        let mut guard = self
            .profile
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        *guard = Some(profile.clone());
        Ok(())
    }
}
