//! Profile storage as a single pretty-printed JSON document.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use cfa_core::model::StudyProfile;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::repository::{ProfileRepository, StorageError};

const QUARANTINE_SUFFIX: &str = "corrupt";

/// Stores the profile at a fixed path.
///
/// Saves go through a temporary file in the same directory that is renamed
/// over the target, so readers never see a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where `quarantine` moves an unreadable profile: `<file>.corrupt`.
    #[must_use]
    pub fn quarantine_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".");
        name.push(QUARANTINE_SUFFIX);
        self.path.with_file_name(name)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }

    fn io_error(&self, action: &str, err: &std::io::Error) -> StorageError {
        StorageError::Io(format!("failed to {action} {}: {err}", self.path.display()))
    }
}

impl ProfileRepository for JsonFileRepository {
    fn load_profile(&self) -> Result<Option<StudyProfile>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error("read", &e)),
        };

        let mut profile: StudyProfile = serde_json::from_str(&contents).map_err(|e| {
            StorageError::Corrupt(format!("{}: {e}", self.path.display()))
        })?;
        for note in profile.repair() {
            warn!(path = %self.path.display(), %note, "repaired stored profile");
        }
        profile
            .validate()
            .map_err(|e| StorageError::Corrupt(format!("{}: {e}", self.path.display())))?;

        debug!(path = %self.path.display(), "loaded study profile");
        Ok(Some(profile))
    }

    fn save_profile(&self, profile: &StudyProfile) -> Result<(), StorageError> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|e| self.io_error("create directory for", &e))?;

        let mut json = serde_json::to_string_pretty(profile)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        json.push('\n');

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.io_error("stage", &e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| self.io_error("write", &e))?;
        tmp.persist(&self.path)
            .map_err(|e| self.io_error("replace", &e.error))?;

        debug!(path = %self.path.display(), "saved study profile");
        Ok(())
    }

    fn quarantine(&self) -> Result<Option<PathBuf>, StorageError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let target = self.quarantine_path();
        fs::rename(&self.path, &target).map_err(|e| self.io_error("move aside", &e))?;
        Ok(Some(target))
    }
}
