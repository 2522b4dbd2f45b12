use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const DATA_DIR: &str = ".cfa-study";
const DATA_FILE: &str = "cfa-data.json";

/// Default profile location under `home`.
pub fn default_data_path_in(home: &Path) -> PathBuf {
    home.join(DATA_DIR).join(DATA_FILE)
}

fn default_data_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").context("HOME environment variable not set")?;
    Ok(default_data_path_in(Path::new(&home)))
}

/// Profile file to use: the `--data` flag (or `CFA_STUDY_DATA`) when given,
/// else the default under `$HOME`.
pub fn resolve_data_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path),
        None => default_data_path(),
    }
}
