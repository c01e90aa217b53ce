//! Fixed storage layout under the user's home directory.
//!
//! There is no config file and no environment override: every location is
//! derived from the home directory so repeated invocations share one store.

use crate::env::{home_dir, EnvError};
use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

const DATA_SUBDIR: [&str; 2] = ["dev", "notes"];
const DB_FILE_NAME: &str = "test.db";
const LOG_SUBDIR: &str = "logs";

/// Resolved locations and log level for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesConfig {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl NotesConfig {
    /// Builds the layout rooted at `home`.
    pub fn from_home(home: impl AsRef<Path>) -> Self {
        let data_dir = DATA_SUBDIR
            .iter()
            .fold(home.as_ref().to_path_buf(), |path, part| path.join(part));
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_SUBDIR),
            data_dir,
            log_level: default_log_level(),
        }
    }

    /// Builds the layout for the invoking user.
    pub fn resolve() -> Result<Self, EnvError> {
        Ok(Self::from_home(home_dir()?))
    }
}
