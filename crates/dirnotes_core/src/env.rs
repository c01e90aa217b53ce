//! Process environment lookups: home directory and working directory.
//!
//! # Invariants
//! - The working directory is returned verbatim; no canonicalization, so
//!   symlinked or trailing-slash spellings stay distinct partitions.
//! - Non UTF-8 paths are rejected rather than converted lossily.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum EnvError {
    HomeUnavailable,
    CurrentDir(std::io::Error),
    NonUtf8Dir(PathBuf),
}

impl Display for EnvError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeUnavailable => write!(f, "failed to get home directory"),
            Self::CurrentDir(err) => write!(f, "failed to get current directory: {err}"),
            Self::NonUtf8Dir(path) => write!(
                f,
                "current directory `{}` is not valid UTF-8",
                path.display()
            ),
        }
    }
}

impl Error for EnvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CurrentDir(err) => Some(err),
            _ => None,
        }
    }
}

/// Returns the invoking user's home directory.
pub fn home_dir() -> Result<PathBuf, EnvError> {
    dirs::home_dir().ok_or(EnvError::HomeUnavailable)
}

/// Returns the current working directory as the note partition key.
pub fn current_dir_key() -> Result<String, EnvError> {
    let dir = std::env::current_dir().map_err(EnvError::CurrentDir)?;
    dir.into_os_string()
        .into_string()
        .map_err(|raw| EnvError::NonUtf8Dir(PathBuf::from(raw)))
}
