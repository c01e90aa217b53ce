//! Fatal CLI failures.
//!
//! A missing note on delete is not represented here: the dispatcher reports
//! it as ordinary output.

use dirnotes_core::{EnvError, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CliError {
    Environment(EnvError),
    Storage {
        context: &'static str,
        source: RepoError,
    },
    Output(std::io::Error),
}

impl CliError {
    /// Builds a `map_err` adapter tagging a storage failure with `context`.
    pub fn storage<E: Into<RepoError>>(context: &'static str) -> impl FnOnce(E) -> Self {
        move |err| Self::Storage {
            context,
            source: err.into(),
        }
    }

    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Environment(_) => "environment",
            Self::Storage { .. } => "storage",
            Self::Output(_) => "output",
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Environment(err) => write!(f, "{err}"),
            Self::Storage { context, source } => write!(f, "{context}: {source}"),
            Self::Output(err) => write!(f, "failed to write output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Environment(err) => Some(err),
            Self::Storage { source, .. } => Some(source),
            Self::Output(err) => Some(err),
        }
    }
}

impl From<EnvError> for CliError {
    fn from(value: EnvError) -> Self {
        Self::Environment(value)
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}
