//! Error types for grapheus modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// A request record failed boundary validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

/// Errors from version-control queries.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to open repository at {path}: {source}")]
    OpenRepository {
        path: PathBuf,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to read working-tree status: {0}")]
    Status(#[source] git2::Error),

    #[error("Failed to collect diff: {0}")]
    Diff(#[source] git2::Error),

    #[error("Failed to compute diff statistics: {0}")]
    Stats(#[source] git2::Error),

    #[error("Repository query task failed: {0}")]
    TaskFailed(String),
}

/// Errors from writing a markdown report.
///
/// Never escapes `write_report`; it is folded into a `WriteResult`.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error(transparent)]
    InvalidRequest(#[from] RequestError),

    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors returned by the change listing and commit drafting operations.
#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
