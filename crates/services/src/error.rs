//! Shared error types for the services crate.

use thiserror::Error;

use heartspace_core::model::ProgramId;
use storage::StorageError;

/// Errors emitted by the HTTP API glue.
///
/// A failed fetch is surfaced to the caller as-is: there is no automatic
/// retry at this layer, and callers keep whatever they were displaying
/// rather than overwriting it with empty data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message} (status {status})")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("unexpected response shape: {0}")]
    Decode(String),
}

/// Errors emitted by `ProgressTracker`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    /// The caller asked about a program the fixed catalog does not contain.
    /// The catalog is known at startup, so this is a caller defect, not a
    /// user-facing condition.
    #[error("unknown program id: {0}")]
    UnknownProgram(ProgramId),

    /// The chapter id does not belong to the named program.
    #[error("program {program} has no chapter {chapter:?}")]
    UnknownChapter { program: ProgramId, chapter: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Progress(#[from] ProgressError),
}
