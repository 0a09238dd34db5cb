//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by session services.
///
/// Invalid transition attempts are rejected with a distinct variant and leave
/// the session untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("questionnaire has no questions")]
    Empty,
    #[error("session has not been started")]
    NotStarted,
    #[error("session is already in progress")]
    AlreadyStarted,
    #[error("session already completed")]
    Completed,
}
