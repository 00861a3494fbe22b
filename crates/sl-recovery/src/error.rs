//! Error types for the recovery desk and flow.

use thiserror::Error;

use sl_core::{CoreError, QuestionId};

use crate::flow::FlowStep;

/// Result type for recovery operations.
pub type RecoveryResult<T> = Result<T, RecoveryError>;

/// Errors that can occur while serving or walking the recovery flow.
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// No question has the requested ID.
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    /// The flow cannot start without an email address.
    #[error("please enter your email address")]
    EmailRequired,

    /// An operation was attempted in the wrong step of the flow.
    #[error("expected the flow to be {expected}, but it is {actual}")]
    UnexpectedStep {
        /// The step the operation needs.
        expected: &'static str,
        /// The step the flow is in.
        actual: FlowStep,
    },

    /// No question occupies the current position.
    #[error("no question at position {0}")]
    NoActiveQuestion(u32),

    /// A store lock was poisoned by a panicking writer.
    #[error("{0} store is unavailable")]
    StoreUnavailable(&'static str),

    /// The backend could not be reached or refused the request.
    #[error("backend error: {0}")]
    Backend(String),

    /// Store validation error.
    #[error(transparent)]
    Core(CoreError),
}

impl From<CoreError> for RecoveryError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::QuestionNotFound(id) => Self::QuestionNotFound(id),
            other => Self::Core(other),
        }
    }
}
