//! HTTP error mapping.

use std::io;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use sl_recovery::RecoveryError;

/// Result type for server startup.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors that stop the server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listen address could not be bound.
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// The address tried.
        address: String,
        /// The underlying failure.
        source: io::Error,
    },

    /// The server loop failed.
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// Errors returned to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The path segment is not a question ID.
    #[error("Invalid question ID")]
    InvalidQuestionId,

    /// The request body failed validation.
    #[error("{0}")]
    Validation(String),

    /// No question has the requested ID.
    #[error("Question not found")]
    QuestionNotFound,

    /// Something went wrong on our side. Only `context` reaches the client.
    #[error("{context}")]
    Internal {
        /// Generic message for the client.
        context: &'static str,
        /// What actually happened.
        source: RecoveryError,
    },
}

impl ApiError {
    /// Map a desk error, reporting anything but a missing question as
    /// an internal failure described by `context`.
    pub fn from_recovery(context: &'static str) -> impl Fn(RecoveryError) -> Self {
        move |err| match err {
            RecoveryError::QuestionNotFound(_) => Self::QuestionNotFound,
            source => Self::Internal { context, source },
        }
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQuestionId | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::QuestionNotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal { context, source } = &self {
            error!(error = %source, "{context}");
        }
        let status = self.status();
        let body = ErrorBody {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
