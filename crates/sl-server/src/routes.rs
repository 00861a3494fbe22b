//! Request handlers.

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use sl_core::{Answer, NewQuestion, Question, QuestionId, SessionId};
use sl_recovery::{AnswerSubmission, RecoveryError, SubmitReceipt};

use crate::error::ApiError;
use crate::state::AppState;

/// Body of `POST /sessions`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    /// The new session.
    pub session_id: SessionId,
}

/// Decode a JSON body, turning every schema violation into a 400.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Validation(e.to_string()))
}

/// `GET /questions`
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Question>>, ApiError> {
    state
        .desk
        .questions()
        .map(Json)
        .map_err(ApiError::from_recovery("Failed to fetch questions"))
}

/// `GET /questions/{id}`
pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Question>, ApiError> {
    let id: QuestionId = id.parse().map_err(|_| ApiError::InvalidQuestionId)?;
    state
        .desk
        .question(id)
        .map(Json)
        .map_err(ApiError::from_recovery("Failed to fetch question"))
}

/// `POST /questions`
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Question>), ApiError> {
    let question: NewQuestion = parse_body(&body)?;
    match state.desk.create_question(question) {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(RecoveryError::Core(err)) => Err(ApiError::Validation(err.to_string())),
        Err(err) => Err(ApiError::from_recovery("Failed to create question")(err)),
    }
}

/// `POST /sessions`
pub async fn create_session(State(state): State<Arc<AppState>>) -> Json<SessionCreated> {
    Json(SessionCreated {
        session_id: state.desk.create_session(),
    })
}

/// `POST /answers`
pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SubmitReceipt>, ApiError> {
    let submission: AnswerSubmission = parse_body(&body)?;
    debug!(question_id = submission.question_id, "answer received");
    state
        .desk
        .submit(&submission)
        .map(Json)
        .map_err(ApiError::from_recovery("Failed to submit answer"))
}

/// `GET /sessions/{id}/answers`
pub async fn session_answers(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<Json<Vec<Answer>>, ApiError> {
    state
        .desk
        .answers_for_session(&session_id)
        .map(Json)
        .map_err(ApiError::from_recovery("Failed to fetch answers"))
}
