use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::question::QuestionId;

/// Identifier assigned to an answer by the [`AnswerStore`](crate::AnswerStore).
pub type AnswerId = u32;

/// Opaque grouping key for one user's answers.
pub type SessionId = String;

/// A stored answer. Never mutated once saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// Store-assigned identifier.
    pub id: AnswerId,
    /// Session the answer belongs to.
    pub session_id: SessionId,
    /// Question being answered.
    pub question_id: QuestionId,
    /// What the user typed or picked.
    pub answer_text: String,
    /// When the answer was recorded.
    pub timestamp: DateTime<Utc>,
}

/// An answer before the store has given it an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    /// Session the answer belongs to.
    pub session_id: SessionId,
    /// Question being answered.
    pub question_id: QuestionId,
    /// What the user typed or picked.
    pub answer_text: String,
    /// When the answer was recorded.
    pub timestamp: DateTime<Utc>,
}

impl NewAnswer {
    /// Create an answer stamped with the current time.
    pub fn now(
        session_id: impl Into<SessionId>,
        question_id: QuestionId,
        answer_text: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            question_id,
            answer_text: answer_text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Attach an ID.
    pub fn into_answer(self, id: AnswerId) -> Answer {
        Answer {
            id,
            session_id: self.session_id,
            question_id: self.question_id,
            answer_text: self.answer_text,
            timestamp: self.timestamp,
        }
    }
}
