//! The recovery desk: question catalog, answer log and response selection
//! behind one shareable handle.

use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use sl_core::{
    Answer, AnswerStore, NewAnswer, NewQuestion, Question, QuestionId, QuestionStore, SessionId,
};
use sl_quips::QuipSelector;

use crate::config::RecoveryConfig;
use crate::error::{RecoveryError, RecoveryResult};

/// An answer as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    /// The question being answered.
    pub question_id: QuestionId,
    /// The answer text. May be empty.
    pub answer: String,
    /// The submitting session.
    pub session_id: SessionId,
}

impl AnswerSubmission {
    /// Create a submission.
    pub fn new(
        question_id: QuestionId,
        answer: impl Into<String>,
        session_id: impl Into<SessionId>,
    ) -> Self {
        Self {
            question_id,
            answer: answer.into(),
            session_id: session_id.into(),
        }
    }
}

/// The desk's reply to an accepted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    /// Always `true` for an accepted answer.
    pub success: bool,
    /// The witty response.
    pub message: String,
    /// Order of the next question, or `None` after the last one.
    pub next_question_id: Option<u32>,
}

/// The order that follows `order`, if the lineup has one.
pub fn next_order(order: u32, total: u32) -> Option<u32> {
    let next = order.checked_add(1)?;
    (next <= total).then_some(next)
}

/// Shared state for the recovery service.
///
/// Questions are read-mostly and sit behind an `RwLock`; answers and the
/// response RNG are mutated on every submission and sit behind mutexes.
#[derive(Debug)]
pub struct RecoveryDesk {
    questions: RwLock<QuestionStore>,
    answers: Mutex<AnswerStore>,
    quips: Mutex<QuipSelector>,
}

impl Default for RecoveryDesk {
    fn default() -> Self {
        Self::new(&RecoveryConfig::default())
    }
}

impl RecoveryDesk {
    /// Build a desk from configuration.
    pub fn new(config: &RecoveryConfig) -> Self {
        info!(
            lineup_seed = ?config.lineup_seed,
            quip_seed = ?config.quip_seed,
            "recovery desk ready"
        );
        Self::from_parts(
            config.question_store(),
            AnswerStore::new(),
            QuipSelector::new(config.quip_seed),
        )
    }

    /// Build a desk from pre-built stores.
    pub fn from_parts(questions: QuestionStore, answers: AnswerStore, quips: QuipSelector) -> Self {
        Self {
            questions: RwLock::new(questions),
            answers: Mutex::new(answers),
            quips: Mutex::new(quips),
        }
    }

    fn read_questions(&self) -> RecoveryResult<RwLockReadGuard<'_, QuestionStore>> {
        self.questions
            .read()
            .map_err(|_| RecoveryError::StoreUnavailable("question"))
    }

    fn write_questions(&self) -> RecoveryResult<RwLockWriteGuard<'_, QuestionStore>> {
        self.questions
            .write()
            .map_err(|_| RecoveryError::StoreUnavailable("question"))
    }

    fn lock_answers(&self) -> RecoveryResult<MutexGuard<'_, AnswerStore>> {
        self.answers
            .lock()
            .map_err(|_| RecoveryError::StoreUnavailable("answer"))
    }

    fn lock_quips(&self) -> RecoveryResult<MutexGuard<'_, QuipSelector>> {
        self.quips
            .lock()
            .map_err(|_| RecoveryError::StoreUnavailable("response"))
    }

    /// All questions, ascending by order.
    pub fn questions(&self) -> RecoveryResult<Vec<Question>> {
        Ok(self.read_questions()?.list())
    }

    /// A single question by ID.
    pub fn question(&self, id: QuestionId) -> RecoveryResult<Question> {
        Ok(self.read_questions()?.get(id)?.clone())
    }

    /// Number of questions in the lineup.
    pub fn total_questions(&self) -> RecoveryResult<u32> {
        Ok(self.read_questions()?.total_questions())
    }

    /// Add a question to the catalog.
    pub fn create_question(&self, question: NewQuestion) -> RecoveryResult<Question> {
        let created = self.write_questions()?.create(question)?;
        info!(id = created.id, order = created.order, "question created");
        Ok(created)
    }

    /// Issue a fresh session identifier.
    pub fn create_session(&self) -> SessionId {
        let id = Uuid::new_v4().simple().to_string();
        info!(session_id = %id, "session created");
        id
    }

    /// Record an answer and pick a response for it.
    pub fn submit(&self, submission: &AnswerSubmission) -> RecoveryResult<SubmitReceipt> {
        let (question, total) = {
            let store = self.read_questions()?;
            (
                store.get(submission.question_id)?.clone(),
                store.total_questions(),
            )
        };

        let saved = self.lock_answers()?.save_answer(NewAnswer::now(
            submission.session_id.clone(),
            submission.question_id,
            submission.answer.clone(),
        ));
        let quip = self.lock_quips()?.respond(&question, &submission.answer);
        let next_question_id = next_order(question.order, total);

        debug!(
            answer_id = saved.id,
            question_id = question.id,
            session_id = %submission.session_id,
            source = ?quip.source,
            ?next_question_id,
            "answer recorded"
        );

        Ok(SubmitReceipt {
            success: true,
            message: quip.line.to_string(),
            next_question_id,
        })
    }

    /// Answers recorded for a session, oldest first.
    pub fn answers_for_session(&self, session_id: &str) -> RecoveryResult<Vec<Answer>> {
        Ok(self.lock_answers()?.answers_for_session(session_id).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::{CoreError, QuestionType};
    use sl_quips::Bucket;

    fn desk() -> RecoveryDesk {
        RecoveryDesk::new(&RecoveryConfig::default().with_quip_seed(42))
    }

    #[test]
    fn classic_catalog_by_default() {
        let desk = desk();
        let questions = desk.questions().unwrap();
        assert_eq!(questions.len(), 10);
        assert_eq!(questions[0].question_text, "What was the name of your first pet?");
        assert_eq!(desk.total_questions().unwrap(), 10);
    }

    #[test]
    fn seeded_catalog_is_ten_questions() {
        let desk = RecoveryDesk::new(&RecoveryConfig::default().with_lineup_seed(99));
        let questions = desk.questions().unwrap();
        let orders: Vec<u32> = questions.iter().map(|q| q.order).collect();
        assert_eq!(orders, (1..=10).collect::<Vec<_>>());
        assert!(questions.iter().all(|q| !q.has_placeholder()));
    }

    #[test]
    fn question_lookup() {
        let desk = desk();
        assert_eq!(desk.question(5).unwrap().question_type, QuestionType::Select);
        assert!(matches!(
            desk.question(999),
            Err(RecoveryError::QuestionNotFound(999))
        ));
    }

    #[test]
    fn submit_first_answer() {
        let desk = desk();
        let receipt = desk
            .submit(&AnswerSubmission::new(1, "Fluffy", "s1"))
            .unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.next_question_id, Some(2));
        assert!(Bucket::PetName.lines().contains(&receipt.message.as_str()));

        let answers = desk.answers_for_session("s1").unwrap();
        assert_eq!(answers.len(), 1);
        assert_eq!(answers[0].answer_text, "Fluffy");
        assert_eq!(answers[0].question_id, 1);
    }

    #[test]
    fn submit_chainsaw() {
        let receipt = desk()
            .submit(&AnswerSubmission::new(5, "Chainsaw", "s1"))
            .unwrap();
        assert!(receipt.message.contains("run out of gas"));
        assert_eq!(receipt.next_question_id, Some(6));
    }

    #[test]
    fn last_question_has_no_next() {
        let receipt = desk()
            .submit(&AnswerSubmission::new(10, "Nothing to see here", "s1"))
            .unwrap();
        assert_eq!(receipt.next_question_id, None);
    }

    #[test]
    fn empty_answer_is_accepted() {
        let desk = desk();
        let receipt = desk.submit(&AnswerSubmission::new(3, "", "s2")).unwrap();
        assert!(!receipt.message.is_empty());
        assert_eq!(desk.answers_for_session("s2").unwrap()[0].answer_text, "");
    }

    #[test]
    fn unknown_question_records_nothing() {
        let desk = desk();
        let err = desk
            .submit(&AnswerSubmission::new(999, "x", "s3"))
            .unwrap_err();
        assert!(matches!(err, RecoveryError::QuestionNotFound(999)));
        assert!(desk.answers_for_session("s3").unwrap().is_empty());
    }

    #[test]
    fn sessions_are_unique_hex() {
        let desk = desk();
        let a = desk.create_session();
        let b = desk.create_session();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn every_order_points_at_the_next() {
        let desk = desk();
        for question in desk.questions().unwrap() {
            let receipt = desk
                .submit(&AnswerSubmission::new(question.id, "x", "walk"))
                .unwrap();
            let expected = (question.order < 10).then_some(question.order + 1);
            assert_eq!(receipt.next_question_id, expected, "order {}", question.order);
        }
        assert_eq!(desk.answers_for_session("walk").unwrap().len(), 10);
    }

    #[test]
    fn created_question_extends_lineup() {
        let desk = desk();
        let question = NewQuestion::new("Pick a color", QuestionType::Radio, 11, 3)
            .with_options(["Red", "Blue"]);
        let created = desk.create_question(question).unwrap();
        assert_eq!(created.id, 11);
        assert_eq!(desk.total_questions().unwrap(), 11);

        // Question 10 now has a successor.
        let receipt = desk.submit(&AnswerSubmission::new(10, "x", "s")).unwrap();
        assert_eq!(receipt.next_question_id, Some(11));
    }

    #[test]
    fn create_question_rejects_bad_level() {
        let question = NewQuestion::new("Too much", QuestionType::Text, 11, 11);
        let err = desk().create_question(question).unwrap_err();
        assert!(matches!(err, RecoveryError::Core(CoreError::InvalidAbsurdity(11))));
    }

    #[test]
    fn create_question_rejects_gapped_order() {
        let desk = desk();
        let question = NewQuestion::new("Gap?", QuestionType::Text, 20, 3);
        let err = desk.create_question(question).unwrap_err();
        assert!(matches!(err, RecoveryError::Core(CoreError::InvalidOrder(20))));
        assert_eq!(desk.total_questions().unwrap(), 10);
    }

    #[test]
    fn next_order_bounds() {
        assert_eq!(next_order(1, 10), Some(2));
        assert_eq!(next_order(9, 10), Some(10));
        assert_eq!(next_order(10, 10), None);
        assert_eq!(next_order(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn submission_wire_format() {
        let json = r#"{"questionId":1,"answer":"Fluffy","sessionId":"abc"}"#;
        let sub: AnswerSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(sub, AnswerSubmission::new(1, "Fluffy", "abc"));

        let receipt = SubmitReceipt {
            success: true,
            message: "hi".into(),
            next_question_id: None,
        };
        let value = serde_json::to_value(&receipt).unwrap();
        assert_eq!(value["nextQuestionId"], serde_json::Value::Null);
        assert_eq!(value["success"], true);
    }
}
