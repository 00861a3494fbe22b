use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::answer::{Answer, AnswerId, NewAnswer};
use crate::error::{CoreError, CoreResult};
use crate::pool::{builtin_pool, classic_lineup};
use crate::question::{MAX_ABSURDITY, MIN_ABSURDITY, NewQuestion, Question, QuestionId};
use crate::seed::select_lineup;

/// Owns every question and hands out their IDs.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: BTreeMap<QuestionId, Question>,
    next_id: QuestionId,
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            questions: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// The classic ten questions, IDs and orders 1 through 10.
    pub fn classic() -> Self {
        Self::from_lineup(classic_lineup())
    }

    /// A reproducible selection from the built-in pool.
    pub fn seeded(seed: u64) -> Self {
        Self::from_pool(&builtin_pool(), seed)
    }

    /// A reproducible selection from a caller-supplied pool.
    pub fn from_pool(pool: &[NewQuestion], seed: u64) -> Self {
        Self::from_lineup(select_lineup(pool, seed))
    }

    fn from_lineup(lineup: Vec<NewQuestion>) -> Self {
        let mut store = Self::new();
        for question in lineup {
            // Lineups carry in-range levels and orders 1..=N, in order.
            if let Err(err) = store.create(question) {
                debug!(%err, "skipping lineup question");
            }
        }
        store
    }

    /// All questions, ascending by order.
    pub fn list(&self) -> Vec<Question> {
        let mut questions: Vec<Question> = self.questions.values().cloned().collect();
        questions.sort_by_key(|q| q.order);
        questions
    }

    /// Look up a question by ID.
    pub fn get(&self, id: QuestionId) -> CoreResult<&Question> {
        self.questions
            .get(&id)
            .ok_or(CoreError::QuestionNotFound(id))
    }

    /// Store a new question under the next sequential ID.
    ///
    /// The order must be free and at most one past the current count, so
    /// orders stay contiguous from 1.
    pub fn create(&mut self, question: NewQuestion) -> CoreResult<Question> {
        if !(MIN_ABSURDITY..=MAX_ABSURDITY).contains(&question.absurdity_level) {
            return Err(CoreError::InvalidAbsurdity(question.absurdity_level));
        }
        let next_free = u32::try_from(self.questions.len())
            .map_or(u32::MAX, |n| n.saturating_add(1));
        if question.order == 0 || question.order > next_free {
            return Err(CoreError::InvalidOrder(question.order));
        }
        if self.questions.values().any(|q| q.order == question.order) {
            return Err(CoreError::DuplicateOrder(question.order));
        }

        let id = self.next_id;
        self.next_id += 1;
        let question = question.into_question(id);
        self.questions.insert(id, question.clone());
        Ok(question)
    }

    /// Number of questions; also the length of the flow.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the store holds no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The flow length as an order value.
    pub fn total_questions(&self) -> u32 {
        self.questions.len() as u32
    }
}

/// Append-only answers grouped by session.
#[derive(Debug, Clone)]
pub struct AnswerStore {
    answers: HashMap<String, Vec<Answer>>,
    next_id: AnswerId,
}

impl Default for AnswerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            answers: HashMap::new(),
            next_id: 1,
        }
    }

    /// Append an answer to its session. Any session string is accepted and
    /// resubmissions are kept alongside earlier answers.
    pub fn save_answer(&mut self, answer: NewAnswer) -> Answer {
        let id = self.next_id;
        self.next_id += 1;
        let answer = answer.into_answer(id);
        self.answers
            .entry(answer.session_id.clone())
            .or_default()
            .push(answer.clone());
        answer
    }

    /// Answers recorded for a session, oldest first. Empty when unknown.
    pub fn answers_for_session(&self, session_id: &str) -> &[Answer] {
        self.answers
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of sessions with at least one answer.
    pub fn session_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of answers across all sessions.
    pub fn total_answers(&self) -> usize {
        self.answers.values().map(Vec::len).sum()
    }
}
