//! The client-side recovery flow as an explicit state machine.
//!
//! ```text
//! Initial --begin--> Loading(AccountLookup) --finish_loading--> Questions
//! Questions --last answer--> Loading(Finalizing) --finish_loading--> Final
//! any --reset--> Initial
//! ```
//!
//! The controller does no I/O. Callers perform the backend request and hand
//! the outcome in, so a failed request can be handled the way the flow needs.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};
use uuid::Uuid;

use sl_core::{DEFAULT_PET_NAME, Question, QuestionId, SessionId};

use crate::desk::SubmitReceipt;
use crate::error::{RecoveryError, RecoveryResult};

/// Question text that identifies the pet-name question.
const PET_NAME_TOPIC: &str = "first pet";

/// Status lines rotated while the flow finalizes.
pub const FINAL_STATUS_LINES: &[&str] = &[
    "Analyzing your personality from answers...",
    "Running quantum authentication protocol...",
    "Determining if you're human or very clever AI...",
    "Cross-referencing with parallel universe versions of you...",
    "Validating absurdity threshold...",
];

/// The message shown when recovery "completes".
pub const FINAL_MESSAGE: &str = "You've completed our extremely secure verification process. \
Unfortunately, we still can't recover your password because you never had an account here.";

/// Agreement required before the last answer is handed in.
pub const FINAL_CONFESSION: &str = "I agree that this confession may be used for comedic purposes";

/// Which loading screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingPhase {
    /// After the email is entered.
    AccountLookup,
    /// After the last answer is submitted.
    Finalizing,
}

impl LoadingPhase {
    /// Headline for the loading screen.
    pub fn headline(self) -> &'static str {
        match self {
            Self::AccountLookup => "Searching for your account...",
            Self::Finalizing => "Finalizing your verification...",
        }
    }

    /// Line under the headline until status lines start rotating.
    pub fn subline(self) -> &'static str {
        "This won't take long."
    }

    /// Line under each rotated status line.
    pub fn status_subline(self) -> &'static str {
        "This is definitely a real process."
    }

    /// Status lines to rotate through. Empty for the account lookup.
    pub fn status_lines(self) -> &'static [&'static str] {
        match self {
            Self::AccountLookup => &[],
            Self::Finalizing => FINAL_STATUS_LINES,
        }
    }
}

/// A step of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    /// Waiting for an email address.
    Initial,
    /// Showing a loading screen.
    Loading(LoadingPhase),
    /// Asking questions.
    Questions,
    /// Showing the final message.
    Final,
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initial => write!(f, "initial"),
            Self::Loading(LoadingPhase::AccountLookup) => write!(f, "loading (account lookup)"),
            Self::Loading(LoadingPhase::Finalizing) => write!(f, "loading (finalizing)"),
            Self::Questions => write!(f, "questions"),
            Self::Final => write!(f, "final"),
        }
    }
}

/// What happened after an answer was handed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the question with this order.
    Next(u32),
    /// Accepted, but the backend named no next question.
    Stayed,
    /// The last question was answered; the flow is finalizing.
    Finalizing,
    /// The backend refused; the flow did not move.
    Rejected(String),
}

/// An answer remembered by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedAnswer {
    /// The question answered.
    pub question_id: QuestionId,
    /// What was typed or chosen.
    pub answer_text: String,
}

/// Drives one pass through the recovery flow.
#[derive(Debug, Clone)]
pub struct FlowController {
    step: FlowStep,
    email: String,
    session_id: Option<SessionId>,
    questions: Vec<Question>,
    current_index: u32,
    answers: BTreeMap<QuestionId, CachedAnswer>,
}

impl Default for FlowController {
    fn default() -> Self {
        Self::new()
    }
}

/// A session ID minted locally when the backend cannot issue one.
pub fn fallback_session_id() -> SessionId {
    format!("local-{}", Uuid::new_v4().simple())
}

impl FlowController {
    /// A flow waiting for an email address.
    pub fn new() -> Self {
        Self {
            step: FlowStep::Initial,
            email: String::new(),
            session_id: None,
            questions: Vec::new(),
            current_index: 1,
            answers: BTreeMap::new(),
        }
    }

    /// The current step.
    pub fn step(&self) -> FlowStep {
        self.step
    }

    /// The email entered at the start.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The session in use, once the flow has begun.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// The loaded questions, ascending by order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Answers cached so far, keyed by question.
    pub fn answers(&self) -> &BTreeMap<QuestionId, CachedAnswer> {
        &self.answers
    }

    /// Order of the question being asked. Starts at 1.
    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    /// Number of loaded questions.
    pub fn total_questions(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    /// Progress through the questions, 0 to 100.
    pub fn progress_percent(&self) -> u32 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        let index = u64::from(self.current_index.min(total));
        (index * 100 / u64::from(total)) as u32
    }

    /// Whether the current question is the last one.
    pub fn is_last_question(&self) -> bool {
        let total = self.total_questions();
        total > 0 && self.current_index == total
    }

    /// The question whose order is the current index.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.iter().find(|q| q.order == self.current_index)
    }

    /// The pet name to substitute into questions.
    ///
    /// This is the cached answer to the first-pet question when one is
    /// non-empty, else the default.
    pub fn pet_name(&self) -> String {
        self.questions
            .iter()
            .filter(|q| q.question_text.contains(PET_NAME_TOPIC))
            .find_map(|q| self.answers.get(&q.id))
            .map(|a| a.answer_text.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_PET_NAME)
            .to_string()
    }

    /// Text of the current question with the pet name substituted.
    pub fn rendered_question(&self) -> Option<String> {
        let pet_name = self.pet_name();
        self.current_question().map(|q| q.render(&pet_name))
    }

    fn expect_step(&self, expected: FlowStep, label: &'static str) -> RecoveryResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(RecoveryError::UnexpectedStep {
                expected: label,
                actual: self.step,
            })
        }
    }

    /// Start the flow with an email and the outcome of session creation.
    ///
    /// A failed session request does not block the flow; a local session ID
    /// is used instead.
    pub fn begin<E: fmt::Display>(
        &mut self,
        email: &str,
        issued: Result<SessionId, E>,
    ) -> RecoveryResult<()> {
        self.expect_step(FlowStep::Initial, "initial")?;
        let email = email.trim();
        if email.is_empty() {
            return Err(RecoveryError::EmailRequired);
        }

        let session_id = match issued {
            Ok(id) => id,
            Err(err) => {
                let id = fallback_session_id();
                warn!(error = %err, session_id = %id, "session request failed, continuing locally");
                id
            }
        };
        debug!(%email, %session_id, "recovery flow started");

        self.email = email.to_string();
        self.session_id = Some(session_id);
        self.step = FlowStep::Loading(LoadingPhase::AccountLookup);
        Ok(())
    }

    /// Replace the question list.
    pub fn load_questions(&mut self, mut questions: Vec<Question>) {
        questions.sort_by_key(|q| q.order);
        self.questions = questions;
        self.current_index = self.current_index.min(self.total_questions()).max(1);
    }

    /// Leave the loading screen.
    pub fn finish_loading(&mut self) -> RecoveryResult<FlowStep> {
        self.step = match self.step {
            FlowStep::Loading(LoadingPhase::AccountLookup) => FlowStep::Questions,
            FlowStep::Loading(LoadingPhase::Finalizing) => FlowStep::Final,
            actual => {
                return Err(RecoveryError::UnexpectedStep {
                    expected: "loading",
                    actual,
                });
            }
        };
        Ok(self.step)
    }

    /// Hand in an answer to the current question with the backend's verdict.
    ///
    /// Answering the last question always finalizes, even when the backend
    /// refused it.
    pub fn record_submission<E: fmt::Display>(
        &mut self,
        answer: &str,
        outcome: Result<SubmitReceipt, E>,
    ) -> RecoveryResult<Advance> {
        self.expect_step(FlowStep::Questions, "questions")?;
        let question_id = self
            .current_question()
            .map(|q| q.id)
            .ok_or(RecoveryError::NoActiveQuestion(self.current_index))?;
        let was_last = self.is_last_question();

        let receipt = match outcome {
            Ok(receipt) => receipt,
            Err(err) if was_last => {
                warn!(error = %err, "final answer failed to submit, finalizing anyway");
                self.step = FlowStep::Loading(LoadingPhase::Finalizing);
                return Ok(Advance::Finalizing);
            }
            Err(err) => {
                warn!(error = %err, question_id, "answer rejected");
                return Ok(Advance::Rejected(err.to_string()));
            }
        };

        self.answers.insert(
            question_id,
            CachedAnswer {
                question_id,
                answer_text: answer.to_string(),
            },
        );

        if was_last {
            self.step = FlowStep::Loading(LoadingPhase::Finalizing);
            return Ok(Advance::Finalizing);
        }

        match receipt.next_question_id {
            Some(next) => {
                self.current_index = next.min(self.total_questions()).max(1);
                Ok(Advance::Next(self.current_index))
            }
            None => Ok(Advance::Stayed),
        }
    }

    /// Step back one question. Never goes below the first.
    pub fn previous(&mut self) -> RecoveryResult<u32> {
        self.expect_step(FlowStep::Questions, "questions")?;
        self.current_index = self.current_index.saturating_sub(1).max(1);
        Ok(self.current_index)
    }

    /// Throw everything away and return to the email prompt.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sl_core::QuestionStore;

    fn receipt(next: Option<u32>) -> Result<SubmitReceipt, String> {
        Ok(SubmitReceipt {
            success: true,
            message: "ok".into(),
            next_question_id: next,
        })
    }

    fn in_questions() -> FlowController {
        let mut flow = FlowController::new();
        flow.begin("a@b.c", Ok::<_, String>("s1".to_string())).unwrap();
        flow.load_questions(QuestionStore::classic().list());
        flow.finish_loading().unwrap();
        flow
    }

    #[test]
    fn starts_initial() {
        let flow = FlowController::new();
        assert_eq!(flow.step(), FlowStep::Initial);
        assert_eq!(flow.current_index(), 1);
        assert_eq!(flow.session_id(), None);
        assert_eq!(flow.progress_percent(), 0);
    }

    #[test]
    fn empty_email_is_refused() {
        let mut flow = FlowController::new();
        let err = flow.begin("   ", Ok::<_, String>("s".into())).unwrap_err();
        assert!(matches!(err, RecoveryError::EmailRequired));
        assert_eq!(flow.step(), FlowStep::Initial);
    }

    #[test]
    fn begin_moves_to_account_lookup() {
        let mut flow = FlowController::new();
        flow.begin("user@example.com", Ok::<_, String>("abc".into())).unwrap();
        assert_eq!(flow.step(), FlowStep::Loading(LoadingPhase::AccountLookup));
        assert_eq!(flow.session_id(), Some("abc"));
        assert_eq!(flow.email(), "user@example.com");
    }

    #[test]
    fn failed_session_uses_local_id() {
        let mut flow = FlowController::new();
        flow.begin("user@example.com", Err("connection refused")).unwrap();
        let id = flow.session_id().unwrap();
        assert!(id.starts_with("local-"));
        assert_eq!(flow.step(), FlowStep::Loading(LoadingPhase::AccountLookup));
    }

    #[test]
    fn begin_twice_is_unexpected() {
        let mut flow = in_questions();
        let err = flow.begin("x@y.z", Ok::<_, String>("s".into())).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::UnexpectedStep {
                actual: FlowStep::Questions,
                ..
            }
        ));
    }

    #[test]
    fn answer_advances() {
        let mut flow = in_questions();
        assert_eq!(flow.progress_percent(), 10);
        let advance = flow.record_submission("Rex", receipt(Some(2))).unwrap();
        assert_eq!(advance, Advance::Next(2));
        assert_eq!(flow.current_index(), 2);
        assert_eq!(flow.progress_percent(), 20);
        assert_eq!(flow.answers()[&1].answer_text, "Rex");
    }

    #[test]
    fn rejected_answer_stays_put() {
        let mut flow = in_questions();
        let advance = flow.record_submission("Rex", Err("server down")).unwrap();
        assert_eq!(advance, Advance::Rejected("server down".into()));
        assert_eq!(flow.current_index(), 1);
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn missing_next_stays() {
        let mut flow = in_questions();
        assert_eq!(flow.record_submission("x", receipt(None)).unwrap(), Advance::Stayed);
        assert_eq!(flow.current_index(), 1);
    }

    #[test]
    fn last_answer_finalizes_then_final() {
        let mut flow = in_questions();
        for order in 1..10 {
            flow.record_submission("x", receipt(Some(order + 1))).unwrap();
        }
        assert!(flow.is_last_question());
        assert_eq!(flow.progress_percent(), 100);
        assert_eq!(flow.record_submission("x", receipt(None)).unwrap(), Advance::Finalizing);
        assert_eq!(flow.step(), FlowStep::Loading(LoadingPhase::Finalizing));
        assert_eq!(flow.finish_loading().unwrap(), FlowStep::Final);
    }

    #[test]
    fn last_answer_finalizes_even_on_failure() {
        let mut flow = in_questions();
        for order in 1..10 {
            flow.record_submission("x", receipt(Some(order + 1))).unwrap();
        }
        assert_eq!(
            flow.record_submission("x", Err("timeout")).unwrap(),
            Advance::Finalizing
        );
        assert_eq!(flow.step(), FlowStep::Loading(LoadingPhase::Finalizing));
    }

    #[test]
    fn previous_floors_at_one() {
        let mut flow = in_questions();
        flow.record_submission("x", receipt(Some(2))).unwrap();
        assert_eq!(flow.previous().unwrap(), 1);
        assert_eq!(flow.previous().unwrap(), 1);
    }

    #[test]
    fn previous_outside_questions_is_unexpected() {
        let mut flow = FlowController::new();
        assert!(flow.previous().is_err());
    }

    #[test]
    fn pet_name_comes_from_first_answer() {
        let mut flow = in_questions();
        assert_eq!(flow.pet_name(), "Fluffy");
        flow.record_submission("  Rex ", receipt(Some(2))).unwrap();
        assert_eq!(flow.pet_name(), "Rex");

        // Walk to the placeholder question.
        for order in 2..6 {
            flow.record_submission("x", receipt(Some(order + 1))).unwrap();
        }
        let text = flow.rendered_question().unwrap();
        assert!(text.contains("Rex"));
        assert!(!text.contains("[PET_NAME]"));
    }

    #[test]
    fn blank_pet_answer_keeps_default() {
        let mut flow = in_questions();
        flow.record_submission("   ", receipt(Some(2))).unwrap();
        assert_eq!(flow.pet_name(), "Fluffy");
    }

    #[test]
    fn finish_loading_outside_loading_is_unexpected() {
        let mut flow = FlowController::new();
        assert!(matches!(
            flow.finish_loading(),
            Err(RecoveryError::UnexpectedStep {
                expected: "loading",
                actual: FlowStep::Initial
            })
        ));
    }

    #[test]
    fn reset_forgets_everything() {
        let mut flow = in_questions();
        flow.record_submission("Rex", receipt(Some(2))).unwrap();
        flow.reset();
        assert_eq!(flow.step(), FlowStep::Initial);
        assert_eq!(flow.current_index(), 1);
        assert!(flow.answers().is_empty());
        assert!(flow.questions().is_empty());
        assert_eq!(flow.session_id(), None);
    }

    #[test]
    fn no_questions_means_no_active_question() {
        let mut flow = FlowController::new();
        flow.begin("a@b.c", Ok::<_, String>("s".into())).unwrap();
        flow.finish_loading().unwrap();
        assert!(matches!(
            flow.record_submission("x", receipt(None)),
            Err(RecoveryError::NoActiveQuestion(1))
        ));
    }

    #[test]
    fn status_lines_only_when_finalizing() {
        assert!(LoadingPhase::AccountLookup.status_lines().is_empty());
        assert_eq!(LoadingPhase::Finalizing.status_lines().len(), 5);
    }

    proptest! {
        #[test]
        fn index_stays_in_range(moves in proptest::collection::vec(0u8..3, 0..40)) {
            let mut flow = in_questions();
            for m in moves {
                match m {
                    0 => { flow.previous().unwrap(); }
                    1 => {
                        let next = flow.current_index() + 1;
                        if flow.is_last_question() { break; }
                        flow.record_submission("x", receipt(Some(next))).unwrap();
                    }
                    _ => {
                        if flow.is_last_question() { break; }
                        flow.record_submission("x", Err("nope")).unwrap();
                    }
                }
                prop_assert!((1..=10).contains(&flow.current_index()));
            }
        }
    }
}
