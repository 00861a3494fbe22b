//! A recovery flow bound to a backend.

use tracing::debug;

use sl_quips::QuipSelector;

use crate::backend::RecoveryBackend;
use crate::desk::AnswerSubmission;
use crate::error::{RecoveryError, RecoveryResult};
use crate::flow::{Advance, FlowController, FlowStep, LoadingPhase};

/// Shown when an answer could not be submitted.
pub const SUBMIT_FAILED: &str = "Failed to submit your answer. Please try again.";

/// What the user sees after answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardReply {
    /// The response to display.
    pub message: String,
    /// Where the flow went.
    pub advance: Advance,
}

/// Runs a [`FlowController`] against a [`RecoveryBackend`].
#[derive(Debug)]
pub struct RecoveryWizard<B> {
    backend: B,
    flow: FlowController,
    quips: QuipSelector,
}

impl<B: RecoveryBackend> RecoveryWizard<B> {
    /// Create a wizard over `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            flow: FlowController::new(),
            quips: QuipSelector::default(),
        }
    }

    /// Use `quips` for responses when the backend sends an empty message.
    pub fn with_quips(mut self, quips: QuipSelector) -> Self {
        self.quips = quips;
        self
    }

    /// The underlying flow.
    pub fn flow(&self) -> &FlowController {
        &self.flow
    }

    /// The backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Enter the email, open a session and load the questions.
    pub fn start(&mut self, email: &str) -> RecoveryResult<LoadingPhase> {
        let issued = self.backend.create_session();
        self.flow.begin(email, issued)?;

        match self.backend.questions() {
            Ok(questions) => {
                debug!(count = questions.len(), "questions loaded");
                self.flow.load_questions(questions);
                Ok(LoadingPhase::AccountLookup)
            }
            Err(err) => {
                self.flow.reset();
                Err(err)
            }
        }
    }

    /// Leave the current loading screen.
    pub fn finish_loading(&mut self) -> RecoveryResult<FlowStep> {
        self.flow.finish_loading()
    }

    /// Answer the current question.
    pub fn answer(&mut self, text: &str) -> RecoveryResult<WizardReply> {
        if self.flow.step() != FlowStep::Questions {
            return Err(RecoveryError::UnexpectedStep {
                expected: "questions",
                actual: self.flow.step(),
            });
        }
        let question = self
            .flow
            .current_question()
            .cloned()
            .ok_or(RecoveryError::NoActiveQuestion(self.flow.current_index()))?;

        let submission = AnswerSubmission::new(
            question.id,
            text,
            self.flow.session_id().unwrap_or_default(),
        );
        let outcome = self.backend.submit_answer(&submission);

        let message = match &outcome {
            Ok(receipt) if !receipt.message.is_empty() => receipt.message.clone(),
            Ok(_) => self
                .quips
                .witty_response(
                    question.question_type,
                    text,
                    question.id,
                    Some(&question.question_text),
                )
                .to_string(),
            Err(_) => SUBMIT_FAILED.to_string(),
        };
        let advance = self.flow.record_submission(text, outcome)?;

        Ok(WizardReply { message, advance })
    }

    /// Go back one question.
    pub fn back(&mut self) -> RecoveryResult<u32> {
        self.flow.previous()
    }

    /// Return to the email prompt.
    pub fn start_over(&mut self) {
        self.flow.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use sl_core::{Question, SessionId};

    use crate::config::RecoveryConfig;
    use crate::desk::{RecoveryDesk, SubmitReceipt};

    fn wizard() -> RecoveryWizard<RecoveryDesk> {
        let desk = RecoveryDesk::new(&RecoveryConfig::default().with_quip_seed(1));
        RecoveryWizard::new(desk).with_quips(QuipSelector::new(Some(1)))
    }

    /// A backend that can be told to fail.
    struct Flaky {
        desk: RecoveryDesk,
        fail_sessions: bool,
        fail_submits: Cell<bool>,
        blank_messages: bool,
    }

    impl Flaky {
        fn new() -> Self {
            Self {
                desk: RecoveryDesk::default(),
                fail_sessions: false,
                fail_submits: Cell::new(false),
                blank_messages: false,
            }
        }
    }

    impl RecoveryBackend for Flaky {
        fn create_session(&self) -> RecoveryResult<SessionId> {
            if self.fail_sessions {
                return Err(RecoveryError::Backend("connection refused".into()));
            }
            Ok(self.desk.create_session())
        }

        fn questions(&self) -> RecoveryResult<Vec<Question>> {
            self.desk.questions()
        }

        fn submit_answer(&self, submission: &AnswerSubmission) -> RecoveryResult<SubmitReceipt> {
            if self.fail_submits.get() {
                return Err(RecoveryError::Backend("timeout".into()));
            }
            let mut receipt = self.desk.submit(submission)?;
            if self.blank_messages {
                receipt.message.clear();
            }
            Ok(receipt)
        }
    }

    #[test]
    fn full_run() {
        let mut w = wizard();
        assert_eq!(w.start("me@example.com").unwrap(), LoadingPhase::AccountLookup);
        assert_eq!(w.finish_loading().unwrap(), FlowStep::Questions);

        for order in 1..10 {
            let reply = w.answer("something").unwrap();
            assert_eq!(reply.advance, Advance::Next(order + 1));
            assert!(!reply.message.is_empty());
        }
        let reply = w.answer("nothing").unwrap();
        assert_eq!(reply.advance, Advance::Finalizing);
        assert_eq!(w.finish_loading().unwrap(), FlowStep::Final);

        let session = w.flow().session_id().unwrap().to_string();
        assert_eq!(w.backend().answers_for_session(&session).unwrap().len(), 10);

        w.start_over();
        assert_eq!(w.flow().step(), FlowStep::Initial);
    }

    #[test]
    fn answer_before_start_is_unexpected() {
        let mut w = wizard();
        assert!(matches!(
            w.answer("x"),
            Err(RecoveryError::UnexpectedStep {
                actual: FlowStep::Initial,
                ..
            })
        ));
    }

    #[test]
    fn empty_email_refused() {
        let mut w = wizard();
        assert!(matches!(w.start(""), Err(RecoveryError::EmailRequired)));
    }

    #[test]
    fn session_failure_continues_locally() {
        let mut backend = Flaky::new();
        backend.fail_sessions = true;
        let mut w = RecoveryWizard::new(backend);
        w.start("me@example.com").unwrap();
        assert!(w.flow().session_id().unwrap().starts_with("local-"));
        w.finish_loading().unwrap();
        let reply = w.answer("Rex").unwrap();
        assert_eq!(reply.advance, Advance::Next(2));
    }

    #[test]
    fn submit_failure_keeps_question() {
        let backend = Flaky::new();
        backend.fail_submits.set(true);
        let mut w = RecoveryWizard::new(backend);
        w.start("me@example.com").unwrap();
        w.finish_loading().unwrap();

        let reply = w.answer("Rex").unwrap();
        assert_eq!(reply.message, SUBMIT_FAILED);
        assert!(matches!(reply.advance, Advance::Rejected(_)));
        assert_eq!(w.flow().current_index(), 1);
    }

    #[test]
    fn final_submit_failure_still_finalizes() {
        let mut w = RecoveryWizard::new(Flaky::new());
        w.start("me@example.com").unwrap();
        w.finish_loading().unwrap();
        for _ in 1..10 {
            w.answer("x").unwrap();
        }
        w.backend().fail_submits.set(true);
        assert_eq!(w.answer("x").unwrap().advance, Advance::Finalizing);
    }

    #[test]
    fn blank_message_gets_local_quip() {
        let mut backend = Flaky::new();
        backend.blank_messages = true;
        let mut w = RecoveryWizard::new(backend).with_quips(QuipSelector::new(Some(3)));
        w.start("me@example.com").unwrap();
        w.finish_loading().unwrap();
        let reply = w.answer("Rex").unwrap();
        assert!(sl_quips::Bucket::PetName.lines().contains(&reply.message.as_str()));
    }

    #[test]
    fn back_then_answer_again() {
        let mut w = wizard();
        w.start("me@example.com").unwrap();
        w.finish_loading().unwrap();
        w.answer("Rex").unwrap();
        assert_eq!(w.back().unwrap(), 1);
        w.answer("Max").unwrap();
        assert_eq!(w.flow().pet_name(), "Max");
    }
}
