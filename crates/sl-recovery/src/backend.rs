//! The seam between a recovery flow and whatever serves it.

use std::sync::Arc;

use sl_core::{Question, SessionId};

use crate::desk::{AnswerSubmission, RecoveryDesk, SubmitReceipt};
use crate::error::RecoveryResult;

/// Operations a recovery flow needs from its server.
pub trait RecoveryBackend {
    /// Issue a session identifier.
    fn create_session(&self) -> RecoveryResult<SessionId>;

    /// Fetch the question lineup.
    fn questions(&self) -> RecoveryResult<Vec<Question>>;

    /// Submit one answer.
    fn submit_answer(&self, submission: &AnswerSubmission) -> RecoveryResult<SubmitReceipt>;
}

impl RecoveryBackend for RecoveryDesk {
    fn create_session(&self) -> RecoveryResult<SessionId> {
        Ok(RecoveryDesk::create_session(self))
    }

    fn questions(&self) -> RecoveryResult<Vec<Question>> {
        RecoveryDesk::questions(self)
    }

    fn submit_answer(&self, submission: &AnswerSubmission) -> RecoveryResult<SubmitReceipt> {
        self.submit(submission)
    }
}

impl<B: RecoveryBackend + ?Sized> RecoveryBackend for Arc<B> {
    fn create_session(&self) -> RecoveryResult<SessionId> {
        (**self).create_session()
    }

    fn questions(&self) -> RecoveryResult<Vec<Question>> {
        (**self).questions()
    }

    fn submit_answer(&self, submission: &AnswerSubmission) -> RecoveryResult<SubmitReceipt> {
        (**self).submit_answer(submission)
    }
}
