//! Password recovery for SecureLogin.
//!
//! [`RecoveryDesk`] is the server side: it owns the question catalog, the
//! answer log and response selection. [`FlowController`] is the client side:
//! a state machine from email entry through the questions to the final
//! message. [`RecoveryWizard`] ties the two together through the
//! [`RecoveryBackend`] trait.

pub mod backend;
pub mod config;
pub mod desk;
pub mod error;
pub mod flow;
pub mod wizard;

pub use backend::RecoveryBackend;
pub use config::RecoveryConfig;
pub use desk::{AnswerSubmission, RecoveryDesk, SubmitReceipt, next_order};
pub use error::{RecoveryError, RecoveryResult};
pub use flow::{
    Advance, CachedAnswer, FINAL_CONFESSION, FINAL_MESSAGE, FINAL_STATUS_LINES, FlowController,
    FlowStep, LoadingPhase, fallback_session_id,
};
pub use wizard::{RecoveryWizard, SUBMIT_FAILED, WizardReply};
