//! Core types for SecureLogin: security questions, submitted answers, and
//! the in-memory stores that own them.
//!
//! Nothing here touches the network or the disk. A [`QuestionStore`] is
//! seeded once (either the classic lineup or a reproducible selection from
//! the built-in pool) and an [`AnswerStore`] grows append-only for the
//! lifetime of the process.

/// Submitted answers.
pub mod answer;
/// Error types used throughout the crate.
pub mod error;
/// The built-in pool of absurd security questions.
pub mod pool;
/// Security question records and placeholder rendering.
pub mod question;
/// Linear-congruential lineup selection.
pub mod seed;
/// In-memory question and answer stores.
pub mod store;

/// Re-export answer types.
pub use answer::{Answer, AnswerId, NewAnswer, SessionId};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export the built-in pool.
pub use pool::{builtin_pool, classic_lineup};
/// Re-export question types.
pub use question::{
    DEFAULT_PET_NAME, FLOW_LENGTH, MAX_ABSURDITY, MIN_ABSURDITY, NewQuestion,
    PET_NAME_PLACEHOLDER, Question, QuestionId, QuestionType,
};
/// Re-export seeding helpers.
pub use seed::{Lcg, select_lineup};
/// Re-export the stores.
pub use store::{AnswerStore, QuestionStore};
