use crate::question::QuestionId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when reading or growing the stores.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No question has the requested ID.
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),

    /// Absurdity levels run from 1 to 10.
    #[error("absurdity level {0} is outside 1-10")]
    InvalidAbsurdity(u8),

    /// Orders start at 1 and leave no gaps.
    #[error("question order {0} is out of range")]
    InvalidOrder(u32),

    /// Another question already occupies this order.
    #[error("order {0} is already taken by another question")]
    DuplicateOrder(u32),

    /// A question type string that is not one of the known widgets.
    #[error("unknown question type: \"{0}\"")]
    UnknownQuestionType(String),
}
