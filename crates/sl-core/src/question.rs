use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Identifier assigned to a question by the [`QuestionStore`](crate::QuestionStore).
pub type QuestionId = u32;

/// Token substituted with the user's pet name at render time.
pub const PET_NAME_PLACEHOLDER: &str = "[PET_NAME]";

/// Pet name used when the user never told us theirs.
pub const DEFAULT_PET_NAME: &str = "Fluffy";

/// Number of questions in a recovery flow.
pub const FLOW_LENGTH: usize = 10;

/// Lowest absurdity level.
pub const MIN_ABSURDITY: u8 = 1;

/// Highest absurdity level.
pub const MAX_ABSURDITY: u8 = 10;

/// The widget a question is answered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Free-form text.
    Text,
    /// Exactly one of the listed options.
    Radio,
    /// Any number of the listed options, joined with ", ".
    Checkbox,
    /// An integer on a 1-10 slider.
    Range,
    /// Exactly one option picked from a dropdown.
    Select,
}

impl QuestionType {
    /// Every question type, in declaration order.
    pub const ALL: [QuestionType; 5] = [
        Self::Text,
        Self::Radio,
        Self::Checkbox,
        Self::Range,
        Self::Select,
    ];

    /// Single-answer option pickers (radio buttons and dropdowns).
    pub fn is_multiple_choice(self) -> bool {
        matches!(self, Self::Radio | Self::Select)
    }

    /// Whether the question presents a list of options at all.
    pub fn has_options(self) -> bool {
        matches!(self, Self::Radio | Self::Checkbox | Self::Select)
    }

    /// Lowercase wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Range => "range",
            Self::Select => "select",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownQuestionType(s.to_string()))
    }
}

/// A stored security question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Store-assigned identifier.
    pub id: QuestionId,
    /// The prompt. May contain [`PET_NAME_PLACEHOLDER`].
    pub question_text: String,
    /// Widget used to answer.
    pub question_type: QuestionType,
    /// Choices for option-based widgets; empty otherwise.
    pub options: Vec<String>,
    /// Position in the flow, starting at 1.
    pub order: u32,
    /// Cosmetic intensity, 1-10.
    pub absurdity_level: u8,
}

impl Question {
    /// Whether the text still carries the pet-name placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.question_text.contains(PET_NAME_PLACEHOLDER)
    }

    /// The question text with every placeholder replaced by `pet_name`.
    pub fn render(&self, pet_name: &str) -> String {
        render_placeholder(&self.question_text, pet_name)
    }
}

/// A question before the store has given it an ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuestion {
    /// The prompt.
    pub question_text: String,
    /// Widget used to answer.
    pub question_type: QuestionType,
    /// Choices; missing in JSON means none.
    #[serde(default)]
    pub options: Vec<String>,
    /// Position in the flow.
    pub order: u32,
    /// Cosmetic intensity, 1-10.
    pub absurdity_level: u8,
}

impl NewQuestion {
    /// Create a question with no options.
    pub fn new(
        question_text: impl Into<String>,
        question_type: QuestionType,
        order: u32,
        absurdity_level: u8,
    ) -> Self {
        Self {
            question_text: question_text.into(),
            question_type,
            options: Vec::new(),
            order,
            absurdity_level,
        }
    }

    /// Set the options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the text carries the pet-name placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.question_text.contains(PET_NAME_PLACEHOLDER)
    }

    /// Replace the placeholder in place.
    pub fn substitute_pet_name(&mut self, pet_name: &str) {
        self.question_text = render_placeholder(&self.question_text, pet_name);
    }

    /// Attach an ID.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            question_text: self.question_text,
            question_type: self.question_type,
            options: self.options,
            order: self.order,
            absurdity_level: self.absurdity_level,
        }
    }
}

fn render_placeholder(text: &str, pet_name: &str) -> String {
    text.replace(PET_NAME_PLACEHOLDER, pet_name)
}
