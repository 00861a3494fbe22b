//! Witty response selection for SecureLogin.
//!
//! Maps a submitted answer to a canned reply. Three tables drive it: the
//! ordered topic rules (question text → bucket), the classic ID table used
//! when no text is available, and the literal option replies for
//! multiple-choice questions.

pub mod bucket;
pub mod options;
pub mod rules;
pub mod selector;

pub use bucket::Bucket;
pub use options::{
    MULTIPLE_CHOICE_REMARKS, OptionMatch, OptionRule, option_reply, pick_remark,
};
pub use rules::{Needles, TOPIC_RULES, TopicRule, bucket_for_id, classify};
pub use selector::{Quip, QuipSelector, QuipSource};
