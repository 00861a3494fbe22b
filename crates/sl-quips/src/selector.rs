//! Response selection.
//!
//! [`QuipSelector`] owns the RNG and applies the rule tables. Selection
//! never fails: anything unrecognised lands in a generic list.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use sl_core::{Question, QuestionId, QuestionType};

use crate::bucket::Bucket;
use crate::options::{pick_remark, rule_for};
use crate::rules::{bucket_for_id, classify};

/// Which rule produced a quip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuipSource {
    /// A literal option reply.
    OptionRule,
    /// The bucket for the question's topic.
    Topic,
    /// The bucket for the question's ID (no text available).
    QuestionId,
    /// The generic multiple-choice remarks.
    MultipleChoice,
}

/// A chosen response line and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quip {
    /// The bucket drawn from, if any.
    pub bucket: Option<Bucket>,
    /// The line itself. Never empty.
    pub line: &'static str,
    /// The rule that produced it.
    pub source: QuipSource,
}

/// Picks witty responses to submitted answers.
#[derive(Debug, Clone)]
pub struct QuipSelector {
    rng: StdRng,
}

impl Default for QuipSelector {
    fn default() -> Self {
        Self::new(None)
    }
}

impl QuipSelector {
    /// Create a selector. `None` seeds from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// React to an answer using the question text when present, else its ID.
    ///
    /// The question type and answer do not influence the bucket; they are
    /// accepted so callers can pass whatever they know about the submission.
    pub fn witty_response(
        &mut self,
        _question_type: QuestionType,
        _answer: &str,
        question_id: QuestionId,
        question_text: Option<&str>,
    ) -> &'static str {
        let bucket = match question_text {
            Some(text) => classify(text),
            None => bucket_for_id(question_id),
        };
        bucket.pick(&mut self.rng)
    }

    /// React to an answer to a stored question.
    ///
    /// Radio and select answers first try the literal option replies for the
    /// question's topic. Otherwise a recognised topic draws from its bucket.
    /// Unrecognised multiple-choice questions get a generic multiple-choice
    /// remark; everything else draws from [`Bucket::Generic`].
    pub fn respond(&mut self, question: &Question, answer: &str) -> Quip {
        let text = question.question_text.as_str();

        if question.question_type.is_multiple_choice()
            && let Some(line) = rule_for(text).and_then(|rule| rule.reply(answer))
        {
            return Quip {
                bucket: None,
                line,
                source: QuipSource::OptionRule,
            };
        }

        let bucket = classify(text);
        if bucket != Bucket::Generic {
            return Quip {
                bucket: Some(bucket),
                line: bucket.pick(&mut self.rng),
                source: QuipSource::Topic,
            };
        }

        if question.question_type.is_multiple_choice() {
            return Quip {
                bucket: None,
                line: pick_remark(&mut self.rng),
                source: QuipSource::MultipleChoice,
            };
        }

        Quip {
            bucket: Some(Bucket::Generic),
            line: Bucket::Generic.pick(&mut self.rng),
            source: QuipSource::Topic,
        }
    }

    /// React to an answer when only the question ID is known.
    pub fn respond_by_id(&mut self, question_id: QuestionId) -> Quip {
        let bucket = bucket_for_id(question_id);
        Quip {
            bucket: Some(bucket),
            line: bucket.pick(&mut self.rng),
            source: QuipSource::QuestionId,
        }
    }
}
