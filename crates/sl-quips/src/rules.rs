//! Ordered topic rules: question text → bucket.
//!
//! Rules are evaluated top to bottom and the first match wins, so the table
//! order is the priority order. The combined "pet and password" rule sits
//! after every single-keyword rule that could also mention a pet or a
//! password.

use sl_core::QuestionId;

use crate::bucket::Bucket;

/// Substring test against question text. Case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Needles {
    /// Matches when any needle occurs.
    Any(&'static [&'static str]),
    /// Matches when every needle occurs.
    All(&'static [&'static str]),
}

impl Needles {
    /// Test `text` against the needles.
    pub fn matches(self, text: &str) -> bool {
        match self {
            Self::Any(needles) => needles.iter().any(|n| text.contains(n)),
            Self::All(needles) => needles.iter().all(|n| text.contains(n)),
        }
    }
}

/// One row of the topic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicRule {
    /// What the question text must contain.
    pub needles: Needles,
    /// Where matching questions draw their responses.
    pub bucket: Bucket,
}

const fn any(needles: &'static [&'static str], bucket: Bucket) -> TopicRule {
    TopicRule {
        needles: Needles::Any(needles),
        bucket,
    }
}

const fn all(needles: &'static [&'static str], bucket: Bucket) -> TopicRule {
    TopicRule {
        needles: Needles::All(needles),
        bucket,
    }
}

/// The topic table, highest priority first.
pub const TOPIC_RULES: &[TopicRule] = &[
    any(&["first pet"], Bucket::PetName),
    any(&["street did you grow up"], Bucket::Street),
    any(&["mother's maiden name"], Bucket::MaidenName),
    any(&["digit of π", "digit of pi"], Bucket::Pi),
    any(&["mathematical equation"], Bucket::Pi),
    any(&["password was a sandwich"], Bucket::Sandwich),
    any(&["ice cream flavor"], Bucket::IceCream),
    any(&["password wear"], Bucket::Sandwich),
    any(&["password's personality"], Bucket::Compliment),
    any(&["lie on forms"], Bucket::Lies),
    any(&["zombie apocalypse"], Bucket::Zombie),
    all(&["pet", "password"], Bucket::PetPassword),
    any(&["invisible friend", "imaginary friend"], Bucket::Childhood),
    any(&["draw a picture", "beautiful"], Bucket::PasswordBeauty),
    any(&["theme song", "genre"], Bucket::Music),
    any(&["password is feeling insecure", "compliment"], Bucket::Compliment),
    any(&["political office", "campaign slogan"], Bucket::CampaignSlogan),
    any(&["uploaded to the cloud", "username"], Bucket::CloudUsername),
    any(&["support group"], Bucket::SupportGroup),
    any(&["websites you visit", "what would it think"], Bucket::WebsitesJudgment),
    any(&["dreams"], Bucket::Generic),
    any(&["embarrassing"], Bucket::Embarrassing),
];

/// The first rule whose needles match `question_text`.
pub fn matching_rule(question_text: &str) -> Option<&'static TopicRule> {
    TOPIC_RULES
        .iter()
        .find(|rule| rule.needles.matches(question_text))
}

/// Classify question text into a bucket, falling back to [`Bucket::Generic`].
pub fn classify(question_text: &str) -> Bucket {
    matching_rule(question_text).map_or(Bucket::Generic, |rule| rule.bucket)
}

/// Bucket for a classic-lineup question ID, used when no text is available.
pub fn bucket_for_id(question_id: QuestionId) -> Bucket {
    match question_id {
        1 => Bucket::PetName,
        2 => Bucket::Pi,
        3 => Bucket::Sandwich,
        4 => Bucket::Lies,
        5 => Bucket::Zombie,
        6 => Bucket::PetPassword,
        7 => Bucket::PasswordBeauty,
        8 => Bucket::Music,
        9 => Bucket::Compliment,
        10 => Bucket::Embarrassing,
        _ => Bucket::Generic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::classic_lineup;

    #[test]
    fn classic_questions_classify_like_their_ids() {
        for (i, q) in classic_lineup().iter().enumerate() {
            assert_eq!(
                classify(&q.question_text),
                bucket_for_id(i as u32 + 1),
                "{}",
                q.question_text
            );
        }
    }

    #[test]
    fn pet_and_password_needs_both() {
        assert_eq!(
            classify("What did your pet Rex think of your password?"),
            Bucket::PetPassword
        );
        assert_eq!(classify("Does your pet like you?"), Bucket::Generic);
    }

    #[test]
    fn specific_rules_beat_pet_and_password() {
        // Mentions both "pet" and "password" but is about the first pet.
        assert_eq!(
            classify("Was your first pet also your password?"),
            Bucket::PetName
        );
        // "password wear" outranks the combined rule.
        assert_eq!(
            classify("What would your password wear to your pet's birthday?"),
            Bucket::Sandwich
        );
    }

    #[test]
    fn pi_matches_either_spelling() {
        assert_eq!(classify("What is the 3rd digit of pi?"), Bucket::Pi);
        assert_eq!(classify("What is the 17th digit of π?"), Bucket::Pi);
    }

    #[test]
    fn dreams_are_generic_even_with_a_rule() {
        assert!(matching_rule("What are your password's dreams for the future?").is_some());
        assert_eq!(
            classify("What are your password's dreams for the future?"),
            Bucket::Generic
        );
    }

    #[test]
    fn unknown_text_is_generic() {
        assert!(matching_rule("What is your favorite color?").is_none());
        assert_eq!(classify("What is your favorite color?"), Bucket::Generic);
        assert_eq!(classify(""), Bucket::Generic);
    }

    #[test]
    fn unmapped_ids_are_generic() {
        assert_eq!(bucket_for_id(0), Bucket::Generic);
        assert_eq!(bucket_for_id(11), Bucket::Generic);
        assert_eq!(bucket_for_id(u32::MAX), Bucket::Generic);
    }
}
