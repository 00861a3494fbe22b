//! The built-in question pool.
//!
//! Every absurdity level from 1 to 10 has at least one entry, so a seeded
//! lineup never needs to fall back to gap filling with this pool. The first
//! ten entries are the classic lineup, in order.

use crate::question::{NewQuestion, QuestionType};

/// Number of entries at the front of [`builtin_pool`] that form the classic lineup.
pub const CLASSIC_LEN: usize = 10;

struct PoolEntry {
    text: &'static str,
    kind: QuestionType,
    options: &'static [&'static str],
    level: u8,
}

const POOL: &[PoolEntry] = &[
    // Classic lineup
    PoolEntry {
        text: "What was the name of your first pet?",
        kind: QuestionType::Text,
        options: &[],
        level: 1,
    },
    PoolEntry {
        text: "What is the 17th digit of π?",
        kind: QuestionType::Radio,
        options: &["9", "5", "3", "I don't memorize irrational numbers"],
        level: 3,
    },
    PoolEntry {
        text: "If your password was a sandwich, what kind would it be?",
        kind: QuestionType::Text,
        options: &[],
        level: 4,
    },
    PoolEntry {
        text: "How many times did you lie on forms today?",
        kind: QuestionType::Radio,
        options: &[
            "None, I am a paragon of honesty",
            "1-3 times (rookie numbers)",
            "4+ times (professional)",
            "I'm lying right now",
        ],
        level: 5,
    },
    PoolEntry {
        text: "In the event of a zombie apocalypse, what would be your weapon of choice?",
        kind: QuestionType::Select,
        options: &[
            "Baseball bat",
            "Chainsaw",
            "Frying pan",
            "Biting sarcasm",
            "Keyboard warrior skills",
        ],
        level: 6,
    },
    PoolEntry {
        text: "What did your pet [PET_NAME] think of your first password?",
        kind: QuestionType::Radio,
        options: &[
            "They loved it",
            "They thought it was too predictable",
            "They never saw it (I'm security conscious)",
            "Wait, my pet can read?",
        ],
        level: 7,
    },
    PoolEntry {
        text: "Please draw a picture of your password in your mind. On a scale of 1-10, how beautiful was it?",
        kind: QuestionType::Range,
        options: &[],
        level: 8,
    },
    PoolEntry {
        text: "If your password had a theme song, which genre would it be?",
        kind: QuestionType::Checkbox,
        options: &[
            "Classical (so sophisticated!)",
            "Heavy Metal (secure but hard to remember)",
            "Pop (probably too common)",
            "Silent movie soundtrack (you use 'password123', don't you?)",
        ],
        level: 8,
    },
    PoolEntry {
        text: "URGENT: Your password is feeling insecure. Write it a compliment:",
        kind: QuestionType::Text,
        options: &[],
        level: 9,
    },
    PoolEntry {
        text: "Final security verification: The most embarrassing thing I've ever done while no one was watching is...",
        kind: QuestionType::Text,
        options: &[],
        level: 10,
    },
    // Extended pool
    PoolEntry {
        text: "What street did you grow up on?",
        kind: QuestionType::Text,
        options: &[],
        level: 1,
    },
    PoolEntry {
        text: "What is your mother's maiden name?",
        kind: QuestionType::Text,
        options: &[],
        level: 1,
    },
    PoolEntry {
        text: "What was the name of your childhood imaginary friend?",
        kind: QuestionType::Text,
        options: &[],
        level: 2,
    },
    PoolEntry {
        text: "What is your favorite ice cream flavor, and is it also your password?",
        kind: QuestionType::Text,
        options: &[],
        level: 2,
    },
    PoolEntry {
        text: "Which mathematical equation best describes your password?",
        kind: QuestionType::Radio,
        options: &[
            "E=mc²",
            "Pythagorean theorem",
            "Fibonacci sequence",
            "Math gives me hives",
        ],
        level: 3,
    },
    PoolEntry {
        text: "What would your password wear to a formal event?",
        kind: QuestionType::Select,
        options: &[
            "A classic tuxedo",
            "An elegant evening gown",
            "Jeans and a t-shirt (it's rebellious)",
            "Birthday suit (it's a nudist)",
            "A tin foil hat (for security)",
        ],
        level: 4,
    },
    PoolEntry {
        text: "How would you describe your password's personality?",
        kind: QuestionType::Radio,
        options: &[
            "Strong and silent type",
            "Bubbly and outgoing",
            "Mysterious and complicated",
            "Boring but reliable",
            "Chaotic evil",
        ],
        level: 5,
    },
    PoolEntry {
        text: "What is your password's greatest fear?",
        kind: QuestionType::Radio,
        options: &[
            "Being forgotten",
            "Being written down on a Post-it note",
            "Being too simple",
            "Password managers (they're taking our jobs!)",
        ],
        level: 6,
    },
    PoolEntry {
        text: "If your password ran for political office, what would its campaign slogan be?",
        kind: QuestionType::Text,
        options: &[],
        level: 7,
    },
    PoolEntry {
        text: "Did your pet [PET_NAME] ever try to guess your password?",
        kind: QuestionType::Radio,
        options: &[
            "They suggested I add more special characters",
            "They tried to eat my keyboard",
            "They thought it was too predictable",
            "Wait, my pet can read?",
        ],
        level: 8,
    },
    PoolEntry {
        text: "If your consciousness were uploaded to the cloud, what username would you choose?",
        kind: QuestionType::Text,
        options: &[],
        level: 9,
    },
    PoolEntry {
        text: "Your password has joined a support group. What is the support group called?",
        kind: QuestionType::Text,
        options: &[],
        level: 9,
    },
    PoolEntry {
        text: "What are your password's dreams for the future?",
        kind: QuestionType::Select,
        options: &[
            "Flying through the internet unsupervised",
            "Being replaced by something stronger",
            "Dating other passwords",
            "World domination",
            "Just being remembered for once",
        ],
        level: 10,
    },
    PoolEntry {
        text: "If your password could see the websites you visit, what would it think of you?",
        kind: QuestionType::Text,
        options: &[],
        level: 10,
    },
];

/// The full pool. Each entry carries its classic order when it belongs to
/// the classic lineup, and `0` otherwise (seeding assigns real orders).
pub fn builtin_pool() -> Vec<NewQuestion> {
    POOL.iter()
        .enumerate()
        .map(|(i, entry)| {
            let order = if i < CLASSIC_LEN { i as u32 + 1 } else { 0 };
            NewQuestion::new(entry.text, entry.kind, order, entry.level)
                .with_options(entry.options.iter().copied())
        })
        .collect()
}

/// The classic ten questions, orders 1 through 10.
pub fn classic_lineup() -> Vec<NewQuestion> {
    builtin_pool().into_iter().take(CLASSIC_LEN).collect()
}
