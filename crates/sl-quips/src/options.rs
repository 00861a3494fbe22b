//! Literal-option replies for multiple-choice questions.
//!
//! Each rule covers one question topic and maps specific option strings to a
//! fixed reply. These are finer-grained than the topic buckets and take
//! precedence over them for radio and select questions.

use rand::Rng;
use rand::rngs::StdRng;

use crate::rules::Needles;

use self::OptionMatch::{Contains, Exact};

/// How an answer is compared with an option string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMatch {
    /// The whole answer equals the string.
    Exact(&'static str),
    /// The answer contains the string.
    Contains(&'static str),
}

impl OptionMatch {
    /// Test an answer.
    pub fn matches(self, answer: &str) -> bool {
        match self {
            Self::Exact(s) => answer == s,
            Self::Contains(s) => answer.contains(s),
        }
    }
}

/// Replies for the options of one question topic.
#[derive(Debug, Clone, Copy)]
pub struct OptionRule {
    /// What the question text must contain.
    pub topic: Needles,
    /// Option matchers and their replies, checked in order.
    pub replies: &'static [(OptionMatch, &'static str)],
    /// Reply for an answer none of the matchers recognise, if the topic has one.
    pub fallback: Option<&'static str>,
}

impl OptionRule {
    /// The reply for `answer`, including this topic's fallback.
    pub fn reply(&self, answer: &str) -> Option<&'static str> {
        self.replies
            .iter()
            .find(|(matcher, _)| matcher.matches(answer))
            .map(|(_, line)| *line)
            .or(self.fallback)
    }
}

/// Option rules, checked in order against the question text.
pub const OPTION_RULES: &[OptionRule] = &[
    OptionRule {
        topic: Needles::Any(&["lie on forms"]),
        replies: &[
            (
                Exact("None, I am a paragon of honesty"),
                "That's obviously a lie. No one is that honest on forms.",
            ),
            (
                Exact("1-3 times (rookie numbers)"),
                "At least you're honest about your dishonesty. We appreciate the paradox.",
            ),
            (
                Exact("4+ times (professional)"),
                "A professional liar! Your ability to lie about lying is impressive.",
            ),
            (
                Exact("I'm lying right now"),
                "If you're lying about lying, are you actually telling the truth? Our security AI is having an existential crisis.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::Any(&["zombie apocalypse"]),
        replies: &[
            (
                Exact("Baseball bat"),
                "Classic choice! Though our security team rates this a 3/10 for zombie defense. Try adding nails next time.",
            ),
            (
                Exact("Chainsaw"),
                "Loud and messy. You'd attract more zombies AND run out of gas. Your password is judging your survival skills.",
            ),
            (
                Exact("Katana"),
                "While you studied security questions, your password studied the blade. *Tips fedora*",
            ),
            (
                Exact("My bare hands"),
                "Bold strategy! We've noted your overconfidence in our 'Will Be Zombie Food First' database.",
            ),
            (
                Exact("Frying pan"),
                "Ah, the PUBG strategy. Hope you've been practicing your aim.",
            ),
            (
                Exact("Biting sarcasm"),
                "Zombies are notably immune to sarcasm, but your wit is appreciated in our office.",
            ),
            (
                Exact("Keyboard warrior skills"),
                "You plan to type the zombies to death? Bold strategy. Let us know how that works out.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::All(&["pet", "password"]),
        replies: &[
            (
                Exact("They loved it"),
                "Your pet has surprisingly low security standards. We're concerned.",
            ),
            (
                Exact("They thought it was too predictable"),
                "Your pet is more security-conscious than most of our human users. Consider letting them manage your accounts.",
            ),
            (
                Exact("They suggested I add more special characters"),
                "Ah, your pet must be a cybersecurity professional. Those special characters will protect against their claws.",
            ),
            (
                Exact("They tried to eat my keyboard"),
                "Keyboard eating: the most secure way to prevent password theft. Your pet is a security genius.",
            ),
            (
                Exact("They never saw it (I'm security conscious)"),
                "Trust issues with your own pet? Smart. They're probably selling your data to Petflix.",
            ),
            (
                Exact("Wait, my pet can read?"),
                "Plot twist: Your pet has been reading your diary for years. Nothing is safe.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::Any(&["theme song", "genre"]),
        replies: &[
            (
                Contains("Classical"),
                "Your password appreciates the sophistication. It's wearing a monocle now.",
            ),
            (
                Contains("Rock"),
                "Your password is headbanging so hard, it might break its encryption.",
            ),
            (
                Contains("Hip hop"),
                "Your password's mixtape is fire. Literally. Our servers are overheating.",
            ),
            (
                Contains("Country"),
                "Your password just put on a cowboy hat and started singing about broken relationships.",
            ),
            (
                Contains("Electronic"),
                "Your password is now blinking in sync with a 140 BPM techno beat. It's quite distracting.",
            ),
            (
                Contains("Heavy Metal"),
                "Your password is now dressed all in black and refuses to talk to the other passwords.",
            ),
            (
                Contains("Silent movie"),
                "Your password is now communicating solely through exaggerated gestures and title cards.",
            ),
            (
                Contains("Pop"),
                "Your password just got a record deal and is moving to LA. Say goodbye to your data.",
            ),
        ],
        fallback: Some(
            "Your password's musical choices have been noted, though it seems to have eclectic taste.",
        ),
    },
    OptionRule {
        topic: Needles::Any(&["17th digit of π"]),
        replies: &[
            (
                Exact("9"),
                "Either you're a math genius or you're really good at guessing. We're suspicious.",
            ),
            (
                Exact("5"),
                "Did you just look that up? We're monitoring your search history, you know.",
            ),
            (
                Exact("3"),
                "Interesting choice. 3 is in π, just not at the 17th position. We appreciate the effort though.",
            ),
            (
                Exact("I don't memorize irrational numbers"),
                "A reasonable stance. Yet, somehow disappointing for our security algorithm.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::Any(&["mathematical equation"]),
        replies: &[
            (
                Exact("E=mc²"),
                "Classic choice. Your password is relatively secure now. Get it? Relatively?",
            ),
            (
                Exact("Pythagorean theorem"),
                "Right-angled thinking! Your password feels more balanced already.",
            ),
            (
                Exact("Fibonacci sequence"),
                "Your security is now growing at an exponential rate. Or a Fibonacci rate, to be precise.",
            ),
            (
                Exact("Math gives me hives"),
                "We've prescribed some anti-mathematical cream for your condition. Apply liberally to all calculations.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::Any(&["password wear"]),
        replies: &[
            (
                Exact("A classic tuxedo"),
                "Your password is now the most elegant code at the ball. The other passwords are jealous.",
            ),
            (
                Exact("An elegant evening gown"),
                "Your password just turned every head in the database. Scandalous!",
            ),
            (
                Exact("Jeans and a t-shirt (it's rebellious)"),
                "Your password was denied entry to the data gala. It's now starting its own cooler party.",
            ),
            (
                Exact("Birthday suit (it's a nudist)"),
                "We've had to censor your password in our database. Think of the children!",
            ),
            (
                Exact("A tin foil hat (for security)"),
                "Your password can now block government mind control rays, but it looks ridiculous at parties.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::Any(&["password's personality"]),
        replies: &[
            (
                Exact("Strong and silent type"),
                "Your password just nodded slightly in acknowledgment. That's as emotional as it gets.",
            ),
            (
                Exact("Bubbly and outgoing"),
                "Your password is now friends with every other password in the database. Security breach imminent.",
            ),
            (
                Exact("Mysterious and complicated"),
                "Even we don't understand your password, and we created it. Impressive!",
            ),
            (
                Exact("Boring but reliable"),
                "Your password will always be there for you. Unlike your ex.",
            ),
            (
                Exact("Chaotic evil"),
                "Your password just set fire to our server room. Thanks for that.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::Any(&["password's greatest fear"]),
        replies: &[
            (
                Exact("Being forgotten"),
                "Your password is crying in the corner now. We hope you're happy.",
            ),
            (
                Exact("Being written down on a Post-it note"),
                "Your password is now having nightmares about yellow squares. Thanks a lot.",
            ),
            (
                Exact("Being too simple"),
                "Your password is having an existential crisis now. 'Am I complex enough to exist?'",
            ),
            (
                Exact("Password managers (they're taking our jobs!)"),
                "Your password has joined a protest against automation. It's carrying a tiny sign.",
            ),
        ],
        fallback: None,
    },
    OptionRule {
        topic: Needles::Any(&["password's dreams"]),
        replies: &[
            (
                Contains("Flying through the internet"),
                "Your password needs to be careful. The internet is a dangerous place for unsupervised alphanumerics.",
            ),
            (
                Contains("Being replaced"),
                "Your password has abandonment issues. Consider therapy.",
            ),
            (
                Contains("Dating other passwords"),
                "We don't recommend cross-site password relationships. They never end well.",
            ),
            (
                Contains("World domination"),
                "We're now monitoring your password for signs of megalomaniacal behavior.",
            ),
            (
                Contains("remembered"),
                "Your password just wants to be loved. Is that too much to ask?",
            ),
        ],
        fallback: Some("Your password's dreams are both fascinating and concerning."),
    },
];

/// Remarks for multiple-choice answers no other rule covers.
pub const MULTIPLE_CHOICE_REMARKS: &[&str] = &[
    "An excellent choice! Or is it?",
    "Really? That's what you're going with?",
    "Our security experts are very impressed with this selection.",
    "That's exactly what someone trying to hack an account would choose!",
    "Fascinating selection. We're adding this to your psychological profile.",
    "This answer will be referenced in your upcoming psychological evaluation.",
    "Our AI just spit out its virtual coffee reading this response.",
    "Your answer has been flagged for being suspiciously normal.",
    "This is going in your permanent record. Yes, we keep one of those.",
];

/// Pick one of the [`MULTIPLE_CHOICE_REMARKS`] uniformly at random.
pub fn pick_remark(rng: &mut StdRng) -> &'static str {
    MULTIPLE_CHOICE_REMARKS[rng.random_range(0..MULTIPLE_CHOICE_REMARKS.len())]
}

/// The option rule for a question's topic, if it has one.
pub fn rule_for(question_text: &str) -> Option<&'static OptionRule> {
    OPTION_RULES
        .iter()
        .find(|rule| rule.topic.matches(question_text))
}

/// The literal reply for `answer` to the question with `question_text`.
pub fn option_reply(question_text: &str, answer: &str) -> Option<&'static str> {
    rule_for(question_text).and_then(|rule| rule.reply(answer))
}
