//! Lifelines and their simulations
//!
//! Each session carries three one-shot lifelines. Fifty-fifty strikes two
//! wrong answers, ask-the-audience simulates a studio poll, and
//! phone-a-friend simulates a single friend's guess together with how sure
//! they sound. The audience and the friend both get less reliable as the
//! level climbs.

use enum_map::{Enum, EnumMap, enum_map};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants::lifeline::{AUDIENCE_SIZE, FIFTY_FIFTY_REMOVED},
    ladder::Level,
    quiz::{AnswerKey, Question},
};

/// The three kinds of lifeline
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Enum,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "camelCase")]
pub enum Lifeline {
    /// Removes two wrong answers
    #[display("fifty-fifty")]
    FiftyFifty,
    /// Asks a friend for their guess
    #[display("phone a friend")]
    PhoneAFriend,
    /// Polls the studio audience
    #[display("ask the audience")]
    AskTheAudience,
}

/// Availability of each lifeline for the current session
///
/// Every lifeline starts available and can be consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lifelines(EnumMap<Lifeline, bool>);

impl Default for Lifelines {
    fn default() -> Self {
        Self(enum_map! { _ => true })
    }
}

impl Lifelines {
    /// Whether the lifeline has not been used yet
    pub fn is_available(&self, lifeline: Lifeline) -> bool {
        self.0[lifeline]
    }

    /// Marks the lifeline as used
    ///
    /// # Returns
    ///
    /// `true` if the lifeline was available, `false` if it had already been used
    pub fn consume(&mut self, lifeline: Lifeline) -> bool {
        std::mem::replace(&mut self.0[lifeline], false)
    }
}

/// Which answers are still selectable for the current question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveAnswers(EnumMap<AnswerKey, bool>);

impl Default for ActiveAnswers {
    fn default() -> Self {
        Self::all()
    }
}

impl ActiveAnswers {
    /// All four answers selectable
    pub fn all() -> Self {
        Self(enum_map! { _ => true })
    }

    /// Whether the answer is still selectable
    pub fn is_active(&self, key: AnswerKey) -> bool {
        self.0[key]
    }

    /// Removes the answer from selection
    pub fn disable(&mut self, key: AnswerKey) {
        self.0[key] = false;
    }

    /// Iterates over the selectable answers in key order
    pub fn iter(&self) -> impl Iterator<Item = AnswerKey> + '_ {
        self.0
            .iter()
            .filter(|(_, active)| **active)
            .map(|(key, _)| key)
    }

    /// Number of selectable answers
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

/// Vote counts of an audience poll, keyed by answer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudienceResults(EnumMap<AnswerKey, u8>);

impl AudienceResults {
    /// Votes cast for the given answer
    pub fn votes(&self, key: AnswerKey) -> u8 {
        self.0[key]
    }

    /// Total number of votes cast
    pub fn total(&self) -> u32 {
        self.0.values().map(|votes| u32::from(*votes)).sum()
    }
}

/// How sure the friend sounds on the phone
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Confidence {
    /// Certain of the answer
    #[serde(rename = "very sure")]
    #[display("very sure")]
    VerySure,
    /// Leaning towards the answer
    #[serde(rename = "pretty sure")]
    #[display("pretty sure")]
    PrettySure,
    /// Guessing
    #[serde(rename = "not sure")]
    #[display("not sure")]
    NotSure,
}

impl Confidence {
    /// Confidence the friend expresses at the given level
    ///
    /// Low levels sound sure and high levels sound unsure. Knowing the answer
    /// lifts the friend one step within the band, never below the band's floor.
    pub fn for_level(level: Level, knows_answer: bool) -> Self {
        match (level.get(), knows_answer) {
            (1..=5, true) => Self::VerySure,
            (1..=5, false) | (6..=10, true) => Self::PrettySure,
            _ => Self::NotSure,
        }
    }

    /// The pool of things a friend with this confidence might say
    pub fn explanations(self) -> &'static [&'static str] {
        match self {
            Self::VerySure => &[
                "I'm a hundred percent sure, trust me.",
                "I know this one without a doubt.",
                "No need to think, I know it.",
                "I'd bet everything on it.",
                "I've seen this before, I'm certain.",
                "Go with it, that's the one.",
                "I've never been more sure of anything.",
                "I could answer this with my eyes closed.",
                "That's a fact, I know it.",
                "I'd carve this one in stone.",
            ],
            Self::PrettySure => &[
                "I'm fairly sure, but not completely.",
                "That sounds very familiar, I think I know it.",
                "I have a strong feeling about this one.",
                "I'd probably pick it, but double-check.",
                "I think I've heard it before.",
                "That seems like the most logical choice.",
                "My gut says this one.",
                "I'm leaning clearly towards one option.",
                "I think it's right, but I could be wrong.",
                "It seems like the best option to me.",
            ],
            Self::NotSure => &[
                "I'm really not sure about this one.",
                "I honestly have no idea.",
                "I can only guess here.",
                "I've never heard of this before.",
                "I'd be taking a wild guess.",
                "I'm not the right person to ask.",
                "It rings a faint bell, but I don't know.",
                "This is way outside what I know.",
                "I could try, but the odds of being wrong are high.",
                "Maybe use another lifeline on this one.",
            ],
        }
    }
}

/// What the friend says on the phone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneFriendResponse {
    /// The answer the friend suggests
    pub answer: AnswerKey,
    /// How sure the friend sounds
    pub confidence: Confidence,
    /// What the friend says to back it up
    pub explanation: String,
}

/// Probability that a single audience member votes for the correct answer
///
/// Falls from 80% to 72% over levels 1–5, from 65% to 55% over levels 6–10,
/// and from 50% to 34% over levels 11–15.
pub fn audience_probability(level: Level) -> f64 {
    match level.get() {
        n @ 1..=5 => 0.80 - 0.02 * f64::from(n - 1),
        n @ 6..=10 => 0.65 - 0.025 * f64::from(n - 6),
        n => 0.50 - 0.04 * f64::from(n - 11),
    }
}

/// Probability that the friend knows the correct answer
///
/// Falls from 90% to 82% over levels 1–5, from 80% to 68% over levels 6–10,
/// and from 60% to 40% over levels 11–15.
pub fn phone_friend_probability(level: Level) -> f64 {
    match level.get() {
        n @ 1..=5 => 0.90 - 0.02 * f64::from(n - 1),
        n @ 6..=10 => 0.80 - 0.03 * f64::from(n - 6),
        n => 0.60 - 0.05 * f64::from(n - 11),
    }
}

/// Strikes two random wrong answers from the active set
///
/// The correct answer is never removed.
pub fn fifty_fifty(question: &Question, active: &mut ActiveAnswers, rng: &mut fastrand::Rng) {
    let mut incorrect = question.incorrect_answers().collect_vec();
    rng.shuffle(&mut incorrect);
    for key in incorrect.into_iter().take(FIFTY_FIFTY_REMOVED) {
        active.disable(key);
    }
}

/// Polls the audience on the current question
///
/// Every vote goes to the correct answer with the level's audience
/// probability and otherwise to a uniformly chosen active wrong answer.
/// Inactive answers never receive votes.
pub fn ask_the_audience(
    question: &Question,
    level: Level,
    active: &ActiveAnswers,
    rng: &mut fastrand::Rng,
) -> AudienceResults {
    let probability = audience_probability(level);
    let wrong = active
        .iter()
        .filter(|key| !question.is_correct(*key))
        .collect_vec();

    let mut results = AudienceResults::default();
    for _ in 0..AUDIENCE_SIZE {
        let vote = if rng.f64() < probability {
            question.correct_answer
        } else {
            rng.choice(&wrong).copied().unwrap_or(question.correct_answer)
        };
        results.0[vote] += 1;
    }
    results
}

/// Calls a friend about the current question
///
/// The friend knows the answer with the level's phone probability. A friend
/// who does not know picks uniformly among the active wrong answers.
pub fn phone_a_friend(
    question: &Question,
    level: Level,
    active: &ActiveAnswers,
    rng: &mut fastrand::Rng,
) -> PhoneFriendResponse {
    let knows_answer = rng.f64() < phone_friend_probability(level);
    let answer = if knows_answer {
        question.correct_answer
    } else {
        let wrong = active
            .iter()
            .filter(|key| !question.is_correct(*key))
            .collect_vec();
        rng.choice(wrong).unwrap_or(question.correct_answer)
    };
    let confidence = Confidence::for_level(level, knows_answer);
    let explanation = rng
        .choice(confidence.explanations())
        .map(|text| (*text).to_owned())
        .unwrap_or_default();

    PhoneFriendResponse {
        answer,
        confidence,
        explanation,
    }
}
