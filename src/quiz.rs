//! Quiz content and validation
//!
//! Questions arrive as a JSON array, each carrying the prize tier it belongs
//! to, the question text, four answers keyed `a` through `d`, and the key of
//! the correct answer. This module parses and validates that content before
//! it is handed to a [`GameManager`](crate::game::GameManager).

use enum_map::Enum;
use garde::Validate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one of the four answer slots of a question
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Enum,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKey {
    /// First answer
    #[display("a")]
    A,
    /// Second answer
    #[display("b")]
    B,
    /// Third answer
    #[display("c")]
    C,
    /// Fourth answer
    #[display("d")]
    D,
}

impl AnswerKey {
    /// All answer keys in display order
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];
}

/// The four answer texts of a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Answers {
    /// Text of answer `a`
    #[garde(length(min = crate::constants::quiz::MIN_TEXT_LENGTH))]
    pub a: String,
    /// Text of answer `b`
    #[garde(length(min = crate::constants::quiz::MIN_TEXT_LENGTH))]
    pub b: String,
    /// Text of answer `c`
    #[garde(length(min = crate::constants::quiz::MIN_TEXT_LENGTH))]
    pub c: String,
    /// Text of answer `d`
    #[garde(length(min = crate::constants::quiz::MIN_TEXT_LENGTH))]
    pub d: String,
}

impl Answers {
    /// Returns the text stored under the given key
    pub fn get(&self, key: AnswerKey) -> &str {
        match key {
            AnswerKey::A => &self.a,
            AnswerKey::B => &self.b,
            AnswerKey::C => &self.c,
            AnswerKey::D => &self.d,
        }
    }
}

/// A single quiz question
///
/// The `moneysum` ties the question to the prize level paying exactly that
/// amount; a session draws one question per level from those whose
/// `moneysum` matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Question {
    /// Prize tier this question belongs to
    #[garde(range(min = 1))]
    pub moneysum: u32,
    /// The question text
    #[garde(length(min = crate::constants::quiz::MIN_TEXT_LENGTH))]
    pub question: String,
    /// The four possible answers
    #[garde(dive)]
    pub answers: Answers,
    /// Key of the correct answer
    #[garde(skip)]
    pub correct_answer: AnswerKey,
}

impl Question {
    /// Whether the given key is this question's correct answer
    pub fn is_correct(&self, key: AnswerKey) -> bool {
        self.correct_answer == key
    }

    /// The three keys that are not the correct answer
    pub fn incorrect_answers(&self) -> impl Iterator<Item = AnswerKey> + '_ {
        AnswerKey::ALL
            .into_iter()
            .filter(|key| !self.is_correct(*key))
    }
}

/// Errors that can occur while loading quiz content
#[derive(Error, Debug)]
pub enum Error {
    /// The content is not a JSON array of questions
    #[error("quiz data could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The content parsed but breaks a content rule
    #[error("quiz data is invalid: {0}")]
    Invalid(#[from] garde::Report),
}

/// A validated collection of quiz questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct QuizData {
    /// All questions, in file order
    #[garde(length(min = crate::constants::quiz::MIN_QUESTION_COUNT), dive)]
    questions: Vec<Question>,
}

impl QuizData {
    /// Parses and validates quiz content from a JSON array
    ///
    /// # Errors
    ///
    /// * `Error::Parse` - The input is not a JSON array of well-formed questions
    /// * `Error::Invalid` - A question has an empty text, a zero
    ///   prize tier, or the array is empty
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let data: Self = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// Wraps already-constructed questions after validating them
    ///
    /// # Errors
    ///
    /// Returns `Error::Invalid` if any question breaks a content rule.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, Error> {
        let data = Self { questions };
        data.validate()?;
        Ok(data)
    }

    /// Returns the questions
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the number of questions
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Checks if there are no questions
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl From<QuizData> for Vec<Question> {
    fn from(data: QuizData) -> Self {
        data.questions
    }
}
