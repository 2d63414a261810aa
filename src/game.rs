//! Core game logic and state management
//!
//! This module contains the game session manager: it owns the state of a
//! single session, applies the actions a player takes, and publishes the
//! complete state to its listener after every accepted action.
//!
//! A session climbs the fifteen-level ladder one question at a time. A
//! correct answer banks the level's prize and moves on, a wrong answer ends
//! the session with only the safe prize, and the player may walk away with
//! the safe prize at any time.

use std::fmt::Debug;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    ladder::Level,
    lifeline::{self, ActiveAnswers, AudienceResults, Lifeline, Lifelines, PhoneFriendResponse},
    quiz::{AnswerKey, Question, QuizData},
    session::Listener,
};

/// The complete state of a game session
///
/// A fresh state has no questions; starting a session fills in the fifteen
/// questions and the first current question.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The level of the current question
    pub level: Level,
    /// The question being played, absent before start and after the game ends
    pub current_question: Option<Question>,
    /// One question per level, fixed for the session
    pub questions: Vec<Question>,
    /// Which answers of the current question are still selectable
    pub active_answers: ActiveAnswers,
    /// Money the player takes home if the session ended now
    pub current_prize: u32,
    /// Money the player keeps even after a wrong answer
    pub safe_prize: u32,
    /// Whether the last submitted answer was correct (absent before any submission)
    pub answer_correct: Option<bool>,
    /// Result of asking the audience on the current question
    pub audience_results: Option<AudienceResults>,
    /// Result of phoning a friend on the current question
    pub phone_friend_response: Option<PhoneFriendResponse>,
    /// Which lifelines are still available
    pub lifelines: Lifelines,
    /// Whether the session has ended
    pub is_game_over: bool,
    /// Whether the player answered all fifteen questions correctly
    pub has_won: bool,
}

impl GameState {
    /// Position of the current question in `questions`
    pub fn current_question_index(&self) -> usize {
        self.level.index()
    }

    /// Whether a question is currently open for answers and lifelines
    pub fn is_playing(&self) -> bool {
        !self.is_game_over && self.current_question.is_some()
    }

    /// Converts the state to a JSON string for a client
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("default serializer cannot fail")
    }
}

/// Actions a player can take during a session
#[derive(Debug, Clone, Deserialize)]
pub enum Action {
    /// Start a new session from a pool of questions
    StartGame(Vec<Question>),
    /// Submit a final answer to the current question
    AnswerQuestion(AnswerKey),
    /// Use a lifeline on the current question
    UseLifeline(Lifeline),
    /// Move on to the next level's question once the current one is answered
    NextQuestion,
    /// Walk away with the safe prize
    QuitGame,
}

impl Action {
    /// Short name of the action for diagnostics
    fn name(&self) -> &'static str {
        match self {
            Self::StartGame(_) => "start game",
            Self::AnswerQuestion(_) => "answer question",
            Self::UseLifeline(_) => "use lifeline",
            Self::NextQuestion => "next question",
            Self::QuitGame => "quit game",
        }
    }
}

/// Errors that can occur when starting a session
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The question pool has no question worth a level's prize
    #[error("no questions found for level {level} (prize {prize})")]
    MissingPrizeLevel {
        /// The level without candidates
        level: Level,
        /// The prize no question was tagged with
        prize: u32,
    },
}

/// Owns and advances the state of a single game session
///
/// The manager is driven through [`GameManager::dispatch`] or the matching
/// convenience methods. Actions that do not apply to the current state, such
/// as answering after the game has ended or reusing a lifeline, are ignored
/// and do not reach the listener.
pub struct GameManager<L: Listener> {
    /// The authoritative session state
    state: GameState,
    /// Receives the state after every accepted action
    listener: L,
    /// Source of randomness for question selection and lifelines
    rng: fastrand::Rng,
    /// Set by a correct answer until the next question is loaded
    answered: bool,
}

impl<L: Listener> Debug for GameManager<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameManager")
            .field("level", &self.state.level)
            .field("is_game_over", &self.state.is_game_over)
            .finish_non_exhaustive()
    }
}

impl<L: Listener> GameManager<L> {
    /// Creates a manager with an entropy-seeded random number generator
    ///
    /// # Arguments
    ///
    /// * `listener` - Receives the state after every accepted action
    pub fn new(listener: L) -> Self {
        Self::with_rng(listener, fastrand::Rng::new())
    }

    /// Creates a manager drawing all randomness from the given generator
    ///
    /// A seeded generator makes question selection and lifeline outcomes
    /// reproducible.
    ///
    /// # Arguments
    ///
    /// * `listener` - Receives the state after every accepted action
    /// * `rng` - The random number generator to use
    pub fn with_rng(listener: L, rng: fastrand::Rng) -> Self {
        Self {
            state: GameState::default(),
            listener,
            rng,
            answered: false,
        }
    }

    /// Returns the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the listener
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Applies an action and publishes the resulting state
    ///
    /// Actions that do not apply to the current state are ignored without
    /// notifying the listener.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingPrizeLevel` if a `StartGame` pool has no
    /// question for some level. The previous state is kept in that case.
    pub fn dispatch(&mut self, action: Action) -> Result<(), Error> {
        let name = action.name();
        let accepted = match action {
            Action::StartGame(pool) => {
                self.handle_start(&pool)?;
                true
            }
            Action::AnswerQuestion(answer) => self.handle_answer(answer),
            Action::UseLifeline(lifeline) => self.handle_lifeline(lifeline),
            Action::NextQuestion => self.handle_next_question(),
            Action::QuitGame => self.handle_quit(),
        };

        self.settle(name, accepted);
        Ok(())
    }

    /// Starts a new session from a pool of questions
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingPrizeLevel` if some level has no candidate question.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), Error> {
        self.dispatch(Action::StartGame(questions))
    }

    /// Starts a new session from validated quiz content
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingPrizeLevel` if some level has no candidate question.
    pub fn new_game(&mut self, quiz: &QuizData) -> Result<(), Error> {
        self.start(quiz.questions().to_vec())
    }

    /// Submits a final answer to the current question
    pub fn answer(&mut self, answer: AnswerKey) {
        let accepted = self.handle_answer(answer);
        self.settle("answer question", accepted);
    }

    /// Uses a lifeline on the current question
    pub fn use_lifeline(&mut self, lifeline: Lifeline) {
        let accepted = self.handle_lifeline(lifeline);
        self.settle("use lifeline", accepted);
    }

    /// Moves on to the next level's question
    ///
    /// Only a correct answer unlocks the next question, and it moves on by
    /// itself, so this never skips a question that has not been answered.
    pub fn next_question(&mut self) {
        let accepted = self.handle_next_question();
        self.settle("next question", accepted);
    }

    /// Ends the session with the safe prize
    pub fn quit(&mut self) {
        let accepted = self.handle_quit();
        self.settle("quit game", accepted);
    }

    /// Publishes the state after an accepted action
    fn settle(&mut self, action: &'static str, accepted: bool) {
        if accepted {
            self.listener.publish(&self.state);
        } else {
            debug!(action, level = %self.state.level, "ignored action");
        }
    }

    /// Picks one question per level and resets the session
    fn handle_start(&mut self, pool: &[Question]) -> Result<(), Error> {
        let by_prize = pool.iter().into_group_map_by(|question| question.moneysum);

        let questions = Level::all()
            .map(|level| {
                by_prize
                    .get(&level.prize())
                    .and_then(|candidates| self.rng.choice(candidates))
                    .map(|question| (*question).clone())
                    .ok_or(Error::MissingPrizeLevel {
                        level,
                        prize: level.prize(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.state = GameState {
            current_question: questions.first().cloned(),
            questions,
            ..GameState::default()
        };
        self.answered = false;
        info!(pool = pool.len(), "started game");
        Ok(())
    }

    /// Judges an answer and either advances or ends the session
    fn handle_answer(&mut self, answer: AnswerKey) -> bool {
        if self.state.is_game_over {
            return false;
        }
        let Some(question) = &self.state.current_question else {
            return false;
        };
        let level = self.state.level;

        if question.is_correct(answer) {
            self.state.current_prize = level.prize();
            self.state.safe_prize = self.state.safe_prize.max(level.safe_prize());
            if level.is_checkpoint() {
                info!(%level, safe_prize = self.state.safe_prize, "reached checkpoint");
            }
            if level == Level::LAST {
                self.state.has_won = true;
                self.end_game();
            } else {
                self.answered = true;
                self.handle_next_question();
            }
            self.state.answer_correct = Some(true);
        } else {
            self.state.current_prize = self.state.safe_prize;
            self.state.answer_correct = Some(false);
            self.end_game();
        }
        true
    }

    /// Consumes a lifeline and records its outcome
    fn handle_lifeline(&mut self, kind: Lifeline) -> bool {
        if self.state.is_game_over {
            return false;
        }
        let Some(question) = &self.state.current_question else {
            return false;
        };
        if !self.state.lifelines.consume(kind) {
            return false;
        }

        let level = self.state.level;
        match kind {
            Lifeline::FiftyFifty => {
                lifeline::fifty_fifty(question, &mut self.state.active_answers, &mut self.rng);
            }
            Lifeline::PhoneAFriend => {
                self.state.phone_friend_response = Some(lifeline::phone_a_friend(
                    question,
                    level,
                    &self.state.active_answers,
                    &mut self.rng,
                ));
            }
            Lifeline::AskTheAudience => {
                self.state.audience_results = Some(lifeline::ask_the_audience(
                    question,
                    level,
                    &self.state.active_answers,
                    &mut self.rng,
                ));
            }
        }
        debug!(lifeline = %kind, %level, "used lifeline");
        true
    }

    /// Moves to the next question once the current one has been answered
    fn handle_next_question(&mut self) -> bool {
        self.state.is_playing() && self.answered && self.advance()
    }

    /// Ends the session, keeping only the safe prize
    fn handle_quit(&mut self) -> bool {
        if !self.state.is_playing() {
            return false;
        }
        self.state.current_prize = self.state.safe_prize;
        self.end_game();
        true
    }

    /// Loads the next level's question with a clean slate of answers
    ///
    /// # Returns
    ///
    /// `false` if the current level is already the last one
    fn advance(&mut self) -> bool {
        let Some(next) = self.state.level.next() else {
            return false;
        };
        self.state.level = next;
        self.answered = false;
        self.state.current_question = self.state.questions.get(next.index()).cloned();
        self.state.active_answers = ActiveAnswers::all();
        self.state.audience_results = None;
        self.state.phone_friend_response = None;
        self.state.answer_correct = None;
        true
    }

    /// Marks the session as over
    fn end_game(&mut self) {
        self.state.is_game_over = true;
        self.state.current_question = None;
        info!(
            level = %self.state.level,
            prize = self.state.current_prize,
            won = self.state.has_won,
            "game over"
        );
    }
}
