//! # Millionaire Game Library
//!
//! This library provides the core game logic for a "Who Wants to Be a
//! Millionaire?" quiz. It loads and validates quiz content, runs a single
//! player's session up the fifteen-level prize ladder, simulates the three
//! lifelines, and publishes the full session state after every action.
//!
//! ```no_run
//! use millionaire::{game::{GameManager, GameState}, lifeline::Lifeline, quiz::QuizData};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let quiz = QuizData::from_json(&std::fs::read_to_string("data.json")?)?;
//! let mut manager = GameManager::new(|state: &GameState| println!("{}", state.to_json()));
//! manager.new_game(&quiz)?;
//! manager.use_lifeline(Lifeline::FiftyFifty);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::struct_field_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::wildcard_imports)]

pub mod constants;

pub mod game;
pub mod ladder;
pub mod lifeline;
pub mod quiz;
pub mod session;
