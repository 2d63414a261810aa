//! Prize levels and checkpoint rules
//!
//! A session climbs fifteen levels, each paying a fixed amount. Levels 5 and
//! 10 are checkpoints: once answered correctly, their prize can no longer be
//! lost.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::constants::ladder::{CHECKPOINT_LEVELS, LEVEL_COUNT, PRIZE_LADDER};

/// One of the fifteen prize tiers, always within `1..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// The opening level
    pub const FIRST: Self = Self(1);
    /// The million level
    pub const LAST: Self = Self(LEVEL_COUNT as u8);

    /// Creates a level from its number, or `None` if it is outside `1..=15`
    pub fn new(level: u8) -> Option<Self> {
        (Self::FIRST.0..=Self::LAST.0)
            .contains(&level)
            .then_some(Self(level))
    }

    /// Returns the level number
    pub fn get(self) -> u8 {
        self.0
    }

    /// Position of this level's question in the session's question list
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Prize money awarded for answering this level correctly
    pub fn prize(self) -> u32 {
        PRIZE_LADDER[self.index()]
    }

    /// Prize money guaranteed once this level has been answered correctly
    ///
    /// This is the prize of the highest checkpoint at or below this level,
    /// or zero before the first checkpoint.
    pub fn safe_prize(self) -> u32 {
        CHECKPOINT_LEVELS
            .iter()
            .rev()
            .find(|checkpoint| self.0 >= **checkpoint)
            .map_or(0, |checkpoint| Self(*checkpoint).prize())
    }

    /// Whether this level is a checkpoint
    pub fn is_checkpoint(self) -> bool {
        CHECKPOINT_LEVELS.contains(&self.0)
    }

    /// The following level, or `None` at the top of the ladder
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Iterates over all levels from first to last
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::FIRST.0..=Self::LAST.0).map(Self)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("level {value} is outside of bounds [1,15]"))
    }
}
