//! Word pools per level. Pools are static data and never change at runtime.

use crate::level::Level;

mod advanced;
mod beginner;
mod firsttime;
mod intermediate;
// one pool per level under src/library/*.rs

pub use advanced::ADVANCED_WORDS;
pub use beginner::BEGINNER_WORDS;
pub use firsttime::FIRSTTIME_WORDS;
pub use intermediate::INTERMEDIATE_WORDS;

/// Level -> ordered word pool. Cheap to copy; it only holds slices.
#[derive(Clone, Copy, Debug)]
pub struct WordLibrary {
    firsttime: &'static [&'static str],
    beginner: &'static [&'static str],
    intermediate: &'static [&'static str],
    advanced: &'static [&'static str],
}

impl WordLibrary {
    /// The pools shipped with the game.
    pub const fn builtin() -> Self {
        Self {
            firsttime: &FIRSTTIME_WORDS,
            beginner: &BEGINNER_WORDS,
            intermediate: &INTERMEDIATE_WORDS,
            advanced: &ADVANCED_WORDS,
        }
    }

    /// Custom pools, in `Level::ALL` order. Empty pools are allowed; the
    /// engine simply has no word to show for that level.
    pub const fn new(
        firsttime: &'static [&'static str],
        beginner: &'static [&'static str],
        intermediate: &'static [&'static str],
        advanced: &'static [&'static str],
    ) -> Self {
        Self {
            firsttime,
            beginner,
            intermediate,
            advanced,
        }
    }

    pub fn words(&self, level: Level) -> &'static [&'static str] {
        match level {
            Level::Firsttime => self.firsttime,
            Level::Beginner => self.beginner,
            Level::Intermediate => self.intermediate,
            Level::Advanced => self.advanced,
        }
    }

    pub fn contains(&self, level: Level, word: &str) -> bool {
        self.words(level).contains(&word)
    }
}

impl Default for WordLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
