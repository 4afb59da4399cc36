//! Difficulty tiers. A level picks the word pool and the base score.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Base score for a correct word at `Firsttime`. The home-row drills never had
/// an entry in the points table, so they get a small fixed value.
pub const FIRSTTIME_BASE_POINTS: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Home-row drills with on-screen keyboard guidance.
    #[default]
    Firsttime,
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Firsttime,
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
    ];

    /// Lowercase identifier, as used by the level selector buttons.
    pub fn name(self) -> &'static str {
        match self {
            Level::Firsttime => "firsttime",
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Name shown in the stats bar (first letter capitalized).
    pub fn label(self) -> &'static str {
        match self {
            Level::Firsttime => "Firsttime",
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }

    /// Points for a correct word before any streak bonus.
    pub fn base_points(self) -> u32 {
        match self {
            Level::Firsttime => FIRSTTIME_BASE_POINTS,
            Level::Beginner => 10,
            Level::Intermediate => 20,
            Level::Advanced => 30,
        }
    }

    /// Only the first-time level shows the keyboard and finger hints.
    pub fn shows_keyboard(self) -> bool {
        matches!(self, Level::Firsttime)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_level_name() {
        for level in Level::ALL {
            assert_eq!(level.name().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "expert".parse::<Level>().unwrap_err();
        assert_eq!(err, ParseLevelError("expert".into()));
        assert_eq!(err.to_string(), "unknown level 'expert'");
        // Names are matched exactly, labels are not accepted.
        assert!("Beginner".parse::<Level>().is_err());
    }

    #[test]
    fn base_points_table() {
        assert_eq!(Level::Beginner.base_points(), 10);
        assert_eq!(Level::Intermediate.base_points(), 20);
        assert_eq!(Level::Advanced.base_points(), 30);
        assert_eq!(Level::Firsttime.base_points(), FIRSTTIME_BASE_POINTS);
    }

    #[test]
    fn label_capitalizes_name() {
        for level in Level::ALL {
            let name = level.name();
            let mut expected = name[..1].to_uppercase();
            expected.push_str(&name[1..]);
            assert_eq!(level.label(), expected);
        }
    }
}
