use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("level must be 1, 2, or 3 (got {0})")]
pub struct LevelError(pub i64);

/// CFA exam level. Levels are sequential; there is nothing past `Three`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Level {
    #[default]
    One,
    Two,
    Three,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::One, Level::Two, Level::Three];

    /// Converts a raw level number into a `Level`.
    ///
    /// # Errors
    ///
    /// Returns `LevelError` unless `value` is 1, 2, or 3.
    pub fn from_number(value: i64) -> Result<Self, LevelError> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            3 => Ok(Self::Three),
            _ => Err(LevelError(value)),
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Level::One => 1,
            Level::Two => 2,
            Level::Three => 3,
        }
    }

    /// The level that follows this one, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => Some(Level::Three),
            Level::Three => None,
        }
    }

    /// Tutor focus label for this level.
    #[must_use]
    pub fn focus_strategy(self) -> &'static str {
        match self {
            Level::One => "Foundational understanding",
            Level::Two => "Application and analysis",
            Level::Three => "Integration and synthesis",
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_number(i64::from(value))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.number()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_one_through_three() {
        assert_eq!(Level::from_number(1), Ok(Level::One));
        assert_eq!(Level::from_number(3), Ok(Level::Three));
        assert_eq!(Level::from_number(0), Err(LevelError(0)));
        assert_eq!(Level::from_number(4), Err(LevelError(4)));
        assert_eq!(Level::from_number(-1), Err(LevelError(-1)));
    }

    #[test]
    fn level_three_has_no_successor() {
        assert_eq!(Level::One.next(), Some(Level::Two));
        assert_eq!(Level::Three.next(), None);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&[Level::Three, Level::One]).unwrap();
        assert_eq!(json, "[3,1]");
        let err = serde_json::from_str::<Level>("4");
        assert!(err.is_err());
    }
}
