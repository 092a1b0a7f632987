//! Rating scores attached to each response entry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Lowest rating a tester can give.
pub const MIN_SCORE: u8 = 1;

/// Highest rating a tester can give.
pub const MAX_SCORE: u8 = 5;

/// Rating preselected on a fresh response entry.
pub const DEFAULT_SCORE: u8 = 3;

/// A rating in `[MIN_SCORE, MAX_SCORE]`.
///
/// Serializes as a bare integer. Deserializing an out-of-range integer fails,
/// so a decoded entry can never carry an invalid score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Score(u8);

impl Score {
    /// Build a score, rejecting values outside `[MIN_SCORE, MAX_SCORE]`.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        if !(i64::from(MIN_SCORE)..=i64::from(MAX_SCORE)).contains(&value) {
            return Err(CoreError::Validation(format!(
                "Score must be between {MIN_SCORE} and {MAX_SCORE}, got {value}"
            )));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self(DEFAULT_SCORE)
    }
}

impl TryFrom<i64> for Score {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for i64 {
    fn from(score: Score) -> Self {
        i64::from(score.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_three() {
        assert_eq!(Score::default().value(), 3);
    }

    #[test]
    fn accepts_boundary_values() {
        assert_eq!(Score::new(1).unwrap().value(), 1);
        assert_eq!(Score::new(5).unwrap().value(), 5);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Score::new(0).is_err());
        assert!(Score::new(6).is_err());
        assert!(Score::new(-3).is_err());
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Score>("4").is_ok());
        assert!(serde_json::from_str::<Score>("9").is_err());
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&Score::new(2).unwrap()).unwrap();
        assert_eq!(json, "2");
    }
}
