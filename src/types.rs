//! Result vocabulary for password strength evaluation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of fixed criteria a password is tested against.
pub const CRITERIA_COUNT: usize = 5;

/// One fixed password rule and whether the evaluated password satisfied it.
///
/// Criteria are identified by `id` (1 through 5) and always appear in
/// identifier order inside a [`StrengthResult`], so callers may rely on
/// position for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Criterion {
    pub id: u8,
    pub description: &'static str,
    pub satisfied: bool,
}

/// Count of satisfied criteria, 0 through [`Score::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    /// Highest possible score: every criterion satisfied.
    pub const MAX: u8 = CRITERIA_COUNT as u8;

    /// Creates a score, saturating at [`Score::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Qualitative strength bucket derived from the score alone.
///
/// ```rust
/// use pwd_meter::{Score, StrengthLabel};
///
/// assert_eq!(StrengthLabel::from_score(Score::new(3)), StrengthLabel::Fair);
/// assert_eq!(StrengthLabel::from_score(Score::new(5)), StrengthLabel::Strong);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLabel {
    /// Maps a score to its label. Thresholds are upper-bound inclusive:
    /// 0-2 Weak, 3 Fair, 4 Good, 5 Strong.
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            0..=2 => StrengthLabel::Weak,
            3 => StrengthLabel::Fair,
            4 => StrengthLabel::Good,
            _ => StrengthLabel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// Suggested meter color for this label.
    pub fn color_hint(&self) -> &'static str {
        match self {
            StrengthLabel::Weak => "red",
            StrengthLabel::Fair => "orange",
            StrengthLabel::Good => "yellow",
            StrengthLabel::Strong => "green",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown strength label: {0}")]
pub struct ParseLabelError(String);

impl FromStr for StrengthLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Weak" => Ok(StrengthLabel::Weak),
            "Fair" => Ok(StrengthLabel::Fair),
            "Good" => Ok(StrengthLabel::Good),
            "Strong" => Ok(StrengthLabel::Strong),
            other => Err(ParseLabelError(other.to_string())),
        }
    }
}

/// Full outcome of one evaluation: the score plus per-criterion feedback.
///
/// A fresh result is built on every evaluation; no result is ever mutated
/// in place or cached across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: Score,
    pub criteria: [Criterion; CRITERIA_COUNT],
}

impl StrengthResult {
    /// The qualitative label for this result's score.
    pub fn label(&self) -> StrengthLabel {
        StrengthLabel::from_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_saturates_at_max() {
        assert_eq!(Score::new(9).value(), Score::MAX);
        assert_eq!(Score::new(5).value(), 5);
        assert_eq!(Score::new(0).value(), 0);
    }

    #[test]
    fn test_label_thresholds() {
        assert_eq!(StrengthLabel::from_score(Score::new(0)), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(Score::new(1)), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(Score::new(2)), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(Score::new(3)), StrengthLabel::Fair);
        assert_eq!(StrengthLabel::from_score(Score::new(4)), StrengthLabel::Good);
        assert_eq!(StrengthLabel::from_score(Score::new(5)), StrengthLabel::Strong);
    }

    #[test]
    fn test_label_display_roundtrip() {
        for label in [
            StrengthLabel::Weak,
            StrengthLabel::Fair,
            StrengthLabel::Good,
            StrengthLabel::Strong,
        ] {
            assert_eq!(label.to_string().parse::<StrengthLabel>(), Ok(label));
        }
    }

    #[test]
    fn test_label_parse_unknown() {
        assert!("Epic".parse::<StrengthLabel>().is_err());
        assert!("weak".parse::<StrengthLabel>().is_err());
        assert!("".parse::<StrengthLabel>().is_err());
    }

    #[test]
    fn test_color_hints() {
        assert_eq!(StrengthLabel::Weak.color_hint(), "red");
        assert_eq!(StrengthLabel::Fair.color_hint(), "orange");
        assert_eq!(StrengthLabel::Good.color_hint(), "yellow");
        assert_eq!(StrengthLabel::Strong.color_hint(), "green");
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::new(3).to_string(), "3/5");
    }
}
