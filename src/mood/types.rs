use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Bad,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoodError {
    #[error("Unknown mood '{input}' (expected one of: great, good, okay, low, bad)")]
    Unknown { input: String },
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Great, Mood::Good, Mood::Okay, Mood::Low, Mood::Bad];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Low => "Low",
            Mood::Bad => "Bad",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Great => "😄",
            Mood::Good => "🙂",
            Mood::Okay => "😐",
            Mood::Low => "😕",
            Mood::Bad => "😢",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = MoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MoodError::Unknown {
                input: s.to_string(),
            })
    }
}

/// A submitted check-in. Only ever logged, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("great".parse::<Mood>(), Ok(Mood::Great));
        assert_eq!("  LOW ".parse::<Mood>(), Ok(Mood::Low));
        assert_eq!("Okay".parse::<Mood>(), Ok(Mood::Okay));
    }

    #[test]
    fn test_parse_rejects_unknown_mood() {
        let err = "meh".parse::<Mood>().unwrap_err();
        assert_eq!(err, MoodError::Unknown { input: "meh".to_string() });
        assert!(err.to_string().contains("great, good, okay, low, bad"));
    }

    #[test]
    fn test_labels_and_emoji() {
        assert_eq!(Mood::Bad.to_string(), "Bad");
        assert_eq!(Mood::Great.emoji(), "😄");
    }
}
