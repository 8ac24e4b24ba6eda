//! Instruments, tutorials, songs and challenges

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ParseEnumError;

/// Learning effort for an instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseEnumError::new("difficulty", s)),
        }
    }
}

/// Kind of challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    Quiz,
    Performance,
    Listening,
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Quiz => "quiz",
            ChallengeType::Performance => "performance",
            ChallengeType::Listening => "listening",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quiz" => Ok(ChallengeType::Quiz),
            "performance" => Ok(ChallengeType::Performance),
            "listening" => Ok(ChallengeType::Listening),
            _ => Err(ParseEnumError::new("challenge type", s)),
        }
    }
}

/// Challenge level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeDifficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl ChallengeDifficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeDifficulty::Beginner => "beginner",
            ChallengeDifficulty::Intermediate => "intermediate",
            ChallengeDifficulty::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ChallengeDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeDifficulty {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(ChallengeDifficulty::Beginner),
            "intermediate" => Ok(ChallengeDifficulty::Intermediate),
            "advanced" => Ok(ChallengeDifficulty::Advanced),
            _ => Err(ParseEnumError::new("challenge difficulty", s)),
        }
    }
}

/// A traditional instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub region: String,
    pub difficulty: Difficulty,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sound_samples: Vec<String>,
}

/// A video tutorial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    /// Running time as `mm:ss`
    pub duration: String,
    pub views: u64,
    pub category: String,
    /// Instrument ids this tutorial covers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_instruments: Vec<String>,
}

impl Tutorial {
    pub fn covers_instrument(&self, instrument_id: &str) -> bool {
        self.related_instruments.iter().any(|id| id == instrument_id)
    }
}

/// A traditional song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: String,
    pub title: String,
    pub description: String,
    pub region: String,
    pub image_url: String,
    /// Instrument names (not ids)
    pub instruments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet_music: Option<String>,
}

/// A daily challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    pub difficulty: ChallengeDifficulty,
    pub points: u32,
    /// Countdown length in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
}
