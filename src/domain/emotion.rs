//! The closed set of emotions a mood entry can carry

use crate::error::MoodlogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mood labels accepted by the journal, in canonical display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    VeryHappy,
    Happy,
    Neutral,
    Tired,
    Sad,
    Angry,
    Anxious,
    Stressed,
}

impl Emotion {
    /// Every emotion in canonical order
    pub const ALL: [Emotion; 8] = [
        Emotion::VeryHappy,
        Emotion::Happy,
        Emotion::Neutral,
        Emotion::Tired,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Anxious,
        Emotion::Stressed,
    ];

    /// Machine key as written to the store
    pub fn key(&self) -> &'static str {
        match self {
            Emotion::VeryHappy => "very_happy",
            Emotion::Happy => "happy",
            Emotion::Neutral => "neutral",
            Emotion::Tired => "tired",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Anxious => "anxious",
            Emotion::Stressed => "stressed",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::VeryHappy => "😊 Very good",
            Emotion::Happy => "🙂 Good",
            Emotion::Neutral => "😐 Okay",
            Emotion::Tired => "😴 Tired",
            Emotion::Sad => "😢 Sad",
            Emotion::Angry => "😠 Angry",
            Emotion::Anxious => "😬 Anxious",
            Emotion::Stressed => "😣 Stressed",
        }
    }

    /// Exact lookup by machine key, as persisted. No normalization.
    pub fn from_key(key: &str) -> Option<Emotion> {
        Emotion::ALL.iter().copied().find(|e| e.key() == key)
    }

    /// Position in [`Emotion::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The two happiest labels count toward the weekly challenge
    pub fn is_positive(&self) -> bool {
        matches!(self, Emotion::VeryHappy | Emotion::Happy)
    }

    /// Score used by calendar charts: 4 (very good) down to 0 (negative)
    pub fn calendar_score(&self) -> u8 {
        match self {
            Emotion::VeryHappy => 4,
            Emotion::Happy => 3,
            Emotion::Neutral => 2,
            Emotion::Tired => 1,
            Emotion::Sad | Emotion::Angry | Emotion::Anxious | Emotion::Stressed => 0,
        }
    }

    /// Short acknowledgement and a suggested activity
    pub fn feedback(&self) -> (&'static str, &'static str) {
        match self {
            Emotion::VeryHappy => (
                "Great! Let's celebrate the good things today.",
                "Send a thank-you message to a friend or write down what made you feel this way.",
            ),
            Emotion::Happy => (
                "You're in a good mood!",
                "Take a short walk or listen to your favourite music to keep it going.",
            ),
            Emotion::Neutral => (
                "An ordinary day.",
                "Try some light stretching or a 5-minute meditation to lift your mood.",
            ),
            Emotion::Tired => (
                "You sound tired.",
                "A short nap (15-20 minutes) or a proper break is recommended.",
            ),
            Emotion::Sad => (
                "It's a hard day.",
                "Talk to someone close to you, or make yourself a warm cup of tea.",
            ),
            Emotion::Angry => (
                "You're feeling angry.",
                "Do one minute of 4-4-4 breathing: inhale 4, hold 4, exhale 4.",
            ),
            Emotion::Anxious => (
                "You're feeling anxious.",
                "A short walk or a 5-minute breathing meditation can help shift your focus.",
            ),
            Emotion::Stressed => (
                "You seem quite stressed.",
                "Break your tasks into small pieces and handle them one at a time.",
            ),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Emotion {
    type Err = MoodlogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");

        Emotion::from_key(&normalized).ok_or_else(|| MoodlogError::Validation(format!("Unknown emotion: '{}'", s)))
    }
}
