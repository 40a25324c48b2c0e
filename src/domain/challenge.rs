//! Weekly positive-entry challenge

use crate::domain::{MoodEntry, WeekWindow};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of entries carrying one of the two positive emotions
pub fn positive_count<'a, I>(week_entries: I) -> usize
where
    I: IntoIterator<Item = &'a MoodEntry>,
{
    week_entries
        .into_iter()
        .filter(|entry| entry.emotion.is_positive())
        .count()
}

/// Whether the goal is reached. A goal of zero is always met.
pub fn goal_met(positive_count: usize, goal: u32) -> bool {
    positive_count as u64 >= u64::from(goal)
}

/// Outcome of checking the challenge on a refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeStatus {
    /// Goal not reached yet
    InProgress,
    /// Goal reached and not announced before: celebrate now
    JustAchieved,
    /// Goal reached and already announced for this week
    AlreadyAchieved,
}

/// Caller-owned challenge state carried between refreshes.
///
/// Keys:
/// - `announced_weeks`: Mondays of the weeks whose achievement was announced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSession {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub announced_weeks: BTreeSet<NaiveDate>,
}

impl ChallengeSession {
    /// Whether the achievement for `window` was already announced
    pub fn is_announced(&self, window: &WeekWindow) -> bool {
        self.announced_weeks.contains(&window.start)
    }

    /// Advance the session with the latest evaluation for `window`.
    /// Each week is celebrated at most once, whatever other weeks are viewed.
    pub fn observe(mut self, window: &WeekWindow, goal_met: bool) -> (Self, ChallengeStatus) {
        if self.is_announced(window) {
            return (self, ChallengeStatus::AlreadyAchieved);
        }
        if !goal_met {
            return (self, ChallengeStatus::InProgress);
        }

        self.announced_weeks.insert(window.start);
        (self, ChallengeStatus::JustAchieved)
    }

    /// Forget every previous announcement
    pub fn reset(self) -> Self {
        ChallengeSession::default()
    }
}
