//! Domain layer - Mood entries and weekly aggregation

pub mod aggregate;
pub mod challenge;
pub mod emotion;
pub mod entry;
pub mod summary;
pub mod time_ref;
pub mod week;

pub use aggregate::{
    calendar_for_week, counts_for_week, entries_in_week, DayEmotionMap, WeeklyCounts,
};
pub use challenge::{goal_met, positive_count, ChallengeSession, ChallengeStatus};
pub use emotion::Emotion;
pub use entry::{MoodEntry, MAX_NOTE_CHARS};
pub use summary::WeeklySummary;
pub use time_ref::{resolve_reference, TimeReference};
pub use week::{week_of, WeekWindow};
