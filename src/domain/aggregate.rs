//! Weekly aggregation of mood entries
//!
//! Everything here is a pure function of the loaded entries and a week window,
//! so it can be recomputed on every refresh.

use crate::domain::{Emotion, MoodEntry, WeekWindow};
use chrono::NaiveDate;

/// Per-emotion counts for one week. All eight emotions are always present,
/// iterated in canonical order rather than by count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyCounts {
    counts: [usize; 8],
}

impl WeeklyCounts {
    pub fn get(&self, emotion: Emotion) -> usize {
        self.counts[emotion.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// `(emotion, count)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, usize)> + '_ {
        Emotion::ALL.iter().map(move |e| (*e, self.get(*e)))
    }

    /// Emotion with the highest count; ties go to the one listed first.
    /// `None` for a week without entries.
    pub fn most_frequent(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, usize)> = None;
        for (emotion, count) in self.iter() {
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((emotion, count)),
            }
        }
        best.map(|(emotion, _)| emotion)
    }
}

/// Latest emotion for each of the seven days of a week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayEmotionMap {
    days: Vec<(NaiveDate, Option<Emotion>)>,
}

impl DayEmotionMap {
    /// Emotion recorded last on `date`, `None` when the day has no entry or
    /// is outside the week
    pub fn get(&self, date: NaiveDate) -> Option<Emotion> {
        self.days
            .iter()
            .find(|(d, _)| *d == date)
            .and_then(|(_, emotion)| *emotion)
    }

    /// `(date, emotion)` pairs, Monday first
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<Emotion>)> + '_ {
        self.days.iter().copied()
    }
}

/// Entries dated inside `window`, in storage order
pub fn entries_in_week<'a>(entries: &'a [MoodEntry], window: &WeekWindow) -> Vec<&'a MoodEntry> {
    entries
        .iter()
        .filter(|entry| window.contains(entry.date))
        .collect()
}

/// Count entries per emotion for the week
pub fn counts_for_week(entries: &[MoodEntry], window: &WeekWindow) -> WeeklyCounts {
    let mut counts = WeeklyCounts::default();
    for entry in entries_in_week(entries, window) {
        counts.counts[entry.emotion.index()] += 1;
    }
    counts
}

/// Pick the most recent entry of each day in the week.
///
/// Earlier entries on the same day are dropped. When two entries share a
/// timestamp, the one stored later wins.
pub fn calendar_for_week(entries: &[MoodEntry], window: &WeekWindow) -> DayEmotionMap {
    let days = window
        .days()
        .map(|day| {
            let mut latest: Option<&MoodEntry> = None;
            for entry in entries.iter().filter(|e| e.date == day) {
                match latest {
                    Some(current) if current.timestamp > entry.timestamp => {}
                    _ => latest = Some(entry),
                }
            }
            (day, latest.map(|entry| entry.emotion))
        })
        .collect();

    DayEmotionMap { days }
}
