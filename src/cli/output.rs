//! Output formatting utilities

use crate::application::WeeklyReport;
use crate::domain::{ChallengeStatus, DayEmotionMap, Emotion, MoodEntry, WeeklyCounts};

/// Format entries as one line each: timestamp, emotion label, note
pub fn format_history(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No entries yet".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        let line = format!(
            "{}  {:<14} {}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.emotion.key(),
            entry.note.replace('\n', " ")
        );
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output
}

/// Format per-emotion counts in canonical order
pub fn format_counts(counts: &WeeklyCounts) -> String {
    let mut output = String::new();
    for (emotion, count) in counts.iter() {
        output.push_str(&format!("{:<12} {:>3}  {}\n", emotion.key(), count, emotion.label()));
    }
    output
}

/// Format the seven-day calendar, `-` for days without entries
pub fn format_calendar(calendar: &DayEmotionMap) -> String {
    let mut output = String::new();
    for (date, emotion) in calendar.iter() {
        let cell = emotion.map(|e| e.label()).unwrap_or("-");
        output.push_str(&format!("{}  {}\n", date.format("%a %m/%d"), cell));
    }
    output
}

/// Format the whole weekly view
pub fn format_week(report: &WeeklyReport, status: ChallengeStatus) -> String {
    let mut output = format!(
        "Week {} ~ {}\n\nEmotion counts ({} entries):\n",
        report.window.start.format("%Y-%m-%d"),
        report.window.end.format("%Y-%m-%d"),
        report.counts.total()
    );
    output.push_str(&format_counts(&report.counts));
    output.push_str("\nCalendar (latest entry per day):\n");
    output.push_str(&format_calendar(&report.calendar));
    output.push_str(&format!(
        "\nChallenge: {} / {} positive entries\n",
        report.positive_count, report.goal
    ));
    output.push_str(match status {
        ChallengeStatus::JustAchieved => "🎉 Congratulations! You completed this week's challenge!\n",
        ChallengeStatus::AlreadyAchieved => "✅ You already completed this week's challenge\n",
        ChallengeStatus::InProgress => "Keep going!\n",
    });
    output
}

/// Format the list of emotions with their labels
pub fn format_emotions() -> String {
    Emotion::ALL
        .iter()
        .map(|e| format!("{:<12} {}\n", e.key(), e.label()))
        .collect()
}

/// Confirmation shown after recording, with feedback for the emotion
pub fn format_recorded(entry: &MoodEntry, total: usize) -> String {
    let (title, suggestion) = entry.emotion.feedback();
    format!(
        "Recorded {} at {} ({} entries)\n\n{}\n{}\n",
        entry.emotion.label(),
        entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
        total,
        title,
        suggestion
    )
}
