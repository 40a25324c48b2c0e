//! Human-readable weekly summary consumed by report generators

use crate::domain::{WeekWindow, WeeklyCounts};

/// Inputs for the weekly summary text
#[derive(Debug, Clone)]
pub struct WeeklySummary<'a> {
    pub name: &'a str,
    pub window: WeekWindow,
    pub counts: &'a WeeklyCounts,
    pub positive_count: usize,
    pub goal: u32,
}

impl WeeklySummary<'_> {
    /// Render the summary as plain text, one fact per line
    pub fn render(&self) -> String {
        let top = self.counts.most_frequent();

        let mut lines = vec![
            format!("User: {}", self.name),
            format!(
                "Week ({} ~ {}) summary:",
                self.window.start.format("%Y-%m-%d"),
                self.window.end.format("%Y-%m-%d")
            ),
            format!("- Total entries: {}", self.counts.total()),
            format!(
                "- Most recorded emotion: {}",
                top.map(|e| e.label()).unwrap_or("No entries")
            ),
            format!(
                "- Positive entries: {} / goal {}",
                self.positive_count, self.goal
            ),
            String::new(),
            "Suggested activity:".to_string(),
        ];

        if let Some(emotion) = top {
            let (title, suggestion) = emotion.feedback();
            lines.push(format!("- {}: {}", title, suggestion));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}
