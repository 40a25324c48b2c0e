//! Weekly report use case
//!
//! One refresh = load the log, resolve the week, aggregate, evaluate the
//! challenge. The only state carried between refreshes is the challenge
//! session, which is loaded and saved explicitly.

use crate::domain::{
    calendar_for_week, counts_for_week, entries_in_week, goal_met, positive_count, week_of,
    ChallengeStatus, DayEmotionMap, WeekWindow, WeeklyCounts, WeeklySummary,
};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository, RecordStore};
use chrono::NaiveDate;

/// Everything the presentation layer needs for one week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyReport {
    pub name: String,
    pub window: WeekWindow,
    pub counts: WeeklyCounts,
    pub calendar: DayEmotionMap,
    pub positive_count: usize,
    pub goal: u32,
    pub goal_met: bool,
}

impl WeeklyReport {
    /// Plain-text summary for report generators
    pub fn summary(&self) -> String {
        WeeklySummary {
            name: &self.name,
            window: self.window,
            counts: &self.counts,
            positive_count: self.positive_count,
            goal: self.goal,
        }
        .render()
    }
}

/// Service building weekly reports and tracking the challenge
pub struct WeeklyReportService {
    repository: FileSystemRepository,
}

impl WeeklyReportService {
    pub fn new(repository: FileSystemRepository) -> Self {
        WeeklyReportService { repository }
    }

    /// Aggregate the week containing `reference`. Read-only.
    pub fn report(&self, reference: NaiveDate) -> Result<WeeklyReport> {
        let config = self.repository.load_config()?;
        let entries = self.repository.store().load()?;

        let window = week_of(reference)?;
        let positive = positive_count(entries_in_week(&entries, &window));

        tracing::debug!(
            start = %window.start,
            end = %window.end,
            entries = entries.len(),
            "building weekly report"
        );

        Ok(WeeklyReport {
            name: config.name,
            window,
            counts: counts_for_week(&entries, &window),
            calendar: calendar_for_week(&entries, &window),
            positive_count: positive,
            goal: config.weekly_goal,
            goal_met: goal_met(positive, config.weekly_goal),
        })
    }

    /// Advance the stored challenge session with `report` and persist any change
    pub fn check_challenge(&self, report: &WeeklyReport) -> Result<ChallengeStatus> {
        let session = self.repository.load_session()?;
        let (next, status) = session.clone().observe(&report.window, report.goal_met);

        if next != session {
            self.repository.save_session(&next)?;
        }
        if status == ChallengeStatus::JustAchieved {
            tracing::info!(week = %report.window.start, "weekly challenge achieved");
        }

        Ok(status)
    }

    /// Clear the announced flag so the next achievement is celebrated again
    pub fn reset_challenge(&self) -> Result<()> {
        let session = self.repository.load_session()?;
        self.repository.save_session(&session.reset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Emotion, MoodEntry};
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn setup(goal: u32) -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config {
            name: "Mina".to_string(),
            weekly_goal: goal,
        })
        .unwrap();
        (temp, repo)
    }

    fn add(repo: &FileSystemRepository, day: u32, hour: u32, emotion: Emotion) {
        let ts = date(day).and_hms_opt(hour, 0, 0).unwrap();
        repo.store().append(MoodEntry::new(ts, emotion, "")).unwrap();
    }

    #[test]
    fn test_report_for_empty_journal() {
        let (_temp, repo) = setup(3);
        let report = WeeklyReportService::new(repo).report(date(13)).unwrap();

        assert_eq!(report.window.start, date(10));
        assert_eq!(report.counts.total(), 0);
        assert!(report.calendar.iter().all(|(_, e)| e.is_none()));
        assert_eq!(report.positive_count, 0);
        assert!(!report.goal_met);
    }

    #[test]
    fn test_report_aggregates_week() {
        let (_temp, repo) = setup(2);
        add(&repo, 10, 9, Emotion::Happy);
        add(&repo, 10, 21, Emotion::Sad);
        add(&repo, 12, 9, Emotion::VeryHappy);
        add(&repo, 17, 9, Emotion::Happy);

        let report = WeeklyReportService::new(repo).report(date(13)).unwrap();
        assert_eq!(report.counts.total(), 3);
        assert_eq!(report.calendar.get(date(10)), Some(Emotion::Sad));
        assert_eq!(report.calendar.get(date(12)), Some(Emotion::VeryHappy));
        assert_eq!(report.positive_count, 2);
        assert!(report.goal_met);
        assert!(report.summary().contains("User: Mina"));
    }

    #[test]
    fn test_challenge_announced_once_and_reset() {
        let (_temp, repo) = setup(1);
        add(&repo, 11, 9, Emotion::Happy);
        let service = WeeklyReportService::new(repo.clone());

        let report = service.report(date(13)).unwrap();
        assert_eq!(
            service.check_challenge(&report).unwrap(),
            ChallengeStatus::JustAchieved
        );
        assert_eq!(
            service.check_challenge(&report).unwrap(),
            ChallengeStatus::AlreadyAchieved
        );
        assert!(repo
            .load_session()
            .unwrap()
            .announced_weeks
            .contains(&date(10)));

        service.reset_challenge().unwrap();
        assert_eq!(
            service.check_challenge(&report).unwrap(),
            ChallengeStatus::JustAchieved
        );
    }

    #[test]
    fn test_viewing_another_week_keeps_announcement() {
        let (_temp, repo) = setup(1);
        add(&repo, 11, 9, Emotion::Happy);
        add(&repo, 18, 9, Emotion::VeryHappy);
        let service = WeeklyReportService::new(repo);

        let this_week = service.report(date(13)).unwrap();
        let next_week = service.report(date(20)).unwrap();

        assert_eq!(
            service.check_challenge(&this_week).unwrap(),
            ChallengeStatus::JustAchieved
        );
        assert_eq!(
            service.check_challenge(&next_week).unwrap(),
            ChallengeStatus::JustAchieved
        );
        assert_eq!(
            service.check_challenge(&this_week).unwrap(),
            ChallengeStatus::AlreadyAchieved
        );
        assert_eq!(
            service.check_challenge(&next_week).unwrap(),
            ChallengeStatus::AlreadyAchieved
        );
    }

    #[test]
    fn test_report_for_unrepresentable_week_fails() {
        let (_temp, repo) = setup(3);
        let service = WeeklyReportService::new(repo);

        assert!(matches!(
            service.report(NaiveDate::MAX),
            Err(crate::error::MoodlogError::InvalidTimeReference(_))
        ));
    }

    #[test]
    fn test_challenge_in_progress_does_not_write_session() {
        let (temp, repo) = setup(5);
        add(&repo, 11, 9, Emotion::Happy);
        let service = WeeklyReportService::new(repo);

        let report = service.report(date(13)).unwrap();
        assert_eq!(
            service.check_challenge(&report).unwrap(),
            ChallengeStatus::InProgress
        );
        assert!(!temp.path().join(".moodlog/session.toml").exists());
    }
}
