//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with styling and the MCP
//! server can hand it to clients verbatim.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    duration::format_duration,
    lookup::VideoLocation,
    models::{
        Constraint, Schedule, ScheduleDay, ScheduleOverview, ScheduleStatus, ScheduleSummary,
        Video,
    },
};

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::TimeBased { daily_seconds } => {
                write!(f, "{} per day", format_duration(*daily_seconds))
            }
            Constraint::DayBased { total_days: 1 } => write!(f, "1 day"),
            Constraint::DayBased { total_days } => write!(f, "{total_days} days"),
        }
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "✓" } else { "○" };
        writeln!(f, "- {mark} {} ({})", self.title, self.duration)?;
        writeln!(f, "  {}", self.link)
    }
}

impl fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} ({}) · {}",
            self.label(),
            self.date,
            self.total_duration()
        )?;
        writeln!(f)?;
        for video in &self.videos {
            write!(f, "{video}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- Progress: {}/{} videos ({:.1}%)",
            self.completed_videos, self.total_videos, self.completion_percentage
        )?;
        writeln!(f, "- Days: {}", self.total_days)?;
        writeln!(f, "- Total duration: {}", self.total_duration)?;
        writeln!(f, "- Average per day: {}", self.average_daily_duration)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Playlist: {}", self.playlist)?;
        writeln!(f, "- Constraint: {}", self.constraint)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Summary")?;
        writeln!(f)?;
        write!(f, "{}", self.summary)?;

        if self.days.is_empty() {
            writeln!(f, "\nNo days in this schedule.")?;
        } else {
            writeln!(f, "\n## Days")?;
            writeln!(f)?;
            for day in &self.days {
                write!(f, "{day}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ScheduleOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} (ID: {}) ({}/{})",
            self.title, self.id, self.completed_videos, self.total_videos
        )?;
        writeln!(f)?;
        writeln!(f, "- **Playlist**: {}", self.playlist)?;
        writeln!(
            f,
            "- **Length**: {} days, {}",
            self.total_days, self.total_duration
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

impl fmt::Display for VideoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "'{}' is scheduled on {} ({})",
            self.video.title,
            self.day_label(),
            self.date
        )?;
        writeln!(f)?;
        write!(f, "{}", self.video)
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::duration::VideoDuration;

    fn video(title: &str, completed: bool) -> Video {
        Video {
            title: title.to_string(),
            duration: VideoDuration::from_secs(754),
            link: format!("https://example.com/{title}"),
            thumbnail: String::new(),
            completed,
        }
    }

    fn schedule() -> Schedule {
        let days = vec![ScheduleDay {
            number: 1,
            date: date(2024, 2, 29),
            videos: vec![video("Intro", true), video("Ownership", false)],
        }];
        Schedule {
            id: 5,
            title: "Rust".to_string(),
            playlist: "rust.json".to_string(),
            constraint: Constraint::TimeBased {
                daily_seconds: 5400,
            },
            status: ScheduleStatus::Active,
            summary: ScheduleSummary::from_days(&days),
            days,
            created_at: Timestamp::from_second(1_704_067_200).unwrap(),
            updated_at: Timestamp::from_second(1_704_067_200).unwrap(),
        }
    }

    #[test]
    fn test_constraint_display() {
        assert_eq!(
            Constraint::TimeBased {
                daily_seconds: 5400
            }
            .to_string(),
            "01:30:00 per day"
        );
        assert_eq!(Constraint::DayBased { total_days: 1 }.to_string(), "1 day");
        assert_eq!(Constraint::DayBased { total_days: 12 }.to_string(), "12 days");
    }

    #[test]
    fn test_video_display_marks_completion() {
        assert_eq!(
            video("Intro", true).to_string(),
            "- ✓ Intro (00:12:34)\n  https://example.com/Intro\n"
        );
        assert!(video("Intro", false).to_string().starts_with("- ○ Intro"));
    }

    #[test]
    fn test_schedule_display() {
        let output = schedule().to_string();

        assert!(output.starts_with("# 5. Rust\n"));
        assert!(output.contains("- Status: ➤ Active"));
        assert!(output.contains("- Constraint: 01:30:00 per day"));
        assert!(output.contains("- Progress: 1/2 videos (50.0%)"));
        assert!(output.contains("### Day 1 (2024-02-29) · 00:25:08"));
        assert!(output.contains("- ○ Ownership (00:12:34)"));
    }

    #[test]
    fn test_empty_schedule_display() {
        let mut schedule = schedule();
        schedule.days.clear();
        schedule.summary = ScheduleSummary::from_days(&schedule.days);
        assert!(schedule.to_string().contains("No days in this schedule."));
    }

    #[test]
    fn test_overview_display() {
        let overview = ScheduleOverview::from(&schedule());
        let output = overview.to_string();
        assert!(output.starts_with("## Rust (ID: 5) (1/2)"));
        assert!(output.contains("- **Length**: 1 days, 00:25:08"));
    }

    #[test]
    fn test_location_display() {
        let schedule = schedule();
        let location = crate::lookup::locate_video(&schedule, "Ownership").unwrap();
        let output = location.to_string();
        assert!(output.starts_with("'Ownership' is scheduled on Day 1 (2024-02-29)"));
    }
}
