//! Aggregate statistics over a schedule's days.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Schedule, ScheduleDay, ScheduleStatus};
use crate::duration::VideoDuration;

/// Per-day and whole-schedule totals derived from the day list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScheduleSummary {
    /// Number of videos across all days
    pub total_videos: usize,
    /// Number of days in the schedule
    pub total_days: usize,
    /// Sum of all video runtimes
    pub total_duration: VideoDuration,
    /// Total runtime divided by the number of days
    pub average_daily_duration: VideoDuration,
    /// Runtime of each day, in day order
    pub daily_durations: Vec<VideoDuration>,
    /// Number of videos marked completed
    pub completed_videos: usize,
    /// Completed share of all videos, from 0 to 100
    pub completion_percentage: f64,
}

impl ScheduleSummary {
    /// Computes the summary of a finished day list.
    pub fn from_days(days: &[ScheduleDay]) -> Self {
        let daily_durations: Vec<VideoDuration> =
            days.iter().map(ScheduleDay::total_duration).collect();
        let total_duration: VideoDuration = daily_durations.iter().copied().sum();
        let total_videos: usize = days.iter().map(|d| d.videos.len()).sum();
        let completed_videos: usize = days.iter().map(ScheduleDay::completed_count).sum();

        let average_daily_duration = if days.is_empty() {
            VideoDuration::default()
        } else {
            VideoDuration::from_secs(total_duration.as_secs() / days.len() as u64)
        };

        let completion_percentage = if total_videos == 0 {
            0.0
        } else {
            completed_videos as f64 * 100.0 / total_videos as f64
        };

        Self {
            total_videos,
            total_days: days.len(),
            total_duration,
            average_daily_duration,
            daily_durations,
            completed_videos,
            completion_percentage,
        }
    }

    /// Number of videos not yet completed.
    pub fn pending_videos(&self) -> usize {
        self.total_videos - self.completed_videos
    }

    /// Status implied by the completion counts.
    pub fn status(&self) -> ScheduleStatus {
        ScheduleStatus::from_progress(self.completed_videos, self.total_videos)
    }
}

/// Compact list view of a schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOverview {
    /// Schedule ID
    pub id: u64,
    /// Title of the schedule
    pub title: String,
    /// Playlist the schedule was generated from
    pub playlist: String,
    /// Schedule status
    pub status: ScheduleStatus,
    /// Creation timestamp
    pub created_at: Timestamp,
    /// Number of days
    pub total_days: usize,
    /// Total number of videos
    pub total_videos: usize,
    /// Number of completed videos
    pub completed_videos: usize,
    /// Total runtime
    pub total_duration: VideoDuration,
}

impl From<&Schedule> for ScheduleOverview {
    fn from(schedule: &Schedule) -> Self {
        Self {
            id: schedule.id,
            title: schedule.title.clone(),
            playlist: schedule.playlist.clone(),
            status: schedule.status,
            created_at: schedule.created_at,
            total_days: schedule.summary.total_days,
            total_videos: schedule.summary.total_videos,
            completed_videos: schedule.summary.completed_videos,
            total_duration: schedule.summary.total_duration,
        }
    }
}
