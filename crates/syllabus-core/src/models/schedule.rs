//! Schedule model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Constraint, ScheduleDay, ScheduleStatus, ScheduleSummary, Video};

/// Title used when a schedule is created without one.
pub const DEFAULT_TITLE: &str = "Untitled Schedule";

/// A complete day-by-day study schedule for one playlist.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schedule {
    /// Unique identifier for the schedule
    pub id: u64,

    /// Title of the schedule
    pub title: String,

    /// Reference to the source playlist
    pub playlist: String,

    /// Rule the days were partitioned under
    pub constraint: Constraint,

    /// Whether the schedule still has unwatched videos
    #[serde(default)]
    pub status: ScheduleStatus,

    /// Days in order, numbered from 1
    #[serde(default)]
    pub days: Vec<ScheduleDay>,

    /// Aggregates over `days`
    #[serde(default)]
    pub summary: ScheduleSummary,

    /// Timestamp when the schedule was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the schedule was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Schedule {
    /// Iterates over every video in day order.
    pub fn videos(&self) -> impl Iterator<Item = &Video> {
        self.days.iter().flat_map(|day| day.videos.iter())
    }

    /// Number of the last day, or 0 for an empty schedule.
    pub fn last_day_number(&self) -> u32 {
        self.days.last().map_or(0, |day| day.number)
    }
}
