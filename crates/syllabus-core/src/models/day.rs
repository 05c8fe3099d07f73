//! One day of a study schedule.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Video;
use crate::duration::VideoDuration;

/// An ordered group of videos assigned to a single calendar day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleDay {
    /// Day number, starting at 1 with no gaps
    pub number: u32,

    /// Calendar date assigned when the schedule was generated
    pub date: Date,

    /// Videos to watch on this day, in playlist order
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl ScheduleDay {
    /// Human-readable label such as `Day 3`.
    pub fn label(&self) -> String {
        format!("Day {}", self.number)
    }

    /// Sum of the runtimes of this day's videos.
    pub fn total_duration(&self) -> VideoDuration {
        self.videos.iter().map(|v| v.duration).sum()
    }

    /// Number of videos on this day already marked completed.
    pub fn completed_count(&self) -> usize {
        self.videos.iter().filter(|v| v.completed).count()
    }
}
