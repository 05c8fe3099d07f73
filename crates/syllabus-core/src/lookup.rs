//! Read-only point queries over a finished schedule.

use jiff::civil::Date;
use serde::Serialize;

use crate::models::{Schedule, Video};

/// Where a video sits within a schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoLocation {
    /// Number of the containing day
    pub day: u32,
    /// Calendar date of the containing day
    pub date: Date,
    /// The matched video
    pub video: Video,
}

impl VideoLocation {
    /// Label of the containing day, e.g. `Day 2`.
    pub fn day_label(&self) -> String {
        format!("Day {}", self.day)
    }
}

/// Finds the first video whose title equals `title` exactly, scanning days
/// in order.
///
/// Titles are compared without any normalization, and a playlist with
/// duplicate titles always resolves to the earliest one. Returns `None` when
/// nothing matches.
pub fn locate_video(schedule: &Schedule, title: &str) -> Option<VideoLocation> {
    find(schedule, |video| video.title == title)
}

/// Finds the first video with the given link.
pub fn find_by_link(schedule: &Schedule, link: &str) -> Option<VideoLocation> {
    find(schedule, |video| video.link == link)
}

fn find(schedule: &Schedule, matches: impl Fn(&Video) -> bool) -> Option<VideoLocation> {
    schedule.days.iter().find_map(|day| {
        day.videos
            .iter()
            .find(|video| matches(video))
            .map(|video| VideoLocation {
                day: day.number,
                date: day.date,
                video: video.clone(),
            })
    })
}
