//! Partitioning an ordered playlist into study days.
//!
//! Both constraint modes walk the playlist once, front to back, and never
//! reorder, split or drop a video. Flattening the produced days always yields
//! the input sequence.
//!
//! ```rust
//! use jiff::civil::date;
//! use syllabus_core::{
//!     models::{Constraint, VideoInput},
//!     partition::{generate, Continuation},
//! };
//!
//! let playlist: Vec<VideoInput> = (1..=10)
//!     .map(|i| VideoInput {
//!         title: format!("Lecture {i}"),
//!         duration: "20:00".to_string(),
//!         link: format!("https://example.com/watch?v={i}"),
//!         thumbnail: String::new(),
//!     })
//!     .collect();
//!
//! let generated = generate(
//!     &playlist,
//!     &Constraint::DayBased { total_days: 3 },
//!     &Continuation::default(),
//!     date(2024, 1, 1),
//! )
//! .unwrap();
//!
//! let sizes: Vec<usize> = generated.days.iter().map(|d| d.videos.len()).collect();
//! assert_eq!(sizes, vec![4, 4, 2]);
//! assert_eq!(generated.days[2].date, date(2024, 1, 3));
//! ```

use std::collections::HashSet;

use jiff::{civil::Date, ToSpan};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ScheduleError},
    models::{Constraint, ScheduleDay, ScheduleSummary, Video, VideoInput},
};

/// State carried into a generation from a previous schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Continuation {
    /// Links of videos already watched
    #[serde(default)]
    pub completed_links: Vec<String>,
    /// Full records of the watched videos
    #[serde(default)]
    pub completed_videos: Vec<VideoInput>,
    /// Last day number of the schedule being replaced
    #[serde(default)]
    pub last_day_number: u32,
}

impl Continuation {
    /// Every link known to be completed, from both the link list and the
    /// carried records.
    pub fn completed_set(&self) -> HashSet<&str> {
        self.completed_links
            .iter()
            .map(String::as_str)
            .chain(self.completed_videos.iter().map(|v| v.link.as_str()))
            .collect()
    }
}

/// Days and summary produced by one planning pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSchedule {
    pub days: Vec<ScheduleDay>,
    pub summary: ScheduleSummary,
}

/// Runs the full planning pipeline over a fetched playlist.
///
/// Every duration is parsed before any day is built, so malformed input never
/// yields a partial schedule. Day numbering always starts at 1.
///
/// # Errors
///
/// * `ScheduleError::EmptyPlaylist` when `inputs` is empty
/// * `ScheduleError::MalformedDuration` when any duration fails to parse
pub fn generate(
    inputs: &[VideoInput],
    constraint: &Constraint,
    continuation: &Continuation,
    start_date: Date,
) -> Result<GeneratedSchedule> {
    if inputs.is_empty() {
        return Err(ScheduleError::EmptyPlaylist);
    }

    if continuation.last_day_number > 0 {
        debug!(
            "Ignoring last day number {} and numbering from Day 1",
            continuation.last_day_number
        );
    }

    let videos = prepare_videos(inputs, &continuation.completed_set())?;
    let buckets = match *constraint {
        Constraint::TimeBased { daily_seconds } => fill_by_time(videos, daily_seconds),
        Constraint::DayBased { total_days } => fill_by_count(videos, total_days),
    };
    let days = label_days(buckets, start_date)?;
    let summary = ScheduleSummary::from_days(&days);

    debug!(
        "Planned {} videos into {} days",
        summary.total_videos, summary.total_days
    );

    Ok(GeneratedSchedule { days, summary })
}

/// Parses every input and sets its initial completion flag from `completed`.
///
/// # Errors
///
/// Returns the first `ScheduleError::MalformedDuration` encountered.
pub fn prepare_videos(inputs: &[VideoInput], completed: &HashSet<&str>) -> Result<Vec<Video>> {
    inputs
        .iter()
        .map(|input| Video::from_input(input, completed.contains(input.link.as_str())))
        .collect()
}

/// Greedy time-budget fill.
///
/// A non-empty day is closed before a video that would bring it to or past
/// `daily_seconds`. A video longer than the budget therefore sits alone on
/// its own day.
pub fn fill_by_time(videos: Vec<Video>, daily_seconds: u64) -> Vec<Vec<Video>> {
    let mut buckets = Vec::new();
    let mut current: Vec<Video> = Vec::new();
    let mut running = 0u64;

    for video in videos {
        let seconds = video.seconds();
        if !current.is_empty() && running.saturating_add(seconds) >= daily_seconds {
            buckets.push(std::mem::take(&mut current));
            running = 0;
        }
        running = running.saturating_add(seconds);
        current.push(video);
    }

    if !current.is_empty() {
        buckets.push(current);
    }
    buckets
}

/// Even-count fill: `ceil(n / total_days)` videos per day until the playlist
/// runs out.
///
/// Fewer days than requested are produced when the playlist runs out first,
/// so the day count never exceeds `min(total_days, n)`.
pub fn fill_by_count(videos: Vec<Video>, total_days: u32) -> Vec<Vec<Video>> {
    if videos.is_empty() {
        return Vec::new();
    }

    let per_day = videos.len().div_ceil(total_days.max(1) as usize);
    let mut buckets = Vec::with_capacity(videos.len().div_ceil(per_day));
    let mut remaining = videos.into_iter().peekable();
    while remaining.peek().is_some() {
        buckets.push(remaining.by_ref().take(per_day).collect());
    }
    buckets
}

/// Numbers buckets from Day 1 and dates them from `start_date`.
///
/// # Errors
///
/// Returns `ScheduleError::InvalidInput` if a date would fall outside the
/// supported calendar range or the day count does not fit a day number.
pub fn label_days(buckets: Vec<Vec<Video>>, start_date: Date) -> Result<Vec<ScheduleDay>> {
    buckets
        .into_iter()
        .enumerate()
        .map(|(index, videos)| {
            let offset = i64::try_from(index).unwrap_or(i64::MAX);
            let date = start_date.checked_add(offset.days()).map_err(|e| {
                ScheduleError::invalid_input("start_date")
                    .with_reason(format!("schedule runs past the calendar: {e}"))
            })?;
            let number = u32::try_from(index + 1).map_err(|_| {
                ScheduleError::invalid_input("playlist").with_reason("schedule has too many days")
            })?;
            Ok(ScheduleDay {
                number,
                date,
                videos,
            })
        })
        .collect()
}
