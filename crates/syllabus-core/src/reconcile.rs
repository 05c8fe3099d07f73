//! Carrying completion state from an old schedule into its replacement.
//!
//! Videos are matched by link. The lookup table is built fresh for every
//! call from the old schedule alone, so old and new schedules never share
//! video records.

use std::collections::HashMap;

use crate::{
    models::{ConstraintInput, Schedule, ScheduleDay, VideoInput},
    params::CreateSchedule,
    partition::Continuation,
};

/// Maps every link in `old` to its completion flag.
///
/// When a link appears more than once, the last occurrence in day order wins.
pub fn completion_map(old: &Schedule) -> HashMap<&str, bool> {
    old.videos()
        .map(|video| (video.link.as_str(), video.completed))
        .collect()
}

/// Overwrites the completion flag of each new video whose link exists in
/// `old`. Videos with unknown links keep their current flag.
///
/// Returns the number of videos that matched a link in `old`.
pub fn carry_over(old: &Schedule, days: &mut [ScheduleDay]) -> usize {
    let completed = completion_map(old);
    let mut matched = 0;

    for video in days.iter_mut().flat_map(|day| day.videos.iter_mut()) {
        if let Some(&flag) = completed.get(video.link.as_str()) {
            video.completed = flag;
            matched += 1;
        }
    }
    matched
}

/// Builds the creation request that regenerates `old` under a new daily
/// budget, carrying every completed video forward.
///
/// ```rust
/// # use jiff::{civil::date, Timestamp};
/// # use syllabus_core::models::*;
/// use syllabus_core::{models::ConstraintInput, reconcile::adjustment_request};
///
/// # let video = |n: u32, completed: bool| Video {
/// #     title: format!("Video {n}"),
/// #     duration: "10:00".parse().unwrap(),
/// #     link: format!("v{n}"),
/// #     thumbnail: String::new(),
/// #     completed,
/// # };
/// # let days = vec![ScheduleDay { number: 1, date: date(2024, 1, 1), videos: vec![video(1, true), video(2, false)] }];
/// # let old = Schedule {
/// #     id: 4,
/// #     title: "Algorithms".to_string(),
/// #     playlist: "algo.json".to_string(),
/// #     constraint: Constraint::DayBased { total_days: 1 },
/// #     status: ScheduleStatus::Active,
/// #     summary: ScheduleSummary::from_days(&days),
/// #     days,
/// #     created_at: Timestamp::now(),
/// #     updated_at: Timestamp::now(),
/// # };
/// let request = adjustment_request(&old, 1.5);
/// assert_eq!(request.replaces, Some(4));
/// assert_eq!(request.continuation.completed_links, vec!["v1".to_string()]);
/// assert_eq!(request.constraint, ConstraintInput::from_daily_hours(1.5));
/// ```
pub fn adjustment_request(old: &Schedule, daily_hours: f64) -> CreateSchedule {
    let (completed_links, completed_videos): (Vec<String>, Vec<VideoInput>) = old
        .videos()
        .filter(|video| video.completed)
        .map(|video| (video.link.clone(), VideoInput::from(video)))
        .unzip();

    CreateSchedule {
        playlist: old.playlist.clone(),
        title: Some(old.title.clone()),
        constraint: ConstraintInput::from_daily_hours(daily_hours),
        continuation: Continuation {
            completed_links,
            completed_videos,
            last_day_number: old.last_day_number(),
        },
        replaces: Some(old.id),
    }
}

#[cfg(test)]
mod tests {
    use jiff::{civil::date, Timestamp};

    use super::*;
    use crate::{
        duration::VideoDuration,
        models::{Constraint, ScheduleStatus, ScheduleSummary, Video},
        partition::{fill_by_count, fill_by_time, label_days},
    };

    fn video(n: u32, completed: bool) -> Video {
        Video {
            title: format!("Video {n}"),
            duration: VideoDuration::from_secs(900),
            link: format!("https://example.com/watch?v={n}"),
            thumbnail: String::new(),
            completed,
        }
    }

    fn schedule(videos: Vec<Video>) -> Schedule {
        let days = label_days(fill_by_count(videos, 2), date(2024, 1, 1)).unwrap();
        Schedule {
            id: 11,
            title: "Old".to_string(),
            playlist: "playlist.json".to_string(),
            constraint: Constraint::DayBased { total_days: 2 },
            status: ScheduleStatus::Active,
            summary: ScheduleSummary::from_days(&days),
            days,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    fn flags(days: &[ScheduleDay]) -> Vec<bool> {
        days.iter()
            .flat_map(|d| d.videos.iter().map(|v| v.completed))
            .collect()
    }

    #[test]
    fn test_carry_over_unchanged_playlist() {
        let old = schedule(vec![
            video(1, false),
            video(2, true),
            video(3, false),
            video(4, true),
            video(5, false),
        ]);

        let fresh: Vec<Video> = (1..=5).map(|n| video(n, false)).collect();
        let mut days = label_days(fill_by_time(fresh, 1800), date(2024, 2, 1)).unwrap();

        let matched = carry_over(&old, &mut days);

        assert_eq!(matched, 5);
        assert_eq!(flags(&days), vec![false, true, false, true, false]);
    }

    #[test]
    fn test_carry_over_new_links_default_unmarked() {
        let old = schedule(vec![video(1, true), video(2, true)]);

        let mut days = label_days(
            vec![vec![video(2, false), video(3, false)]],
            date(2024, 2, 1),
        )
        .unwrap();

        let matched = carry_over(&old, &mut days);

        assert_eq!(matched, 1);
        assert_eq!(flags(&days), vec![true, false]);
    }

    #[test]
    fn test_old_plan_wins_over_initial_flag() {
        let old = schedule(vec![video(1, false)]);
        let mut days = label_days(vec![vec![video(1, true)]], date(2024, 2, 1)).unwrap();

        carry_over(&old, &mut days);

        assert_eq!(flags(&days), vec![false]);
    }

    #[test]
    fn test_carry_over_does_not_touch_old_schedule() {
        let old = schedule(vec![video(1, true)]);
        let mut days = label_days(vec![vec![video(1, false)]], date(2024, 2, 1)).unwrap();

        carry_over(&old, &mut days);
        days[0].videos[0].completed = false;

        assert!(old.days[0].videos[0].completed);
    }

    #[test]
    fn test_adjustment_request_carries_completed_records() {
        let old = schedule(vec![
            video(1, true),
            video(2, false),
            video(3, true),
        ]);

        let request = adjustment_request(&old, 2.0);

        assert_eq!(request.playlist, "playlist.json");
        assert_eq!(request.title.as_deref(), Some("Old"));
        assert_eq!(request.replaces, Some(11));
        assert_eq!(
            request.constraint,
            ConstraintInput::TimeBased {
                daily_minutes: 120.0
            }
        );
        assert_eq!(
            request.continuation.completed_links,
            vec![
                "https://example.com/watch?v=1".to_string(),
                "https://example.com/watch?v=3".to_string(),
            ]
        );
        assert_eq!(request.continuation.completed_videos.len(), 2);
        assert_eq!(request.continuation.completed_videos[1].duration, "00:15:00");
        assert_eq!(request.continuation.last_day_number, 2);
    }
}
