//! Tests for the scheduler module.

use std::sync::{Arc, Mutex};

use jiff::civil::date;
use tempfile::TempDir;

use super::*;
use crate::{
    error::{Result, ScheduleError},
    models::{ConstraintInput, ScheduleStatus, VideoInput},
    params::{
        AdjustSchedule, CreateSchedule, DeleteSchedule, Id, ListSchedules, LocateVideo,
        UpdateProgress,
    },
    partition::Continuation,
    source::PlaylistSource,
};

/// Playlist source backed by a swappable in-memory list.
#[derive(Default)]
struct MemorySource {
    videos: Mutex<Vec<VideoInput>>,
}

impl MemorySource {
    fn replace(&self, videos: Vec<VideoInput>) {
        *self.videos.lock().unwrap() = videos;
    }
}

impl PlaylistSource for MemorySource {
    fn fetch(&self, _playlist: &str) -> Result<Vec<VideoInput>> {
        Ok(self.videos.lock().unwrap().clone())
    }
}

fn input(n: u32, duration: &str) -> VideoInput {
    VideoInput {
        title: format!("Lesson {n}"),
        duration: duration.to_string(),
        link: format!("https://example.com/watch?v={n}"),
        thumbnail: String::new(),
    }
}

fn link(n: u32) -> String {
    format!("https://example.com/watch?v={n}")
}

/// Helper function to create a test scheduler over a memory source
async fn create_test_scheduler(videos: Vec<VideoInput>) -> (TempDir, Arc<MemorySource>, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let source = Arc::new(MemorySource::default());
    source.replace(videos);
    let scheduler = SchedulerBuilder::new()
        .with_database_path(&db_path)
        .with_source(source.clone())
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, source, scheduler)
}

fn create_params(constraint: ConstraintInput) -> CreateSchedule {
    CreateSchedule {
        playlist: "course".to_string(),
        title: Some("Course".to_string()),
        constraint,
        continuation: Continuation::default(),
        replaces: None,
    }
}

#[tokio::test]
async fn test_create_time_based_schedule() {
    let videos = (1..=25).map(|n| input(n, "10:00")).collect();
    let (_temp_dir, _source, scheduler) = create_test_scheduler(videos).await;

    let schedule = scheduler
        .create_schedule_from(
            &create_params(ConstraintInput::from_daily_hours(1.0)),
            date(2024, 1, 1),
        )
        .await
        .expect("Failed to create schedule");

    assert_eq!(schedule.days.len(), 5);
    assert!(schedule.days.iter().all(|d| d.videos.len() == 5));
    assert_eq!(schedule.days[4].date, date(2024, 1, 5));
    assert_eq!(schedule.summary.total_videos, 25);
    assert_eq!(schedule.status, ScheduleStatus::Active);

    let stored = scheduler
        .get_schedule(&Id { id: schedule.id })
        .await
        .unwrap()
        .expect("Schedule should exist");
    assert_eq!(stored.days, schedule.days);
    assert_eq!(stored.summary, schedule.summary);
}

#[tokio::test]
async fn test_create_rejects_bad_input_without_storing() {
    let (_temp_dir, source, scheduler) =
        create_test_scheduler(vec![input(1, "10:00"), input(2, "ten minutes")]).await;

    let err = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 2 }))
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::MalformedDuration { .. }));

    source.replace(Vec::new());
    let err = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 2 }))
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::EmptyPlaylist));

    let err = scheduler
        .create_schedule(&create_params(ConstraintInput::from_daily_hours(0.1)))
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidConstraint { .. }));

    let all = scheduler.query_schedules(None).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_progress_updates_summary_and_status() {
    let (_temp_dir, _source, scheduler) =
        create_test_scheduler(vec![input(1, "05:00"), input(2, "05:00")]).await;
    let schedule = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 1 }))
        .await
        .unwrap();

    let updated = scheduler
        .update_progress(&UpdateProgress {
            schedule_id: schedule.id,
            link: link(1),
            completed: true,
        })
        .await
        .unwrap();
    assert_eq!(updated.summary.completed_videos, 1);
    assert_eq!(updated.summary.completion_percentage, 50.0);
    assert_eq!(updated.status, ScheduleStatus::Active);

    let updated = scheduler
        .update_progress(&UpdateProgress {
            schedule_id: schedule.id,
            link: link(2),
            completed: true,
        })
        .await
        .unwrap();
    assert_eq!(updated.status, ScheduleStatus::Completed);

    let completed = scheduler
        .list_schedules(&ListSchedules {
            completed: true,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(completed.len(), 1);
    let active = scheduler
        .list_schedules(&ListSchedules::default())
        .await
        .unwrap();
    assert!(active.is_empty());

    let err = scheduler
        .update_progress(&UpdateProgress {
            schedule_id: schedule.id,
            link: "missing".to_string(),
            completed: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::VideoNotFound { .. }));
}

#[tokio::test]
async fn test_adjust_keeps_completed_and_retires_old() {
    let videos = (1..=5).map(|n| input(n, "15:00")).collect();
    let (_temp_dir, _source, scheduler) = create_test_scheduler(videos).await;

    let old = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 2 }))
        .await
        .unwrap();
    for n in [2, 4] {
        scheduler
            .update_progress(&UpdateProgress {
                schedule_id: old.id,
                link: link(n),
                completed: true,
            })
            .await
            .unwrap();
    }

    let adjusted = scheduler
        .adjust_schedule(&AdjustSchedule {
            id: old.id,
            daily_hours: 0.5,
        })
        .await
        .expect("Failed to adjust schedule");

    assert_ne!(adjusted.id, old.id);
    assert_eq!(adjusted.title, "Course");
    assert_eq!(adjusted.days[0].number, 1);
    let flags: Vec<bool> = adjusted.videos().map(|v| v.completed).collect();
    assert_eq!(flags, vec![false, true, false, true, false]);
    assert_eq!(adjusted.summary.completed_videos, 2);

    assert!(scheduler.get_schedule(&Id { id: old.id }).await.unwrap().is_none());
    assert_eq!(scheduler.query_schedules(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_adjust_with_changed_playlist() {
    let (_temp_dir, source, scheduler) =
        create_test_scheduler(vec![input(1, "20:00"), input(2, "20:00")]).await;

    let old = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 1 }))
        .await
        .unwrap();
    scheduler
        .update_progress(&UpdateProgress {
            schedule_id: old.id,
            link: link(2),
            completed: true,
        })
        .await
        .unwrap();

    source.replace(vec![input(2, "20:00"), input(3, "20:00")]);

    let adjusted = scheduler
        .adjust_schedule(&AdjustSchedule {
            id: old.id,
            daily_hours: 1.0,
        })
        .await
        .unwrap();

    let flags: Vec<(String, bool)> = adjusted
        .videos()
        .map(|v| (v.link.clone(), v.completed))
        .collect();
    assert_eq!(flags, vec![(link(2), true), (link(3), false)]);
}

#[tokio::test]
async fn test_adjust_missing_schedule() {
    let (_temp_dir, _source, scheduler) = create_test_scheduler(vec![input(1, "10:00")]).await;

    let err = scheduler
        .adjust_schedule(&AdjustSchedule {
            id: 42,
            daily_hours: 1.0,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::ScheduleNotFound { id: 42 }));
}

#[tokio::test]
async fn test_locate_video() {
    let videos = (1..=4).map(|n| input(n, "30:00")).collect();
    let (_temp_dir, _source, scheduler) = create_test_scheduler(videos).await;
    let schedule = scheduler
        .create_schedule_from(
            &create_params(ConstraintInput::DayBased { total_days: 2 }),
            date(2024, 6, 10),
        )
        .await
        .unwrap();

    let found = scheduler
        .locate_video(&LocateVideo {
            schedule_id: schedule.id,
            title: "Lesson 3".to_string(),
        })
        .await
        .unwrap()
        .expect("Video should be found");
    assert_eq!(found.day_label(), "Day 2");
    assert_eq!(found.date, date(2024, 6, 11));

    let missing = scheduler
        .locate_video(&LocateVideo {
            schedule_id: schedule.id,
            title: "Lesson 9".to_string(),
        })
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete_requires_confirmation() {
    let (_temp_dir, _source, scheduler) = create_test_scheduler(vec![input(1, "10:00")]).await;
    let schedule = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 1 }))
        .await
        .unwrap();

    let err = scheduler
        .delete_schedule(&DeleteSchedule {
            id: schedule.id,
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidInput { .. }));

    let deleted = scheduler
        .delete_schedule(&DeleteSchedule {
            id: schedule.id,
            confirmed: true,
        })
        .await
        .unwrap()
        .expect("Schedule should have been deleted");
    assert_eq!(deleted.id, schedule.id);

    let again = scheduler
        .delete_schedule(&DeleteSchedule {
            id: schedule.id,
            confirmed: true,
        })
        .await
        .unwrap();
    assert!(again.is_none());
}

/// Installs a trigger on the scheduler's database that intercepts deletes
/// of schedule rows with the given SQLite `RAISE` action.
fn guard_schedule_deletes(scheduler: &Scheduler, action: &str) {
    let connection = rusqlite::Connection::open(scheduler.database_path())
        .expect("Failed to open database");
    connection
        .execute_batch(&format!(
            "CREATE TRIGGER guard_schedules BEFORE DELETE ON schedules \
             BEGIN SELECT RAISE({action}); END;"
        ))
        .expect("Failed to install trigger");
}

#[tokio::test]
async fn test_adjust_reports_old_schedule_left_behind() {
    let videos = (1..=5).map(|n| input(n, "10:00")).collect();
    let (_temp_dir, _source, scheduler) = create_test_scheduler(videos).await;

    let old = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 2 }))
        .await
        .unwrap();
    scheduler
        .update_progress(&UpdateProgress {
            schedule_id: old.id,
            link: link(2),
            completed: true,
        })
        .await
        .unwrap();

    guard_schedule_deletes(&scheduler, "ABORT, 'schedule is locked'");

    let err = scheduler
        .adjust_schedule(&AdjustSchedule {
            id: old.id,
            daily_hours: 0.5,
        })
        .await
        .unwrap_err();
    assert!(err.is_incomplete_reconciliation());
    let (new_id, old_id) = match err {
        ScheduleError::ReconciliationIncomplete { new_id, old_id, .. } => (new_id, old_id),
        other => panic!("expected an incomplete reconciliation, got {other:?}"),
    };
    assert_eq!(old_id, old.id);
    assert_ne!(new_id, old.id);

    assert_eq!(scheduler.query_schedules(None).await.unwrap().len(), 2);
    for id in [old_id, new_id] {
        let schedule = scheduler
            .get_schedule(&Id { id })
            .await
            .unwrap()
            .expect("Both schedules should be live");
        assert_eq!(schedule.summary.total_videos, 5);
        assert_eq!(schedule.summary.completed_videos, 1);
        assert!(schedule.videos().any(|v| v.link == link(2) && v.completed));
    }
}

#[tokio::test]
async fn test_adjust_succeeds_when_old_schedule_already_gone() {
    let videos = (1..=3).map(|n| input(n, "10:00")).collect();
    let (_temp_dir, _source, scheduler) = create_test_scheduler(videos).await;

    let old = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 1 }))
        .await
        .unwrap();

    // Deletes of the schedule row become no-ops, as if another caller had
    // removed it first
    guard_schedule_deletes(&scheduler, "IGNORE");

    let adjusted = scheduler
        .adjust_schedule(&AdjustSchedule {
            id: old.id,
            daily_hours: 1.0,
        })
        .await
        .expect("Adjustment should still succeed");
    assert_ne!(adjusted.id, old.id);
    assert_eq!(adjusted.summary.total_videos, 3);
}

#[tokio::test]
async fn test_update_progress_missing_schedule() {
    let (_temp_dir, _source, scheduler) = create_test_scheduler(vec![input(1, "10:00")]).await;

    let err = scheduler
        .update_progress(&UpdateProgress {
            schedule_id: 9,
            link: link(1),
            completed: true,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ScheduleError::ScheduleNotFound { id: 9 }));
}

#[tokio::test]
async fn test_list_filters_by_playlist() {
    let (_temp_dir, _source, scheduler) = create_test_scheduler(vec![input(1, "10:00")]).await;

    let first = scheduler
        .create_schedule(&create_params(ConstraintInput::DayBased { total_days: 1 }))
        .await
        .unwrap();
    let mut params = create_params(ConstraintInput::DayBased { total_days: 1 });
    params.playlist = "other".to_string();
    let second = scheduler.create_schedule(&params).await.unwrap();

    let all = scheduler
        .list_schedules(&ListSchedules::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let only_first = scheduler
        .list_schedules(&ListSchedules {
            completed: false,
            playlist: Some("course".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(only_first.len(), 1);
    assert_eq!(only_first[0].id, first.id);

    let only_second = scheduler
        .list_schedules(&ListSchedules {
            completed: false,
            playlist: Some("other".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(only_second.len(), 1);
    assert_eq!(only_second[0].id, second.id);
}
