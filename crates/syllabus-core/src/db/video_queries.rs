//! Video progress updates.

use jiff::Timestamp;
use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, Result, ScheduleError},
    models::{Schedule, ScheduleStatus},
};

const UPDATE_VIDEO_COMPLETED_SQL: &str =
    "UPDATE schedule_videos SET completed = ?1 WHERE schedule_id = ?2 AND link = ?3";
const COUNT_PROGRESS_SQL: &str =
    "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM schedule_videos WHERE schedule_id = ?1";
const UPDATE_SCHEDULE_STATUS_SQL: &str =
    "UPDATE schedules SET status = ?1, updated_at = ?2 WHERE id = ?3";
const SCHEDULE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM schedules WHERE id = ?1)";

impl super::Database {
    /// Marks every video with `link` in the schedule as completed or not,
    /// then refreshes the schedule status.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::ScheduleNotFound` - When no schedule has the ID
    /// * `ScheduleError::VideoNotFound` - When the schedule has no such link
    pub fn set_video_completed(
        &mut self,
        schedule_id: u64,
        link: &str,
        completed: bool,
    ) -> Result<Schedule> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let updated = tx
            .execute(
                UPDATE_VIDEO_COMPLETED_SQL,
                params![completed, schedule_id as i64, link],
            )
            .db_context("Failed to update video")?;

        if updated == 0 {
            let exists: bool = tx
                .query_row(SCHEDULE_EXISTS_SQL, params![schedule_id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to check schedule existence")?;
            return Err(if exists {
                ScheduleError::VideoNotFound {
                    schedule_id,
                    link: link.to_string(),
                }
            } else {
                ScheduleError::ScheduleNotFound { id: schedule_id }
            });
        }

        let (total, done): (i64, i64) = tx
            .query_row(COUNT_PROGRESS_SQL, params![schedule_id as i64], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .db_context("Failed to count schedule progress")?;
        let status = ScheduleStatus::from_progress(done as usize, total as usize);

        tx.execute(
            UPDATE_SCHEDULE_STATUS_SQL,
            params![status.as_str(), Timestamp::now().to_string(), schedule_id as i64],
        )
        .db_context("Failed to update schedule status")?;

        tx.commit().db_context("Failed to commit transaction")?;

        self.get_schedule(schedule_id)?
            .ok_or(ScheduleError::ScheduleNotFound { id: schedule_id })
    }
}
