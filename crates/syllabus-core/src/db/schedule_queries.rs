//! Schedule CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Transaction};

use crate::{
    duration::VideoDuration,
    error::{DatabaseResultExt, Result, ScheduleError},
    models::{
        Constraint, Schedule, ScheduleDay, ScheduleFilter, ScheduleStatus, ScheduleSummary, Video,
    },
};

const INSERT_SCHEDULE_SQL: &str = "INSERT INTO schedules (title, playlist, constraint_mode, constraint_value, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const INSERT_DAY_SQL: &str =
    "INSERT INTO schedule_days (schedule_id, day_number, day_date) VALUES (?1, ?2, ?3)";
const INSERT_VIDEO_SQL: &str = "INSERT INTO schedule_videos (schedule_id, day_number, position, title, duration_seconds, link, thumbnail, completed) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)";
const SELECT_SCHEDULE_COLUMNS: &str =
    "id, title, playlist, constraint_mode, constraint_value, status, created_at, updated_at";
const SELECT_DAYS_SQL: &str =
    "SELECT day_number, day_date FROM schedule_days WHERE schedule_id = ?1 ORDER BY day_number";
const SELECT_VIDEOS_SQL: &str = "SELECT day_number, title, duration_seconds, link, thumbnail, completed FROM schedule_videos WHERE schedule_id = ?1 ORDER BY day_number, position";
const DELETE_VIDEOS_SQL: &str = "DELETE FROM schedule_videos WHERE schedule_id = ?1";
const DELETE_DAYS_SQL: &str = "DELETE FROM schedule_days WHERE schedule_id = ?1";
const DELETE_SCHEDULE_SQL: &str = "DELETE FROM schedules WHERE id = ?1";

fn conversion_error(column: usize, message: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        column,
        Type::Text,
        Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, message)),
    )
}

impl super::Database {
    /// Stores a freshly generated schedule with all of its days and videos.
    pub fn insert_schedule(
        &mut self,
        title: &str,
        playlist: &str,
        constraint: Constraint,
        days: Vec<ScheduleDay>,
    ) -> Result<Schedule> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();
        let summary = ScheduleSummary::from_days(&days);
        let status = summary.status();

        tx.execute(
            INSERT_SCHEDULE_SQL,
            params![
                title,
                playlist,
                constraint.mode_str(),
                constraint.value() as i64,
                status.as_str(),
                &now_str,
                &now_str
            ],
        )
        .db_context("Failed to insert schedule")?;

        let id = tx.last_insert_rowid() as u64;
        Self::insert_days(&tx, id, &days)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Schedule {
            id,
            title: title.to_string(),
            playlist: playlist.to_string(),
            constraint,
            status,
            days,
            summary,
            created_at: now,
            updated_at: now,
        })
    }

    fn insert_days(tx: &Transaction<'_>, schedule_id: u64, days: &[ScheduleDay]) -> Result<()> {
        let mut day_stmt = tx
            .prepare(INSERT_DAY_SQL)
            .db_context("Failed to prepare day insert")?;
        let mut video_stmt = tx
            .prepare(INSERT_VIDEO_SQL)
            .db_context("Failed to prepare video insert")?;

        for day in days {
            day_stmt
                .execute(params![
                    schedule_id as i64,
                    i64::from(day.number),
                    day.date.to_string()
                ])
                .db_context("Failed to insert schedule day")?;

            for (position, video) in day.videos.iter().enumerate() {
                video_stmt
                    .execute(params![
                        schedule_id as i64,
                        i64::from(day.number),
                        position as i64,
                        video.title,
                        video.seconds() as i64,
                        video.link,
                        video.thumbnail,
                        video.completed
                    ])
                    .db_context("Failed to insert schedule video")?;
            }
        }
        Ok(())
    }

    /// Retrieves a schedule by its ID with days, videos and summary loaded.
    pub fn get_schedule(&self, id: u64) -> Result<Option<Schedule>> {
        let query = format!("SELECT {SELECT_SCHEDULE_COLUMNS} FROM schedules WHERE id = ?1");
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let schedule = stmt
            .query_row(params![id as i64], Self::build_schedule_from_row)
            .optional()
            .db_context("Failed to query schedule")?;

        match schedule {
            Some(schedule) => self.with_days(schedule).map(Some),
            None => Ok(None),
        }
    }

    /// Lists schedules matching the filter, newest first.
    pub fn list_schedules(&self, filter: Option<&ScheduleFilter>) -> Result<Vec<Schedule>> {
        let mut query = format!("SELECT {SELECT_SCHEDULE_COLUMNS} FROM schedules");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(f) = filter {
            if let Some(ref playlist) = f.playlist {
                conditions.push("playlist = ?");
                params_vec.push(Box::new(playlist.clone()));
            }

            if let Some(ref status) = f.status {
                conditions.push("status = ?");
                params_vec.push(Box::new(status.as_str().to_string()));
            }
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY created_at DESC, id DESC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let headers = stmt
            .query_map(&params_refs[..], Self::build_schedule_from_row)
            .db_context("Failed to list schedules")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read schedule row")?;

        headers
            .into_iter()
            .map(|schedule| self.with_days(schedule))
            .collect()
    }

    /// Permanently deletes a schedule with its days and videos.
    ///
    /// Returns `false` when no schedule had the given ID.
    pub fn delete_schedule(&mut self, id: u64) -> Result<bool> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_VIDEOS_SQL, params![id as i64])
            .db_context("Failed to delete schedule videos")?;
        tx.execute(DELETE_DAYS_SQL, params![id as i64])
            .db_context("Failed to delete schedule days")?;
        let deleted = tx
            .execute(DELETE_SCHEDULE_SQL, params![id as i64])
            .db_context("Failed to delete schedule")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(deleted > 0)
    }

    /// Builds a schedule header (without days) from a row of
    /// `SELECT_SCHEDULE_COLUMNS`.
    fn build_schedule_from_row(row: &rusqlite::Row) -> rusqlite::Result<Schedule> {
        let mode: String = row.get(3)?;
        let value: i64 = row.get(4)?;
        let constraint = Constraint::from_parts(&mode, value.max(0) as u64)
            .map_err(|e| conversion_error(3, e))?;

        let status_str: String = row.get(5)?;
        let status = status_str
            .parse::<ScheduleStatus>()
            .map_err(|e| conversion_error(5, e))?;

        Ok(Schedule {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            playlist: row.get(2)?,
            constraint,
            status,
            days: Vec::new(),
            summary: ScheduleSummary::default(),
            created_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(7)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(7, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Loads the days of `schedule` and recomputes its summary.
    fn with_days(&self, mut schedule: Schedule) -> Result<Schedule> {
        schedule.days = self.get_days(schedule.id)?;
        schedule.summary = ScheduleSummary::from_days(&schedule.days);
        Ok(schedule)
    }

    /// Loads the days of a schedule with their videos in position order.
    pub fn get_days(&self, schedule_id: u64) -> Result<Vec<ScheduleDay>> {
        let mut day_stmt = self
            .connection
            .prepare(SELECT_DAYS_SQL)
            .db_context("Failed to prepare day query")?;
        let mut days = day_stmt
            .query_map(params![schedule_id as i64], |row| {
                let date_str: String = row.get(1)?;
                let date = date_str.parse::<Date>().map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e))
                })?;
                Ok(ScheduleDay {
                    number: row.get::<_, i64>(0)? as u32,
                    date,
                    videos: Vec::new(),
                })
            })
            .db_context("Failed to query schedule days")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read schedule day")?;

        let mut video_stmt = self
            .connection
            .prepare(SELECT_VIDEOS_SQL)
            .db_context("Failed to prepare video query")?;
        let videos = video_stmt
            .query_map(params![schedule_id as i64], |row| {
                let day_number = row.get::<_, i64>(0)? as u32;
                let video = Video {
                    title: row.get(1)?,
                    duration: VideoDuration::from_secs(row.get::<_, i64>(2)?.max(0) as u64),
                    link: row.get(3)?,
                    thumbnail: row.get(4)?,
                    completed: row.get(5)?,
                };
                Ok((day_number, video))
            })
            .db_context("Failed to query schedule videos")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read schedule video")?;

        // Both queries are ordered by day number, so a single merge pass
        // assigns every video to its day
        let mut day_iter = days.iter_mut().peekable();
        for (day_number, video) in videos {
            while day_iter.peek().is_some_and(|day| day.number < day_number) {
                day_iter.next();
            }
            match day_iter.peek_mut() {
                Some(day) if day.number == day_number => day.videos.push(video),
                _ => {
                    return Err(ScheduleError::Configuration {
                        message: format!(
                            "Video '{}' references missing day {day_number} of schedule {schedule_id}",
                            video.link
                        ),
                    })
                }
            }
        }

        Ok(days)
    }
}
