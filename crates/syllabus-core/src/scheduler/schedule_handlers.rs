//! Schedule handler operations used by the CLI and MCP interfaces.

use jiff::{civil::Date, Zoned};
use log::debug;

use super::Scheduler;
use crate::{
    display::ScheduleOverviews,
    error::{Result, ScheduleError},
    lookup::{self, VideoLocation},
    models::{Schedule, ScheduleFilter, ScheduleOverview},
    params::{
        AdjustSchedule, CreateSchedule, DeleteSchedule, Id, ListSchedules, LocateVideo,
        UpdateProgress,
    },
    reconcile,
};

impl Scheduler {
    /// Generates and stores a schedule whose first day is today.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::InvalidConstraint` - When the constraint is out of
    ///   range
    /// * `ScheduleError::EmptyPlaylist` - When the source returns no videos
    /// * `ScheduleError::MalformedDuration` - When a video duration cannot be
    ///   parsed; nothing is stored in that case
    /// * `ScheduleError::ReconciliationIncomplete` - When `replaces` is set
    ///   and the old schedule could not be deleted after the new one was
    ///   stored
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use syllabus_core::{models::ConstraintInput, params::CreateSchedule, SchedulerBuilder};
    /// # async {
    /// let scheduler = SchedulerBuilder::new().build().await?;
    /// let schedule = scheduler
    ///     .create_schedule(&CreateSchedule {
    ///         playlist: "course.json".to_string(),
    ///         title: None,
    ///         constraint: ConstraintInput::DayBased { total_days: 10 },
    ///         continuation: Default::default(),
    ///         replaces: None,
    ///     })
    ///     .await?;
    /// # Result::<(), syllabus_core::ScheduleError>::Ok(())
    /// # };
    /// ```
    pub async fn create_schedule(&self, params: &CreateSchedule) -> Result<Schedule> {
        self.create_schedule_from(params, Zoned::now().date()).await
    }

    /// Generates and stores a schedule whose first day is `start_date`.
    pub async fn create_schedule_from(
        &self,
        params: &CreateSchedule,
        start_date: Date,
    ) -> Result<Schedule> {
        self.generate_and_store(params, start_date).await
    }

    /// Regenerates a schedule under a new daily budget.
    ///
    /// Completed videos stay completed in the replacement, which gets a new
    /// ID; the old schedule is removed.
    pub async fn adjust_schedule(&self, params: &AdjustSchedule) -> Result<Schedule> {
        let old = self
            .fetch_schedule(params.id)
            .await?
            .ok_or(ScheduleError::ScheduleNotFound { id: params.id })?;

        let request = reconcile::adjustment_request(&old, params.daily_hours);
        debug!(
            "Regenerating schedule {} with {} completed videos",
            old.id,
            request.continuation.completed_links.len()
        );
        self.create_schedule(&request).await
    }

    /// Retrieves a schedule with its days, videos and summary.
    pub async fn get_schedule(&self, params: &Id) -> Result<Option<Schedule>> {
        self.fetch_schedule(params.id).await
    }

    /// Lists active or completed schedules as overviews.
    pub async fn list_schedules(&self, params: &ListSchedules) -> Result<ScheduleOverviews> {
        let schedules = self
            .query_schedules(Some(ScheduleFilter::from(params)))
            .await?;
        let overviews: Vec<ScheduleOverview> = schedules.iter().map(Into::into).collect();
        Ok(ScheduleOverviews(overviews))
    }

    /// Marks a video watched or unwatched and returns the refreshed schedule.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::ScheduleNotFound` - When the schedule does not exist
    /// * `ScheduleError::VideoNotFound` - When no video has the link
    pub async fn update_progress(&self, params: &UpdateProgress) -> Result<Schedule> {
        let schedule = self
            .fetch_schedule(params.schedule_id)
            .await?
            .ok_or(ScheduleError::ScheduleNotFound {
                id: params.schedule_id,
            })?;
        let location = lookup::find_by_link(&schedule, &params.link).ok_or_else(|| {
            ScheduleError::VideoNotFound {
                schedule_id: params.schedule_id,
                link: params.link.clone(),
            }
        })?;
        debug!(
            "Setting '{}' on {} of schedule {} to completed={}",
            location.video.title,
            location.day_label(),
            schedule.id,
            params.completed
        );

        self.set_video_completed(params.schedule_id, params.link.clone(), params.completed)
            .await
    }

    /// Finds the day on which a video with the exact title is scheduled.
    ///
    /// Returns `Ok(None)` when the schedule has no such title.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::ScheduleNotFound` - When the schedule does not exist
    pub async fn locate_video(&self, params: &LocateVideo) -> Result<Option<VideoLocation>> {
        let schedule = self
            .fetch_schedule(params.schedule_id)
            .await?
            .ok_or(ScheduleError::ScheduleNotFound {
                id: params.schedule_id,
            })?;
        Ok(lookup::locate_video(&schedule, &params.title))
    }

    /// Permanently deletes a schedule after explicit confirmation.
    ///
    /// Returns the deleted schedule, or `None` if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` if `confirmed` is false.
    pub async fn delete_schedule(&self, params: &DeleteSchedule) -> Result<Option<Schedule>> {
        params.ensure_confirmed()?;

        let Some(schedule) = self.fetch_schedule(params.id).await? else {
            return Ok(None);
        };
        self.remove_schedule(params.id).await?;
        Ok(Some(schedule))
    }
}
