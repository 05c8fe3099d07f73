//! Blocking database and source operations for the Scheduler.

use jiff::civil::Date;
use log::{info, warn};
use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{join_error, Result, ScheduleError},
    models::{Schedule, ScheduleFilter},
    params::CreateSchedule,
    partition, reconcile,
};

impl Scheduler {
    /// Runs the full creation pipeline for a validated request.
    ///
    /// The playlist is fetched and partitioned before anything is written.
    /// For a regeneration the old schedule's completion flags are carried
    /// over, the new schedule is stored, and only then is the old one
    /// deleted.
    pub(crate) async fn generate_and_store(
        &self,
        params: &CreateSchedule,
        start_date: Date,
    ) -> Result<Schedule> {
        let (constraint, title) = params.validate()?;
        let db_path = self.db_path.clone();
        let source = self.source.clone();
        let playlist = params.playlist.clone();
        let continuation = params.continuation.clone();
        let replaces = params.replaces;

        task::spawn_blocking(move || {
            let inputs = source.fetch(&playlist)?;
            let generated = partition::generate(&inputs, &constraint, &continuation, start_date)?;
            let mut days = generated.days;

            let mut db = Database::new(&db_path)?;

            if let Some(old_id) = replaces {
                let old = db
                    .get_schedule(old_id)?
                    .ok_or(ScheduleError::ScheduleNotFound { id: old_id })?;
                let matched = reconcile::carry_over(&old, &mut days);
                info!("Carried completion state of {matched} videos from schedule {old_id}");
            }

            let schedule = db.insert_schedule(&title, &playlist, constraint, days)?;
            info!(
                "Created schedule {} with {} days",
                schedule.id, schedule.summary.total_days
            );

            if let Some(old_id) = replaces {
                match db.delete_schedule(old_id) {
                    Ok(true) => info!("Retired schedule {old_id}"),
                    Ok(false) => warn!(
                        "Schedule {old_id} disappeared before schedule {} could retire it",
                        schedule.id
                    ),
                    Err(e) => {
                        warn!("Schedule {} stored but {old_id} not retired: {e}", schedule.id);
                        return Err(ScheduleError::ReconciliationIncomplete {
                            new_id: schedule.id,
                            old_id,
                            message: e.to_string(),
                        });
                    }
                }
            }

            Ok(schedule)
        })
        .await
        .map_err(join_error)?
    }

    /// Retrieves a schedule by its ID.
    pub(crate) async fn fetch_schedule(&self, id: u64) -> Result<Option<Schedule>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_schedule(id)
        })
        .await
        .map_err(join_error)?
    }

    /// Lists schedules with optional filtering.
    pub async fn query_schedules(&self, filter: Option<ScheduleFilter>) -> Result<Vec<Schedule>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_schedules(filter.as_ref())
        })
        .await
        .map_err(join_error)?
    }

    /// Sets the completion flag of a video and returns the updated schedule.
    pub(crate) async fn set_video_completed(
        &self,
        schedule_id: u64,
        link: String,
        completed: bool,
    ) -> Result<Schedule> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_video_completed(schedule_id, &link, completed)
        })
        .await
        .map_err(join_error)?
    }

    /// Permanently deletes a schedule with its days and videos.
    pub(crate) async fn remove_schedule(&self, id: u64) -> Result<bool> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_schedule(id)
        })
        .await
        .map_err(join_error)?
    }
}
