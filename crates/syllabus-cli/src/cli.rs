//! Command-line interface definitions and command handling
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types, so the core crate stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```
//!
//! [`Cli`] runs the parsed commands against a [`Scheduler`] and renders the
//! markdown results.

use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Args, Subcommand};
use log::warn;
use syllabus_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    models::ConstraintInput,
    params::*,
    ScheduleError, Scheduler,
};

use crate::renderer::TerminalRenderer;

/// Generate a schedule from a playlist
///
/// Exactly one of --daily-hours or --days is required. With --daily-hours
/// each day is filled up to the budget; with --days the playlist is spread
/// evenly over that many days.
#[derive(Args)]
#[command(group(ArgGroup::new("budget").required(true).args(["daily_hours", "days"])))]
pub struct CreateScheduleArgs {
    /// Playlist to schedule (path to a JSON export)
    pub playlist: String,
    /// Study time per day, in hours (more than ten minutes)
    #[arg(long, help = "Study time per day in hours, e.g. 1.5")]
    pub daily_hours: Option<f64>,
    /// Number of days to spread the playlist over
    #[arg(long, help = "Number of days to spread the playlist over")]
    pub days: Option<i64>,
    /// Title of the schedule
    #[arg(short, long, help = "Title of the schedule")]
    pub title: Option<String>,
}

impl From<CreateScheduleArgs> for CreateSchedule {
    fn from(val: CreateScheduleArgs) -> Self {
        let constraint = match (val.daily_hours, val.days) {
            (Some(hours), _) => ConstraintInput::from_daily_hours(hours),
            (None, days) => ConstraintInput::DayBased {
                total_days: days.unwrap_or_default(),
            },
        };
        CreateSchedule {
            playlist: val.playlist,
            title: val.title,
            constraint,
            continuation: Default::default(),
            replaces: None,
        }
    }
}

/// List schedules
///
/// Shows schedules with unwatched videos by default, or finished schedules
/// with --completed. Use --playlist to narrow the list to one playlist.
#[derive(Args)]
pub struct ListSchedulesArgs {
    /// Show completed schedules instead of active ones
    #[arg(long, help = "Show completed schedules instead of active ones")]
    pub completed: bool,
    /// Only show schedules generated from this playlist
    #[arg(long, help = "Only show schedules generated from this playlist")]
    pub playlist: Option<String>,
}

impl From<ListSchedulesArgs> for ListSchedules {
    fn from(val: ListSchedulesArgs) -> Self {
        ListSchedules {
            completed: val.completed,
            playlist: val.playlist,
        }
    }
}

/// Show a schedule with all of its days and videos
#[derive(Args)]
pub struct ShowScheduleArgs {
    #[arg(help = "Unique identifier of the schedule to show")]
    pub id: u64,
}

impl From<ShowScheduleArgs> for Id {
    fn from(val: ShowScheduleArgs) -> Self {
        Id { id: val.id }
    }
}

/// Regenerate a schedule under a new daily time budget
///
/// Watched videos stay watched. The regenerated schedule gets a new ID and
/// the old one is removed.
#[derive(Args)]
pub struct AdjustScheduleArgs {
    #[arg(help = "Unique identifier of the schedule to regenerate")]
    pub id: u64,
    #[arg(long, help = "New study time per day in hours")]
    pub daily_hours: f64,
}

impl From<AdjustScheduleArgs> for AdjustSchedule {
    fn from(val: AdjustScheduleArgs) -> Self {
        AdjustSchedule {
            id: val.id,
            daily_hours: val.daily_hours,
        }
    }
}

/// Delete a schedule permanently
#[derive(Args)]
pub struct DeleteScheduleArgs {
    #[arg(help = "Unique identifier of the schedule to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteScheduleArgs> for DeleteSchedule {
    fn from(val: DeleteScheduleArgs) -> Self {
        DeleteSchedule {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Generate a schedule from a playlist
    #[command(alias = "c")]
    Create(CreateScheduleArgs),
    /// List schedules
    #[command(aliases = ["l", "ls"])]
    List(ListSchedulesArgs),
    /// Show a schedule with all of its days
    #[command(alias = "s")]
    Show(ShowScheduleArgs),
    /// Regenerate a schedule under a new daily time budget
    #[command(alias = "a")]
    Adjust(AdjustScheduleArgs),
    /// Delete a schedule permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteScheduleArgs),
}

/// Identify a video within a schedule by its link
#[derive(Args)]
pub struct VideoProgressArgs {
    #[arg(help = "Unique identifier of the schedule containing the video")]
    pub schedule_id: u64,
    #[arg(help = "Link of the video")]
    pub link: String,
}

impl VideoProgressArgs {
    /// Convert to core parameters with the given completion state.
    pub fn into_params(self, completed: bool) -> UpdateProgress {
        UpdateProgress {
            schedule_id: self.schedule_id,
            link: self.link,
            completed,
        }
    }
}

/// Find the day a video is scheduled on
#[derive(Args)]
pub struct FindVideoArgs {
    #[arg(help = "Unique identifier of the schedule to search")]
    pub schedule_id: u64,
    #[arg(help = "Exact title of the video")]
    pub title: String,
}

impl From<FindVideoArgs> for LocateVideo {
    fn from(val: FindVideoArgs) -> Self {
        LocateVideo {
            schedule_id: val.schedule_id,
            title: val.title,
        }
    }
}

#[derive(Subcommand)]
pub enum VideoCommands {
    /// Mark a video as watched
    Done(VideoProgressArgs),
    /// Mark a video as not watched
    Undo(VideoProgressArgs),
    /// Find the day a video is scheduled on
    #[command(alias = "f")]
    Find(FindVideoArgs),
}

/// Runs CLI commands against a scheduler and renders the results.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Create(args) => self.create_schedule(&args.into()).await,
            ScheduleCommands::List(args) => self.list_schedules(&args.into()).await,
            ScheduleCommands::Show(args) => self.show_schedule(&args.into()).await,
            ScheduleCommands::Adjust(args) => self.adjust_schedule(&args.into()).await,
            ScheduleCommands::Delete(args) => self.delete_schedule(&args.into()).await,
        }
    }

    pub async fn handle_video_command(&self, command: VideoCommands) -> Result<()> {
        match command {
            VideoCommands::Done(args) => self.update_progress(&args.into_params(true)).await,
            VideoCommands::Undo(args) => self.update_progress(&args.into_params(false)).await,
            VideoCommands::Find(args) => self.find_video(&args.into()).await,
        }
    }

    async fn create_schedule(&self, params: &CreateSchedule) -> Result<()> {
        let schedule = self
            .scheduler
            .create_schedule(params)
            .await
            .with_context(|| format!("Failed to create schedule from '{}'", params.playlist))?;

        self.renderer
            .render(&CreateResult::new(schedule).to_string())
    }

    pub async fn list_schedules(&self, params: &ListSchedules) -> Result<()> {
        let overviews = self
            .scheduler
            .list_schedules(params)
            .await
            .context("Failed to list schedules")?;

        let title = if params.completed {
            "Completed Schedules"
        } else {
            "Active Schedules"
        };
        self.renderer.render(&format!("# {title}\n\n{overviews}"))
    }

    async fn show_schedule(&self, params: &Id) -> Result<()> {
        let schedule = self
            .scheduler
            .get_schedule(params)
            .await
            .context("Failed to load schedule")?
            .ok_or(ScheduleError::ScheduleNotFound { id: params.id })?;

        self.renderer.render(&schedule.to_string())
    }

    async fn adjust_schedule(&self, params: &AdjustSchedule) -> Result<()> {
        let schedule = match self.scheduler.adjust_schedule(params).await {
            Ok(schedule) => schedule,
            Err(e @ ScheduleError::ReconciliationIncomplete { .. }) => {
                warn!("Adjustment left two schedules behind: {e}");
                return Err(e).context(format!(
                    "Remove the old schedule with `syl schedule delete {} --confirm`",
                    params.id
                ));
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to adjust schedule {}", params.id))
            }
        };

        let result = UpdateResult::with_changes(
            schedule,
            vec![format!("Replaced schedule {}", params.id)],
        );
        self.renderer.render(&result.to_string())
    }

    async fn delete_schedule(&self, params: &DeleteSchedule) -> Result<()> {
        let deleted = self
            .scheduler
            .delete_schedule(params)
            .await
            .with_context(|| format!("Failed to delete schedule {}", params.id))?
            .ok_or(ScheduleError::ScheduleNotFound { id: params.id })?;

        self.renderer
            .render(&DeleteResult::new(deleted).to_string())
    }

    async fn update_progress(&self, params: &UpdateProgress) -> Result<()> {
        let schedule = self
            .scheduler
            .update_progress(params)
            .await
            .context("Failed to update progress")?;

        let state = if params.completed { "watched" } else { "not watched" };
        let status = OperationStatus::success(format!(
            "Marked {} as {state} ({}/{} videos, {:.1}%)",
            params.link,
            schedule.summary.completed_videos,
            schedule.summary.total_videos,
            schedule.summary.completion_percentage
        ));
        self.renderer.render(&status.to_string())
    }

    async fn find_video(&self, params: &LocateVideo) -> Result<()> {
        let Some(location) = self
            .scheduler
            .locate_video(params)
            .await
            .context("Failed to search schedule")?
        else {
            bail!(
                "No video titled '{}' in schedule {}",
                params.title,
                params.schedule_id
            );
        };

        self.renderer.render(&location.to_string())
    }
}
