//! Core library for the Syllabus study planner.
//!
//! Syllabus turns an ordered video playlist into a day-by-day study
//! schedule, either by filling each day up to a time budget or by spreading
//! the playlist over a fixed number of days. Progress is tracked per video,
//! and a schedule can be regenerated under a new budget without losing which
//! videos were already watched.
//!
//! The crate is layered the same way for every operation:
//!
//! - **Pure planning** ([`duration`], [`partition`], [`reconcile`],
//!   [`lookup`]): deterministic functions over in-memory values
//! - **Persistence** ([`db`]): SQLite storage of schedules, days and videos
//! - **Facade** ([`scheduler`]): the async [`Scheduler`] used by the CLI and
//!   the MCP server
//! - **Presentation** ([`display`]): markdown `Display` implementations
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use syllabus_core::{
//!     models::ConstraintInput,
//!     params::{CreateSchedule, ListSchedules},
//!     SchedulerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path("study.db")
//!     .with_playlist_root("playlists")
//!     .build()
//!     .await?;
//!
//! let schedule = scheduler
//!     .create_schedule(&CreateSchedule {
//!         playlist: "rust-course.json".to_string(),
//!         title: Some("Rust course".to_string()),
//!         constraint: ConstraintInput::from_daily_hours(1.0),
//!         continuation: Default::default(),
//!         replaces: None,
//!     })
//!     .await?;
//! println!("{schedule}");
//!
//! let active = scheduler.list_schedules(&ListSchedules::default()).await?;
//! for overview in &active {
//!     println!("Schedule: {}", overview.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod duration;
pub mod error;
pub mod lookup;
pub mod models;
pub mod params;
pub mod partition;
pub mod reconcile;
pub mod scheduler;
pub mod source;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, LocalDateTime, OperationStatus, ScheduleOverviews, UpdateResult,
};
pub use duration::{format_duration, parse_duration, VideoDuration};
pub use error::{Result, ScheduleError};
pub use lookup::VideoLocation;
pub use models::{
    Constraint, ConstraintInput, Schedule, ScheduleDay, ScheduleFilter, ScheduleOverview,
    ScheduleStatus, ScheduleSummary, Video, VideoInput,
};
pub use params::{
    AdjustSchedule, CreateSchedule, DeleteSchedule, Id, ListSchedules, LocateVideo,
    UpdateProgress,
};
pub use partition::{Continuation, GeneratedSchedule};
pub use scheduler::{Scheduler, SchedulerBuilder};
pub use source::{JsonPlaylistSource, PlaylistSource};
