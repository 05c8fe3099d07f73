//! High-level scheduler API for generating and tracking study schedules.
//!
//! [`Scheduler`] is the single entry point used by the CLI and the MCP
//! server. It coordinates the playlist source, the pure planning functions
//! and the SQLite store:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (schedule_      │───▶│ (schedule_ops)  │───▶│   (via db/)     │
//! │  handlers)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Planning pipeline      Blocking bridge       Data Persistence
//! ```
//!
//! Every database call runs on the blocking thread pool, so the scheduler
//! can be shared freely across async tasks.
//!
//! # Usage
//!
//! ```rust,no_run
//! use syllabus_core::{
//!     models::ConstraintInput,
//!     params::{AdjustSchedule, CreateSchedule},
//!     SchedulerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_playlist_root("/home/user/playlists")
//!     .build()
//!     .await?;
//!
//! let schedule = scheduler
//!     .create_schedule(&CreateSchedule {
//!         playlist: "rust-course.json".to_string(),
//!         title: Some("Rust in a month".to_string()),
//!         constraint: ConstraintInput::from_daily_hours(1.5),
//!         continuation: Default::default(),
//!         replaces: None,
//!     })
//!     .await?;
//!
//! // Later: squeeze the remaining videos into shorter days
//! let adjusted = scheduler
//!     .adjust_schedule(&AdjustSchedule {
//!         id: schedule.id,
//!         daily_hours: 0.5,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

pub mod builder;
pub mod schedule_handlers;
pub mod schedule_ops;

#[cfg(test)]
mod tests;

pub use builder::SchedulerBuilder;

use crate::source::PlaylistSource;

/// Main scheduler interface for managing study schedules.
#[derive(Clone)]
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
    pub(crate) source: Arc<dyn PlaylistSource>,
}

impl Scheduler {
    /// Creates a new scheduler over an initialized database.
    pub(crate) fn new(db_path: PathBuf, source: Arc<dyn PlaylistSource>) -> Self {
        Self { db_path, source }
    }

    /// Path of the SQLite database backing this scheduler.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }
}
