//! Data models for study schedules.
//!
//! A [`Schedule`] is an ordered list of [`ScheduleDay`]s, each holding the
//! [`Video`]s to watch that day. Schedules are generated under a
//! [`Constraint`] and carry a [`ScheduleSummary`] computed from their days.
//! Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use jiff::{civil::date, Timestamp};
//! use syllabus_core::models::{
//!     Constraint, Schedule, ScheduleDay, ScheduleStatus, ScheduleSummary, Video,
//! };
//!
//! let days = vec![ScheduleDay {
//!     number: 1,
//!     date: date(2024, 3, 1),
//!     videos: vec![Video {
//!         title: "Intro".to_string(),
//!         duration: "12:30".parse().unwrap(),
//!         link: "https://example.com/watch?v=intro".to_string(),
//!         thumbnail: String::new(),
//!         completed: false,
//!     }],
//! }];
//!
//! let schedule = Schedule {
//!     id: 1,
//!     title: "Rust basics".to_string(),
//!     playlist: "rust.json".to_string(),
//!     constraint: Constraint::TimeBased { daily_seconds: 3600 },
//!     status: ScheduleStatus::Active,
//!     summary: ScheduleSummary::from_days(&days),
//!     days,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//! assert_eq!(schedule.summary.total_duration.to_string(), "00:12:30");
//! ```

pub mod constraint;
pub mod day;
pub mod filters;
pub mod schedule;
pub mod status;
pub mod summary;
pub mod video;


pub use constraint::{Constraint, ConstraintInput, MIN_DAILY_MINUTES};
pub use day::ScheduleDay;
pub use filters::ScheduleFilter;
pub use schedule::{Schedule, DEFAULT_TITLE};
pub use status::ScheduleStatus;
pub use summary::{ScheduleOverview, ScheduleSummary};
pub use video::{Video, VideoInput};
