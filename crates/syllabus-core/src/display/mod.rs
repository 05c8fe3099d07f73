//! Display formatting for schedules and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly in [`models`];
//! the wrappers here add context for lists and for create, update and
//! delete outcomes. Everything renders as markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Result Wrappers │    │   Formatted     │
//! │ (Schedule, Day) │───▶│ & Collections   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ```rust
//! use syllabus_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Marked 'Intro' as watched".to_string());
//! assert_eq!(status.to_string(), "Success: Marked 'Intro' as watched\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::ScheduleOverviews;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
