//! Parameter structures for scheduling operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schemas for the MCP server
//! are generated only when the `schema` feature is enabled.
//!
//! Interface layers wrap them and convert into them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ScheduleError},
    models::{Constraint, ConstraintInput, DEFAULT_TITLE},
    partition::Continuation,
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the schedule to operate on
    pub id: u64,
}

/// Parameters for generating a new schedule from a playlist.
///
/// When `replaces` is set the request is a regeneration: completion flags
/// are carried over from that schedule and it is retired afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateSchedule {
    /// Playlist reference understood by the playlist source
    pub playlist: String,
    /// Optional title; defaults to "Untitled Schedule"
    #[serde(default)]
    pub title: Option<String>,
    /// Partitioning constraint
    pub constraint: ConstraintInput,
    /// Completion state carried from an earlier schedule
    #[serde(default)]
    pub continuation: Continuation,
    /// ID of the schedule this one replaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaces: Option<u64>,
}

impl CreateSchedule {
    /// Validate the request and return the constraint and resolved title.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::InvalidInput` - When the playlist reference is blank
    /// * `ScheduleError::InvalidConstraint` - When the constraint is out of
    ///   range
    ///
    /// # Examples
    ///
    /// ```rust
    /// use syllabus_core::{models::ConstraintInput, params::CreateSchedule};
    ///
    /// let params = CreateSchedule {
    ///     playlist: "rust.json".to_string(),
    ///     title: None,
    ///     constraint: ConstraintInput::DayBased { total_days: 0 },
    ///     continuation: Default::default(),
    ///     replaces: None,
    /// };
    /// assert!(params.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(Constraint, String)> {
        crate::source::validate_playlist_reference(&self.playlist)?;
        let constraint = Constraint::try_from(self.constraint)?;
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE)
            .to_string();
        Ok((constraint, title))
    }
}

/// Parameters for regenerating a schedule under a new daily budget.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AdjustSchedule {
    /// ID of the schedule to regenerate
    pub id: u64,
    /// New study time per day, in hours
    pub daily_hours: f64,
}

/// Parameters for listing schedules.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListSchedules {
    /// Whether to show completed schedules instead of active ones
    #[serde(default)]
    pub completed: bool,
    /// Only list schedules generated from this playlist reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist: Option<String>,
}

fn default_completed() -> bool {
    true
}

/// Parameters for marking a video watched or unwatched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateProgress {
    /// ID of the schedule containing the video
    pub schedule_id: u64,
    /// Link identifying the video
    pub link: String,
    /// New completion state (defaults to true)
    #[serde(default = "default_completed")]
    pub completed: bool,
}

/// Parameters for locating a video by title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LocateVideo {
    /// ID of the schedule to search
    pub schedule_id: u64,
    /// Exact video title
    pub title: String,
}

/// Parameters for permanently deleting a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DeleteSchedule {
    /// ID of the schedule to delete
    pub id: u64,
    /// Must be true to confirm the deletion
    #[serde(default)]
    pub confirmed: bool,
}

impl DeleteSchedule {
    /// Ensure the caller explicitly confirmed the deletion.
    pub fn ensure_confirmed(&self) -> Result<()> {
        if self.confirmed {
            Ok(())
        } else {
            Err(ScheduleError::invalid_input("confirmed").with_reason(
                "Schedule deletion requires explicit confirmation. Set 'confirmed' to true to proceed.",
            ))
        }
    }
}
