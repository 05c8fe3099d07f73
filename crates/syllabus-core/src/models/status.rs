//! Status enumeration for schedules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of schedule statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Schedule still has unwatched videos
    #[default]
    Active,

    /// Every video in the schedule has been watched
    Completed,
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ScheduleStatus::Active),
            "completed" => Ok(ScheduleStatus::Completed),
            _ => Err(format!("Invalid schedule status: {s}")),
        }
    }
}

impl ScheduleStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Active => "active",
            ScheduleStatus::Completed => "completed",
        }
    }

    /// Status implied by completion counts. An empty schedule stays active.
    pub fn from_progress(completed: usize, total: usize) -> Self {
        if total > 0 && completed == total {
            ScheduleStatus::Completed
        } else {
            ScheduleStatus::Active
        }
    }

    /// Get status with an icon for display.
    ///
    /// ```rust
    /// use syllabus_core::models::ScheduleStatus;
    ///
    /// assert_eq!(ScheduleStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ScheduleStatus::Active.with_icon(), "➤ Active");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ScheduleStatus::Completed => "✓ Completed",
            ScheduleStatus::Active => "➤ Active",
        }
    }
}
