//! Filter types for querying schedules.

use super::ScheduleStatus;

/// Filter options for querying schedules.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    /// Filter by exact playlist reference
    pub playlist: Option<String>,

    /// Filter by schedule status; `None` lists every schedule
    pub status: Option<ScheduleStatus>,
}

impl ScheduleFilter {
    /// Filter matching a single status.
    ///
    /// ```rust
    /// use syllabus_core::models::{ScheduleFilter, ScheduleStatus};
    ///
    /// let filter = ScheduleFilter::with_status(ScheduleStatus::Completed);
    /// assert_eq!(filter.status, Some(ScheduleStatus::Completed));
    /// assert!(filter.playlist.is_none());
    /// ```
    pub fn with_status(status: ScheduleStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl From<&crate::params::ListSchedules> for ScheduleFilter {
    fn from(params: &crate::params::ListSchedules) -> Self {
        Self {
            status: Some(if params.completed {
                ScheduleStatus::Completed
            } else {
                ScheduleStatus::Active
            }),
            playlist: params.playlist.clone(),
        }
    }
}
