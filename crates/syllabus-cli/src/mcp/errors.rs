//! Error handling utilities for MCP server

use rmcp::ErrorData;
use syllabus_core::ScheduleError;

/// Convert scheduler errors to MCP errors.
///
/// Errors caused by the request itself map to `invalid_params`, missing
/// schedules and videos to `resource_not_found`, everything else to
/// `internal_error`.
pub fn to_mcp_error(message: &str, error: &ScheduleError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error {
        ScheduleError::MalformedDuration { .. }
        | ScheduleError::InvalidConstraint { .. }
        | ScheduleError::EmptyPlaylist
        | ScheduleError::InvalidInput { .. } => ErrorData::invalid_params(text, None),
        ScheduleError::ScheduleNotFound { .. } | ScheduleError::VideoNotFound { .. } => {
            ErrorData::resource_not_found(text, None)
        }
        _ => ErrorData::internal_error(text, None),
    }
}
