//! Error types for the scheduling library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all scheduling operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Duration text is not `HH:MM:SS`, `MM:SS` or bare seconds
    #[error("Malformed duration '{input}': {reason}")]
    MalformedDuration { input: String, reason: String },
    /// Daily budget of ten minutes or less, or a non-positive day count
    #[error("Invalid constraint: {reason}")]
    InvalidConstraint { reason: String },
    /// The playlist source returned no videos
    #[error("No videos found in playlist")]
    EmptyPlaylist,
    /// The replacement schedule was stored but the old one is still live
    #[error(
        "Schedule {new_id} was created but schedule {old_id} could not be retired: {message}"
    )]
    ReconciliationIncomplete {
        new_id: u64,
        old_id: u64,
        message: String,
    },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Schedule not found for the given ID
    #[error("Schedule with ID {id} not found")]
    ScheduleNotFound { id: u64 },
    /// No video with the given link in the schedule
    #[error("Video '{link}' not found in schedule {schedule_id}")]
    VideoNotFound { schedule_id: u64, link: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ScheduleError {
        ScheduleError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ScheduleError {
        ScheduleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScheduleError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    pub(crate) fn malformed_duration(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_constraint(reason: impl Into<String>) -> Self {
        Self::InvalidConstraint {
            reason: reason.into(),
        }
    }

    /// Whether the error left two live schedules behind and needs cleanup.
    pub fn is_incomplete_reconciliation(&self) -> bool {
        matches!(self, Self::ReconciliationIncomplete { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ScheduleError::database(message).with_source(e))
    }
}

/// Maps a `spawn_blocking` join failure into a configuration error.
pub(crate) fn join_error(e: tokio::task::JoinError) -> ScheduleError {
    ScheduleError::Configuration {
        message: format!("Task join error: {e}"),
    }
}

/// Result type alias for scheduling operations
pub type Result<T> = std::result::Result<T, ScheduleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_reconciliation_is_distinct() {
        let err = ScheduleError::ReconciliationIncomplete {
            new_id: 2,
            old_id: 1,
            message: "disk I/O error".to_string(),
        };
        assert!(err.is_incomplete_reconciliation());
        assert!(err.to_string().contains("schedule 1 could not be retired"));

        let other = ScheduleError::ScheduleNotFound { id: 1 };
        assert!(!other.is_incomplete_reconciliation());
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = ScheduleError::invalid_input("playlist").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'playlist': must not be empty"
        );
    }
}
