//! Builder for creating and configuring Scheduler instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Scheduler;
use crate::{
    db::Database,
    error::{join_error, Result, ScheduleError},
    source::{JsonPlaylistSource, PlaylistSource},
};

/// Builder for creating and configuring Scheduler instances.
#[derive(Default)]
pub struct SchedulerBuilder {
    database_path: Option<PathBuf>,
    playlist_root: Option<PathBuf>,
    source: Option<Arc<dyn PlaylistSource>>,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/syllabus/syllabus.db` or
    /// `~/.local/share/syllabus/syllabus.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Directory that relative playlist references resolve against when the
    /// default JSON source is used.
    pub fn with_playlist_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.playlist_root = Some(root.as_ref().to_path_buf());
        self
    }

    /// Replaces the default JSON file source.
    pub fn with_source(mut self, source: Arc<dyn PlaylistSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Builds the configured scheduler, creating the database if needed.
    ///
    /// # Errors
    ///
    /// * `ScheduleError::XdgDirectory` - When no default path can be placed
    /// * `ScheduleError::FileSystem` - When the database directory cannot be
    ///   created
    /// * `ScheduleError::Database` - When schema initialization fails
    pub async fn build(self) -> Result<Scheduler> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ScheduleError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ScheduleError>(())
        })
        .await
        .map_err(join_error)??;

        debug!("Using database at {}", db_path.display());

        let source = match (self.source, self.playlist_root) {
            (Some(source), _) => source,
            (None, Some(root)) => Arc::new(JsonPlaylistSource::with_root(root)),
            (None, None) => Arc::new(JsonPlaylistSource::new()),
        };

        Ok(Scheduler::new(db_path, source))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("syllabus")
            .place_data_file("syllabus.db")
            .map_err(|e| ScheduleError::XdgDirectory(e.to_string()))
    }
}
