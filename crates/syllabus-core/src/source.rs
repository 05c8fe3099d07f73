//! Playlist sources supplying the videos to schedule.
//!
//! Fetching playlist metadata from a video platform happens outside this
//! crate. The scheduler only depends on [`PlaylistSource`]; the bundled
//! [`JsonPlaylistSource`] reads an exported playlist from disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{Result, ScheduleError},
    models::VideoInput,
};

/// Supplies the ordered videos of a playlist.
pub trait PlaylistSource: Send + Sync {
    /// Returns the playlist's videos in playlist order.
    fn fetch(&self, playlist: &str) -> Result<Vec<VideoInput>>;
}

/// Rejects playlist references that cannot name a playlist.
pub fn validate_playlist_reference(playlist: &str) -> Result<()> {
    if playlist.trim().is_empty() {
        return Err(ScheduleError::invalid_input("playlist").with_reason("must not be empty"));
    }
    Ok(())
}

/// Reads playlists stored as JSON arrays of [`VideoInput`] objects.
///
/// ```json
/// [
///   {"title": "Intro", "duration": "12:30", "link": "https://…", "thumbnail": "https://…"}
/// ]
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonPlaylistSource {
    root: Option<PathBuf>,
}

impl JsonPlaylistSource {
    /// Creates a source that resolves relative references against the
    /// current directory.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Resolves relative playlist references against `root`.
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: Some(root.as_ref().to_path_buf()),
        }
    }

    fn resolve(&self, playlist: &str) -> PathBuf {
        let path = Path::new(playlist);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl PlaylistSource for JsonPlaylistSource {
    fn fetch(&self, playlist: &str) -> Result<Vec<VideoInput>> {
        validate_playlist_reference(playlist)?;

        let path = self.resolve(playlist);
        debug!("Reading playlist from {}", path.display());

        let contents = fs::read_to_string(&path).map_err(|source| ScheduleError::FileSystem {
            path: path.clone(),
            source,
        })?;
        let videos: Vec<VideoInput> = serde_json::from_str(&contents)?;
        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_reads_playlist_relative_to_root() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(
            temp_dir.path().join("course.json"),
            r#"[
                {"title": "One", "duration": "10:00", "link": "l1", "thumbnail": "t1"},
                {"title": "Two", "duration": "1:00:00", "link": "l2"}
            ]"#,
        )
        .expect("Failed to write playlist");

        let source = JsonPlaylistSource::with_root(temp_dir.path());
        let videos = source.fetch("course.json").expect("Failed to fetch");

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "One");
        assert_eq!(videos[1].duration, "1:00:00");
        assert_eq!(videos[1].thumbnail, "");
    }

    #[test]
    fn test_missing_file_is_filesystem_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let source = JsonPlaylistSource::with_root(temp_dir.path());

        let err = source.fetch("missing.json").unwrap_err();
        assert!(matches!(err, ScheduleError::FileSystem { .. }));
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("bad.json"), "{not json").unwrap();

        let err = JsonPlaylistSource::with_root(temp_dir.path())
            .fetch("bad.json")
            .unwrap_err();
        assert!(matches!(err, ScheduleError::Serialization { .. }));
    }

    #[test]
    fn test_blank_reference_rejected() {
        let err = JsonPlaylistSource::new().fetch("  ").unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidInput { .. }));
    }
}
