use std::{fs, path::Path};

use syllabus_core::{Scheduler, SchedulerBuilder};
use tempfile::TempDir;

/// Helper function to create a test scheduler reading playlists from the
/// temporary directory
pub async fn create_test_scheduler() -> (TempDir, Scheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = SchedulerBuilder::new()
        .with_database_path(&db_path)
        .with_playlist_root(temp_dir.path())
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, scheduler)
}

/// Writes a playlist of `(title, duration)` pairs as JSON; links are
/// derived from the titles.
pub fn write_playlist(dir: &Path, name: &str, videos: &[(&str, &str)]) {
    let entries: Vec<serde_json::Value> = videos
        .iter()
        .map(|(title, duration)| {
            serde_json::json!({
                "title": title,
                "duration": duration,
                "link": link_for(title),
                "thumbnail": format!("https://img.example.com/{}.jpg", slug(title)),
            })
        })
        .collect();
    fs::write(
        dir.join(name),
        serde_json::to_string_pretty(&entries).expect("Failed to encode playlist"),
    )
    .expect("Failed to write playlist");
}

pub fn link_for(title: &str) -> String {
    format!("https://video.example.com/watch?v={}", slug(title))
}

fn slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}
