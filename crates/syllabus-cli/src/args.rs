use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ScheduleCommands, VideoCommands};

/// Turn video playlists into day-by-day study schedules
///
/// Syllabus splits an ordered playlist into study days, either by a daily
/// time budget or over a fixed number of days, and tracks which videos have
/// been watched. Schedules can be regenerated under a new budget without
/// losing progress. Run `syl serve` to expose the same operations over MCP
/// (Model Context Protocol) to AI assistants.
#[derive(Parser)]
#[command(version, about, name = "syl")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/syllabus/syllabus.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Directory that relative playlist paths are resolved against
    #[arg(long, global = true)]
    pub playlist_root: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Syllabus CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage study schedules
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Track and find videos within a schedule
    #[command(alias = "v")]
    Video {
        #[command(subcommand)]
        command: VideoCommands,
    },
    /// Start the MCP server
    Serve,
}
