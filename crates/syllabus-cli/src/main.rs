//! Syllabus CLI Application
//!
//! Command-line interface and MCP server for the syllabus study planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SyllabusMcpServer};
use renderer::TerminalRenderer;
use syllabus_core::{params::ListSchedules, SchedulerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        playlist_root,
        no_color,
        command,
    } = Args::parse();

    let mut builder = SchedulerBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    if let Some(root) = playlist_root {
        builder = builder.with_playlist_root(root);
    }
    let scheduler = builder
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Syllabus started");

    match command {
        Some(Schedule { command }) => {
            Cli::new(scheduler, renderer)
                .handle_schedule_command(command)
                .await
        }
        Some(Video { command }) => {
            Cli::new(scheduler, renderer)
                .handle_video_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Syllabus MCP server");
            run_stdio_server(SyllabusMcpServer::new(scheduler))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(scheduler, renderer)
                .list_schedules(&ListSchedules::default())
                .await
        }
    }
}
