//! MCP server implementation for Syllabus
//!
//! Exposes schedule generation, progress tracking and adjustment as Model
//! Context Protocol tools so an assistant can manage study schedules.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use syllabus_core::Scheduler;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AdjustSchedule, CreateSchedule, DeleteSchedule, Id, ListSchedules, LocateVideo, McpResult,
    UpdateProgress,
};

/// MCP server for Syllabus
#[derive(Clone)]
pub struct SyllabusMcpServer {
    scheduler: Arc<Scheduler>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SyllabusMcpServer {
    /// Create a new Syllabus MCP server
    pub fn new(scheduler: Scheduler) -> Self {
        Self {
            scheduler: Arc::new(scheduler),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.scheduler.clone())
    }

    #[tool(
        name = "create_schedule",
        description = "Generate a day-by-day study schedule from a playlist. Provide the playlist reference (a JSON export path) and a constraint: {\"mode\": \"time-based\", \"daily_minutes\": N} fills each day up to N minutes (must be more than 10), {\"mode\": \"day-based\", \"total_days\": N} spreads the playlist evenly over N days. Optional title. Returns the new schedule ID and its days."
    )]
    async fn create_schedule(&self, params: Parameters<CreateSchedule>) -> McpResult {
        self.handlers().create_schedule(params).await
    }

    #[tool(
        name = "list_schedules",
        description = "List stored schedules, newest first. Use completed=false (default) for schedules with unwatched videos, or completed=true for finished ones. Set playlist to only list schedules generated from that playlist reference. Returns each schedule's ID, title, playlist, progress and length."
    )]
    async fn list_schedules(&self, params: Parameters<ListSchedules>) -> McpResult {
        self.handlers().list_schedules(params).await
    }

    #[tool(
        name = "show_schedule",
        description = "Display a schedule with its summary and every day: date, total duration, and each video with its watched state, duration and link."
    )]
    async fn show_schedule(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_schedule(params).await
    }

    #[tool(
        name = "adjust_schedule",
        description = "Regenerate a schedule under a new daily time budget in hours. The playlist is fetched again, watched videos stay watched, and the regenerated schedule replaces the old one under a new ID."
    )]
    async fn adjust_schedule(&self, params: Parameters<AdjustSchedule>) -> McpResult {
        self.handlers().adjust_schedule(params).await
    }

    #[tool(
        name = "update_progress",
        description = "Mark a video in a schedule as watched (completed=true, the default) or unwatched (completed=false). Identify the video by its link. The schedule becomes completed once every video is watched."
    )]
    async fn update_progress(&self, params: Parameters<UpdateProgress>) -> McpResult {
        self.handlers().update_progress(params).await
    }

    #[tool(
        name = "locate_video",
        description = "Find which day of a schedule a video is planned for, by its exact title. Returns the day number and date."
    )]
    async fn locate_video(&self, params: Parameters<LocateVideo>) -> McpResult {
        self.handlers().locate_video(params).await
    }

    #[tool(
        name = "delete_schedule",
        description = "Permanently delete a schedule with all of its days and progress. This cannot be undone and requires confirmed=true."
    )]
    async fn delete_schedule(&self, params: Parameters<DeleteSchedule>) -> McpResult {
        self.handlers().delete_schedule(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SyllabusMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "syllabus".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Syllabus turns video playlists into day-by-day study schedules and tracks which videos have been watched.

## Core Concepts
- **Schedules**: A playlist partitioned into numbered days starting today, under a constraint
- **Constraints**: time-based (minutes per day, more than 10) or day-based (a fixed number of days)
- **Progress**: Each video is watched or not; a schedule is completed when every video is watched

## Workflow
1. Create a schedule with `create_schedule`
2. Review it with `show_schedule` and find a video's day with `locate_video`
3. Record progress with `update_progress`
4. Running behind or ahead? Use `adjust_schedule` with a new daily budget; watched videos are kept
5. Use `list_schedules` to see active or completed schedules, and `delete_schedule` to remove one"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SyllabusMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Syllabus MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
