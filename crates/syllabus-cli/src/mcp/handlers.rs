//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use syllabus_core::{
    display::{CreateResult, DeleteResult, OperationStatus, UpdateResult},
    params as core, Scheduler,
};

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types.
///
/// `#[serde(transparent)]` passes deserialization straight through to the
/// wrapped type, and the schema is the wrapped type's schema.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateSchedule = McpParams<core::CreateSchedule>;
pub type AdjustSchedule = McpParams<core::AdjustSchedule>;
pub type ListSchedules = McpParams<core::ListSchedules>;
pub type UpdateProgress = McpParams<core::UpdateProgress>;
pub type LocateVideo = McpParams<core::LocateVideo>;
pub type DeleteSchedule = McpParams<core::DeleteSchedule>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    scheduler: Arc<Scheduler>,
}

impl McpHandlers {
    pub fn new(scheduler: Arc<Scheduler>) -> Self {
        Self { scheduler }
    }

    pub async fn create_schedule(&self, Parameters(params): Parameters<CreateSchedule>) -> McpResult {
        debug!("create_schedule: {params:?}");

        let schedule = self
            .scheduler
            .create_schedule(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create schedule", &e))?;

        text_result(CreateResult::new(schedule).to_string())
    }

    pub async fn list_schedules(&self, Parameters(params): Parameters<ListSchedules>) -> McpResult {
        debug!("list_schedules: {params:?}");

        let inner_params = params.as_ref();
        let overviews = self
            .scheduler
            .list_schedules(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to list schedules", &e))?;

        let title = match (overviews.is_empty(), inner_params.completed) {
            (true, true) => "No completed schedules found",
            (true, false) => "No active schedules found",
            (false, true) => "Completed Schedules",
            (false, false) => "Active Schedules",
        };
        text_result(format!("# {title}\n\n{overviews}"))
    }

    pub async fn show_schedule(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_schedule: {params:?}");

        let id = params.as_ref().id;
        let schedule = self
            .scheduler
            .get_schedule(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get schedule", &e))?
            .ok_or_else(|| {
                ErrorData::resource_not_found(format!("Schedule with ID {id} not found"), None)
            })?;

        text_result(schedule.to_string())
    }

    pub async fn adjust_schedule(&self, Parameters(params): Parameters<AdjustSchedule>) -> McpResult {
        debug!("adjust_schedule: {params:?}");

        let old_id = params.as_ref().id;
        let schedule = self
            .scheduler
            .adjust_schedule(params.as_ref())
            .await
            .map_err(|e| {
                if e.is_incomplete_reconciliation() {
                    to_mcp_error(
                        "Adjusted schedule was saved but the old one could not be removed; delete it with delete_schedule",
                        &e,
                    )
                } else {
                    to_mcp_error("Failed to adjust schedule", &e)
                }
            })?;

        let result =
            UpdateResult::with_changes(schedule, vec![format!("Replaced schedule {old_id}")]);
        text_result(result.to_string())
    }

    pub async fn update_progress(&self, Parameters(params): Parameters<UpdateProgress>) -> McpResult {
        debug!("update_progress: {params:?}");

        let inner_params = params.as_ref();
        let schedule = self
            .scheduler
            .update_progress(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to update progress", &e))?;

        let state = if inner_params.completed {
            "watched"
        } else {
            "not watched"
        };
        let status = OperationStatus::success(format!(
            "Marked {} as {state} in schedule {}. Progress: {}/{} videos ({:.1}%), status: {}",
            inner_params.link,
            schedule.id,
            schedule.summary.completed_videos,
            schedule.summary.total_videos,
            schedule.summary.completion_percentage,
            schedule.status
        ));
        text_result(status.to_string())
    }

    pub async fn locate_video(&self, Parameters(params): Parameters<LocateVideo>) -> McpResult {
        debug!("locate_video: {params:?}");

        let inner_params = params.as_ref();
        let location = self
            .scheduler
            .locate_video(inner_params)
            .await
            .map_err(|e| to_mcp_error("Failed to search schedule", &e))?;

        match location {
            Some(location) => text_result(location.to_string()),
            None => text_result(
                OperationStatus::failure(format!(
                    "No video titled '{}' in schedule {}",
                    inner_params.title, inner_params.schedule_id
                ))
                .to_string(),
            ),
        }
    }

    pub async fn delete_schedule(&self, Parameters(params): Parameters<DeleteSchedule>) -> McpResult {
        debug!("delete_schedule: {params:?}");

        let id = params.as_ref().id;
        let deleted = self
            .scheduler
            .delete_schedule(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete schedule", &e))?
            .ok_or_else(|| {
                ErrorData::resource_not_found(format!("Schedule with ID {id} not found"), None)
            })?;

        text_result(DeleteResult::new(deleted).to_string())
    }
}
