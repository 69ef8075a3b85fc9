//! # Catalog API
//!
//! Read-only views over tools, patterns and server metadata.

use axum::{extract::State, Json};
use blueprint_core::{
    CapabilityInfo, GraphInput, NodePattern, ServerInfo, ToolDescriptor, WorkflowPattern,
};

use super::AppState;

/// List available tools
#[utoipa::path(
    get,
    path = "/api/v1/tools",
    tag = "catalog",
    responses((status = 200, description = "Every catalog tool with its id"))
)]
pub async fn list_tools(State(state): State<AppState>) -> Json<Vec<ToolDescriptor>> {
    Json(state.builder.list_tools())
}

/// List node patterns
#[utoipa::path(
    get,
    path = "/api/v1/patterns",
    tag = "catalog",
    responses((status = 200, description = "Node pattern metadata"))
)]
pub async fn list_patterns(State(state): State<AppState>) -> Json<Vec<NodePattern>> {
    Json(state.builder.list_patterns())
}

/// List workflow recipes
#[utoipa::path(
    get,
    path = "/api/v1/workflow-patterns",
    tag = "catalog",
    responses((status = 200, description = "Higher-level workflow patterns"))
)]
pub async fn list_workflow_patterns(State(state): State<AppState>) -> Json<Vec<WorkflowPattern>> {
    Json(state.builder.list_workflow_patterns())
}

#[utoipa::path(
    get,
    path = "/api/v1/info",
    tag = "catalog",
    responses((status = 200, description = "Server name, version and catalog sizes"))
)]
pub async fn server_info(State(state): State<AppState>) -> Json<ServerInfo> {
    Json(state.builder.server_info())
}

#[utoipa::path(
    get,
    path = "/api/v1/capabilities",
    tag = "catalog",
    responses((status = 200, description = "Functions offered by this server"))
)]
pub async fn capabilities(State(state): State<AppState>) -> Json<Vec<CapabilityInfo>> {
    Json(state.builder.capabilities())
}

/// JSON schema accepted by `/optimize` as its `workflow` field
#[utoipa::path(
    get,
    path = "/api/v1/schema/workflow",
    tag = "catalog",
    responses((status = 200, description = "JSON schema of the optimizer input"))
)]
pub async fn workflow_schema() -> Json<schemars::Schema> {
    Json(schemars::schema_for!(GraphInput))
}
