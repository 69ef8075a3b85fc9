//! # HTTP API
//!
//! Routes under `/api/v1`, shared state, and the OpenAPI document.

pub mod catalog;
pub mod workflow;

use axum::{
    routing::{get, post},
    Json, Router,
};
use blueprint_core::AgentBuilder;
use std::sync::Arc;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<AgentBuilder>,
}

impl AppState {
    pub fn new(builder: AgentBuilder) -> Self {
        Self {
            builder: Arc::new(builder),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blueprint API",
        version = "0.1.0",
        description = "Designs agent workflow graphs from natural-language requests"
    ),
    paths(
        workflow::analyze,
        workflow::recommend,
        workflow::optimize,
        workflow::design,
        catalog::list_tools,
        catalog::list_patterns,
        catalog::list_workflow_patterns,
        catalog::server_info,
        catalog::capabilities,
        catalog::workflow_schema
    ),
    components(
        schemas(
            workflow::AnalyzeRequest,
            workflow::RecommendApiRequest,
            workflow::OptimizeRequest,
            workflow::DesignRequest,
            workflow::ErrorBody
        )
    ),
    tags(
        (name = "workflow", description = "Analysis, recommendation and optimization"),
        (name = "catalog", description = "Tools, patterns and server metadata")
    )
)]
pub struct ApiDoc;

async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/analyze", post(workflow::analyze))
        .route("/recommend", post(workflow::recommend))
        .route("/optimize", post(workflow::optimize))
        .route("/design", post(workflow::design))
        .route("/tools", get(catalog::list_tools))
        .route("/patterns", get(catalog::list_patterns))
        .route("/workflow-patterns", get(catalog::list_workflow_patterns))
        .route("/info", get(catalog::server_info))
        .route("/capabilities", get(catalog::capabilities))
        .route("/schema/workflow", get(catalog::workflow_schema))
        .route("/openapi.json", get(serve_openapi));

    Router::new().nest("/api/v1", api_routes).with_state(state)
}
