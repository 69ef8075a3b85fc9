//! # Workflow API
//!
//! Analysis, recommendation, optimization and one-shot design endpoints.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use blueprint_core::analysis::PromptAnalysis;
use blueprint_core::{
    AdvisoryReport, ComplexityTier, DesignResult, OptimizationGoal, RecommendRequest,
    WorkflowGraph,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::AppState;
use crate::error::ApiResult;

fn default_goal() -> String {
    OptimizationGoal::Speed.as_str().to_string()
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Natural-language description of the task
    pub text: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct RecommendApiRequest {
    /// Primary intent label
    #[serde(default)]
    pub intent: Option<String>,
    /// Capability categories, e.g. `information_retrieval`
    #[serde(default, alias = "required_capabilities")]
    pub capabilities: Vec<String>,
    /// `low`, `medium` (default) or `high`
    #[serde(default, alias = "complexity_level")]
    pub complexity: Option<String>,
    /// `sequential` (default), `parallel`, `conditional` or `loop`
    #[serde(default, alias = "workflow_type")]
    pub topology: Option<String>,
}

impl RecommendApiRequest {
    /// Unknown complexity names fall back to the default tier
    pub fn into_request(self) -> RecommendRequest {
        let mut request = RecommendRequest::default().with_capabilities(self.capabilities);
        if let Some(intent) = self.intent {
            request.intent = intent;
        }
        if let Some(complexity) = self.complexity {
            match complexity.parse::<ComplexityTier>() {
                Ok(tier) => request.complexity = tier,
                Err(_) => tracing::warn!(
                    complexity = %complexity,
                    "Unknown complexity tier, using default"
                ),
            }
        }
        if let Some(topology) = self.topology {
            request.topology = topology;
        }
        request
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OptimizeRequest {
    /// Workflow graph, usually the output of `/recommend`
    #[schema(value_type = Object)]
    pub workflow: serde_json::Value,
    /// `speed` (default), `cost` or `reliability`
    #[serde(default = "default_goal")]
    pub goal: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DesignRequest {
    pub text: String,
    #[serde(default = "default_goal")]
    pub goal: String,
}

/// Error body shared by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub code: String,
}

/// Analyze a prompt
#[utoipa::path(
    post,
    path = "/api/v1/analyze",
    tag = "workflow",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Intent, capabilities, tools and estimated topology"),
        (status = 400, description = "Malformed request", body = ErrorBody)
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> ApiResult<Json<PromptAnalysis>> {
    let Json(req) = payload?;
    Ok(Json(state.builder.analyze(&req.text)))
}

/// Recommend a workflow graph
#[utoipa::path(
    post,
    path = "/api/v1/recommend",
    tag = "workflow",
    request_body = RecommendApiRequest,
    responses(
        (status = 200, description = "Workflow graph"),
        (status = 400, description = "Malformed request", body = ErrorBody)
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendApiRequest>, JsonRejection>,
) -> ApiResult<Json<WorkflowGraph>> {
    let Json(req) = payload?;
    Ok(Json(state.builder.recommend(&req.into_request())))
}

/// Produce an advisory report for a workflow
#[utoipa::path(
    post,
    path = "/api/v1/optimize",
    tag = "workflow",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "Advisory report; the workflow is returned unchanged"),
        (status = 400, description = "Workflow is not a graph-shaped object", body = ErrorBody)
    )
)]
pub async fn optimize(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeRequest>, JsonRejection>,
) -> ApiResult<Json<AdvisoryReport>> {
    let Json(req) = payload?;
    let report = state.builder.optimize(&req.workflow, &req.goal)?;
    Ok(Json(report))
}

/// Analyze, recommend and optimize in one call
#[utoipa::path(
    post,
    path = "/api/v1/design",
    tag = "workflow",
    request_body = DesignRequest,
    responses(
        (status = 200, description = "Analysis, workflow graph and advisory report"),
        (status = 400, description = "Malformed request", body = ErrorBody)
    )
)]
pub async fn design(
    State(state): State<AppState>,
    payload: Result<Json<DesignRequest>, JsonRejection>,
) -> ApiResult<Json<DesignResult>> {
    let Json(req) = payload?;
    let result = state.builder.design(&req.text, &req.goal)?;
    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_request_defaults() {
        let request = RecommendApiRequest::default().into_request();
        assert_eq!(request.topology, "sequential");
        assert_eq!(request.complexity, ComplexityTier::Medium);
    }

    #[test]
    fn test_unknown_complexity_uses_default() {
        let req = RecommendApiRequest {
            complexity: Some("extreme".into()),
            ..Default::default()
        };
        assert_eq!(req.into_request().complexity, ComplexityTier::Medium);

        let req = RecommendApiRequest {
            complexity: Some("HIGH".into()),
            ..Default::default()
        };
        assert_eq!(req.into_request().complexity, ComplexityTier::High);
    }
}
