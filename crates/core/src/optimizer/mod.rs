//! # Advisory Optimizer
//!
//! Annotates a graph with a goal-specific checklist. The graph itself is
//! returned as received; nothing here rewrites nodes or edges.

pub mod input;
pub mod report;

pub use input::{ConnectionInput, GraphInput, NodeInput};
pub use report::{
    AdvisoryReport, ImprovementMetrics, OptimizationGoal, Priority, Recommendation,
    RecommendationKind,
};

use crate::analysis::ComplexityTier;
use crate::error::Result;
use chrono::Utc;

/// Build an advisory report for `workflow`
///
/// Structurally invalid graphs are rejected with
/// [`BuilderError::MalformedInput`](crate::error::BuilderError). An
/// unrecognized goal yields an empty recommendation list and no metrics.
pub fn optimize(workflow: &serde_json::Value, goal: &str) -> Result<AdvisoryReport> {
    let input = GraphInput::from_value(workflow)?;

    let (recommendations, improvement_metrics) = match goal.parse::<OptimizationGoal>() {
        Ok(goal) => (advise(&input, goal), Some(metrics(goal))),
        Err(_) => {
            tracing::warn!(goal, "Unknown optimization goal, returning no recommendations");
            (Vec::new(), None)
        }
    };

    tracing::debug!(
        goal,
        recommendations = recommendations.len(),
        "Advisory report built"
    );

    Ok(AdvisoryReport {
        timestamp: Utc::now(),
        original_workflow_id: input.workflow_id,
        optimization_goal: goal.to_string(),
        recommendations,
        optimized_workflow: workflow.clone(),
        improvement_metrics,
    })
}

/// Goal-specific checklist for an already validated graph
pub fn advise(input: &GraphInput, goal: OptimizationGoal) -> Vec<Recommendation> {
    match goal {
        OptimizationGoal::Speed => speed(input),
        OptimizationGoal::Cost => cost(input),
        OptimizationGoal::Reliability => reliability(),
    }
}

fn metrics(goal: OptimizationGoal) -> ImprovementMetrics {
    let (metric, estimate, focus) = match goal {
        OptimizationGoal::Speed => ("potential_speedup", "30-50%", "parallel execution and caching"),
        OptimizationGoal::Cost => ("potential_savings", "20-40%", "fewer API calls"),
        OptimizationGoal::Reliability => {
            ("reliability_improvement", "99%+", "error handling and retries")
        }
    };
    ImprovementMetrics::new(metric, estimate, focus)
}

fn speed(input: &GraphInput) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if input.count_connections("direct") > 1 {
        recs.push(Recommendation::new(
            RecommendationKind::Parallelization,
            Priority::High,
            "Run independent nodes in parallel",
            "Execute independent steps of the current sequential chain concurrently",
            "30-50%",
            ComplexityTier::Medium,
        ));
    }

    recs.push(Recommendation::new(
        RecommendationKind::Caching,
        Priority::High,
        "Cache frequently used data",
        "Add an in-memory cache for repeated requests",
        "20-40% (repeat requests)",
        ComplexityTier::Low,
    ));
    recs.push(Recommendation::new(
        RecommendationKind::AsyncExecution,
        Priority::Medium,
        "Introduce asynchronous execution",
        "Move I/O-bound steps to async execution",
        "15-25%",
        ComplexityTier::Medium,
    ));
    recs
}

fn cost(input: &GraphInput) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if input.count_tools_matching("api") > 1 {
        recs.push(Recommendation::new(
            RecommendationKind::ToolConsolidation,
            Priority::High,
            "Consolidate multiple API calls into one batched call",
            "Cut the number of API calls by up to 50%",
            "40-50%",
            ComplexityTier::High,
        ));
    }

    recs.push(Recommendation::new(
        RecommendationKind::BatchProcessing,
        Priority::High,
        "Switch individual requests to batch processing",
        "Group many small requests into one larger batch",
        "30-40%",
        ComplexityTier::Medium,
    ));
    recs.push(Recommendation::new(
        RecommendationKind::ModelDowngrade,
        Priority::Medium,
        "Use cheaper models where the task allows",
        "Route simple steps to a lower-cost model",
        "20-30%",
        ComplexityTier::Low,
    ));
    recs
}

fn reliability() -> Vec<Recommendation> {
    vec![
        Recommendation::new(
            RecommendationKind::ErrorHandling,
            Priority::High,
            "Add error handling and retries to every node",
            "Wrap each step with error capture and exponential backoff retries",
            "95%+",
            ComplexityTier::Low,
        ),
        Recommendation::new(
            RecommendationKind::FallbackPaths,
            Priority::High,
            "Add a fallback path for each node",
            "Name an alternative tool or data source per step",
            "99%+",
            ComplexityTier::Medium,
        ),
        Recommendation::new(
            RecommendationKind::MonitoringAlerts,
            Priority::Medium,
            "Add real-time monitoring and alerts",
            "Log success and failure of each node and alert on failures",
            "faster recovery",
            ComplexityTier::Medium,
        ),
        Recommendation::new(
            RecommendationKind::InputValidation,
            Priority::High,
            "Tighten input validation",
            "Validate inputs against their schema and sanitize data",
            "prevent errors",
            ComplexityTier::Low,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuilderError;
    use serde_json::json;

    fn chain(direct: usize) -> serde_json::Value {
        let connections: Vec<_> = (0..direct)
            .map(|i| json!({"id": format!("conn_{}", i), "type": "direct"}))
            .collect();
        json!({"workflow_id": "wf-1", "nodes": [], "connections": connections})
    }

    #[test]
    fn test_speed_parallelization_threshold() {
        let report = optimize(&chain(2), "speed").unwrap();
        assert!(report.has(RecommendationKind::Parallelization));
        assert_eq!(report.recommendations.len(), 3);

        let report = optimize(&chain(1), "speed").unwrap();
        assert!(!report.has(RecommendationKind::Parallelization));
        assert_eq!(report.recommendations[0].kind, RecommendationKind::Caching);

        let metrics = report.improvement_metrics.unwrap();
        assert_eq!(metrics.estimate("potential_speedup"), Some("30-50%"));
        assert_eq!(metrics.estimates.len(), 1);
    }

    #[test]
    fn test_cost_consolidation() {
        let workflow = json!({
            "nodes": [
                {"id": "process_node_1", "type": "process", "tool_id": "api_call"},
                {"id": "process_node_2", "type": "process", "tool_id": "Payments_API"}
            ]
        });
        let report = optimize(&workflow, "cost").unwrap();
        let kinds: Vec<_> = report.recommendations.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RecommendationKind::ToolConsolidation,
                RecommendationKind::BatchProcessing,
                RecommendationKind::ModelDowngrade
            ]
        );

        let single = json!({"nodes": [{"tool_id": "api_call"}]});
        let report = optimize(&single, "cost").unwrap();
        assert!(!report.has(RecommendationKind::ToolConsolidation));
    }

    #[test]
    fn test_reliability_checklist_order() {
        let report = optimize(&json!({}), "reliability").unwrap();
        let priorities: Vec<_> = report.recommendations.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![Priority::High, Priority::High, Priority::Medium, Priority::High]
        );
        assert_eq!(
            report.recommendations[3].kind,
            RecommendationKind::InputValidation
        );
    }

    #[test]
    fn test_unknown_goal_is_empty() {
        let report = optimize(&chain(4), "latency").unwrap();
        assert!(report.recommendations.is_empty());
        assert!(report.improvement_metrics.is_none());
        assert_eq!(report.optimization_goal, "latency");

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("improvement_metrics").is_none());
    }

    #[test]
    fn test_workflow_passes_through_unchanged() {
        let workflow = json!({
            "workflow_id": "wf-9",
            "connections": [{"type": "direct"}, {"type": "direct"}],
            "extra": {"kept": true}
        });
        let report = optimize(&workflow, "speed").unwrap();
        assert_eq!(report.optimized_workflow, workflow);
        assert_eq!(report.original_workflow_id.as_deref(), Some("wf-9"));
    }

    #[test]
    fn test_malformed_input() {
        let err = optimize(&json!([]), "speed").unwrap_err();
        assert!(matches!(err, BuilderError::MalformedInput(_)));

        let err = optimize(&json!({"connections": [{"type": 1}]}), "speed").unwrap_err();
        assert!(matches!(err, BuilderError::MalformedInput(_)));
    }

    #[test]
    fn test_goal_parsing() {
        assert_eq!("cost".parse::<OptimizationGoal>(), Ok(OptimizationGoal::Cost));
        assert!("Cost".parse::<OptimizationGoal>().is_err());
    }
}
