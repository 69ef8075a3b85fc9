//! Advisory report types.

use crate::analysis::ComplexityTier;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationGoal {
    Speed,
    Cost,
    Reliability,
}

impl OptimizationGoal {
    pub const ALL: [OptimizationGoal; 3] = [
        OptimizationGoal::Speed,
        OptimizationGoal::Cost,
        OptimizationGoal::Reliability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationGoal::Speed => "speed",
            OptimizationGoal::Cost => "cost",
            OptimizationGoal::Reliability => "reliability",
        }
    }
}

impl fmt::Display for OptimizationGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| format!("Unknown optimization goal: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Parallelization,
    Caching,
    AsyncExecution,
    ToolConsolidation,
    BatchProcessing,
    ModelDowngrade,
    ErrorHandling,
    FallbackPaths,
    MonitoringAlerts,
    InputValidation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub description: String,
    pub implementation: String,
    pub estimated_improvement: String,
    pub implementation_complexity: ComplexityTier,
}

impl Recommendation {
    pub(crate) fn new(
        kind: RecommendationKind,
        priority: Priority,
        description: &str,
        implementation: &str,
        estimated_improvement: &str,
        implementation_complexity: ComplexityTier,
    ) -> Self {
        Self {
            kind,
            priority,
            description: description.to_string(),
            implementation: implementation.to_string(),
            estimated_improvement: estimated_improvement.to_string(),
            implementation_complexity,
        }
    }
}

/// Coarse goal-level estimate, serialized as `{"<metric>": "<estimate>", "focus": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementMetrics {
    /// `potential_speedup`, `potential_savings` or `reliability_improvement`
    #[serde(flatten)]
    pub estimates: BTreeMap<String, String>,
    pub focus: String,
}

impl ImprovementMetrics {
    pub fn new(metric: &str, estimate: &str, focus: &str) -> Self {
        Self {
            estimates: BTreeMap::from([(metric.to_string(), estimate.to_string())]),
            focus: focus.to_string(),
        }
    }

    pub fn estimate(&self, metric: &str) -> Option<&str> {
        self.estimates.get(metric).map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub timestamp: DateTime<Utc>,
    pub original_workflow_id: Option<String>,
    /// Goal as requested, recognized or not
    pub optimization_goal: String,
    pub recommendations: Vec<Recommendation>,
    /// The input graph, untouched
    pub optimized_workflow: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_metrics: Option<ImprovementMetrics>,
}

impl AdvisoryReport {
    pub fn has(&self, kind: RecommendationKind) -> bool {
        self.recommendations.iter().any(|r| r.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_are_keyed_by_name() {
        let metrics = ImprovementMetrics::new("potential_savings", "20-40%", "fewer API calls");
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"potential_savings": "20-40%", "focus": "fewer API calls"})
        );

        let back: ImprovementMetrics = serde_json::from_value(json).unwrap();
        assert_eq!(back.estimate("potential_savings"), Some("20-40%"));
        assert_eq!(back, metrics);
    }
}
