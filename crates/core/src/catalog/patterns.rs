//! # Pattern Metadata
//!
//! Node patterns describe the graph shapes a recommendation can take; the
//! graph assembler copies the matching entry into every graph it builds.
//! Workflow patterns are higher-level recipes that name a shape and the
//! capabilities it usually needs.

use crate::analysis::ComplexityTier;
use serde::{Deserialize, Serialize};

/// Shape metadata for one topology name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodePattern {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub use_cases: Vec<String>,
    /// Ordered stage names
    #[serde(default)]
    pub template: Vec<String>,
    #[serde(default)]
    pub parallelizable: bool,
    pub complexity: ComplexityTier,
}

/// A reusable workflow recipe
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowPattern {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Topology name this recipe is usually built with
    pub recommended_flow: String,
    #[serde(default)]
    pub required_capabilities: Vec<String>,
    #[serde(default)]
    pub typical_nodes: u32,
    #[serde(default)]
    pub estimated_time_ms: u64,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in node patterns, in declaration order
pub fn builtin_node_patterns() -> Vec<NodePattern> {
    vec![
        NodePattern {
            id: "sequential".into(),
            name: "Sequential".into(),
            description: "Runs each step in order, one at a time".into(),
            use_cases: strings(&["Data pipelines", "Step-by-step processing"]),
            template: strings(&["input", "process_1", "process_2", "output"]),
            parallelizable: false,
            complexity: ComplexityTier::Low,
        },
        NodePattern {
            id: "parallel".into(),
            name: "Parallel".into(),
            description: "Runs independent steps at the same time".into(),
            use_cases: strings(&["Multi-source gathering", "Independent tasks"]),
            template: strings(&["input", "branch_1", "branch_2", "merge", "output"]),
            parallelizable: true,
            complexity: ComplexityTier::Medium,
        },
        NodePattern {
            id: "conditional".into(),
            name: "Conditional".into(),
            description: "Chooses a path based on a condition".into(),
            use_cases: strings(&["Decision-driven work", "Filtering"]),
            template: strings(&[
                "input",
                "decision",
                "branch_true",
                "branch_false",
                "merge",
                "output",
            ]),
            parallelizable: false,
            complexity: ComplexityTier::Medium,
        },
        NodePattern {
            id: "loop".into(),
            name: "Loop".into(),
            description: "Repeats a step until a condition is met".into(),
            use_cases: strings(&["Batch processing", "Crawling", "Data migration"]),
            template: strings(&["input", "check_condition", "process", "update", "output"]),
            parallelizable: false,
            complexity: ComplexityTier::High,
        },
        NodePattern {
            id: "hierarchical".into(),
            name: "Hierarchical".into(),
            description: "A supervising agent directs subordinate agents".into(),
            use_cases: strings(&["Complex projects", "Multi-stage decisions"]),
            template: strings(&["input", "agent_1", "agent_2", "coordinator", "output"]),
            parallelizable: true,
            complexity: ComplexityTier::High,
        },
    ]
}

/// Built-in workflow recipes, in declaration order
pub fn builtin_workflow_patterns() -> Vec<WorkflowPattern> {
    vec![
        WorkflowPattern {
            id: "data_pipeline".into(),
            name: "Data Pipeline".into(),
            description: "Collect → process → store".into(),
            recommended_flow: "sequential".into(),
            required_capabilities: strings(&[
                "information_retrieval",
                "data_processing",
                "data_access",
            ]),
            typical_nodes: 3,
            estimated_time_ms: 5000,
        },
        WorkflowPattern {
            id: "analysis_workflow".into(),
            name: "Analysis Workflow".into(),
            description: "Collect → analyze → report".into(),
            recommended_flow: "sequential".into(),
            required_capabilities: strings(&[
                "information_retrieval",
                "data_processing",
                "generation",
            ]),
            typical_nodes: 3,
            estimated_time_ms: 6000,
        },
        WorkflowPattern {
            id: "multi_source_gathering".into(),
            name: "Multi-Source Gathering".into(),
            description: "Collect data from several sources at once".into(),
            recommended_flow: "parallel".into(),
            required_capabilities: strings(&["information_retrieval"]),
            typical_nodes: 4,
            estimated_time_ms: 3000,
        },
        WorkflowPattern {
            id: "decision_tree".into(),
            name: "Decision Tree".into(),
            description: "Run different work depending on a condition".into(),
            recommended_flow: "conditional".into(),
            required_capabilities: strings(&["data_processing"]),
            typical_nodes: 5,
            estimated_time_ms: 3000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topology_has_a_pattern() {
        let patterns = builtin_node_patterns();
        for name in ["sequential", "parallel", "conditional", "loop"] {
            assert!(patterns.iter().any(|p| p.id == name), "missing {}", name);
        }
    }

    #[test]
    fn test_workflow_patterns_reference_known_flows() {
        let flows: Vec<_> = builtin_node_patterns().into_iter().map(|p| p.id).collect();
        for recipe in builtin_workflow_patterns() {
            assert!(flows.contains(&recipe.recommended_flow));
        }
    }
}
