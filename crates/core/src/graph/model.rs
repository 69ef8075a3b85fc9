//! # Graph Model
//!
//! Nodes, connections, and the recommendation that bundles them.

use crate::analysis::ComplexityTier;
use crate::catalog::NodePattern;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Fixed id of the start node
pub const INPUT_NODE_ID: &str = "input_node";

/// Fixed id of the end node
pub const OUTPUT_NODE_ID: &str = "output_node";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Start,
    Process,
    End,
}

/// Nodes are created pending; nothing in this crate advances them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    #[default]
    Pending,
}

/// Tool reference and operational defaults carried by process nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolBinding {
    pub tool_id: String,
    pub tool_schema: serde_json::Value,
    pub category: String,
    pub priority: u32,
    pub estimated_time_ms: u64,
    pub retry_count: u32,
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub description: String,
    #[serde(default)]
    pub status: NodeStatus,
    /// Present on process nodes only
    #[serde(flatten)]
    pub tool: Option<ToolBinding>,
}

impl Node {
    pub fn start() -> Self {
        Self {
            id: INPUT_NODE_ID.to_string(),
            name: "Receive Input".to_string(),
            kind: NodeKind::Start,
            description: "Receives user input or external data".to_string(),
            status: NodeStatus::Pending,
            tool: None,
        }
    }

    pub fn end() -> Self {
        Self {
            id: OUTPUT_NODE_ID.to_string(),
            name: "Return Result".to_string(),
            kind: NodeKind::End,
            description: "Returns the final result".to_string(),
            status: NodeStatus::Pending,
            tool: None,
        }
    }

    pub fn is_process(&self) -> bool {
        self.kind == NodeKind::Process
    }

    pub fn tool_id(&self) -> Option<&str> {
        self.tool.as_ref().map(|t| t.tool_id.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    Direct,
    Parallel,
    Conditional,
    LoopBack,
}

/// Directed edge between two nodes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Connection {
    pub id: String,
    pub from_node: String,
    pub to_node: String,
    #[serde(rename = "type")]
    pub kind: ConnectionKind,
    #[serde(default)]
    pub condition: Option<String>,
}

impl Connection {
    pub fn new(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        kind: ConnectionKind,
    ) -> Self {
        Self {
            id: id.into(),
            from_node: from.into(),
            to_node: to.into(),
            kind,
            condition: None,
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphMetadata {
    pub complexity: ComplexityTier,
    pub intent: String,
    pub capability_count: usize,
    pub tool_count: usize,
    pub node_count: usize,
    pub connection_count: usize,
}

/// A recommended workflow skeleton
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub timestamp: DateTime<Utc>,
    pub workflow_id: Uuid,
    /// Topology name as requested, even when it fell back to sequential
    pub workflow_type: String,
    /// Copy of the catalog pattern for `workflow_type`, if one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<NodePattern>,
    pub nodes: Vec<Node>,
    pub connections: Vec<Connection>,
    /// process node id -> tool id
    pub tool_mappings: BTreeMap<String, String>,
    pub execution_order: Vec<String>,
    pub metadata: GraphMetadata,
}

impl WorkflowGraph {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn process_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_process())
    }

    pub fn connections_of(&self, kind: ConnectionKind) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_node_has_no_tool_fields() {
        let json = serde_json::to_value(Node::start()).unwrap();
        assert_eq!(json["id"], "input_node");
        assert_eq!(json["type"], "start");
        assert_eq!(json["status"], "pending");
        assert!(json.get("tool_id").is_none());
    }

    #[test]
    fn test_process_node_flattens_binding() {
        let node = Node {
            id: "process_node_1".into(),
            name: "API Call".into(),
            kind: NodeKind::Process,
            description: String::new(),
            status: NodeStatus::Pending,
            tool: Some(ToolBinding {
                tool_id: "api_call".into(),
                tool_schema: serde_json::json!({}),
                category: "data_access".into(),
                priority: 2,
                estimated_time_ms: 2000,
                retry_count: 3,
                timeout_ms: 30_000,
            }),
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["tool_id"], "api_call");
        assert_eq!(json["retry_count"], 3);

        let back: Node = serde_json::from_value(json).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_connection_kind_names() {
        let conn = Connection::new("c", "a", "b", ConnectionKind::LoopBack)
            .with_condition("while_condition");
        let json = serde_json::to_value(&conn).unwrap();
        assert_eq!(json["type"], "loop_back");
        assert_eq!(json["condition"], "while_condition");
    }
}
