//! Boundary shape for graphs handed to the optimizer.
//!
//! Graphs may come from outside this crate, so every field is optional and
//! unknown fields are ignored. Anything that is not an object with these
//! field types is rejected as malformed before any rule runs.

use crate::error::{BuilderError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct NodeInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub tool_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ConnectionInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub from_node: Option<String>,
    #[serde(default)]
    pub to_node: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A workflow graph as the optimizer reads it
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GraphInput {
    #[serde(default)]
    pub workflow_id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeInput>,
    #[serde(default)]
    pub connections: Vec<ConnectionInput>,
}

impl GraphInput {
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(BuilderError::malformed(format!(
                "workflow must be a JSON object, got {}",
                json_kind(value)
            )));
        }
        Ok(Self::deserialize(value)?)
    }

    pub fn count_connections(&self, kind: &str) -> usize {
        self.connections
            .iter()
            .filter(|c| c.kind.as_deref() == Some(kind))
            .count()
    }

    /// Nodes whose tool id mentions `needle`, ignoring case
    pub fn count_tools_matching(&self, needle: &str) -> usize {
        let needle = needle.to_lowercase();
        self.nodes
            .iter()
            .filter_map(|n| n.tool_id.as_deref())
            .filter(|id| id.to_lowercase().contains(&needle))
            .count()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default() {
        let input = GraphInput::from_value(&json!({})).unwrap();
        assert!(input.workflow_id.is_none());
        assert!(input.nodes.is_empty());
        assert!(input.connections.is_empty());
    }

    #[test]
    fn test_rejects_non_objects() {
        for bad in [json!(null), json!([1, 2]), json!("graph"), json!(3)] {
            let err = GraphInput::from_value(&bad).unwrap_err();
            assert_eq!(err.code(), "MALFORMED_INPUT");
        }
    }

    #[test]
    fn test_rejects_wrong_field_types() {
        let err = GraphInput::from_value(&json!({"connections": "direct"})).unwrap_err();
        assert!(matches!(err, BuilderError::MalformedInput(_)));

        let err = GraphInput::from_value(&json!({"nodes": [{"tool_id": 7}]})).unwrap_err();
        assert!(matches!(err, BuilderError::MalformedInput(_)));
    }

    #[test]
    fn test_counts() {
        let input = GraphInput::from_value(&json!({
            "nodes": [
                {"id": "input_node", "type": "start"},
                {"id": "a", "type": "process", "tool_id": "API_call"},
                {"id": "b", "type": "process", "tool_id": "rapid_api"},
                {"id": "c", "type": "process", "tool_id": "web_search"}
            ],
            "connections": [
                {"type": "direct"},
                {"type": "parallel"},
                {"type": "direct"},
                {}
            ]
        }))
        .unwrap();

        assert_eq!(input.count_connections("direct"), 2);
        assert_eq!(input.count_tools_matching("api"), 2);
    }
}
