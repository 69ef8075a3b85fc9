//! # Graph Assembler
//!
//! Builds a [`WorkflowGraph`] from selected tools and a topology name:
//! start node, one process node per tool in selection order, end node, then
//! whatever edges the topology rule produces.

use super::model::{GraphMetadata, Node, NodeKind, NodeStatus, ToolBinding, WorkflowGraph};
use super::rules::TopologyRule;
use crate::analysis::{ComplexityTier, Topology};
use crate::catalog::{CatalogStore, ToolDescriptor};
use crate::config::BuilderConfig;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

fn default_intent() -> String {
    "unknown".to_string()
}

fn default_topology() -> String {
    Topology::Sequential.as_str().to_string()
}

/// Inputs for a node recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Primary intent, carried into metadata unchanged
    #[serde(default = "default_intent")]
    pub intent: String,
    /// Capability categories; unknown ones contribute no tools
    #[serde(default, alias = "required_capabilities")]
    pub capabilities: Vec<String>,
    #[serde(default, alias = "complexity_level")]
    pub complexity: ComplexityTier,
    /// Topology name; unknown names are wired sequentially
    #[serde(default = "default_topology", alias = "workflow_type")]
    pub topology: String,
}

impl Default for RecommendRequest {
    fn default() -> Self {
        Self {
            intent: default_intent(),
            capabilities: Vec::new(),
            complexity: ComplexityTier::default(),
            topology: default_topology(),
        }
    }
}

impl RecommendRequest {
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Self::default()
        }
    }

    pub fn with_capabilities<I, S>(mut self, capabilities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.capabilities = capabilities.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_complexity(mut self, complexity: ComplexityTier) -> Self {
        self.complexity = complexity;
        self
    }

    pub fn with_topology(mut self, topology: impl Into<String>) -> Self {
        self.topology = topology.into();
        self
    }
}

/// Assembles graphs against a shared catalog
pub struct GraphAssembler<'a> {
    catalog: &'a CatalogStore,
    config: &'a BuilderConfig,
}

impl<'a> GraphAssembler<'a> {
    pub fn new(catalog: &'a CatalogStore, config: &'a BuilderConfig) -> Self {
        Self { catalog, config }
    }

    /// Select tools for the requested capabilities and assemble a graph
    pub fn recommend(&self, request: &RecommendRequest) -> WorkflowGraph {
        let tools = self.catalog.select_tools(&request.capabilities);
        let mut distinct = request.capabilities.clone();
        distinct.sort();
        distinct.dedup();

        self.assemble(
            &request.intent,
            distinct.len(),
            &tools,
            request.complexity,
            &request.topology,
        )
    }

    /// Assemble a graph from an already-selected tool list
    pub fn assemble(
        &self,
        intent: &str,
        capability_count: usize,
        tools: &[ToolDescriptor],
        complexity: ComplexityTier,
        topology: &str,
    ) -> WorkflowGraph {
        let mut nodes = Vec::with_capacity(tools.len() + 2);
        nodes.push(Node::start());
        nodes.extend(
            tools
                .iter()
                .enumerate()
                .map(|(i, tool)| self.process_node(i + 1, tool)),
        );
        nodes.push(Node::end());

        let wiring = TopologyRule::for_name(topology, self.config).wire(&nodes);

        let tool_mappings: BTreeMap<String, String> = nodes
            .iter()
            .filter_map(|n| n.tool_id().map(|t| (n.id.clone(), t.to_string())))
            .collect();

        tracing::debug!(
            topology,
            nodes = nodes.len(),
            connections = wiring.connections.len(),
            "Workflow graph assembled"
        );

        WorkflowGraph {
            timestamp: Utc::now(),
            workflow_id: Uuid::new_v4(),
            workflow_type: topology.to_string(),
            pattern: self.catalog.node_pattern(topology).cloned(),
            metadata: GraphMetadata {
                complexity,
                intent: intent.to_string(),
                capability_count,
                tool_count: tools.len(),
                node_count: nodes.len(),
                connection_count: wiring.connections.len(),
            },
            nodes,
            connections: wiring.connections,
            tool_mappings,
            execution_order: wiring.execution_order,
        }
    }

    fn process_node(&self, position: usize, tool: &ToolDescriptor) -> Node {
        Node {
            id: format!("process_node_{}", position),
            name: tool.name.clone(),
            kind: NodeKind::Process,
            description: tool.description.clone(),
            status: NodeStatus::Pending,
            tool: Some(ToolBinding {
                tool_id: tool.id.clone(),
                tool_schema: tool.input_schema.clone(),
                category: tool.category.clone(),
                priority: tool.priority,
                estimated_time_ms: tool.estimated_time_ms,
                retry_count: self.config.node_retry_count,
                timeout_ms: self.config.node_timeout_ms,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::model::{ConnectionKind, INPUT_NODE_ID, OUTPUT_NODE_ID};
    use std::collections::HashSet;

    fn build(request: &RecommendRequest) -> WorkflowGraph {
        let catalog = CatalogStore::builtin();
        let config = BuilderConfig::default();
        GraphAssembler::new(&catalog, &config).recommend(request)
    }

    #[test]
    fn test_empty_capabilities_sequential() {
        let graph = build(&RecommendRequest::new("search"));
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.connections.len(), 1);
        assert_eq!(graph.connections[0].from_node, INPUT_NODE_ID);
        assert_eq!(graph.connections[0].to_node, OUTPUT_NODE_ID);
        assert!(graph.tool_mappings.is_empty());
        assert_eq!(graph.metadata.tool_count, 0);
    }

    #[test]
    fn test_process_nodes_follow_selection_order() {
        let graph = build(
            &RecommendRequest::new("generate")
                .with_capabilities(["generation", "data_access"])
                .with_topology("sequential"),
        );
        let tools: Vec<_> = graph.process_nodes().filter_map(|n| n.tool_id()).collect();
        assert_eq!(tools, vec!["database_query", "api_call", "content_generation"]);
        assert_eq!(graph.tool_mappings["process_node_3"], "content_generation");

        let node = graph.node("process_node_1").unwrap();
        let binding = node.tool.as_ref().unwrap();
        assert_eq!(binding.retry_count, 3);
        assert_eq!(binding.timeout_ms, 30_000);
    }

    #[test]
    fn test_ids_unique_for_every_topology() {
        for topology in ["sequential", "parallel", "conditional", "loop", "mystery"] {
            let graph = build(
                &RecommendRequest::new("search")
                    .with_capabilities(["information_retrieval", "data_access", "generation"])
                    .with_topology(topology),
            );
            let node_ids: HashSet<_> = graph.nodes.iter().map(|n| &n.id).collect();
            assert_eq!(node_ids.len(), graph.nodes.len());
            let conn_ids: HashSet<_> = graph.connections.iter().map(|c| &c.id).collect();
            assert_eq!(conn_ids.len(), graph.connections.len());

            let starts = graph.nodes.iter().filter(|n| n.kind == NodeKind::Start).count();
            let ends = graph.nodes.iter().filter(|n| n.kind == NodeKind::End).count();
            assert_eq!((starts, ends), (1, 1));
        }
    }

    #[test]
    fn test_parallel_graph() {
        let graph = build(
            &RecommendRequest::new("retrieve")
                .with_capabilities(["information_retrieval"])
                .with_topology("parallel"),
        );
        assert_eq!(graph.connections.len(), 4);
        assert_eq!(graph.connections_of(ConnectionKind::Parallel).count(), 4);
        assert_eq!(graph.pattern.as_ref().unwrap().id, "parallel");
    }

    #[test]
    fn test_loop_graph_has_back_edge() {
        let graph = build(
            &RecommendRequest::new("execute")
                .with_capabilities(["data_access"])
                .with_topology("loop"),
        );
        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.connections_of(ConnectionKind::LoopBack).count(), 1);
    }

    #[test]
    fn test_unknown_topology_falls_back() {
        let graph = build(
            &RecommendRequest::new("search")
                .with_capabilities(["computation"])
                .with_topology("hierarchical"),
        );
        assert_eq!(graph.workflow_type, "hierarchical");
        assert_eq!(graph.pattern.as_ref().unwrap().id, "hierarchical");
        assert_eq!(graph.connections.len(), 2);
        assert!(graph
            .connections
            .iter()
            .all(|c| c.kind == ConnectionKind::Direct));

        let graph = build(&RecommendRequest::new("search").with_topology("spiral"));
        assert!(graph.pattern.is_none());
        let json = serde_json::to_value(&graph).unwrap();
        assert!(json.get("pattern").is_none());
        assert_eq!(json["workflow_type"], "spiral");
    }

    #[test]
    fn test_request_defaults_from_json() {
        let request: RecommendRequest =
            serde_json::from_str(r#"{"intent": "analyze", "required_capabilities": ["data_processing"]}"#)
                .unwrap();
        assert_eq!(request.complexity, ComplexityTier::Medium);
        assert_eq!(request.topology, "sequential");
        assert_eq!(request.capabilities, vec!["data_processing"]);
    }
}
