//! # Agent Builder
//!
//! The entry point the transports talk to. Holds the shared catalog and the
//! node defaults, and runs each pipeline stage on request:
//!
//! ```text
//! analyze(text) ──► recommend(request) ──► optimize(graph, goal)
//!        └──────────────── design(text, goal) ────────────────┘
//! ```

use crate::analysis::{analyze_prompt, PromptAnalysis};
use crate::catalog::{CatalogStore, NodePattern, ToolDescriptor, WorkflowPattern};
use crate::config::BuilderConfig;
use crate::error::{BuilderError, Result};
use crate::graph::{GraphAssembler, RecommendRequest, WorkflowGraph};
use crate::optimizer::{self, AdvisoryReport};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Advertised server name
pub const SERVER_NAME: &str = "blueprint";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub tools_available: usize,
    pub patterns_available: usize,
}

/// One offered function and what it does
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CapabilityInfo {
    pub name: String,
    pub description: String,
}

/// Output of the one-shot `design` pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignResult {
    pub analysis: PromptAnalysis,
    pub workflow: WorkflowGraph,
    pub report: AdvisoryReport,
}

/// Facade over analysis, assembly and optimization
#[derive(Debug, Clone)]
pub struct AgentBuilder {
    catalog: Arc<CatalogStore>,
    config: BuilderConfig,
}

impl Default for AgentBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl AgentBuilder {
    /// Builder over the built-in catalog
    pub fn new(config: BuilderConfig) -> Self {
        Self::with_catalog(Arc::new(CatalogStore::builtin()), config)
    }

    pub fn with_catalog(catalog: Arc<CatalogStore>, config: BuilderConfig) -> Self {
        Self { catalog, config }
    }

    /// Builder whose catalog comes from `config.catalog_path` when set
    pub async fn from_config(config: BuilderConfig) -> anyhow::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => CatalogStore::load(path).await?,
            None => CatalogStore::builtin(),
        };
        Ok(Self::with_catalog(Arc::new(catalog), config))
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    #[tracing::instrument(skip(self, text), fields(prompt_preview = %text.chars().take(50).collect::<String>()))]
    pub fn analyze(&self, text: &str) -> PromptAnalysis {
        analyze_prompt(&self.catalog, text)
    }

    #[tracing::instrument(skip(self), fields(topology = %request.topology))]
    pub fn recommend(&self, request: &RecommendRequest) -> WorkflowGraph {
        GraphAssembler::new(&self.catalog, &self.config).recommend(request)
    }

    #[tracing::instrument(skip(self, workflow))]
    pub fn optimize(&self, workflow: &serde_json::Value, goal: &str) -> Result<AdvisoryReport> {
        optimizer::optimize(workflow, goal)
    }

    /// Parse `workflow` as JSON and optimize it
    pub fn optimize_json(&self, workflow: &str, goal: &str) -> Result<AdvisoryReport> {
        let value: serde_json::Value = serde_json::from_str(workflow)?;
        self.optimize(&value, goal)
    }

    /// Optimize a graph produced by [`recommend`](Self::recommend)
    pub fn optimize_graph(&self, workflow: &WorkflowGraph, goal: &str) -> Result<AdvisoryReport> {
        let value = serde_json::to_value(workflow)
            .map_err(|e| BuilderError::malformed(e.to_string()))?;
        self.optimize(&value, goal)
    }

    /// Full catalog with ids injected
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        self.catalog.tools().to_vec()
    }

    pub fn list_patterns(&self) -> Vec<NodePattern> {
        self.catalog.node_patterns().to_vec()
    }

    pub fn list_workflow_patterns(&self) -> Vec<WorkflowPattern> {
        self.catalog.workflow_patterns().to_vec()
    }

    pub fn server_info(&self) -> ServerInfo {
        ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Designs agent workflow graphs from natural-language requests".to_string(),
            tools_available: self.catalog.tools().len(),
            patterns_available: self.catalog.node_patterns().len(),
        }
    }

    pub fn capabilities(&self) -> Vec<CapabilityInfo> {
        [
            ("prompt_analysis", "Classify intent, complexity and required capabilities of a request"),
            ("node_recommendation", "Assemble a workflow graph from selected tools and a topology"),
            ("workflow_optimization", "Suggest speed, cost or reliability improvements for a graph"),
            ("tool_discovery", "List the tools available for workflow nodes"),
            ("pattern_information", "Describe node and workflow patterns"),
        ]
        .into_iter()
        .map(|(name, description)| CapabilityInfo {
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect()
    }

    /// Analyze, recommend with the estimated topology, then optimize
    #[tracing::instrument(skip(self, text))]
    pub fn design(&self, text: &str, goal: &str) -> Result<DesignResult> {
        let analysis = self.analyze(text);
        let intent = &analysis.intent_analysis;

        let request = RecommendRequest::new(intent.primary_intent.as_str())
            .with_capabilities(analysis.required_capabilities.iter().map(|c| c.as_str()))
            .with_complexity(intent.complexity_level)
            .with_topology(analysis.estimated_workflow_type.as_str());

        let workflow = self.recommend(&request);
        let report = self.optimize_graph(&workflow, goal)?;

        tracing::info!(
            workflow_id = %workflow.workflow_id,
            nodes = workflow.nodes.len(),
            recommendations = report.recommendations.len(),
            "Design complete"
        );

        Ok(DesignResult {
            analysis,
            workflow,
            report,
        })
    }
}
