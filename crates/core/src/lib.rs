//! # Blueprint Core
//!
//! Turns a free-text request into a recommended agent workflow graph, and
//! annotates graphs with goal-specific improvement advice.
//!
//! ## Architecture
//!
//! - `analysis/` - Intent, capability, complexity and topology estimation
//! - `catalog/` - Read-only tool and pattern tables shared by `Arc`
//! - `graph/` - Node/connection model, topology rules, graph assembly
//! - `optimizer/` - Static advisory reports (speed, cost, reliability)
//! - `builder` - The `AgentBuilder` facade used by the server and CLI
//!
//! ## Usage
//!
//! ```rust
//! use blueprint_core::{AgentBuilder, RecommendRequest};
//!
//! let builder = AgentBuilder::default();
//! let analysis = builder.analyze("search for information and analyze the data");
//!
//! let request = RecommendRequest::new(analysis.intent_analysis.primary_intent.as_str())
//!     .with_capabilities(analysis.required_capabilities.iter().map(|c| c.as_str()))
//!     .with_topology(analysis.estimated_workflow_type.as_str());
//! let graph = builder.recommend(&request);
//!
//! let report = builder.optimize_graph(&graph, "speed").unwrap();
//! assert_eq!(report.optimization_goal, "speed");
//! ```

pub mod analysis;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod graph;
pub mod optimizer;

pub use analysis::{Capability, CapabilitySet, ComplexityTier, Intent, PromptAnalysis, Topology};
pub use builder::{AgentBuilder, CapabilityInfo, DesignResult, ServerInfo};
pub use catalog::{CatalogStore, NodePattern, ToolDescriptor, WorkflowPattern};
pub use config::BuilderConfig;
pub use error::{BuilderError, Result};
pub use graph::{RecommendRequest, WorkflowGraph};
pub use optimizer::{AdvisoryReport, GraphInput, OptimizationGoal};
