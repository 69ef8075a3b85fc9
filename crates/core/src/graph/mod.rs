//! # Workflow Graphs
//!
//! Node/connection model, per-topology wiring rules, and the assembler that
//! turns selected tools into a recommended graph.

pub mod assembler;
pub mod model;
pub mod rules;

pub use assembler::{GraphAssembler, RecommendRequest};
pub use model::{
    Connection, ConnectionKind, GraphMetadata, Node, NodeKind, NodeStatus, ToolBinding,
    WorkflowGraph, INPUT_NODE_ID, OUTPUT_NODE_ID,
};
pub use rules::{TopologyRule, Wiring};
