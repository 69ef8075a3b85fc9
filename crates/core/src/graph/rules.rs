//! # Topology Rules
//!
//! One variant per graph shape. Every rule takes the same ordered node list
//! (start, process nodes in selection order, end) and produces connections
//! plus an execution order. Rules never fail; below their minimum node count
//! they simply emit fewer edges.
//!
//! The minimal scaffolds (`Conditional`, `Loop`) are the defaults.
//! `BranchMerge` and `BoundedLoop` are the richer shapes, enabled through
//! [`BuilderConfig::rich_topologies`].

use super::model::{Connection, ConnectionKind, Node};
use crate::analysis::Topology;
use crate::config::BuilderConfig;

/// Label on the single decision edge of the minimal conditional scaffold
pub const IF_CONDITION: &str = "if_condition";

/// Label on the back edge of the minimal loop scaffold
pub const WHILE_CONDITION: &str = "while_condition";

/// Output of a topology rule
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wiring {
    pub connections: Vec<Connection>,
    pub execution_order: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyRule {
    Sequential,
    Parallel,
    /// Single conditional edge from start to the first process node
    Conditional,
    /// Entry edge plus one back edge, no forward chain
    Loop,
    /// Decision node with true/false arms that merge at the end node
    BranchMerge,
    /// Forward chain with an iteration-capped back edge
    BoundedLoop { max_iterations: u32 },
}

impl TopologyRule {
    /// Resolve a topology name; unknown names use the sequential rule
    pub fn for_name(name: &str, config: &BuilderConfig) -> Self {
        match Topology::from_name(name) {
            Some(topology) => Self::for_topology(topology, config),
            None => {
                tracing::warn!(topology = name, "Unknown topology, using sequential wiring");
                TopologyRule::Sequential
            }
        }
    }

    pub fn for_topology(topology: Topology, config: &BuilderConfig) -> Self {
        match (topology, config.rich_topologies) {
            (Topology::Sequential, _) => TopologyRule::Sequential,
            (Topology::Parallel, _) => TopologyRule::Parallel,
            (Topology::Conditional, false) => TopologyRule::Conditional,
            (Topology::Conditional, true) => TopologyRule::BranchMerge,
            (Topology::Loop, false) => TopologyRule::Loop,
            (Topology::Loop, true) => TopologyRule::BoundedLoop {
                max_iterations: config.loop_max_iterations,
            },
        }
    }

    pub fn wire(&self, nodes: &[Node]) -> Wiring {
        match self {
            TopologyRule::Sequential => Wiring {
                connections: chain(nodes),
                execution_order: ids(nodes),
            },
            TopologyRule::Parallel => wire_parallel(nodes),
            TopologyRule::Conditional => Wiring {
                connections: conditional_scaffold(nodes),
                execution_order: ids(nodes),
            },
            TopologyRule::Loop => Wiring {
                connections: loop_scaffold(nodes),
                execution_order: ids(nodes),
            },
            TopologyRule::BranchMerge => Wiring {
                connections: branch_merge(nodes),
                execution_order: ids(nodes),
            },
            TopologyRule::BoundedLoop { max_iterations } => Wiring {
                connections: bounded_loop(nodes, *max_iterations),
                execution_order: ids(nodes),
            },
        }
    }
}

fn ids(nodes: &[Node]) -> Vec<String> {
    nodes.iter().map(|n| n.id.clone()).collect()
}

fn chain(nodes: &[Node]) -> Vec<Connection> {
    nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            Connection::new(
                format!("conn_{}", i),
                &pair[0].id,
                &pair[1].id,
                ConnectionKind::Direct,
            )
        })
        .collect()
}

fn endpoints(nodes: &[Node]) -> Option<(&Node, &[Node], &Node)> {
    match nodes {
        [start, middle @ .., end] => Some((start, middle, end)),
        _ => None,
    }
}

fn wire_parallel(nodes: &[Node]) -> Wiring {
    let Some((start, _, end)) = endpoints(nodes) else {
        return Wiring {
            connections: Vec::new(),
            execution_order: ids(nodes),
        };
    };
    let process: Vec<&Node> = nodes.iter().filter(|n| n.is_process()).collect();

    let fan_out = process.iter().map(|p| {
        Connection::new(
            format!("conn_input_to_{}", p.id),
            &start.id,
            &p.id,
            ConnectionKind::Parallel,
        )
    });
    let fan_in = process.iter().map(|p| {
        Connection::new(
            format!("conn_{}_to_output", p.id),
            &p.id,
            &end.id,
            ConnectionKind::Parallel,
        )
    });

    let mut execution_order = vec![start.id.clone()];
    execution_order.extend(process.iter().map(|p| p.id.clone()));
    execution_order.push(end.id.clone());

    Wiring {
        connections: fan_out.chain(fan_in).collect(),
        execution_order,
    }
}

fn conditional_scaffold(nodes: &[Node]) -> Vec<Connection> {
    if nodes.len() < 3 {
        return Vec::new();
    }
    vec![Connection::new(
        "conn_input_decision",
        &nodes[0].id,
        &nodes[1].id,
        ConnectionKind::Conditional,
    )
    .with_condition(IF_CONDITION)]
}

fn loop_scaffold(nodes: &[Node]) -> Vec<Connection> {
    let mut connections = Vec::new();
    if nodes.len() >= 2 {
        connections.push(Connection::new(
            "conn_loop_start",
            &nodes[0].id,
            &nodes[1].id,
            ConnectionKind::Direct,
        ));
    }
    if nodes.len() > 2 {
        connections.push(
            Connection::new(
                "conn_loop_back",
                &nodes[nodes.len() - 2].id,
                &nodes[1].id,
                ConnectionKind::LoopBack,
            )
            .with_condition(WHILE_CONDITION),
        );
    }
    connections
}

fn arm_edges(prefix: &str, arm: &[Node], end: &Node) -> Vec<Connection> {
    let mut edges: Vec<Connection> = arm
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            Connection::new(
                format!("conn_{}_{}", prefix, i),
                &pair[0].id,
                &pair[1].id,
                ConnectionKind::Direct,
            )
        })
        .collect();
    if let Some(last) = arm.last() {
        edges.push(Connection::new(
            format!("conn_{}_merge", prefix),
            &last.id,
            &end.id,
            ConnectionKind::Direct,
        ));
    }
    edges
}

fn branch_merge(nodes: &[Node]) -> Vec<Connection> {
    let Some((start, process, end)) = endpoints(nodes) else {
        return Vec::new();
    };
    let Some((decision, arms)) = process.split_first() else {
        return vec![Connection::new(
            "conn_input_output",
            &start.id,
            &end.id,
            ConnectionKind::Direct,
        )];
    };

    let mut connections = vec![Connection::new(
        "conn_input_decision",
        &start.id,
        &decision.id,
        ConnectionKind::Direct,
    )];

    if arms.is_empty() {
        connections.push(Connection::new(
            "conn_decision_output",
            &decision.id,
            &end.id,
            ConnectionKind::Direct,
        ));
        return connections;
    }

    // true arm takes the larger half
    let (true_arm, false_arm) = arms.split_at((arms.len() + 1) / 2);

    connections.push(
        Connection::new(
            "conn_decision_true",
            &decision.id,
            &true_arm[0].id,
            ConnectionKind::Conditional,
        )
        .with_condition("if_true"),
    );
    connections.extend(arm_edges("true", true_arm, end));

    let false_target = false_arm.first().unwrap_or(end);
    connections.push(
        Connection::new(
            "conn_decision_false",
            &decision.id,
            &false_target.id,
            ConnectionKind::Conditional,
        )
        .with_condition("if_false"),
    );
    connections.extend(arm_edges("false", false_arm, end));

    connections
}

fn bounded_loop(nodes: &[Node], max_iterations: u32) -> Vec<Connection> {
    let mut connections = chain(nodes);
    if nodes.len() > 2 {
        connections.push(
            Connection::new(
                "conn_loop_back",
                &nodes[nodes.len() - 2].id,
                &nodes[1].id,
                ConnectionKind::LoopBack,
            )
            .with_condition(format!(
                "{} && iteration < {}",
                WHILE_CONDITION, max_iterations
            )),
        );
    }
    connections
}
