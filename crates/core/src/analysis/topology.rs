//! # Workflow Type Estimation
//!
//! Picks a topology name from keyword signals in the prompt. Loop and
//! conditional signals outrank parallelism; parallelism also needs at least
//! two tools.

use super::complexity::ComplexityTier;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const LOOP_KEYWORDS: &[&str] = &["반복", "loop", "계속", "매번", "각각", "all"];
const CONDITIONAL_KEYWORDS: &[&str] = &["만약", "if", "그러면", "조건", "경우에", "depending"];
const PARALLEL_KEYWORDS: &[&str] = &["동시에", "simultaneously", "동시", "parallel", "and"];

/// Named graph-shape rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Sequential,
    Parallel,
    Conditional,
    Loop,
}

impl Topology {
    pub const ALL: [Topology; 4] = [
        Topology::Sequential,
        Topology::Parallel,
        Topology::Conditional,
        Topology::Loop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topology::Sequential => "sequential",
            Topology::Parallel => "parallel",
            Topology::Conditional => "conditional",
            Topology::Loop => "loop",
        }
    }

    /// Exact, case-sensitive name lookup
    pub fn from_name(name: &str) -> Option<Self> {
        Topology::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topology::from_name(s).ok_or_else(|| format!("unknown topology: {}", s))
    }
}

fn mentions(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Estimate the workflow topology for a prompt
///
/// The complexity tier is accepted for interface stability but does not
/// influence the result.
pub fn estimate_topology(tool_count: usize, _complexity: ComplexityTier, text: &str) -> Topology {
    let text = text.to_lowercase();

    if mentions(&text, LOOP_KEYWORDS) {
        Topology::Loop
    } else if mentions(&text, CONDITIONAL_KEYWORDS) {
        Topology::Conditional
    } else if mentions(&text, PARALLEL_KEYWORDS) && tool_count > 1 {
        Topology::Parallel
    } else {
        Topology::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOW: ComplexityTier = ComplexityTier::Low;

    #[test]
    fn test_loop_outranks_everything() {
        assert_eq!(
            estimate_topology(3, LOW, "if needed, loop over items and retry"),
            Topology::Loop
        );
    }

    #[test]
    fn test_conditional_outranks_parallel() {
        assert_eq!(
            estimate_topology(3, LOW, "depending on the score run A and B"),
            Topology::Conditional
        );
    }

    #[test]
    fn test_parallel_needs_two_tools() {
        assert_eq!(estimate_topology(2, LOW, "fetch news and weather"), Topology::Parallel);
        assert_eq!(estimate_topology(1, LOW, "fetch news and weather"), Topology::Sequential);
    }

    #[test]
    fn test_substring_screening_is_not_token_bounded() {
        // "small" contains "all"
        assert_eq!(estimate_topology(1, LOW, "a small job"), Topology::Loop);
        // "band" contains "and"
        assert_eq!(estimate_topology(2, LOW, "the band plays"), Topology::Parallel);
    }

    #[test]
    fn test_korean_signals() {
        assert_eq!(estimate_topology(1, LOW, "매번 확인"), Topology::Loop);
        assert_eq!(estimate_topology(1, LOW, "만약 비가 오면"), Topology::Conditional);
        assert_eq!(estimate_topology(2, LOW, "동시에 수집"), Topology::Parallel);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Topology::from_name("loop"), Some(Topology::Loop));
        assert_eq!(Topology::from_name("Loop"), None);
        assert_eq!(Topology::from_name("hierarchical"), None);
    }
}
