//! # Complexity Tier
//!
//! A pure function of whitespace token count.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Token count above which a prompt is high complexity
pub const HIGH_COMPLEXITY_TOKENS: usize = 50;

/// Token count above which a prompt is medium complexity
pub const MEDIUM_COMPLEXITY_TOKENS: usize = 25;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    Low,
    #[default]
    Medium,
    High,
}

impl ComplexityTier {
    pub fn from_token_count(tokens: usize) -> Self {
        if tokens > HIGH_COMPLEXITY_TOKENS {
            ComplexityTier::High
        } else if tokens > MEDIUM_COMPLEXITY_TOKENS {
            ComplexityTier::Medium
        } else {
            ComplexityTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Medium => "medium",
            ComplexityTier::High => "high",
        }
    }
}

impl std::fmt::Display for ComplexityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(ComplexityTier::Low),
            "medium" => Ok(ComplexityTier::Medium),
            "high" => Ok(ComplexityTier::High),
            other => Err(format!("unknown complexity tier: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ComplexityTier::from_token_count(0), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_token_count(25), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_token_count(26), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_token_count(50), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_token_count(51), ComplexityTier::High);
    }

    #[test]
    fn test_parse_and_default() {
        assert_eq!("HIGH".parse::<ComplexityTier>().unwrap(), ComplexityTier::High);
        assert!("extreme".parse::<ComplexityTier>().is_err());
        assert_eq!(ComplexityTier::default(), ComplexityTier::Medium);
    }
}
