//! # Builder Configuration
//!
//! Operational defaults stamped onto generated process nodes, topology rule
//! selection, and the optional external catalog location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Retry budget given to every process node
pub const DEFAULT_NODE_RETRY_COUNT: u32 = 3;

/// Per-node timeout in milliseconds
pub const DEFAULT_NODE_TIMEOUT_MS: u64 = 30_000;

/// Iteration cap used by the bounded loop rule
pub const DEFAULT_LOOP_MAX_ITERATIONS: u32 = 10;

/// Configuration for the workflow builder
///
/// ## Example
/// ```rust
/// use blueprint_core::config::BuilderConfig;
///
/// let config = BuilderConfig::default().with_rich_topologies(true);
/// assert!(config.rich_topologies);
/// assert_eq!(config.node_retry_count, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Retry budget for process nodes (default: 3)
    pub node_retry_count: u32,
    /// Timeout for process nodes in ms (default: 30000)
    pub node_timeout_ms: u64,
    /// Use branch/merge and bounded-loop rules instead of the minimal scaffolds
    pub rich_topologies: bool,
    /// Iteration cap written into bounded loop conditions
    pub loop_max_iterations: u32,
    /// JSON catalog to load instead of the built-in tables
    pub catalog_path: Option<PathBuf>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            node_retry_count: DEFAULT_NODE_RETRY_COUNT,
            node_timeout_ms: DEFAULT_NODE_TIMEOUT_MS,
            rich_topologies: false,
            loop_max_iterations: DEFAULT_LOOP_MAX_ITERATIONS,
            catalog_path: None,
        }
    }
}

impl BuilderConfig {
    /// Load config from environment variables with fallback to defaults
    ///
    /// Environment variables:
    /// - `BLUEPRINT_NODE_RETRY_COUNT`
    /// - `BLUEPRINT_NODE_TIMEOUT_MS`
    /// - `BLUEPRINT_RICH_TOPOLOGIES` (`true`/`1` to enable)
    /// - `BLUEPRINT_LOOP_MAX_ITERATIONS`
    /// - `BLUEPRINT_CATALOG_PATH`
    ///
    /// Unparseable values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(retries) = env_parse("BLUEPRINT_NODE_RETRY_COUNT") {
            config.node_retry_count = retries;
        }
        if let Some(timeout) = env_parse("BLUEPRINT_NODE_TIMEOUT_MS") {
            config.node_timeout_ms = timeout;
        }
        if let Ok(flag) = std::env::var("BLUEPRINT_RICH_TOPOLOGIES") {
            config.rich_topologies = matches!(flag.to_lowercase().as_str(), "true" | "1" | "yes");
        }
        if let Some(max) = env_parse("BLUEPRINT_LOOP_MAX_ITERATIONS") {
            config.loop_max_iterations = max;
        }
        if let Ok(path) = std::env::var("BLUEPRINT_CATALOG_PATH") {
            if !path.trim().is_empty() {
                config.catalog_path = Some(PathBuf::from(path));
            }
        }

        config
    }

    pub fn with_rich_topologies(mut self, enabled: bool) -> Self {
        self.rich_topologies = enabled;
        self
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.node_retry_count, 3);
        assert_eq!(config.node_timeout_ms, 30_000);
        assert!(!config.rich_topologies);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = BuilderConfig::default()
            .with_rich_topologies(true)
            .with_catalog_path("/tmp/catalog.json");
        assert!(config.rich_topologies);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_string(&BuilderConfig::default()).unwrap();
        assert!(json.contains("node_retry_count"));
        assert!(json.contains("30000"));
    }
}
