//! # Catalog Store
//!
//! The process-wide, read-only view over tools and patterns. Built once at
//! startup (from the built-in tables or a JSON file) and shared by `Arc`.

use super::patterns::{
    builtin_node_patterns, builtin_workflow_patterns, NodePattern, WorkflowPattern,
};
use super::tools::{builtin_tools, ToolDescriptor};
use crate::error::{BuilderError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// On-disk catalog layout. Missing sections fall back to the built-ins.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    tools: Option<Vec<ToolDescriptor>>,
    patterns: Option<Vec<NodePattern>>,
    workflow_patterns: Option<Vec<WorkflowPattern>>,
}

/// Immutable tool and pattern catalog
#[derive(Debug, Clone)]
pub struct CatalogStore {
    tools: Vec<ToolDescriptor>,
    tool_index: HashMap<String, usize>,
    /// category -> tool ids, categories in first-seen order
    categories: Vec<(String, Vec<String>)>,
    node_patterns: Vec<NodePattern>,
    workflow_patterns: Vec<WorkflowPattern>,
}

impl CatalogStore {
    /// Catalog backed by the built-in tables
    pub fn builtin() -> Self {
        // Built-in tables are covered by tests; they cannot fail validation.
        Self::index(
            builtin_tools(),
            builtin_node_patterns(),
            builtin_workflow_patterns(),
        )
    }

    /// Build a catalog from explicit tables, rejecting empty or duplicate ids
    pub fn from_parts(
        tools: Vec<ToolDescriptor>,
        node_patterns: Vec<NodePattern>,
        workflow_patterns: Vec<WorkflowPattern>,
    ) -> Result<Self> {
        check_ids("tool", tools.iter().map(|t| t.id.as_str()))?;
        check_ids("pattern", node_patterns.iter().map(|p| p.id.as_str()))?;
        check_ids(
            "workflow pattern",
            workflow_patterns.iter().map(|p| p.id.as_str()),
        )?;

        let known: HashSet<&str> = tools.iter().map(|t| t.id.as_str()).collect();
        for tool in &tools {
            for dep in &tool.dependencies {
                if !known.contains(dep.as_str()) {
                    tracing::warn!(tool = %tool.id, dependency = %dep, "Tool declares unknown dependency");
                }
            }
        }

        Ok(Self::index(tools, node_patterns, workflow_patterns))
    }

    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| BuilderError::Catalog(e.to_string()))?;
        Self::from_parts(
            file.tools.unwrap_or_else(builtin_tools),
            file.patterns.unwrap_or_else(builtin_node_patterns),
            file.workflow_patterns
                .unwrap_or_else(builtin_workflow_patterns),
        )
    }

    /// Load a catalog from a JSON file
    pub async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog: {:?}", path))?;
        let store = Self::from_json(&content)
            .with_context(|| format!("Invalid catalog: {:?}", path))?;

        tracing::info!(
            path = %path.display(),
            tools = store.tools.len(),
            patterns = store.node_patterns.len(),
            "Catalog loaded"
        );
        Ok(store)
    }

    fn index(
        tools: Vec<ToolDescriptor>,
        node_patterns: Vec<NodePattern>,
        workflow_patterns: Vec<WorkflowPattern>,
    ) -> Self {
        let mut tool_index = HashMap::with_capacity(tools.len());
        let mut categories: Vec<(String, Vec<String>)> = Vec::new();

        for (pos, tool) in tools.iter().enumerate() {
            tool_index.insert(tool.id.clone(), pos);
            match categories.iter_mut().find(|(c, _)| *c == tool.category) {
                Some((_, ids)) => ids.push(tool.id.clone()),
                None => categories.push((tool.category.clone(), vec![tool.id.clone()])),
            }
        }

        Self {
            tools,
            tool_index,
            categories,
            node_patterns,
            workflow_patterns,
        }
    }

    /// All tools in catalog order, ids included
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Look up a tool by id
    pub fn tool(&self, id: &str) -> Option<&ToolDescriptor> {
        self.tool_index.get(id).map(|&pos| &self.tools[pos])
    }

    /// Ordered tool ids for a category (empty for unknown categories)
    pub fn category_tools(&self, category: &str) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Category names in first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|(c, _)| c.as_str())
    }

    pub fn node_patterns(&self) -> &[NodePattern] {
        &self.node_patterns
    }

    pub fn node_pattern(&self, id: &str) -> Option<&NodePattern> {
        self.node_patterns.iter().find(|p| p.id == id)
    }

    pub fn workflow_patterns(&self) -> &[WorkflowPattern] {
        &self.workflow_patterns
    }

    /// Select tools for a set of capability categories
    ///
    /// Categories are visited in the order given (duplicates ignored), each
    /// contributing its tools in catalog order; the concatenation is then
    /// stable-sorted by ascending priority. Unknown categories contribute
    /// nothing.
    pub fn select_tools<I, S>(&self, capabilities: I) -> Vec<ToolDescriptor>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();

        for capability in capabilities {
            let capability = capability.as_ref();
            if !seen.insert(capability.to_string()) {
                continue;
            }
            let ids = self.category_tools(capability);
            if ids.is_empty() {
                tracing::debug!(capability, "No tools registered for capability");
            }
            for id in ids {
                if let Some(tool) = self.tool(id) {
                    selected.push(tool.with_id(id.as_str()));
                }
            }
        }

        // sort_by_key is stable: equal priorities keep selection order
        selected.sort_by_key(|t| t.priority);
        selected
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(BuilderError::Catalog(format!("{} with empty id", kind)));
        }
        if !seen.insert(id) {
            return Err(BuilderError::Catalog(format!("duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tool(id: &str, category: &str, priority: u32) -> ToolDescriptor {
        ToolDescriptor {
            id: id.to_string(),
            category: category.to_string(),
            name: id.to_string(),
            description: String::new(),
            priority,
            input_schema: serde_json::json!({}),
            dependencies: vec![],
            estimated_time_ms: 1000,
        }
    }

    #[test]
    fn test_builtin_category_index() {
        let store = CatalogStore::builtin();
        assert_eq!(
            store.category_tools("information_retrieval"),
            &["web_search".to_string(), "document_retrieve".to_string()]
        );
        assert_eq!(
            store.category_tools("data_access"),
            &["database_query".to_string(), "api_call".to_string()]
        );
        assert!(store.category_tools("teleportation").is_empty());
        assert_eq!(store.categories().count(), 5);
    }

    #[test]
    fn test_select_tools_sorts_by_priority() {
        let store = CatalogStore::builtin();
        let tools = store.select_tools(["generation", "information_retrieval"]);
        let ids: Vec<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["web_search", "document_retrieve", "content_generation"]);
    }

    #[test]
    fn test_select_tools_is_priority_stable() {
        let store = CatalogStore::from_parts(
            vec![
                tool("a", "alpha", 3),
                tool("b", "alpha", 1),
                tool("c", "beta", 2),
                tool("d", "beta", 1),
            ],
            vec![],
            vec![],
        )
        .unwrap();

        let tools = store.select_tools(["alpha", "beta"]);
        let ids: Vec<_> = tools.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "c", "a"]);

        let priorities: Vec<_> = tools.iter().map(|t| t.priority).collect();
        assert!(priorities.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_select_tools_skips_unknown_and_duplicates() {
        let store = CatalogStore::builtin();
        let tools = store.select_tools(["computation", "nope", "computation"]);
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].id, "code_execution");
        assert!(store.select_tools(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_duplicate_tool_ids_rejected() {
        let err = CatalogStore::from_parts(
            vec![tool("x", "alpha", 1), tool("x", "beta", 2)],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate tool id 'x'"));
    }

    #[test]
    fn test_empty_tool_id_rejected() {
        let err = CatalogStore::from_json(
            r#"{"tools": [{"id": " ", "category": "generation", "name": "Blank"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, BuilderError::Catalog(_)));
        assert!(err.to_string().contains("tool with empty id"));
    }

    #[test]
    fn test_from_json_falls_back_to_builtin_sections() {
        let store = CatalogStore::from_json(
            r#"{"tools": [{"id": "summarize", "category": "generation", "name": "Summarize", "priority": 1}]}"#,
        )
        .unwrap();
        assert_eq!(store.tools().len(), 1);
        assert_eq!(store.category_tools("generation"), &["summarize".to_string()]);
        assert_eq!(store.node_patterns().len(), builtin_node_patterns().len());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            CatalogStore::from_json("[1, 2]"),
            Err(BuilderError::Catalog(_))
        ));
    }

    #[tokio::test]
    async fn test_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tools": [{{"id": "crawler", "category": "information_retrieval", "name": "Crawler"}}]}}"#
        )
        .unwrap();

        let store = CatalogStore::load(file.path()).await.unwrap();
        assert!(store.tool("crawler").is_some());
        assert!(store.tool("web_search").is_none());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let result = CatalogStore::load("/definitely/not/here.json").await;
        assert!(result.is_err());
    }
}
