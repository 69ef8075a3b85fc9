//! # Tool Descriptors
//!
//! The built-in tool table. Every entry belongs to exactly one capability
//! category; the category index in [`super::CatalogStore`] is derived from
//! declaration order here.

use serde::{Deserialize, Serialize};
use serde_json::json;

/// Priority assigned when a catalog entry omits one
pub const DEFAULT_PRIORITY: u32 = 999;

/// Duration assumed when a catalog entry omits one
pub const DEFAULT_ESTIMATED_TIME_MS: u64 = 1000;

/// A tool that can back a process node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolDescriptor {
    /// Catalog key; every catalog file entry carries its own, empty ids are rejected
    #[serde(default)]
    pub id: String,
    /// Capability category ("information_retrieval", "generation", ...)
    pub category: String,
    /// Display name
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Lower runs first
    #[serde(default = "default_priority")]
    pub priority: u32,
    /// JSON schema of accepted parameters
    #[serde(rename = "inputSchema", default = "empty_schema")]
    pub input_schema: serde_json::Value,
    /// Tool ids this tool expects to run after
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default = "default_estimated_time")]
    pub estimated_time_ms: u64,
}

fn default_priority() -> u32 {
    DEFAULT_PRIORITY
}

fn default_estimated_time() -> u64 {
    DEFAULT_ESTIMATED_TIME_MS
}

fn empty_schema() -> serde_json::Value {
    json!({})
}

impl ToolDescriptor {
    /// Copy of this descriptor carrying `id`
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.id = id.into();
        copy
    }
}

/// The built-in tool table, in declaration order
pub fn builtin_tools() -> Vec<ToolDescriptor> {
    vec![
        // Information retrieval
        ToolDescriptor {
            id: "web_search".into(),
            category: "information_retrieval".into(),
            name: "Web Search".into(),
            description: "Searches the web for real-time information".into(),
            priority: 1,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "Search query"},
                    "max_results": {
                        "type": "integer",
                        "description": "Maximum number of results",
                        "default": 10
                    }
                },
                "required": ["query"]
            }),
            dependencies: vec![],
            estimated_time_ms: 2000,
        },
        ToolDescriptor {
            id: "document_retrieve".into(),
            category: "information_retrieval".into(),
            name: "Document Retrieval".into(),
            description: "Looks up information in the stored document database".into(),
            priority: 2,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "keywords": {"type": "string", "description": "Search keywords"},
                    "doc_type": {
                        "type": "string",
                        "description": "Document type (pdf, txt, docx)",
                        "enum": ["pdf", "txt", "docx", "all"]
                    }
                },
                "required": ["keywords"]
            }),
            dependencies: vec![],
            estimated_time_ms: 1000,
        },
        // Data processing
        ToolDescriptor {
            id: "data_analysis".into(),
            category: "data_processing".into(),
            name: "Data Analysis".into(),
            description: "Runs data analysis and statistical calculations".into(),
            priority: 2,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "data": {"type": "array", "description": "Data to analyze"},
                    "analysis_type": {
                        "type": "string",
                        "enum": ["statistical", "trend", "comparison"],
                        "description": "Kind of analysis"
                    }
                },
                "required": ["data", "analysis_type"]
            }),
            dependencies: vec![],
            estimated_time_ms: 1500,
        },
        // Computation
        ToolDescriptor {
            id: "code_execution".into(),
            category: "computation".into(),
            name: "Code Execution".into(),
            description: "Executes Python code in a sandbox".into(),
            priority: 3,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "code": {"type": "string", "description": "Python code to run"},
                    "timeout": {
                        "type": "integer",
                        "description": "Timeout in seconds",
                        "default": 30
                    }
                },
                "required": ["code"]
            }),
            dependencies: vec![],
            estimated_time_ms: 3000,
        },
        // Data access
        ToolDescriptor {
            id: "database_query".into(),
            category: "data_access".into(),
            name: "Database Query".into(),
            description: "Reads data from a database".into(),
            priority: 2,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {"type": "string", "description": "SQL query"},
                    "database": {"type": "string", "description": "Database name"}
                },
                "required": ["query", "database"]
            }),
            dependencies: vec![],
            estimated_time_ms: 2000,
        },
        ToolDescriptor {
            id: "api_call".into(),
            category: "data_access".into(),
            name: "API Call".into(),
            description: "Calls an external REST API".into(),
            priority: 2,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {"type": "string", "description": "API URL"},
                    "method": {
                        "type": "string",
                        "enum": ["GET", "POST", "PUT", "DELETE"],
                        "description": "HTTP method",
                        "default": "GET"
                    },
                    "payload": {"type": "object", "description": "Request body"}
                },
                "required": ["url"]
            }),
            dependencies: vec![],
            estimated_time_ms: 2000,
        },
        // Generation
        ToolDescriptor {
            id: "content_generation".into(),
            category: "generation".into(),
            name: "Content Generation".into(),
            description: "Generates text content".into(),
            priority: 3,
            input_schema: json!({
                "type": "object",
                "properties": {
                    "prompt": {"type": "string", "description": "Generation prompt"},
                    "style": {"type": "string", "description": "Writing style"},
                    "length": {
                        "type": "string",
                        "enum": ["short", "medium", "long"],
                        "description": "Length of the generated text"
                    }
                },
                "required": ["prompt"]
            }),
            dependencies: vec!["data_analysis".into()],
            estimated_time_ms: 3000,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids_are_unique() {
        let tools = builtin_tools();
        let mut ids: Vec<_> = tools.iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tools.len());
    }

    #[test]
    fn test_descriptor_defaults_from_json() {
        let tool: ToolDescriptor = serde_json::from_value(json!({
            "category": "computation",
            "name": "Calculator"
        }))
        .unwrap();
        assert_eq!(tool.priority, DEFAULT_PRIORITY);
        assert_eq!(tool.estimated_time_ms, DEFAULT_ESTIMATED_TIME_MS);
        assert!(tool.id.is_empty());
    }

    #[test]
    fn test_schema_serializes_as_input_schema() {
        let json = serde_json::to_value(&builtin_tools()[0]).unwrap();
        assert!(json.get("inputSchema").is_some());
        assert_eq!(json["id"], "web_search");
    }
}
