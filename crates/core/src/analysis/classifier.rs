//! # Prompt Classifier
//!
//! Turns free text into an intent/capability analysis, then runs tool
//! selection and topology estimation against the catalog so callers get a
//! complete first pass in one value.

use super::capability::{detect_capabilities, CapabilitySet};
use super::complexity::ComplexityTier;
use super::intent::{detect_intents, tokenize, Intent};
use super::topology::{estimate_topology, Topology};
use crate::catalog::{CatalogStore, ToolDescriptor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog-independent classification of a prompt
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub primary_intent: Intent,
    pub sub_intents: Vec<Intent>,
    /// min(1.0, detected / 3); a bounded heuristic, not a probability
    pub confidence: f64,
    pub complexity: ComplexityTier,
    pub capabilities: CapabilitySet,
    pub word_count: usize,
    pub detected_intents: Vec<Intent>,
}

/// Classify a prompt. Total over all inputs.
pub fn classify(text: &str) -> Classification {
    let tokens = tokenize(text);
    let detected = detect_intents(&tokens);

    let primary_intent = detected.first().copied().unwrap_or(Intent::Unknown);
    let sub_intents = detected.iter().skip(1).copied().collect();
    let confidence = (detected.len() as f64 / 3.0).min(1.0);

    Classification {
        primary_intent,
        sub_intents,
        confidence,
        complexity: ComplexityTier::from_token_count(tokens.len()),
        capabilities: detect_capabilities(text),
        word_count: tokens.len(),
        detected_intents: detected,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub primary_intent: Intent,
    pub sub_intents: Vec<Intent>,
    pub confidence: f64,
    pub complexity_level: ComplexityTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub prompt_word_count: usize,
    pub detected_intent_keywords: Vec<Intent>,
    pub tool_count: usize,
    pub capability_count: usize,
}

/// Full analysis returned to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptAnalysis {
    pub timestamp: DateTime<Utc>,
    pub original_prompt: String,
    pub intent_analysis: IntentAnalysis,
    pub required_capabilities: CapabilitySet,
    pub recommended_tools: Vec<ToolDescriptor>,
    pub estimated_workflow_type: Topology,
    pub analysis_details: AnalysisDetails,
}

/// Classify, select tools, and estimate the topology for a prompt
pub fn analyze_prompt(catalog: &CatalogStore, text: &str) -> PromptAnalysis {
    let classification = classify(text);
    let tools = catalog.select_tools(classification.capabilities.iter().map(|c| c.as_str()));
    let topology = estimate_topology(tools.len(), classification.complexity, text);

    tracing::debug!(
        intent = %classification.primary_intent,
        complexity = %classification.complexity,
        capabilities = classification.capabilities.len(),
        tools = tools.len(),
        topology = %topology,
        "Prompt analyzed"
    );

    PromptAnalysis {
        timestamp: Utc::now(),
        original_prompt: text.to_string(),
        analysis_details: AnalysisDetails {
            prompt_word_count: classification.word_count,
            detected_intent_keywords: classification.detected_intents.clone(),
            tool_count: tools.len(),
            capability_count: classification.capabilities.len(),
        },
        intent_analysis: IntentAnalysis {
            primary_intent: classification.primary_intent,
            sub_intents: classification.sub_intents,
            confidence: classification.confidence,
            complexity_level: classification.complexity,
        },
        required_capabilities: classification.capabilities,
        recommended_tools: tools,
        estimated_workflow_type: topology,
    }
}
