//! # Intent Detection
//!
//! Token-level keyword matching against a fixed label set. Vocabulary mixes
//! Korean and English; matching is exact per whitespace token.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What the user wants the agent to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Search,
    Analyze,
    Retrieve,
    Execute,
    Generate,
    Aggregate,
    Compare,
    Forecast,
    /// Nothing matched
    Unknown,
}

impl Intent {
    /// Detectable labels in reporting order
    pub const DETECTABLE: [Intent; 8] = [
        Intent::Search,
        Intent::Analyze,
        Intent::Retrieve,
        Intent::Execute,
        Intent::Generate,
        Intent::Aggregate,
        Intent::Compare,
        Intent::Forecast,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Intent::Search => &["찾다", "검색", "조사", "search", "find", "look", "locate"],
            Intent::Analyze => &["분석", "분석하다", "평가", "평가하다", "analyze", "evaluate"],
            Intent::Retrieve => &["가져오다", "검색", "찾기", "수집", "retrieve", "gather", "fetch"],
            Intent::Execute => &["실행", "수행", "처리", "실시", "execute", "run", "perform"],
            Intent::Generate => &["생성", "만들다", "작성", "생성하다", "create", "generate", "write"],
            Intent::Aggregate => &["통합", "합치다", "모으다", "통합하다", "aggregate", "combine", "merge"],
            Intent::Compare => &["비교", "비교하다", "대비", "compare", "contrast"],
            Intent::Forecast => &["예측", "예측하다", "추측", "예보", "forecast", "predict", "estimate"],
            Intent::Unknown => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Search => "search",
            Intent::Analyze => "analyze",
            Intent::Retrieve => "retrieve",
            Intent::Execute => "execute",
            Intent::Generate => "generate",
            Intent::Aggregate => "aggregate",
            Intent::Compare => "compare",
            Intent::Forecast => "forecast",
            Intent::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase whitespace tokenization shared by the classifier stages
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Labels whose keyword set intersects the tokens, in declaration order
pub fn detect_intents(tokens: &[String]) -> Vec<Intent> {
    let tokens: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    Intent::DETECTABLE
        .into_iter()
        .filter(|intent| intent.keywords().iter().any(|k| tokens.contains(k)))
        .collect()
}
