//! # Capability Detection
//!
//! Substring screening of the whole prompt. Unlike intent detection this is
//! not token-bounded: "research" contains "search".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Coarse functional tag grouping catalog tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    InformationRetrieval,
    DataProcessing,
    Computation,
    DataAccess,
    Generation,
}

/// Detected capabilities; iterates in declaration order
pub type CapabilitySet = BTreeSet<Capability>;

impl Capability {
    pub const ALL: [Capability; 5] = [
        Capability::InformationRetrieval,
        Capability::DataProcessing,
        Capability::Computation,
        Capability::DataAccess,
        Capability::Generation,
    ];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Capability::InformationRetrieval => {
                &["검색", "search", "찾다", "find", "정보", "information"]
            }
            Capability::DataProcessing => &["분석", "analyze", "통계", "statistics", "계산", "calculate"],
            Capability::Computation => &["코드", "code", "파이썬", "python", "실행", "execute"],
            Capability::DataAccess => &["데이터베이스", "database", "저장", "저장소", "query"],
            Capability::Generation => &["생성", "generate", "작성", "write", "만들다", "create"],
        }
    }

    /// Category key used by the catalog
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::InformationRetrieval => "information_retrieval",
            Capability::DataProcessing => "data_processing",
            Capability::Computation => "computation",
            Capability::DataAccess => "data_access",
            Capability::Generation => "generation",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown capability: {}", s))
    }
}

/// Capabilities whose keyword group appears anywhere in the text
pub fn detect_capabilities(text: &str) -> CapabilitySet {
    let lowered = text.to_lowercase();
    Capability::ALL
        .into_iter()
        .filter(|c| c.keywords().iter().any(|k| lowered.contains(k)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matching() {
        let caps = detect_capabilities("Research the QUERY planner");
        assert!(caps.contains(&Capability::InformationRetrieval));
        assert!(caps.contains(&Capability::DataAccess));
        assert_eq!(caps.len(), 2);
    }

    #[test]
    fn test_korean_keywords() {
        let caps = detect_capabilities("파이썬 코드로 통계를 계산해서 보고서를 작성");
        assert_eq!(
            caps.into_iter().collect::<Vec<_>>(),
            vec![
                Capability::DataProcessing,
                Capability::Computation,
                Capability::Generation
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(detect_capabilities("").is_empty());
        assert!(detect_capabilities("hello there").is_empty());
    }

    #[test]
    fn test_round_trip_names() {
        for cap in Capability::ALL {
            assert_eq!(cap.as_str().parse::<Capability>().unwrap(), cap);
        }
        assert!("teleport".parse::<Capability>().is_err());
    }
}
