//! # Builder Errors
//!
//! Only two things can go wrong: a caller hands the optimizer something that
//! is not a workflow graph, or the catalog cannot be built at startup.
//! Unknown topologies and unknown goals are not errors; they resolve to
//! documented fallbacks.

use thiserror::Error;

/// Result alias used across the core crate
pub type Result<T> = std::result::Result<T, BuilderError>;

#[derive(Debug, Error)]
pub enum BuilderError {
    /// Input could not be interpreted as the expected structure
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Catalog data could not be loaded or failed validation
    #[error("catalog error: {0}")]
    Catalog(String),
}

impl BuilderError {
    /// Stable tag for transports that surface the error kind to callers
    pub fn code(&self) -> &'static str {
        match self {
            BuilderError::MalformedInput(_) => "MALFORMED_INPUT",
            BuilderError::Catalog(_) => "CATALOG_ERROR",
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        BuilderError::MalformedInput(message.into())
    }
}

impl From<serde_json::Error> for BuilderError {
    fn from(e: serde_json::Error) -> Self {
        BuilderError::MalformedInput(e.to_string())
    }
}
