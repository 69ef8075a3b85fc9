//! # Prompt Analysis
//!
//! The first pipeline stage.
//!
//! ```text
//! text → tokens → intents
//!      → substrings → capabilities → catalog tools → topology estimate
//!      → token count → complexity tier
//! ```

pub mod capability;
pub mod classifier;
pub mod complexity;
pub mod intent;
pub mod topology;

pub use capability::{detect_capabilities, Capability, CapabilitySet};
pub use classifier::{analyze_prompt, classify, Classification, PromptAnalysis};
pub use complexity::ComplexityTier;
pub use intent::{detect_intents, tokenize, Intent};
pub use topology::{estimate_topology, Topology};
