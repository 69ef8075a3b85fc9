//! # Catalog
//!
//! Static lookup data: the tools a process node can be bound to and the
//! pattern metadata attached to generated graphs.

pub mod patterns;
pub mod store;
pub mod tools;

pub use patterns::{NodePattern, WorkflowPattern};
pub use store::CatalogStore;
pub use tools::ToolDescriptor;
