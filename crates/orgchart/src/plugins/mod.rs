//! Plugin implementations for the org chart pipeline
//!
//! The outline parser, one renderer per output format, and the orchestrator
//! that wires them together. Each plugin implements the core traits.

pub mod mermaid;
pub mod orchestrator;
pub mod outline;
pub mod svg;
pub mod tree;
pub mod visio;

pub use mermaid::*;
pub use orchestrator::*;
pub use outline::*;
pub use svg::*;
pub use tree::*;
pub use visio::*;
