//! SVG chart output
//!
//! The SVG renderer only turns the tree into an [`OrgGraph`]; a
//! [`GraphBackend`] does the layout and drawing.

use anyhow::Result;

mod builtin;
mod graph;
mod graphviz;
mod layout;
mod renderer;

pub use builtin::*;
pub use graph::*;
pub use graphviz::*;
pub use layout::*;
pub use renderer::*;

/// Lays out and draws a graph as an SVG document
pub trait GraphBackend: Send + Sync {
    /// Produce a complete SVG document for `graph`
    fn render(&self, graph: &OrgGraph) -> Result<String>;

    /// Get the name of this backend
    fn name(&self) -> &'static str;
}
