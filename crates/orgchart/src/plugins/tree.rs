//! Tab-indented outline renderer
//!
//! Writes one line per person, prefixed by one tab per level below the root.

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{OrgTree, OutputFormat, Renderer};

/// Outline renderer
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TreeRenderer {
    type Output = String;

    fn render(&self, tree: &OrgTree) -> Result<String> {
        let render_span = span!(Level::INFO, "render_tree", node_count = tree.len());
        let _enter = render_span.enter();

        let lines: Vec<String> = tree
            .walk()
            .map(|(id, depth)| format!("{}{}", "\t".repeat(depth), tree.node(id).label()))
            .collect();

        debug!(line_count = lines.len(), "Rendered outline");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "tree"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Tree
    }
}
