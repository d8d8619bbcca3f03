//! Mermaid flowchart renderer
//!
//! Node ids are `n<index>`, where the index is the node's position in the
//! outline, so the same input always gets the same ids. Output shape:
//!
//! ```text
//! flowchart TD
//! 	n0["CEO"]
//! 	n0 --> n1["CTO"]
//! ```

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{NodeId, OrgTree, OutputFormat, Renderer};

/// Mermaid flowchart renderer
pub struct MermaidRenderer {
    fence: bool,
}

impl MermaidRenderer {
    pub fn new() -> Self {
        Self { fence: false }
    }

    /// Wrap the chart in a ```` ```mermaid ```` block for Markdown files
    pub fn with_fence(fence: bool) -> Self {
        Self { fence }
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn node_id(id: NodeId) -> String {
    format!("n{}", id.index())
}

/// Quote a label for a `["..."]` node shape
fn quoted(label: &str) -> String {
    format!("\"{}\"", label.replace('"', "#quot;"))
}

impl Renderer for MermaidRenderer {
    type Output = String;

    fn render(&self, tree: &OrgTree) -> Result<String> {
        let render_span = span!(Level::INFO, "render_mermaid", node_count = tree.len());
        let _enter = render_span.enter();

        let Some(root) = tree.root() else {
            debug!("Empty tree, nothing to render");
            return Ok(String::new());
        };

        let mut lines = Vec::with_capacity(tree.len() + 3);
        if self.fence {
            lines.push("```mermaid".to_string());
        }
        lines.push("flowchart TD".to_string());
        lines.push(format!(
            "\t{}[{}]",
            node_id(root),
            quoted(tree.node(root).label())
        ));

        let mut edge_count = 0usize;
        for (manager, report) in tree.edges() {
            lines.push(format!(
                "\t{} --> {}[{}]",
                node_id(manager),
                node_id(report),
                quoted(tree.node(report).label())
            ));
            edge_count += 1;
        }

        if self.fence {
            lines.push("```".to_string());
        }

        debug!(edge_count, "Rendered Mermaid flowchart");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "mermaid"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Mermaid
    }
}
