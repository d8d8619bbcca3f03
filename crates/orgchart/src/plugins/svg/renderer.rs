//! SVG renderer
//!
//! Builds the chart graph from the tree and delegates everything visual to the
//! configured backend.

use anyhow::Result;
use tracing::{debug, span, Level};

use super::{BuiltinBackend, GraphBackend, GraphvizBackend, OrgGraph};
use crate::core::{OrgTree, OutputFormat, Renderer, SvgEngine};

/// SVG renderer
pub struct SvgRenderer {
    backend: Box<dyn GraphBackend>,
}

impl SvgRenderer {
    /// Renderer using the builtin layout
    pub fn new() -> Self {
        Self::with_backend(Box::new(BuiltinBackend::new()))
    }

    /// Renderer for a configured engine; `dot_command` is only used by Graphviz
    pub fn with_engine(engine: SvgEngine, dot_command: &str) -> Self {
        match engine {
            SvgEngine::Builtin => Self::new(),
            SvgEngine::Graphviz => {
                Self::with_backend(Box::new(GraphvizBackend::with_command(dot_command)))
            }
        }
    }

    pub fn with_backend(backend: Box<dyn GraphBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SvgRenderer {
    type Output = String;

    fn render(&self, tree: &OrgTree) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render_svg",
            node_count = tree.len(),
            backend = self.backend.name()
        );
        let _enter = render_span.enter();

        let graph = OrgGraph::from_tree(tree);
        let svg = self.backend.render(&graph)?;

        debug!(bytes = svg.len(), "Rendered SVG chart");
        Ok(svg)
    }

    fn name(&self) -> &'static str {
        "svg"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Parser;
    use crate::plugins::outline::OutlineParser;

    /// Reports the graph it was given instead of drawing it
    struct RecordingBackend;

    impl GraphBackend for RecordingBackend {
        fn render(&self, graph: &OrgGraph) -> Result<String> {
            let mut lines: Vec<String> = graph
                .nodes()
                .iter()
                .map(|n| format!("{}={}", n.id, n.label))
                .collect();
            lines.extend(graph.edges().iter().map(|e| format!("{}->{}", e.from, e.to)));
            Ok(lines.join(";"))
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[test]
    fn test_renderer_metadata() {
        let renderer = SvgRenderer::new();
        assert_eq!(renderer.name(), "svg");
        assert_eq!(renderer.format(), OutputFormat::Svg);
        assert_eq!(renderer.backend_name(), "builtin");
        assert_eq!(
            SvgRenderer::with_engine(SvgEngine::Graphviz, "dot").backend_name(),
            "graphviz"
        );
    }

    #[test]
    fn test_backend_receives_node_edge_graph() {
        let tree = OutlineParser::new().parse("A\n\tB\n\tC\n\t\tD").unwrap();
        let output = SvgRenderer::with_backend(Box::new(RecordingBackend))
            .render(&tree)
            .unwrap();
        assert_eq!(
            output,
            "node_0=A;node_1=B;node_2=C;node_3=D;node_0->node_1;node_0->node_2;node_2->node_3"
        );
    }

    #[test]
    fn test_builtin_render_is_deterministic() {
        let tree = OutlineParser::new().parse("CEO\n  CTO\n  CFO\n    Controller").unwrap();
        let renderer = SvgRenderer::new();
        assert_eq!(renderer.render(&tree).unwrap(), renderer.render(&tree).unwrap());
    }
}
