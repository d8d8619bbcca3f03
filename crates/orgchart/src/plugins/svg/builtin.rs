//! In-process SVG backend
//!
//! Lays the graph out with [`TreeLayoutAlgorithm`] and writes the SVG
//! document by hand: rounded light-blue boxes with centered labels, joined by
//! elbow connectors.

use std::fmt::Write;

use anyhow::Result;
use tracing::{debug, span, Level};

use super::layout::{PositionedEdge, PositionedNode, TreeLayoutAlgorithm};
use super::{GraphBackend, OrgGraph};
use crate::core::{escape_xml, LayoutAlgorithm};

const NODE_FILL: &str = "#add8e6";
const NODE_STROKE: &str = "#2d3748";
const EDGE_STROKE: &str = "#4a5568";
const TEXT_FILL: &str = "#1a202c";
const FONT_SIZE: f64 = 13.0;
const LINE_HEIGHT: f64 = 16.0;

/// Builtin layout + SVG writer
pub struct BuiltinBackend {
    layout: TreeLayoutAlgorithm,
}

impl BuiltinBackend {
    pub fn new() -> Self {
        Self::with_layout(TreeLayoutAlgorithm::new())
    }

    pub fn with_layout(layout: TreeLayoutAlgorithm) -> Self {
        Self { layout }
    }

    fn write_edge(svg: &mut String, edge: &PositionedEdge) -> std::fmt::Result {
        let mut points = edge.waypoints.iter();
        let Some(&(x, y)) = points.next() else {
            return Ok(());
        };
        let mut d = format!("M {:.1} {:.1}", x, y);
        for &(x, y) in points {
            write!(d, " L {:.1} {:.1}", x, y)?;
        }
        writeln!(
            svg,
            "    <path data-from=\"{}\" data-to=\"{}\" d=\"{}\"/>",
            escape_xml(&edge.from_id),
            escape_xml(&edge.to_id),
            d
        )
    }

    fn write_node(svg: &mut String, node: &PositionedNode, label: &str) -> std::fmt::Result {
        writeln!(svg, "    <g class=\"node\" id=\"{}\">", escape_xml(&node.id))?;
        writeln!(svg, "      <title>{}</title>", escape_xml(label))?;
        writeln!(
            svg,
            "      <rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" rx=\"6\" ry=\"6\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1.2\"/>",
            node.x, node.y, node.width, node.height, NODE_FILL, NODE_STROKE
        )?;

        // first baseline sits so the block of lines is vertically centered
        let block = node.lines.len() as f64 * LINE_HEIGHT;
        let top = node.y + (node.height - block) / 2.0;
        writeln!(
            svg,
            "      <text text-anchor=\"middle\" fill=\"{}\">",
            TEXT_FILL
        )?;
        for (i, line) in node.lines.iter().enumerate() {
            let baseline = top + (i as f64 + 0.75) * LINE_HEIGHT;
            writeln!(
                svg,
                "        <tspan x=\"{:.1}\" y=\"{:.1}\">{}</tspan>",
                node.center_x(),
                baseline,
                escape_xml(line)
            )?;
        }
        writeln!(svg, "      </text>")?;
        writeln!(svg, "    </g>")
    }
}

impl Default for BuiltinBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBackend for BuiltinBackend {
    fn render(&self, graph: &OrgGraph) -> Result<String> {
        let render_span = span!(Level::INFO, "render_svg_builtin", node_count = graph.node_count());
        let _enter = render_span.enter();

        let layout = self.layout.layout(graph)?;

        let mut svg = String::new();
        writeln!(svg, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\" font-family=\"Helvetica, Arial, sans-serif\" font-size=\"{fs}\">",
            w = layout.width.ceil(),
            h = layout.height.ceil(),
            fs = FONT_SIZE
        )?;
        writeln!(svg, "  <title>Organization Chart</title>")?;

        writeln!(
            svg,
            "  <g class=\"edges\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\">",
            EDGE_STROKE
        )?;
        for edge in &layout.edges {
            Self::write_edge(&mut svg, edge)?;
        }
        writeln!(svg, "  </g>")?;

        writeln!(svg, "  <g class=\"nodes\">")?;
        for (node, source) in layout.nodes.iter().zip(graph.nodes()) {
            Self::write_node(&mut svg, node, &source.label)?;
        }
        writeln!(svg, "  </g>")?;
        write!(svg, "</svg>")?;

        debug!(bytes = svg.len(), "Rendered SVG document");
        Ok(svg)
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}
