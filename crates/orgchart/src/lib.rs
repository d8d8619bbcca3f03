//! orgchart - Turn indented staff lists into org charts
//!
//! Parses an indentation-based outline (one person per line, indented under
//! their manager) and renders it as a tab-indented tree, Visio import text,
//! a Mermaid flowchart or an SVG chart.
//!
//! # Quick Start
//!
//! ```rust
//! use orgchart::{render, OutputFormat};
//!
//! let input = "CEO\n  CTO\n    Engineer\n  CFO";
//! let tree = render(input, OutputFormat::Tree).unwrap();
//! assert_eq!(tree, "CEO\n\tCTO\n\t\tEngineer\n\tCFO");
//! ```
//!
//! # Advanced Usage
//!
//! For more control, use the individual components:
//!
//! ```rust
//! use orgchart::prelude::*;
//!
//! let tree = OutlineParser::new().parse("CEO\n  CTO\n  CFO").unwrap();
//! assert_eq!(tree.len(), 3);
//!
//! let root = tree.root().unwrap();
//! assert_eq!(tree.node(root).children().len(), 2);
//!
//! let visio = VisioRenderer::with_style(VisioStyle::Sentences)
//!     .render(&tree)
//!     .unwrap();
//! assert_eq!(visio, "CTO reports to CEO\nCFO reports to CEO");
//! ```

pub mod core;
pub mod plugins;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        LayoutAlgorithm, NodeId, OrgChartError, OrgNode, OrgTree, OutputFormat, Parser,
        RenderConfig, Renderer, SvgEngine, VisioStyle,
    };
    pub use crate::plugins::{
        GraphBackend, MermaidRenderer, Orchestrator, OrgGraph, OutlineParser, SvgRenderer,
        TreeRenderer, VisioRenderer,
    };
}

/// Render outline text in one format with the default configuration
///
/// # Example
/// ```rust
/// use orgchart::{render, OutputFormat};
///
/// let mermaid = render("CEO\n\tCTO", OutputFormat::Mermaid).unwrap();
/// assert!(mermaid.starts_with("flowchart TD"));
/// ```
pub fn render(input: &str, format: OutputFormat) -> anyhow::Result<String> {
    render_with_config(input, format, &RenderConfig::default())
}

/// Render outline text in one format with a specific configuration
///
/// # Example
/// ```rust
/// use orgchart::{render_with_config, OutputFormat, RenderConfig};
///
/// let config = RenderConfig::new().with_mermaid_fence(true);
/// let mermaid = render_with_config("CEO", OutputFormat::Mermaid, &config).unwrap();
/// assert!(mermaid.starts_with("```mermaid"));
/// ```
pub fn render_with_config(
    input: &str,
    format: OutputFormat,
    config: &RenderConfig,
) -> anyhow::Result<String> {
    use crate::plugins::orchestrator::Orchestrator;

    Orchestrator::new(config.clone()).process(input, format)
}

/// Parse outline text into a tree without rendering
///
/// # Example
/// ```rust
/// use orgchart::parse;
///
/// let tree = parse("CEO\n  CTO\n    Engineer").unwrap();
/// assert_eq!(tree.len(), 3);
/// let engineer = tree.walk().last().unwrap();
/// assert_eq!(engineer.1, 2);
/// ```
pub fn parse(input: &str) -> anyhow::Result<OrgTree> {
    use crate::core::Parser as _;
    use crate::plugins::outline::OutlineParser;

    OutlineParser::new().parse(input)
}
