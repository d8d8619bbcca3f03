//! Pipeline orchestrator
//!
//! Parses an outline once and runs it through whichever renderers are asked
//! for: Filter → Parser → Tree → Renderer.

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{OrgTree, OutputFormat, Parser, RenderConfig, Renderer};
use crate::plugins::mermaid::MermaidRenderer;
use crate::plugins::outline::OutlineParser;
use crate::plugins::svg::SvgRenderer;
use crate::plugins::tree::TreeRenderer;
use crate::plugins::visio::VisioRenderer;

/// Coordinates parsing and rendering for a fixed [`RenderConfig`]
pub struct Orchestrator {
    parser: OutlineParser,
    config: RenderConfig,
}

impl Orchestrator {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            parser: OutlineParser::new(),
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Parse outline text into a tree
    pub fn parse(&self, input: &str) -> Result<OrgTree> {
        let parse_span = span!(Level::DEBUG, "pipeline_parse", input_len = input.len());
        let _enter = parse_span.enter();

        let tree = self.parser.parse(input)?;
        debug!(node_count = tree.len(), "Parsing completed");
        Ok(tree)
    }

    /// Render an already parsed tree in one format
    pub fn render_tree(&self, tree: &OrgTree, format: OutputFormat) -> Result<String> {
        let render_span = span!(Level::DEBUG, "pipeline_render", format = %format);
        let _enter = render_span.enter();

        let output = match format {
            OutputFormat::Tree => TreeRenderer::new().render(tree)?,
            OutputFormat::Visio => VisioRenderer::with_style(self.config.visio_style).render(tree)?,
            OutputFormat::Mermaid => {
                MermaidRenderer::with_fence(self.config.mermaid_fence).render(tree)?
            }
            OutputFormat::Svg => {
                SvgRenderer::with_engine(self.config.svg_engine, &self.config.dot_command)
                    .render(tree)?
            }
        };

        debug!(output_len = output.len(), "Rendering completed");
        Ok(output)
    }

    /// Parse `input` and render it in one format
    pub fn process(&self, input: &str, format: OutputFormat) -> Result<String> {
        let process_span = span!(
            Level::INFO,
            "process_outline",
            input_len = input.len(),
            format = %format
        );
        let _enter = process_span.enter();

        info!("Starting org chart pipeline");
        let tree = self.parse(input)?;
        let output = self.render_tree(&tree, format)?;
        info!("Pipeline completed successfully");
        Ok(output)
    }

    /// Parse `input` once and render every format, in [`OutputFormat::ALL`] order.
    ///
    /// Fails as a whole if any renderer fails, so callers never hold a
    /// partial set of outputs.
    pub fn process_all(&self, input: &str) -> Result<Vec<(OutputFormat, String)>> {
        let process_span = span!(Level::INFO, "process_outline_all", input_len = input.len());
        let _enter = process_span.enter();

        info!("Starting org chart pipeline for all formats");
        let tree = self.parse(input)?;
        let outputs = OutputFormat::ALL
            .iter()
            .map(|&format| Ok((format, self.render_tree(&tree, format)?)))
            .collect::<Result<Vec<_>>>()?;
        info!(formats = outputs.len(), "Pipeline completed successfully");
        Ok(outputs)
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
