//! Visio import renderer
//!
//! Lists reporting relationships for Visio. The default
//! [`VisioStyle::Sentences`] output has one "X reports to Y" line per report;
//! [`VisioStyle::Delimited`] writes the tab-delimited `Name`/`Reports_To`
//! table read by the Organization Chart Wizard instead.

use anyhow::Result;
use tracing::{debug, span, Level};

use crate::core::{OrgTree, OutputFormat, Renderer, VisioStyle};

const HEADER: &str = "Name\tReports_To";

/// Visio import text renderer
pub struct VisioRenderer {
    style: VisioStyle,
}

impl VisioRenderer {
    pub fn new() -> Self {
        Self::with_style(VisioStyle::default())
    }

    pub fn with_style(style: VisioStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> VisioStyle {
        self.style
    }

    fn render_delimited(tree: &OrgTree) -> Vec<String> {
        if tree.is_empty() {
            return Vec::new();
        }
        let mut lines = vec![HEADER.to_string()];
        lines.extend(tree.walk().map(|(id, _)| {
            let node = tree.node(id);
            let manager = node
                .parent()
                .map(|parent| cell(tree.node(parent).label()))
                .unwrap_or_default();
            format!("{}\t{}", cell(node.label()), manager)
        }));
        lines
    }

    fn render_sentences(tree: &OrgTree) -> Vec<String> {
        tree.edges()
            .map(|(manager, report)| {
                format!(
                    "{} reports to {}",
                    tree.node(report).label(),
                    tree.node(manager).label()
                )
            })
            .collect()
    }
}

/// Tabs separate columns, so a tab inside a name becomes a space
fn cell(label: &str) -> String {
    label.replace('\t', " ")
}

impl Default for VisioRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for VisioRenderer {
    type Output = String;

    fn render(&self, tree: &OrgTree) -> Result<String> {
        let render_span = span!(
            Level::INFO,
            "render_visio",
            node_count = tree.len(),
            style = %self.style
        );
        let _enter = render_span.enter();

        let lines = match self.style {
            VisioStyle::Delimited => Self::render_delimited(tree),
            VisioStyle::Sentences => Self::render_sentences(tree),
        };

        debug!(line_count = lines.len(), "Rendered Visio import text");
        Ok(lines.join("\n"))
    }

    fn name(&self) -> &'static str {
        "visio"
    }

    fn format(&self) -> OutputFormat {
        OutputFormat::Visio
    }
}
