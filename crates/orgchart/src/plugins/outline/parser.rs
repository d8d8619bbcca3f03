//! Indentation parser for org outlines
//!
//! Converts filtered lines into an [`OrgTree`]: each entry's manager is the
//! nearest earlier entry with strictly smaller indentation.

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::filter::{filter_lines, IndentedLine};
use crate::core::{NodeId, OrgChartError, OrgTree, Parser};

/// Outline parser implementation
pub struct OutlineParser;

impl OutlineParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for OutlineParser {
    fn parse(&self, input: &str) -> Result<OrgTree> {
        let parse_span = span!(Level::INFO, "parse_outline", input_len = input.len());
        let _enter = parse_span.enter();

        let lines = filter_lines(input);
        let tree = build_tree(&lines)?;

        info!(node_count = tree.len(), "Outline parsing completed");
        Ok(tree)
    }

    fn name(&self) -> &'static str {
        "outline"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }
}

/// Build a tree from filtered lines.
///
/// Keeps the current chain of managers on a stack of `(indent, node)`; the
/// indents on the stack are strictly increasing from bottom to top.
///
/// An empty slice yields an empty tree. The first line must not be indented,
/// and no later line may be indented at or left of it.
pub fn build_tree(lines: &[IndentedLine<'_>]) -> Result<OrgTree> {
    let mut tree = OrgTree::new();
    let mut lines = lines.iter();

    let Some(first) = lines.next() else {
        debug!("No entries in outline, returning empty tree");
        return Ok(tree);
    };
    if first.indent > 0 {
        return Err(OrgChartError::malformed(
            first.line,
            format!(
                "first entry '{}' is indented; the top of the hierarchy must start at column 0",
                first.label
            ),
        )
        .into());
    }

    let root = tree.add_root(first.label, first.indent, first.line)?;
    let mut stack: Vec<(usize, NodeId)> = vec![(first.indent, root)];

    for line in lines {
        while stack.last().is_some_and(|&(indent, _)| indent >= line.indent) {
            stack.pop();
        }

        let Some(&(_, parent)) = stack.last() else {
            return Err(OrgChartError::malformed(
                line.line,
                format!(
                    "'{}' is not indented under '{}'; an outline has a single top entry",
                    line.label, first.label
                ),
            )
            .into());
        };

        let id = tree.add_child(parent, line.label, line.indent, line.line)?;
        trace!(line = line.line, depth = stack.len(), label = line.label, "Attached entry");
        stack.push((line.indent, id));
    }

    debug!(node_count = tree.len(), "Built reporting tree");
    Ok(tree)
}
