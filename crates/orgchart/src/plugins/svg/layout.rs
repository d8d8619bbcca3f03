//! Top-down tree layout for the builtin SVG backend
//!
//! Each subtree gets a horizontal band wide enough for its widest level; a
//! manager is centered over its reports. Ranks (one per depth) are stacked
//! vertically and every node in a rank shares the rank's top edge. Both passes
//! are iterative over a pre-order, so deep charts are fine.

use anyhow::Result;
use tracing::{debug, info, span, trace, Level};

use super::graph::OrgGraph;
use crate::core::{display_width, wrap_label, LayoutAlgorithm, OrgChartError};

/// Approximate advance of one display column at the chart font size
const CHAR_WIDTH: f64 = 7.5;
const LINE_HEIGHT: f64 = 16.0;
const PADDING_X: f64 = 12.0;
const PADDING_Y: f64 = 8.0;
const MIN_NODE_WIDTH: f64 = 80.0;
const SIBLING_GAP: f64 = 20.0;
const RANK_GAP: f64 = 40.0;
const MARGIN: f64 = 20.0;
/// Labels wider than this many columns wrap onto more lines
pub const MAX_LABEL_COLUMNS: usize = 24;

/// A placed box; `x`/`y` is the top-left corner
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode {
    pub id: String,
    pub lines: Vec<String>,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PositionedNode {
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// An elbow connector from a manager's bottom edge to a report's top edge
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEdge {
    pub from_id: String,
    pub to_id: String,
    pub waypoints: Vec<(f64, f64)>,
}

/// Layout output containing positioned elements
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLayoutResult {
    /// Same order as the graph's nodes
    pub nodes: Vec<PositionedNode>,
    /// Same order as the graph's edges
    pub edges: Vec<PositionedEdge>,
    pub width: f64,
    pub height: f64,
}

/// Tidy top-to-bottom tree layout
pub struct TreeLayoutAlgorithm {
    max_label_columns: usize,
}

impl TreeLayoutAlgorithm {
    pub fn new() -> Self {
        Self {
            max_label_columns: MAX_LABEL_COLUMNS,
        }
    }

    /// Wrap labels at a different column count (0 disables wrapping)
    pub fn with_max_label_columns(max_label_columns: usize) -> Self {
        Self { max_label_columns }
    }

    fn node_size(&self, lines: &[String]) -> (f64, f64) {
        let columns = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let width = (columns as f64 * CHAR_WIDTH + 2.0 * PADDING_X).max(MIN_NODE_WIDTH);
        let height = lines.len().max(1) as f64 * LINE_HEIGHT + 2.0 * PADDING_Y;
        (width, height)
    }
}

impl Default for TreeLayoutAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}

/// Parent/child structure of the graph, checked to be a forest
struct Forest {
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    /// `(node, depth)` in pre-order
    order: Vec<(usize, usize)>,
}

impl Forest {
    fn from_graph(graph: &OrgGraph) -> Result<Self> {
        let count = graph.node_count();
        let mut children = vec![Vec::new(); count];
        let mut has_parent = vec![false; count];

        for edge in graph.edges() {
            let (Some(from), Some(to)) = (graph.position(&edge.from), graph.position(&edge.to))
            else {
                return Err(OrgChartError::layout_error(format!(
                    "edge {} -> {} references an unknown node",
                    edge.from, edge.to
                ))
                .into());
            };
            if has_parent[to] {
                return Err(OrgChartError::layout_error(format!(
                    "node '{}' has more than one manager",
                    edge.to
                ))
                .into());
            }
            has_parent[to] = true;
            children[from].push(to);
        }

        let roots: Vec<usize> = (0..count).filter(|&i| !has_parent[i]).collect();

        let mut order = Vec::with_capacity(count);
        let mut stack: Vec<(usize, usize)> = roots.iter().rev().map(|&r| (r, 0)).collect();
        while let Some((node, depth)) = stack.pop() {
            order.push((node, depth));
            stack.extend(children[node].iter().rev().map(|&c| (c, depth + 1)));
        }
        if order.len() != count {
            return Err(OrgChartError::layout_error("reporting lines form a cycle").into());
        }

        Ok(Self {
            children,
            roots,
            order,
        })
    }
}

impl LayoutAlgorithm<OrgGraph> for TreeLayoutAlgorithm {
    type Output = TreeLayoutResult;

    fn layout(&self, graph: &OrgGraph) -> Result<Self::Output> {
        let layout_span = span!(
            Level::INFO,
            "layout_tree",
            node_count = graph.node_count(),
            edge_count = graph.edge_count()
        );
        let _enter = layout_span.enter();

        if graph.is_empty() {
            debug!("Empty graph, returning blank canvas");
            return Ok(TreeLayoutResult {
                nodes: Vec::new(),
                edges: Vec::new(),
                width: 2.0 * MARGIN,
                height: 2.0 * MARGIN,
            });
        }

        let forest = Forest::from_graph(graph)?;
        let count = graph.node_count();

        let lines: Vec<Vec<String>> = graph
            .nodes()
            .iter()
            .map(|node| wrap_label(&node.label, self.max_label_columns))
            .collect();
        let sizes: Vec<(f64, f64)> = lines.iter().map(|l| self.node_size(l)).collect();

        // rank geometry
        let mut depth_of = vec![0usize; count];
        let max_depth = forest.order.iter().map(|&(_, d)| d).max().unwrap_or(0);
        let mut rank_height = vec![0.0f64; max_depth + 1];
        for &(node, depth) in &forest.order {
            depth_of[node] = depth;
            rank_height[depth] = rank_height[depth].max(sizes[node].1);
        }
        let mut rank_top = Vec::with_capacity(rank_height.len());
        let mut y = MARGIN;
        for height in &rank_height {
            rank_top.push(y);
            y += height + RANK_GAP;
        }
        let total_height = y - RANK_GAP + MARGIN;

        // subtree widths, children before parents
        let mut subtree_width = vec![0.0f64; count];
        for &(node, _) in forest.order.iter().rev() {
            let kids = &forest.children[node];
            let span = children_span(kids, &subtree_width);
            subtree_width[node] = sizes[node].0.max(span);
        }

        // subtree left edges, parents before children
        let mut band_left = vec![0.0f64; count];
        let mut cursor = MARGIN;
        for &root in &forest.roots {
            band_left[root] = cursor;
            cursor += subtree_width[root] + SIBLING_GAP;
        }
        let mut nodes_x = vec![0.0f64; count];
        for &(node, _) in &forest.order {
            let center = band_left[node] + subtree_width[node] / 2.0;
            nodes_x[node] = center - sizes[node].0 / 2.0;

            let kids = &forest.children[node];
            let mut child_left = center - children_span(kids, &subtree_width) / 2.0;
            for &kid in kids {
                band_left[kid] = child_left;
                child_left += subtree_width[kid] + SIBLING_GAP;
            }
            trace!(node = %graph.nodes()[node].id, x = nodes_x[node], "Placed node");
        }

        let nodes: Vec<PositionedNode> = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| PositionedNode {
                id: node.id.clone(),
                lines: lines[i].clone(),
                x: nodes_x[i],
                y: rank_top[depth_of[i]],
                width: sizes[i].0,
                height: sizes[i].1,
            })
            .collect();

        let mut edges = Vec::with_capacity(graph.edge_count());
        for edge in graph.edges() {
            // Forest::from_graph already validated every endpoint
            let (Some(from), Some(to)) = (graph.position(&edge.from), graph.position(&edge.to))
            else {
                continue;
            };
            let parent = &nodes[from];
            let child = &nodes[to];
            let depth = depth_of[from];
            let elbow_y = rank_top[depth] + rank_height[depth] + RANK_GAP / 2.0;
            edges.push(PositionedEdge {
                from_id: edge.from.clone(),
                to_id: edge.to.clone(),
                waypoints: vec![
                    (parent.center_x(), parent.bottom()),
                    (parent.center_x(), elbow_y),
                    (child.center_x(), elbow_y),
                    (child.center_x(), child.y),
                ],
            });
        }

        let width = nodes
            .iter()
            .map(|n| n.x + n.width)
            .fold(0.0f64, f64::max)
            + MARGIN;

        info!(width, height = total_height, "Tree layout completed");
        Ok(TreeLayoutResult {
            nodes,
            edges,
            width,
            height: total_height,
        })
    }

    fn name(&self) -> &'static str {
        "tidy-tree"
    }

    fn direction(&self) -> &'static str {
        "TB"
    }
}

fn children_span(kids: &[usize], subtree_width: &[f64]) -> f64 {
    if kids.is_empty() {
        return 0.0;
    }
    kids.iter().map(|&k| subtree_width[k]).sum::<f64>() + SIBLING_GAP * (kids.len() - 1) as f64
}
