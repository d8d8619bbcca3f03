//! Node/edge graph handed to SVG backends
//!
//! Backends never see the tree itself, only this flat description: one node
//! per person (`node_<n>` in pre-order) and one manager -> report edge per
//! reporting line.

use std::collections::HashMap;

use anyhow::Result;
use tracing::debug;

use crate::core::{escape_dot, OrgChartError, OrgTree};

/// A box in the chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
}

/// A manager -> report connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Graph description of an org chart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    index: HashMap<String, usize>,
}

impl OrgGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe `tree` as nodes and edges, both in pre-order
    pub fn from_tree(tree: &OrgTree) -> Self {
        let mut graph = Self::new();
        let mut ids = vec![String::new(); tree.len()];

        for (position, (id, _)) in tree.walk().enumerate() {
            let node_id = format!("node_{}", position);
            let node = tree.node(id);
            if let Some(parent) = node.parent() {
                graph.edges.push(GraphEdge {
                    from: ids[parent.index()].clone(),
                    to: node_id.clone(),
                });
            }
            graph.index.insert(node_id.clone(), graph.nodes.len());
            graph.nodes.push(GraphNode {
                id: node_id.clone(),
                label: node.label().to_string(),
            });
            ids[id.index()] = node_id;
        }

        debug!(
            node_count = graph.node_count(),
            edge_count = graph.edge_count(),
            "Built chart graph"
        );
        graph
    }

    /// Add a node; ids must be unique
    pub fn add_node(&mut self, id: impl Into<String>, label: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(OrgChartError::render_error(format!("duplicate node id '{}'", id)).into());
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(GraphNode {
            id,
            label: label.into(),
        });
        Ok(())
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> Result<()> {
        let from = from.into();
        let to = to.into();
        for id in [&from, &to] {
            if !self.index.contains_key(id) {
                return Err(OrgChartError::render_error(format!("node '{}' not found", id)).into());
            }
        }
        self.edges.push(GraphEdge { from, to });
        Ok(())
    }

    pub fn get_node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Position of a node in [`OrgGraph::nodes`]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Serialize as a Graphviz digraph laid out top to bottom
    pub fn to_dot(&self) -> String {
        let mut lines = vec![
            "digraph org_chart {".to_string(),
            "\t// Organization Chart".to_string(),
            "\trankdir=TB".to_string(),
            "\tnode [shape=box style=\"rounded,filled\" fillcolor=lightblue fontname=\"Helvetica\"]"
                .to_string(),
        ];
        lines.extend(
            self.nodes
                .iter()
                .map(|node| format!("\t{} [label=\"{}\"]", node.id, escape_dot(&node.label))),
        );
        lines.extend(
            self.edges
                .iter()
                .map(|edge| format!("\t{} -> {}", edge.from, edge.to)),
        );
        lines.push("}".to_string());
        let mut dot = lines.join("\n");
        dot.push('\n');
        dot
    }
}
