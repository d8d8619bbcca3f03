//! Arena-backed reporting tree
//!
//! Nodes live in a `Vec` and refer to each other through [`NodeId`] indices.
//! A child's `parent` is a plain index, so there is no ownership cycle between
//! a manager and their reports.
//!
//! Nodes are only ever appended, and a child is always added after its parent,
//! so arena order is file order and file order is pre-order.

use std::fmt;

use anyhow::Result;
use tracing::trace;

use super::OrgChartError;

/// Index of a node inside an [`OrgTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena (and in the source outline)
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One person or position in the hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgNode {
    label: String,
    indent: usize,
    line: usize,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl OrgNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Raw leading-whitespace width of the source line
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// 1-based source line number
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Direct reports, in file order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Reporting hierarchy with at most one root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgTree {
    nodes: Vec<OrgNode>,
}

impl OrgTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the root node. Fails if the tree already has one.
    pub fn add_root(&mut self, label: impl Into<String>, indent: usize, line: usize) -> Result<NodeId> {
        if !self.nodes.is_empty() {
            return Err(OrgChartError::malformed(line, "the outline already has a root entry").into());
        }
        Ok(self.push(label.into(), indent, line, None))
    }

    /// Add a direct report under `parent`.
    ///
    /// The child must be indented strictly deeper than its parent.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        label: impl Into<String>,
        indent: usize,
        line: usize,
    ) -> Result<NodeId> {
        let parent_indent = match self.nodes.get(parent.0) {
            Some(node) => node.indent,
            None => {
                return Err(OrgChartError::malformed(line, format!("parent {} does not exist", parent)).into())
            }
        };
        if indent <= parent_indent {
            return Err(OrgChartError::malformed(
                line,
                format!(
                    "indentation {} is not deeper than its manager's indentation {}",
                    indent, parent_indent
                ),
            )
            .into());
        }

        let id = self.push(label.into(), indent, line, Some(parent));
        self.nodes[parent.0].children.push(id);
        Ok(id)
    }

    fn push(&mut self, label: String, indent: usize, line: usize, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        trace!(node = %id, parent = ?parent.map(NodeId::index), indent, label = %label, "Inserted node");
        self.nodes.push(OrgNode {
            label,
            indent,
            line,
            parent,
            children: Vec::new(),
        });
        id
    }

    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId(0))
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&OrgNode> {
        self.nodes.get(id.0)
    }

    /// Look up a node by an id handed out by this tree.
    ///
    /// # Panics
    /// Panics if `id` came from a different, larger tree.
    pub fn node(&self, id: NodeId) -> &OrgNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of ancestors above `id` (the root has depth 0)
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count()
    }

    /// Managers of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).and_then(OrgNode::parent),
        }
    }

    /// Depth-first pre-order traversal yielding `(node, depth)`.
    ///
    /// Children are visited in file order. Uses an explicit stack, so very
    /// deep outlines cannot overflow the call stack.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            tree: self,
            stack: self.root().map(|root| vec![(root, 0)]).unwrap_or_default(),
        }
    }

    /// Every `(manager, report)` pair, in pre-order of the report
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.walk()
            .filter_map(move |(id, _)| self.node(id).parent.map(|parent| (parent, id)))
    }

    /// Node ids in arena order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }
}

/// Iterator over a node's managers
pub struct Ancestors<'a> {
    tree: &'a OrgTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}

/// Pre-order iterator returned by [`OrgTree::walk`]
pub struct Walk<'a> {
    tree: &'a OrgTree,
    stack: Vec<(NodeId, usize)>,
}

impl Iterator for Walk<'_> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let children = self.tree.node(id).children();
        self.stack
            .extend(children.iter().rev().map(|&child| (child, depth + 1)));
        Some((id, depth))
    }
}
