//! Core renderer trait for chart output
//!
//! Renderers are stateless apart from their configuration: rendering the same
//! tree twice gives byte-identical output.

use anyhow::Result;

use super::{OrgTree, OutputFormat};

/// Core trait for tree renderers
///
/// # Example
/// ```
/// use orgchart::core::{OrgTree, Renderer};
/// use orgchart::plugins::tree::TreeRenderer;
///
/// let mut tree = OrgTree::new();
/// let ceo = tree.add_root("CEO", 0, 1).unwrap();
/// tree.add_child(ceo, "CTO", 1, 2).unwrap();
///
/// assert_eq!(TreeRenderer::new().render(&tree).unwrap(), "CEO\n\tCTO");
/// ```
pub trait Renderer: Send + Sync {
    /// The output type of this renderer
    type Output;

    /// Render the tree into the output format
    fn render(&self, tree: &OrgTree) -> Result<Self::Output>;

    /// Get the name of this renderer
    fn name(&self) -> &'static str;

    /// Get the output format this renderer produces
    fn format(&self) -> OutputFormat;
}
