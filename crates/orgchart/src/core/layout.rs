//! Core layout trait for chart positioning
//!
//! Layout algorithms place the nodes of a graph in a 2D coordinate system.
//! Only the SVG output needs one.

use anyhow::Result;

/// Core trait for layout algorithms over a graph description `G`
pub trait LayoutAlgorithm<G>: Send + Sync {
    /// The output type of this layout algorithm
    type Output;

    /// Arrange the elements of `graph`
    fn layout(&self, graph: &G) -> Result<Self::Output>;

    /// Get the name of this layout algorithm
    fn name(&self) -> &'static str;

    /// Get the layout direction (TB, LR, ...)
    fn direction(&self) -> &'static str;
}
